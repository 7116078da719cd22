//! Zodiac signs, elements, and modalities derived from ecliptic longitude.

use serde::{Deserialize, Serialize};

/// One of the four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Sign modality (quality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The twelve zodiac signs, 30 degrees each from the vernal equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All signs in zodiacal order.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign containing an ecliptic longitude (any finite value; wraps).
    pub fn from_longitude(longitude_deg: f64) -> Sign {
        let idx = (longitude_deg.rem_euclid(360.0) / 30.0) as usize;
        Sign::ALL[idx.min(11)]
    }

    /// Ecliptic longitude of the sign's 0-degree boundary.
    pub fn start_deg(self) -> f64 {
        (self as usize as f64) * 30.0
    }

    /// Element of the sign (fire/earth/air/water repeating).
    pub fn element(self) -> Element {
        match (self as usize) % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Modality of the sign (cardinal/fixed/mutable repeating).
    pub fn modality(self) -> Modality {
        match (self as usize) % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees into the containing sign, [0, 30).
pub fn position_in_sign_deg(longitude_deg: f64) -> f64 {
    longitude_deg.rem_euclid(360.0) % 30.0
}

/// Format a within-sign position as degrees, minutes, seconds.
///
/// Matches the chart-display convention: `07°23'45"`.
pub fn format_dms(decimal_deg: f64) -> String {
    let total_seconds = (decimal_deg.abs() * 3600.0).round() as u64;
    let degrees = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{degrees:02}\u{b0}{minutes:02}'{seconds:02}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_to_sign_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(84.0), Sign::Gemini);
        assert_eq!(Sign::from_longitude(359.999), Sign::Pisces);
    }

    #[test]
    fn negative_longitude_wraps() {
        assert_eq!(Sign::from_longitude(-10.0), Sign::Pisces);
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(Sign::Aries.element(), Element::Fire);
        assert_eq!(Sign::Taurus.element(), Element::Earth);
        assert_eq!(Sign::Gemini.element(), Element::Air);
        assert_eq!(Sign::Cancer.element(), Element::Water);
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Sagittarius.element(), Element::Fire);
    }

    #[test]
    fn modalities_cycle() {
        assert_eq!(Sign::Aries.modality(), Modality::Cardinal);
        assert_eq!(Sign::Taurus.modality(), Modality::Fixed);
        assert_eq!(Sign::Gemini.modality(), Modality::Mutable);
        assert_eq!(Sign::Capricorn.modality(), Modality::Cardinal);
    }

    #[test]
    fn position_in_sign_wraps_at_30() {
        assert!((position_in_sign_deg(84.5) - 24.5).abs() < 1e-12);
        assert!((position_in_sign_deg(360.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn dms_format() {
        assert_eq!(format_dms(7.396_25), "07\u{b0}23'47\"");
        assert_eq!(format_dms(0.0), "00\u{b0}00'00\"");
    }
}
