//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! Works in degrees throughout; house computation converts to radians at
//! the trigonometric seam.
//!
//! Sources:
//! - GMST polynomial: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, centuries_since_j2000};

/// Greenwich Mean Sidereal Time at a UT Julian Date, in degrees [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
///
/// Source: Meeus Eq. 12.4.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, degrees [0, 360).
pub fn local_sidereal_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}

/// Sidereal degrees to sidereal hours, [0, 24).
pub fn sidereal_deg_to_hours(deg: f64) -> f64 {
    deg.rem_euclid(360.0) / 15.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;
    use approx::assert_relative_eq;

    #[test]
    fn gmst_meeus_example() {
        // Meeus Ch. 12 example: 1987 Apr 10.0 UT -> GMST 13h 10m 46.3668s
        // = 197.693195 deg
        let jd = calendar_to_jd(1987, 4, 10.0);
        assert_relative_eq!(gmst_deg(jd), 197.693_195, epsilon = 1e-4);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_448_058.3125, 2_460_000.5, 2_440_000.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "gmst out of range: {g}");
        }
    }

    #[test]
    fn lst_west_longitude_wraps() {
        let lst = local_sidereal_deg(10.0, -74.0);
        assert!((lst - 296.0).abs() < 1e-12, "lst = {lst}");
    }

    #[test]
    fn hours_quarter_turn() {
        assert!((sidereal_deg_to_hours(90.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn hours_range() {
        for deg in [0.0, 123.4, 359.999, 720.5] {
            let h = sidereal_deg_to_hours(deg);
            assert!((0.0..24.0).contains(&h), "hours out of range: {h}");
        }
    }
}
