//! Julian Day conversions for the Gregorian calendar.
//!
//! Sources:
//! - JD algorithm: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 7.
//! - J2000.0 epoch definition: IAU standard.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day Number for a Gregorian calendar date.
///
/// `day` carries the UT fraction (e.g. 15.5 = the 15th at 12:00 UT).
/// Valid for all Gregorian dates; the `b` term is the Gregorian
/// leap-century correction.
///
/// Source: Meeus Ch. 7, Eq. 7.1.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_sputnik_epoch() {
        // Meeus Ch. 7 worked example: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn january_handled_as_month_13() {
        // 1987 Jan 27.0 = JD 2446822.5 (Meeus Ch. 7)
        let jd = calendar_to_jd(1987, 1, 27.0);
        assert!((jd - 2_446_822.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn centuries_at_epoch_is_zero() {
        assert_eq!(centuries_since_j2000(J2000_JD), 0.0);
    }

    #[test]
    fn centuries_sign_before_epoch() {
        let t = centuries_since_j2000(calendar_to_jd(1990, 6, 15.0));
        assert!(t < 0.0, "t = {t}");
    }
}
