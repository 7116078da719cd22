//! Birth moment validation and conversion to the astronomical time frame.
//!
//! `BirthMoment` is the validated civil input (date, time, zone,
//! coordinates); `JulianMoment` is everything the downstream pipeline
//! needs (JD, sidereal time, obliquity, nutation), computed once and never
//! mutated.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, centuries_since_j2000};
use crate::obliquity::{mean_obliquity_deg, nutation_deg};
use crate::sidereal::{gmst_deg, local_sidereal_deg};

/// How the civil time relates to UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Zone {
    /// Civil time is already UTC.
    Utc,
    /// Fixed offset from UTC (no DST rules). Serialized as seconds east.
    Fixed(#[serde(with = "offset_seconds")] FixedOffset),
    /// IANA zone name, resolved with the DST rules valid at the birth date.
    Named(String),
}

mod offset_seconds {
    use chrono::FixedOffset;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(offset: &FixedOffset, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i32(offset.local_minus_utc())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<FixedOffset, D::Error> {
        let secs = i32::deserialize(d)?;
        FixedOffset::east_opt(secs).ok_or_else(|| D::Error::custom("UTC offset out of range"))
    }
}

/// A validated, immutable birth instant and place.
///
/// Construction fails for out-of-range coordinates or an unknown zone
/// name; those errors are never retried downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    date: NaiveDate,
    time: NaiveTime,
    zone: Zone,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl BirthMoment {
    /// Validate and construct a birth moment.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        zone: Zone,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, TimeError> {
        if !(-90.0..=90.0).contains(&latitude_deg) || !latitude_deg.is_finite() {
            return Err(TimeError::InvalidLatitude(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) || !longitude_deg.is_finite() {
            return Err(TimeError::InvalidLongitude(longitude_deg));
        }
        if let Zone::Named(name) = &zone {
            if name.parse::<Tz>().is_err() {
                return Err(TimeError::UnknownTimeZone(name.clone()));
            }
        }
        Ok(Self {
            date,
            time,
            zone,
            latitude_deg,
            longitude_deg,
        })
    }

    /// Geographic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Geographic longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Civil date as entered.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Civil time as entered.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Zone specification as entered.
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Resolve the civil timestamp to UTC.
    ///
    /// Named zones apply the offset rules in force at the birth date, not
    /// today's rules. Ambiguous instants (DST fall-back hour) resolve to
    /// the earlier offset; nonexistent instants (spring-forward gap) fail.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        let naive = NaiveDateTime::new(self.date, self.time);
        match &self.zone {
            Zone::Utc => Ok(Utc.from_utc_datetime(&naive)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| TimeError::UnresolvableLocalTime {
                    zone: offset.to_string(),
                }),
            Zone::Named(name) => {
                let tz: Tz = name
                    .parse()
                    .map_err(|_| TimeError::UnknownTimeZone(name.clone()))?;
                tz.from_local_datetime(&naive)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok_or_else(|| TimeError::UnresolvableLocalTime {
                        zone: name.clone(),
                    })
            }
        }
    }
}

/// Derived astronomical time frame for one birth moment.
///
/// All fields are in degrees except `jd_ut` and `centuries_t`. Computed
/// once per chart request; every downstream stage reads from this value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianMoment {
    /// Julian Date in UT.
    pub jd_ut: f64,
    /// Julian centuries since J2000.0.
    pub centuries_t: f64,
    /// Greenwich Mean Sidereal Time, degrees [0, 360).
    pub gmst_deg: f64,
    /// Local Sidereal Time, degrees [0, 360).
    pub lst_deg: f64,
    /// Mean obliquity of the ecliptic, degrees.
    pub mean_obliquity_deg: f64,
    /// Nutation in longitude Δψ, degrees.
    pub nutation_longitude_deg: f64,
    /// Nutation in obliquity Δε, degrees.
    pub nutation_obliquity_deg: f64,
}

impl JulianMoment {
    /// True obliquity (mean + nutation in obliquity), degrees.
    pub fn true_obliquity_deg(&self) -> f64 {
        self.mean_obliquity_deg + self.nutation_obliquity_deg
    }

    /// Local Sidereal Time in hours [0, 24).
    pub fn lst_hours(&self) -> f64 {
        self.lst_deg / 15.0
    }
}

/// Convert a birth moment to its astronomical time frame.
///
/// The only failure mode is civil-time resolution; every quantity past
/// that point is a pure function of the Julian Date and longitude.
pub fn convert(birth: &BirthMoment) -> Result<JulianMoment, TimeError> {
    let utc = birth.to_utc()?;

    let day_fraction = f64::from(utc.time().hour()) / 24.0
        + f64::from(utc.time().minute()) / 1440.0
        + f64::from(utc.time().second()) / 86_400.0
        + f64::from(utc.time().nanosecond()) / 86_400.0e9;
    let jd_ut = calendar_to_jd(utc.year(), utc.month(), f64::from(utc.day()) + day_fraction);

    let t = centuries_since_j2000(jd_ut);
    let gmst = gmst_deg(jd_ut);
    let lst = local_sidereal_deg(gmst, birth.longitude_deg());
    let (dpsi, deps) = nutation_deg(t);

    Ok(JulianMoment {
        jd_ut,
        centuries_t: t,
        gmst_deg: gmst,
        lst_deg: lst,
        mean_obliquity_deg: mean_obliquity_deg(t),
        nutation_longitude_deg: dpsi,
        nutation_obliquity_deg: deps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_nyc() -> BirthMoment {
        BirthMoment::new(
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            Zone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap()),
            40.7128,
            -74.0060,
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_latitude() {
        let err = BirthMoment::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            Zone::Utc,
            91.0,
            0.0,
        )
        .unwrap_err();
        assert_eq!(err, TimeError::InvalidLatitude(91.0));
    }

    #[test]
    fn rejects_bad_longitude() {
        let err = BirthMoment::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            Zone::Utc,
            0.0,
            -180.5,
        )
        .unwrap_err();
        assert_eq!(err, TimeError::InvalidLongitude(-180.5));
    }

    #[test]
    fn rejects_unknown_zone_at_construction() {
        let err = BirthMoment::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            Zone::Named("Mars/Olympus_Mons".into()),
            0.0,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, TimeError::UnknownTimeZone(_)));
    }

    #[test]
    fn fixed_offset_resolves_to_utc() {
        let moment = convert(&birth_nyc()).unwrap();
        // 14:30 at UTC-5 is 19:30 UT on 1990-06-15 -> JD 2448058.3125
        assert!((moment.jd_ut - 2_448_058.3125).abs() < 1e-9, "jd = {}", moment.jd_ut);
    }

    #[test]
    fn named_zone_historical_dst() {
        // June 1990, New York observed EDT (UTC-4): 14:30 local = 18:30 UT.
        let birth = BirthMoment::new(
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            Zone::Named("America/New_York".into()),
            40.7128,
            -74.0060,
        )
        .unwrap();
        let utc = birth.to_utc().unwrap();
        assert_eq!(utc.hour(), 18);
        assert_eq!(utc.minute(), 30);
    }

    #[test]
    fn named_zone_winter_offset_differs() {
        // January: EST (UTC-5), so the same wall clock maps an hour later.
        let birth = BirthMoment::new(
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            Zone::Named("America/New_York".into()),
            40.7128,
            -74.0060,
        )
        .unwrap();
        assert_eq!(birth.to_utc().unwrap().hour(), 19);
    }

    #[test]
    fn spring_forward_gap_fails() {
        // 2:30 on 2024-03-10 does not exist in New York.
        let birth = BirthMoment::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
            Zone::Named("America/New_York".into()),
            40.7128,
            -74.0060,
        )
        .unwrap();
        assert!(matches!(
            birth.to_utc().unwrap_err(),
            TimeError::UnresolvableLocalTime { .. }
        ));
    }

    #[test]
    fn conversion_is_deterministic() {
        let birth = birth_nyc();
        let a = convert(&birth).unwrap();
        let b = convert(&birth).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lst_accounts_for_west_longitude() {
        let moment = convert(&birth_nyc()).unwrap();
        let expected = (moment.gmst_deg - 74.0060).rem_euclid(360.0);
        assert!((moment.lst_deg - expected).abs() < 1e-12);
    }

    #[test]
    fn lst_hours_in_range() {
        let moment = convert(&birth_nyc()).unwrap();
        let h = moment.lst_hours();
        assert!((0.0..24.0).contains(&h), "lst hours = {h}");
    }
}
