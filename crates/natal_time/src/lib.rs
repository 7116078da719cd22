//! Civil-time to astronomical-frame conversions.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversion
//! - GMST/LST sidereal time
//! - Mean obliquity and principal-term nutation
//! - `BirthMoment` → `JulianMoment` resolution, including historical
//!   timezone offsets via the IANA database

pub mod error;
pub mod julian;
pub mod moment;
pub mod obliquity;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, centuries_since_j2000};
pub use moment::{BirthMoment, JulianMoment, Zone, convert};
pub use obliquity::{mean_obliquity_deg, nutation_deg, true_obliquity_deg};
pub use sidereal::{gmst_deg, local_sidereal_deg, sidereal_deg_to_hours};
