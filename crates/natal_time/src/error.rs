//! Error types for time and coordinate resolution.

use thiserror::Error;

/// Errors from birth-moment validation or civil-to-UT conversion.
///
/// Validation errors are terminal: no fallback tier can repair an
/// out-of-range coordinate or an unknown zone, so callers surface these
/// immediately instead of retrying.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Latitude outside [-90, 90] degrees.
    #[error("latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] degrees.
    #[error("longitude {0} out of range [-180, 180]")]
    InvalidLongitude(f64),
    /// The named zone is not in the IANA timezone database.
    #[error("unknown timezone {0:?}")]
    UnknownTimeZone(String),
    /// The civil time does not exist in the zone (DST spring-forward gap).
    #[error("local time does not exist in zone {zone} (DST gap)")]
    UnresolvableLocalTime {
        /// Zone in which resolution was attempted.
        zone: String,
    },
}
