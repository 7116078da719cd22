//! Natal chart assembly with a tiered precision fallback chain.
//!
//! Ties the pipeline crates together: civil time resolution
//! (`natal_time`), body positions (`natal_ephemeris`), angles and house
//! cusps (`natal_houses`), aspects and patterns (`natal_aspects`). The
//! selector walks a best-first tier chain so a chart always comes back
//! for valid input, labeled with the tier that actually produced it.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use natal_chart::*;
//!
//! let birth = BirthMoment::new(
//!     NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
//!     NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
//!     Zone::Named("America/New_York".into()),
//!     40.7128,
//!     -74.0060,
//! )
//! .unwrap();
//!
//! let chart = compute_chart(&ChartRequest::new(birth, HouseSystem::Placidus)).unwrap();
//! println!("{} rising, tier {}", chart.angles.ascendant_sign.name(), chart.tier.label());
//! ```

pub mod cache;
pub mod chart;
pub mod error;
pub mod selector;

pub use cache::{GeoCoordinates, GeocodeCache};
pub use chart::{Chart, ChartAngles, ChartRequest, HousePlacement, Tier, assemble};
pub use error::ChartError;
pub use selector::compute_chart;

// Re-export pipeline types so callers don't need to depend on each
// stage crate directly.
pub use natal_aspects::{Aspect, AspectKind, Pattern};
pub use natal_ephemeris::{Body, BodyPosition, EphemerisModel, Element, Modality, Sign, format_dms};
pub use natal_houses::{HouseCusps, HouseError, HouseSystem};
pub use natal_time::{BirthMoment, JulianMoment, TimeError, Zone};
