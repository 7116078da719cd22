//! Planetary position models at two precision tiers.
//!
//! This crate provides:
//! - Solar position (mean longitude + equation of center)
//! - Lunar position (truncated ELP-style periodic series)
//! - Planetary positions (Keplerian elements, geocentric reduction)
//! - A mean-element-only simplified model with no failure modes
//! - Retrograde detection from the longitude rate
//!
//! No function here returns an error for finite input; degraded-precision
//! handling lives in the chart selector, not in the ephemeris.

pub mod body;
pub mod elements;
pub mod kepler;
pub mod moon;
pub mod position;
pub mod sign;
pub mod sun;

pub use body::Body;
pub use position::{BodyPosition, EphemerisModel, longitude_deg, position, positions};
pub use sign::{Element, Modality, Sign, format_dms, position_in_sign_deg};
