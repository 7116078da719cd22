//! Chart angles and house cusps.
//!
//! This crate provides:
//! - Ascendant and Midheaven from Local Sidereal Time
//! - Placidus, Koch, Equal, and Whole Sign cusp computation
//! - A validated cusp container enforcing the monotonic-wrap invariant
//!
//! Time-based systems (Placidus, Koch) report `HouseError::Undefined`
//! beyond 66.5 degrees of latitude or when a cusp turns circumpolar;
//! callers degrade to Equal or Whole Sign, which never fail.

pub mod angles;
pub mod systems;
pub mod types;

pub use angles::{ascendant_deg, midheaven_deg};
pub use systems::cusps;
pub use types::{HouseCusps, HouseError, HouseSystem};
