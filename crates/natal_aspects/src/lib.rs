//! Aspect and pattern analysis over ephemeris positions.
//!
//! This crate provides:
//! - Pairwise aspect detection with per-aspect orbs and tie-breaking
//! - Applying/separating judgement from longitude rates
//! - Stellium, grand trine, and T-square pattern detection
//!
//! Everything here is pure geometry on already-computed positions; no
//! function returns an error for finite input.

pub mod aspects;
pub mod patterns;
pub mod types;

pub use aspects::{classify, find_aspects, separation_deg};
pub use patterns::find_patterns;
pub use types::{Aspect, AspectKind, Pattern};
