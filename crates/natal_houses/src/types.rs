//! House system selection and the validated cusp set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from house computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseError {
    /// The system is undefined for this latitude/time combination
    /// (circumpolar declination, non-convergence, or a degenerate cusp
    /// ordering). Callers fall back to an always-defined system.
    #[error("house system undefined here: {0}")]
    Undefined(&'static str),
}

/// Supported house division methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    /// Iterative semi-arc trisection; undefined near the polar circles.
    Placidus,
    /// MC-declination semi-arc division; same polar limitation.
    Koch,
    /// Thirty degrees per house from the Ascendant; always defined.
    Equal,
    /// Each house is one zodiac sign; always defined.
    WholeSign,
}

impl HouseSystem {
    /// Whether the system is defined at every latitude.
    pub fn always_defined(self) -> bool {
        matches!(self, HouseSystem::Equal | HouseSystem::WholeSign)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Placidus",
            HouseSystem::Koch => "Koch",
            HouseSystem::Equal => "Equal",
            HouseSystem::WholeSign => "Whole Sign",
        }
    }
}

/// Twelve validated house cusps plus the chart angles.
///
/// Cusp 1 is the Ascendant-side cusp. Construction enforces the wrap
/// invariant: walking house 1 → 12 → 1 the cusps advance monotonically
/// modulo 360 with no zero-width house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    system: HouseSystem,
    cusps_deg: [f64; 12],
    ascendant_deg: f64,
    midheaven_deg: f64,
}

impl HouseCusps {
    /// Validate and construct the cusp set.
    pub fn new(
        system: HouseSystem,
        cusps_deg: [f64; 12],
        ascendant_deg: f64,
        midheaven_deg: f64,
    ) -> Result<Self, HouseError> {
        let mut total = 0.0;
        for i in 0..12 {
            let next = cusps_deg[(i + 1) % 12];
            let arc = (next - cusps_deg[i]).rem_euclid(360.0);
            if arc <= 0.0 || !arc.is_finite() {
                return Err(HouseError::Undefined("degenerate house width"));
            }
            total += arc;
        }
        // A non-monotonic ordering makes the forward arcs sum to a
        // multiple of 360 greater than one full turn.
        if (total - 360.0).abs() > 1e-6 {
            return Err(HouseError::Undefined("cusps not monotonic modulo 360"));
        }
        Ok(Self {
            system,
            cusps_deg,
            ascendant_deg,
            midheaven_deg,
        })
    }

    /// The division method that produced these cusps.
    pub fn system(&self) -> HouseSystem {
        self.system
    }

    /// Cusp longitudes, house 1 first, degrees [0, 360).
    pub fn cusps_deg(&self) -> &[f64; 12] {
        &self.cusps_deg
    }

    /// Ascendant longitude, degrees.
    pub fn ascendant_deg(&self) -> f64 {
        self.ascendant_deg
    }

    /// Midheaven longitude, degrees.
    pub fn midheaven_deg(&self) -> f64 {
        self.midheaven_deg
    }

    /// Descendant longitude, degrees.
    pub fn descendant_deg(&self) -> f64 {
        (self.ascendant_deg + 180.0).rem_euclid(360.0)
    }

    /// Imum Coeli longitude, degrees.
    pub fn ic_deg(&self) -> f64 {
        (self.midheaven_deg + 180.0).rem_euclid(360.0)
    }

    /// House number (1-12) containing an ecliptic longitude.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        let lon = longitude_deg.rem_euclid(360.0);
        for i in 0..12 {
            let start = self.cusps_deg[i];
            let end = self.cusps_deg[(i + 1) % 12];
            let width = (end - start).rem_euclid(360.0);
            let offset = (lon - start).rem_euclid(360.0);
            if offset < width {
                return (i as u8) + 1;
            }
        }
        // Unreachable once the wrap invariant holds; keep house 1 as the
        // conventional answer for a cusp-exact longitude.
        1
    }
}
