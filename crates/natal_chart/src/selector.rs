//! Tiered calculator selection.
//!
//! The selector walks the tier chain best-first. Input validation and
//! civil-time resolution happen once, before the chain; no tier can
//! repair a bad birth moment, so those errors return immediately. Past
//! that point only house computation can fail, and each failure drops
//! to the next tier. The minimal tier uses Whole Sign houses and the
//! mean-element ephemeris, neither of which has a failure mode.

use log::{debug, error, warn};

use natal_houses::cusps;
use natal_time::convert;

use crate::chart::{Chart, ChartRequest, Tier, assemble};
use crate::error::ChartError;

/// Compute a chart, degrading through the tier chain as needed.
///
/// The chain starts at the request's ceiling. The returned chart's
/// `tier` is set at the point of success, so it always names the tier
/// that produced the data.
pub fn compute_chart(request: &ChartRequest) -> Result<Chart, ChartError> {
    let moment = convert(&request.birth)?;
    let latitude = request.birth.latitude_deg();

    for tier in Tier::CHAIN {
        if tier < request.ceiling {
            continue;
        }
        let system = tier.house_system(request.house_system);
        debug!(
            "attempting tier {} with {} houses",
            tier.label(),
            system.name()
        );
        match cusps(&moment, latitude, system) {
            Ok(houses) => {
                let chart = assemble(
                    tier,
                    moment,
                    tier.ephemeris_model(),
                    &request.bodies,
                    houses,
                );
                if tier != request.ceiling {
                    warn!(
                        "degraded to tier {} ({} houses requested)",
                        tier.label(),
                        request.house_system.name()
                    );
                }
                return Ok(chart);
            }
            Err(err) => {
                debug!("tier {} failed: {err}", tier.label());
            }
        }
    }

    error!("tier chain exhausted without a chart");
    Err(ChartError::NoTierAvailable)
}
