//! Chart request and assembled chart types.

use serde::{Deserialize, Serialize};

use natal_aspects::{Aspect, Pattern, find_aspects, find_patterns};
use natal_ephemeris::{Body, BodyPosition, EphemerisModel, Sign, positions};
use natal_houses::{HouseCusps, HouseSystem};
use natal_time::{BirthMoment, JulianMoment};

/// One chart request: who, where, when, and the preferred house system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub birth: BirthMoment,
    pub house_system: HouseSystem,
    /// Bodies to include. Defaults to all ten.
    pub bodies: Vec<Body>,
    /// Best tier the selector may attempt. Defaults to `Enhanced`.
    pub ceiling: Tier,
}

impl ChartRequest {
    /// Request a chart for all ten bodies at full precision.
    pub fn new(birth: BirthMoment, house_system: HouseSystem) -> Self {
        Self {
            birth,
            house_system,
            bodies: Body::ALL.to_vec(),
            ceiling: Tier::Enhanced,
        }
    }

    /// Cap the precision tier, e.g. to skip the periodic series entirely.
    pub fn with_ceiling(mut self, ceiling: Tier) -> Self {
        self.ceiling = ceiling;
        self
    }
}

/// Which rung of the fallback chain produced the chart.
///
/// Ordered best-first; the selector tries each in turn and records the
/// one that actually succeeded, never the one that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Full-precision ephemeris with the requested house system.
    Enhanced,
    /// Full-precision ephemeris, Equal houses.
    Refined,
    /// Mean-element ephemeris, Equal houses.
    Simplified,
    /// Mean-element ephemeris, Whole Sign houses. Cannot fail.
    Minimal,
}

impl Tier {
    /// Chain order, best first.
    pub const CHAIN: [Tier; 4] = [Tier::Enhanced, Tier::Refined, Tier::Simplified, Tier::Minimal];

    /// Label used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Enhanced => "enhanced",
            Tier::Refined => "refined",
            Tier::Simplified => "simplified",
            Tier::Minimal => "minimal",
        }
    }

    /// Ephemeris model this tier computes positions with.
    pub fn ephemeris_model(self) -> EphemerisModel {
        match self {
            Tier::Enhanced | Tier::Refined => EphemerisModel::Enhanced,
            Tier::Simplified | Tier::Minimal => EphemerisModel::Simplified,
        }
    }

    /// House system this tier uses, given the requested one.
    pub fn house_system(self, requested: HouseSystem) -> HouseSystem {
        match self {
            Tier::Enhanced => requested,
            Tier::Refined | Tier::Simplified => HouseSystem::Equal,
            Tier::Minimal => HouseSystem::WholeSign,
        }
    }
}

/// The four chart angles with their signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant_deg: f64,
    pub ascendant_sign: Sign,
    pub midheaven_deg: f64,
    pub midheaven_sign: Sign,
    pub descendant_deg: f64,
    pub ic_deg: f64,
}

impl ChartAngles {
    fn from_cusps(cusps: &HouseCusps) -> Self {
        Self {
            ascendant_deg: cusps.ascendant_deg(),
            ascendant_sign: Sign::from_longitude(cusps.ascendant_deg()),
            midheaven_deg: cusps.midheaven_deg(),
            midheaven_sign: Sign::from_longitude(cusps.midheaven_deg()),
            descendant_deg: cusps.descendant_deg(),
            ic_deg: cusps.ic_deg(),
        }
    }
}

/// One body's house assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousePlacement {
    pub body: Body,
    pub house: u8,
}

/// A fully assembled natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// The tier that actually produced this chart.
    pub tier: Tier,
    /// Derived time frame the chart was computed from.
    pub moment: JulianMoment,
    pub positions: Vec<BodyPosition>,
    pub houses: HouseCusps,
    pub angles: ChartAngles,
    pub placements: Vec<HousePlacement>,
    pub aspects: Vec<Aspect>,
    pub patterns: Vec<Pattern>,
}

/// Assemble a chart once positions and cusps are both in hand.
///
/// Pure function of its inputs; the selector owns which model and house
/// system were used and stamps the tier here.
pub fn assemble(
    tier: Tier,
    moment: JulianMoment,
    model: EphemerisModel,
    bodies: &[Body],
    houses: HouseCusps,
) -> Chart {
    let positions = positions(&moment, model, bodies);
    let aspects = find_aspects(&positions);
    let patterns = find_patterns(&positions);
    let angles = ChartAngles::from_cusps(&houses);
    let placements = positions
        .iter()
        .map(|p| HousePlacement {
            body: p.body,
            house: houses.house_of(p.longitude_deg),
        })
        .collect();

    Chart {
        tier,
        moment,
        positions,
        houses,
        angles,
        placements,
        aspects,
        patterns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_chain_order() {
        assert_eq!(Tier::CHAIN[0], Tier::Enhanced);
        assert_eq!(Tier::CHAIN[3], Tier::Minimal);
    }

    #[test]
    fn tier_house_degradation() {
        assert_eq!(
            Tier::Enhanced.house_system(HouseSystem::Placidus),
            HouseSystem::Placidus
        );
        assert_eq!(
            Tier::Refined.house_system(HouseSystem::Placidus),
            HouseSystem::Equal
        );
        assert_eq!(
            Tier::Minimal.house_system(HouseSystem::Koch),
            HouseSystem::WholeSign
        );
    }

    #[test]
    fn minimal_tier_has_no_failure_modes() {
        assert!(Tier::Minimal.house_system(HouseSystem::Placidus).always_defined());
        assert_eq!(Tier::Minimal.ephemeris_model(), EphemerisModel::Simplified);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(Tier::Enhanced.label(), "enhanced");
        assert_eq!(Tier::Minimal.label(), "minimal");
    }
}
