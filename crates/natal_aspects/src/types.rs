//! Aspect kinds, orbs, and detected-aspect records.

use natal_ephemeris::Body;
use serde::{Deserialize, Serialize};

/// The recognized aspect angles, major first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
}

impl AspectKind {
    /// All kinds, in match-preference order.
    pub const ALL: [AspectKind; 9] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
        AspectKind::Quincunx,
        AspectKind::Semisextile,
        AspectKind::Semisquare,
        AspectKind::Sesquiquadrate,
    ];

    /// Exact aspect angle, degrees.
    pub fn angle_deg(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Semisextile => 30.0,
            AspectKind::Semisquare => 45.0,
            AspectKind::Sesquiquadrate => 135.0,
        }
    }

    /// Maximum allowed deviation from exact, degrees.
    pub fn orb_deg(self) -> f64 {
        match self {
            AspectKind::Conjunction => 8.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Square => 8.0,
            AspectKind::Trine => 8.0,
            AspectKind::Opposition => 8.0,
            AspectKind::Quincunx => 3.0,
            AspectKind::Semisextile => 2.0,
            AspectKind::Semisquare => 2.0,
            AspectKind::Sesquiquadrate => 2.0,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
            AspectKind::Quincunx => "Quincunx",
            AspectKind::Semisextile => "Semisextile",
            AspectKind::Semisquare => "Semisquare",
            AspectKind::Sesquiquadrate => "Sesquiquadrate",
        }
    }

    /// The five Ptolemaic aspects.
    pub fn is_major(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction
                | AspectKind::Sextile
                | AspectKind::Square
                | AspectKind::Trine
                | AspectKind::Opposition
        )
    }
}

/// One detected aspect between a body pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Angular separation of the pair, degrees [0, 180].
    pub separation_deg: f64,
    /// Deviation from the exact aspect angle, degrees (always >= 0).
    pub orb_deg: f64,
    /// True when the deviation from the exact aspect angle is shrinking
    /// under the current longitude rates. For aspects other than the
    /// conjunction this is the perfecting direction, not the direction
    /// of smaller raw separation: a pair widening from 174 toward an
    /// exact 180 opposition is applying.
    pub applying: bool,
}

/// The chart patterns recognized by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// Three or more bodies bunched within a tight arc or sharing a sign.
    Stellium {
        bodies: Vec<Body>,
        /// Sign name when the cluster shares one, otherwise `None`.
        sign: Option<String>,
    },
    /// Three bodies in mutual trine, usually sharing an element.
    GrandTrine {
        bodies: [Body; 3],
        element: Option<String>,
    },
    /// An opposition squared by a third body at the apex.
    TSquare { opposition: [Body; 2], apex: Body },
}
