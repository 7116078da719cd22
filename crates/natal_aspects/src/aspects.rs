//! Pairwise aspect detection.
//!
//! Separation is the shorter arc between two longitudes, so it lives in
//! [0, 180]. A pair matches the aspect whose exact angle it deviates
//! from by less than that aspect's orb; when orbs overlap, the smallest
//! deviation wins. Applying/separating comes from the relative
//! longitude rate of the pair.

use natal_ephemeris::BodyPosition;

use crate::types::{Aspect, AspectKind};

/// Shorter arc between two ecliptic longitudes, degrees [0, 180].
pub fn separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (a_deg - b_deg).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Classify a separation, returning the best-matching kind and its orb.
///
/// Smallest deviation from exact wins across all kinds whose orb admits
/// the separation.
pub fn classify(separation_deg: f64) -> Option<(AspectKind, f64)> {
    let mut best: Option<(AspectKind, f64)> = None;
    for kind in AspectKind::ALL {
        let deviation = (separation_deg - kind.angle_deg()).abs();
        if deviation <= kind.orb_deg() && best.is_none_or(|(_, d)| deviation < d) {
            best = Some((kind, deviation));
        }
    }
    best
}

/// Whether the pair is closing toward the exact aspect angle.
///
/// The separation's rate of change is evaluated from the two longitude
/// rates; a shrinking deviation means the aspect is applying.
fn is_applying(a: &BodyPosition, b: &BodyPosition, kind: AspectKind) -> bool {
    let now = separation_deg(a.longitude_deg, b.longitude_deg);
    let step = 0.01;
    let later = separation_deg(
        a.longitude_deg + a.speed_deg_per_day * step,
        b.longitude_deg + b.speed_deg_per_day * step,
    );
    (later - kind.angle_deg()).abs() < (now - kind.angle_deg()).abs()
}

/// All aspects among the given positions, sorted tightest orb first.
pub fn find_aspects(positions: &[BodyPosition]) -> Vec<Aspect> {
    let mut found = Vec::new();
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            let sep = separation_deg(a.longitude_deg, b.longitude_deg);
            if let Some((kind, orb)) = classify(sep) {
                found.push(Aspect {
                    first: a.body,
                    second: b.body,
                    kind,
                    separation_deg: sep,
                    orb_deg: orb,
                    applying: is_applying(a, b, kind),
                });
            }
        }
    }
    found.sort_by(|x, y| x.orb_deg.total_cmp(&y.orb_deg));
    found
}
