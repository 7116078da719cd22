//! Multi-body chart pattern detection.
//!
//! Patterns are built from the same positions the aspect pass uses:
//! stelliums from longitude clustering or shared signs, grand trines
//! from mutual trines, T-squares from an opposition squared by an apex.

use natal_ephemeris::{BodyPosition, Element, Sign};

use crate::aspects::separation_deg;
use crate::types::Pattern;

/// Maximum arc for a longitude-cluster stellium, degrees.
const STELLIUM_ARC_DEG: f64 = 10.0;

/// Minimum bodies in a stellium.
const STELLIUM_MIN: usize = 3;

/// Orb for the trines of a grand trine, degrees.
const TRINE_ORB_DEG: f64 = 8.0;

/// Orbs for the T-square's opposition and squares, degrees.
const OPPOSITION_ORB_DEG: f64 = 8.0;
const SQUARE_ORB_DEG: f64 = 8.0;

/// All recognized patterns among the given positions.
pub fn find_patterns(positions: &[BodyPosition]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    patterns.extend(find_stelliums(positions));
    patterns.extend(find_grand_trines(positions));
    patterns.extend(find_t_squares(positions));
    patterns
}

/// Stelliums: three or more bodies within a 10 deg arc, or three or
/// more sharing a zodiac sign. A sign group that is also a tight
/// cluster is reported once, with its sign.
fn find_stelliums(positions: &[BodyPosition]) -> Vec<Pattern> {
    let mut found = Vec::new();

    // Sign groups first; they carry the sign label.
    for sign in Sign::ALL {
        let members: Vec<&BodyPosition> =
            positions.iter().filter(|p| p.sign == sign).collect();
        if members.len() >= STELLIUM_MIN {
            found.push(Pattern::Stellium {
                bodies: members.iter().map(|p| p.body).collect(),
                sign: Some(sign.name().to_string()),
            });
        }
    }

    // Tight clusters that straddle a sign boundary.
    let mut sorted: Vec<&BodyPosition> = positions.iter().collect();
    sorted.sort_by(|a, b| a.longitude_deg.total_cmp(&b.longitude_deg));
    let n = sorted.len();
    for start in 0..n {
        let mut run = vec![sorted[start]];
        for k in 1..n {
            let candidate = sorted[(start + k) % n];
            if separation_deg(candidate.longitude_deg, sorted[start].longitude_deg)
                <= STELLIUM_ARC_DEG
                && (candidate.longitude_deg - sorted[start].longitude_deg).rem_euclid(360.0)
                    <= STELLIUM_ARC_DEG
            {
                run.push(candidate);
            } else {
                break;
            }
        }
        if run.len() >= STELLIUM_MIN && !run.iter().all(|p| p.sign == run[0].sign) {
            let bodies: Vec<_> = run.iter().map(|p| p.body).collect();
            let duplicate = found.iter().any(|p| match p {
                Pattern::Stellium { bodies: b, .. } => {
                    bodies.iter().all(|x| b.contains(x))
                }
                _ => false,
            });
            if !duplicate {
                found.push(Pattern::Stellium {
                    bodies,
                    sign: None,
                });
            }
        }
    }

    found
}

/// Grand trines: every pair of the triple within trine orb. The element
/// is reported when all three members share one.
fn find_grand_trines(positions: &[BodyPosition]) -> Vec<Pattern> {
    let mut found = Vec::new();
    let n = positions.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let (a, b, c) = (&positions[i], &positions[j], &positions[k]);
                if is_trine(a, b) && is_trine(b, c) && is_trine(a, c) {
                    let element = shared_element(&[a, b, c]);
                    found.push(Pattern::GrandTrine {
                        bodies: [a.body, b.body, c.body],
                        element: element.map(|e| element_name(e).to_string()),
                    });
                }
            }
        }
    }
    found
}

/// T-squares: two bodies in opposition, both square to a third (the
/// apex).
fn find_t_squares(positions: &[BodyPosition]) -> Vec<Pattern> {
    let mut found = Vec::new();
    let n = positions.len();
    for i in 0..n {
        for j in i + 1..n {
            let (a, b) = (&positions[i], &positions[j]);
            let sep = separation_deg(a.longitude_deg, b.longitude_deg);
            if (sep - 180.0).abs() > OPPOSITION_ORB_DEG {
                continue;
            }
            for apex in positions {
                if apex.body == a.body || apex.body == b.body {
                    continue;
                }
                if is_square(apex, a) && is_square(apex, b) {
                    found.push(Pattern::TSquare {
                        opposition: [a.body, b.body],
                        apex: apex.body,
                    });
                }
            }
        }
    }
    found
}

fn is_trine(a: &BodyPosition, b: &BodyPosition) -> bool {
    (separation_deg(a.longitude_deg, b.longitude_deg) - 120.0).abs() <= TRINE_ORB_DEG
}

fn is_square(a: &BodyPosition, b: &BodyPosition) -> bool {
    (separation_deg(a.longitude_deg, b.longitude_deg) - 90.0).abs() <= SQUARE_ORB_DEG
}

fn shared_element(members: &[&BodyPosition]) -> Option<Element> {
    let first = members.first()?.sign.element();
    members
        .iter()
        .all(|p| p.sign.element() == first)
        .then_some(first)
}

fn element_name(element: Element) -> &'static str {
    match element {
        Element::Fire => "Fire",
        Element::Earth => "Earth",
        Element::Air => "Air",
        Element::Water => "Water",
    }
}
