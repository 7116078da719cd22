//! Body positions at a chosen precision model.

use serde::{Deserialize, Serialize};

use natal_time::JulianMoment;

use crate::body::Body;
use crate::elements::{elements_for, mean_longitude_deg, mean_motion_deg_per_day};
use crate::kepler::geocentric_ecliptic;
use crate::moon::moon_position;
use crate::sign::{Sign, position_in_sign_deg};
use crate::sun::sun_geometric;

/// Finite-difference step for longitude rates, days.
const RATE_STEP_DAYS: f64 = 0.01;

/// Precision model for a position request.
///
/// `Enhanced` evaluates the full periodic series (equation of center,
/// lunar terms, Kepler orbits with geocentric reduction, nutation on the
/// Sun). `Simplified` evaluates mean longitudes only; it has no failure
/// modes and exists as the fallback floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EphemerisModel {
    Enhanced,
    Simplified,
}

/// Position of one body at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Geocentric ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Geocentric ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Geocentric distance, au.
    pub distance_au: f64,
    /// Longitude rate, degrees per day (mean motion under `Simplified`).
    pub speed_deg_per_day: f64,
    /// True when the longitude rate is negative.
    pub retrograde: bool,
    /// Zodiac sign containing the longitude.
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub position_in_sign_deg: f64,
    /// Illuminated phase fraction, Moon only (0 = new, 0.5 = full).
    pub moon_phase: Option<f64>,
}

/// Raw ecliptic coordinates for one body under the enhanced model:
/// `(longitude_deg, latitude_deg, distance_au)`.
fn enhanced_coordinates(body: Body, t: f64, dpsi_deg: f64) -> (f64, f64, f64) {
    match body {
        Body::Sun => {
            let (lon, dist) = sun_geometric(t);
            ((lon + dpsi_deg).rem_euclid(360.0), 0.0, dist)
        }
        Body::Moon => {
            let (lon, lat, dist, _) = moon_position(t);
            (lon, lat, dist)
        }
        _ => {
            let el = elements_for(body).expect("planet has an element row");
            geocentric_ecliptic(el, t)
        }
    }
}

/// Ecliptic longitude of one body, degrees [0, 360).
pub fn longitude_deg(body: Body, t: f64, model: EphemerisModel) -> f64 {
    match model {
        EphemerisModel::Enhanced => enhanced_coordinates(body, t, 0.0).0,
        EphemerisModel::Simplified => mean_longitude_deg(body, t),
    }
}

/// Compute the position of one body.
pub fn position(body: Body, moment: &JulianMoment, model: EphemerisModel) -> BodyPosition {
    let t = moment.centuries_t;

    let (longitude, latitude, distance, speed, phase) = match model {
        EphemerisModel::Enhanced => {
            let dpsi = moment.nutation_longitude_deg;
            let (lon, lat, dist) = enhanced_coordinates(body, t, dpsi);

            // Longitude rate via a short forward step, wrap-corrected.
            let t_next = t + RATE_STEP_DAYS / natal_time::DAYS_PER_CENTURY;
            let (lon_next, ..) = enhanced_coordinates(body, t_next, dpsi);
            let mut delta = lon_next - lon;
            if delta > 180.0 {
                delta -= 360.0;
            } else if delta < -180.0 {
                delta += 360.0;
            }
            let speed = delta / RATE_STEP_DAYS;

            let phase = match body {
                Body::Moon => Some(moon_position(t).3),
                _ => None,
            };
            (lon, lat, dist, speed, phase)
        }
        EphemerisModel::Simplified => {
            let lon = mean_longitude_deg(body, t);
            let dist = match body {
                Body::Sun => 1.0,
                Body::Moon => 0.002_57,
                _ => elements_for(body).expect("planet has an element row").a.0,
            };
            (lon, 0.0, dist, mean_motion_deg_per_day(body, t), None)
        }
    };

    BodyPosition {
        body,
        longitude_deg: longitude,
        latitude_deg: latitude,
        distance_au: distance,
        speed_deg_per_day: speed,
        retrograde: speed < 0.0,
        sign: Sign::from_longitude(longitude),
        position_in_sign_deg: position_in_sign_deg(longitude),
        moon_phase: phase,
    }
}

/// Compute positions for a set of bodies.
///
/// Never fails for a finite `JulianMoment`; resource problems are a
/// selector-level concern, not an ephemeris one.
pub fn positions(moment: &JulianMoment, model: EphemerisModel, bodies: &[Body]) -> Vec<BodyPosition> {
    bodies.iter().map(|&b| position(b, moment, model)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_time::{centuries_since_j2000, gmst_deg, mean_obliquity_deg, nutation_deg};

    fn moment_at(jd: f64) -> JulianMoment {
        let t = centuries_since_j2000(jd);
        let (dpsi, deps) = nutation_deg(t);
        JulianMoment {
            jd_ut: jd,
            centuries_t: t,
            gmst_deg: gmst_deg(jd),
            lst_deg: gmst_deg(jd),
            mean_obliquity_deg: mean_obliquity_deg(t),
            nutation_longitude_deg: dpsi,
            nutation_obliquity_deg: deps,
        }
    }

    #[test]
    fn all_longitudes_in_range_both_models() {
        for &jd in &[2_440_000.5, 2_448_058.3125, 2_451_545.0, 2_462_502.5] {
            let moment = moment_at(jd);
            for model in [EphemerisModel::Enhanced, EphemerisModel::Simplified] {
                for pos in positions(&moment, model, &Body::ALL) {
                    assert!(
                        (0.0..360.0).contains(&pos.longitude_deg),
                        "{}: lon = {} ({model:?})",
                        pos.body,
                        pos.longitude_deg
                    );
                    assert!(pos.longitude_deg.is_finite());
                    assert!(pos.latitude_deg.is_finite());
                    assert!(pos.distance_au.is_finite() && pos.distance_au > 0.0);
                }
            }
        }
    }

    #[test]
    fn sun_never_retrograde() {
        for i in 0..50 {
            let moment = moment_at(2_448_000.5 + f64::from(i) * 37.0);
            let pos = position(Body::Sun, &moment, EphemerisModel::Enhanced);
            assert!(!pos.retrograde, "Sun retrograde at jd = {}", moment.jd_ut);
        }
    }

    #[test]
    fn simplified_never_retrograde() {
        let moment = moment_at(2_448_058.3125);
        for pos in positions(&moment, EphemerisModel::Simplified, &Body::ALL) {
            assert!(!pos.retrograde, "{} retrograde under mean elements", pos.body);
        }
    }

    #[test]
    fn mercury_retrogrades_sometimes() {
        // Mercury is retrograde roughly 19% of the time; scanning two
        // years at 5-day steps must find both states.
        let mut direct = 0;
        let mut retro = 0;
        for i in 0..146 {
            let moment = moment_at(2_448_000.5 + f64::from(i) * 5.0);
            let pos = position(Body::Mercury, &moment, EphemerisModel::Enhanced);
            if pos.retrograde {
                retro += 1;
            } else {
                direct += 1;
            }
        }
        assert!(retro > 0, "no retrograde samples found");
        assert!(direct > retro, "direct = {direct}, retro = {retro}");
    }

    #[test]
    fn moon_phase_only_on_moon() {
        let moment = moment_at(2_448_058.3125);
        for pos in positions(&moment, EphemerisModel::Enhanced, &Body::CLASSICAL) {
            match pos.body {
                Body::Moon => assert!(pos.moon_phase.is_some()),
                _ => assert!(pos.moon_phase.is_none()),
            }
        }
    }

    #[test]
    fn sign_matches_longitude() {
        let moment = moment_at(2_448_058.3125);
        let sun = position(Body::Sun, &moment, EphemerisModel::Enhanced);
        assert_eq!(sun.sign, Sign::from_longitude(sun.longitude_deg));
        assert!(sun.position_in_sign_deg < 30.0);
    }

    #[test]
    fn positions_deterministic() {
        let moment = moment_at(2_448_058.3125);
        let a = positions(&moment, EphemerisModel::Enhanced, &Body::ALL);
        let b = positions(&moment, EphemerisModel::Enhanced, &Body::ALL);
        assert_eq!(a, b);
    }
}
