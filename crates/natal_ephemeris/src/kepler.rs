//! Keplerian orbit evaluation: mean elements → heliocentric position →
//! geocentric ecliptic coordinates.
//!
//! Geocentric reduction subtracts Earth's heliocentric position from the
//! planet's; both come from the same element table so the difference is
//! internally consistent.
//!
//! Sources: Standish (JPL 1992) element method; Kepler solver per Meeus
//! Ch. 30 (Newton-Raphson form).

use crate::elements::{EARTH, PlanetElements};

/// Newton-Raphson iteration cap for Kepler's equation.
const MAX_KEPLER_ITERATIONS: usize = 20;

/// Convergence tolerance for the eccentric anomaly, radians.
const KEPLER_TOLERANCE: f64 = 1e-8;

/// Solve Kepler's equation `E − e·sin E = M` for the eccentric anomaly.
///
/// Converges in a handful of iterations for planetary eccentricities
/// (e < 0.25 in the element table). The iteration cap is a hard bound,
/// not a failure mode: the last iterate is always returned.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut big_e = if e < 0.8 { m } else { std::f64::consts::PI };

    for _ in 0..MAX_KEPLER_ITERATIONS {
        let f = big_e - e * big_e.sin() - m;
        let fp = 1.0 - e * big_e.cos();
        let next = big_e - f / fp;
        if (next - big_e).abs() < KEPLER_TOLERANCE {
            return next;
        }
        big_e = next;
    }
    big_e
}

/// Heliocentric ecliptic position of a planet, au.
pub fn heliocentric_position(elements: &PlanetElements, t: f64) -> [f64; 3] {
    let el = elements.at(t);

    // Argument of perihelion and mean anomaly.
    let omega = (el.peri_deg - el.node_deg).to_radians();
    let node = el.node_deg.to_radians();
    let incl = el.i_deg.to_radians();
    let m = (el.l_deg - el.peri_deg).rem_euclid(360.0).to_radians();

    let e = el.e;
    let big_e = solve_kepler(m, e);

    // Position in the orbital plane, perihelion on the x-axis.
    let xp = el.a * (big_e.cos() - e);
    let yp = el.a * (1.0 - e * e).sqrt() * big_e.sin();

    // Rotate by argument of perihelion, inclination, and node.
    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp;
    let y = (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp;
    let z = (so * si) * xp + (co * si) * yp;

    [x, y, z]
}

/// Geocentric ecliptic coordinates of a planet.
///
/// Returns `(longitude_deg [0,360), latitude_deg, distance_au)`.
pub fn geocentric_ecliptic(elements: &PlanetElements, t: f64) -> (f64, f64, f64) {
    let p = heliocentric_position(elements, t);
    let earth = heliocentric_position(&EARTH, t);

    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    let z = p[2] - earth[2];

    let longitude = y.atan2(x).to_degrees().rem_euclid(360.0);
    let rho = x.hypot(y);
    let latitude = z.atan2(rho).to_degrees();
    let distance = (x * x + y * y + z * z).sqrt();

    (longitude, latitude, distance)
}
