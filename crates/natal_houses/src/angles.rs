//! Ascendant and Midheaven from Local Sidereal Time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 13; standard
//! spherical astronomy (Montenbruck & Pfleger).

use std::f64::consts::TAU;

/// Ecliptic longitude of the Ascendant, degrees [0, 360).
///
/// `Asc = atan2(cos LST, −(sin LST·cos ε + tan φ·sin ε))`
///
/// The sign pair selects the eastern of the two horizon-ecliptic
/// intersections (the rising one); negating both arguments would give
/// the Descendant.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    asc.rem_euclid(TAU).to_degrees()
}

/// Ecliptic longitude of the Midheaven, degrees [0, 360).
///
/// `MC = atan2(sin LST, cos LST·cos ε)`
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    mc.rem_euclid(TAU).to_degrees()
}
