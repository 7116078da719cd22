//! Geocentric solar position from the mean longitude and equation of
//! center.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 25.

/// Geometric solar position at `t` Julian centuries since J2000.0.
///
/// Returns `(true_longitude_deg, distance_au)`. The longitude is the
/// geometric value; callers add Δψ for the apparent longitude when the
/// precision tier requires nutation.
pub fn sun_geometric(t: f64) -> (f64, f64) {
    let t2 = t * t;

    // Mean longitude.
    let l = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;

    // Mean anomaly.
    let m_deg = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let m = m_deg.to_radians();

    // Equation of center, three terms.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_longitude = (l + c).rem_euclid(360.0);

    // Radius vector from the (nearly constant) eccentricity.
    let e = 0.016_708_62 - 0.000_042_037 * t;
    let distance = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * m.cos());

    (true_longitude, distance)
}
