//! Mean obliquity of the ecliptic and nutation in longitude/obliquity.
//!
//! The nutation model is the principal-term IAU 1980 series: the 17.2″ Ω
//! term plus the three next-largest terms. Accuracy is a fraction of an
//! arcsecond, which is well inside the orb tolerances downstream.
//!
//! Sources:
//! - Mean obliquity: IAU 1980 polynomial (Meeus Eq. 22.2).
//! - Nutation arguments and amplitudes: Meeus Ch. 22, leading terms.

/// Mean obliquity of the ecliptic in degrees.
///
/// ε₀ = 23.439291111 − 0.013004167·T − 1.64e-7·T² + 5.04e-7·T³
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111 - 0.013_004_167 * t - 0.000_000_164 * t * t + 0.000_000_504 * t * t * t
}

/// Nutation in longitude (Δψ) and obliquity (Δε), both in degrees.
///
/// Four-term truncation of the IAU 1980 series over the Delaunay
/// arguments D, M, and the lunar node Ω:
///
/// Δψ = (−17.20·sin Ω − 1.32·sin 2D − 0.23·sin 2M + 0.21·sin 2Ω) / 3600
/// Δε = (  9.20·cos Ω + 0.57·cos 2D + 0.10·cos 2M − 0.09·cos 2Ω) / 3600
pub fn nutation_deg(t: f64) -> (f64, f64) {
    let t2 = t * t;

    // Mean elongation of the Moon from the Sun.
    let d = (297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2).to_radians();
    // Mean anomaly of the Sun.
    let m = (357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2).to_radians();
    // Mean longitude of the ascending node of the Moon.
    let omega = (125.044_52 - 1934.136_261 * t + 0.002_070_8 * t2).to_radians();

    let dpsi = (-17.20 * omega.sin() - 1.32 * (2.0 * d).sin() - 0.23 * (2.0 * m).sin()
        + 0.21 * (2.0 * omega).sin())
        / 3600.0;
    let deps = (9.20 * omega.cos() + 0.57 * (2.0 * d).cos() + 0.10 * (2.0 * m).cos()
        - 0.09 * (2.0 * omega).cos())
        / 3600.0;

    (dpsi, deps)
}

/// True obliquity (mean obliquity plus nutation in obliquity), degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation_deg(t);
    mean_obliquity_deg(t) + deps
}
