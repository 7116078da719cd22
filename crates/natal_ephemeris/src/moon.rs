//! Geocentric lunar position from a truncated ELP-style periodic series.
//!
//! The Moon carries more periodic terms than any planet here because its
//! period is short and the accuracy target is a fraction of a degree;
//! the ten leading longitude terms bound the error to roughly 0.05 deg.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 47, leading
//! terms of the ELP-2000/82 reduction.

/// Kilometers per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Periodic longitude terms: (amplitude_deg, [nD, nM, nM', nF]).
#[rustfmt::skip]
const LONGITUDE_TERMS: [(f64, [i8; 4]); 10] = [
    (6.288_774,  [0,  0, 1,  0]),
    (1.274_027,  [2,  0, -1, 0]),
    (0.658_314,  [2,  0, 0,  0]),
    (0.213_618,  [0,  0, 2,  0]),
    (-0.185_116, [0,  1, 0,  0]),
    (-0.114_332, [0,  0, 0,  2]),
    (0.058_793,  [2,  0, -2, 0]),
    (0.057_066,  [2, -1, -1, 0]),
    (0.053_322,  [2,  0, 1,  0]),
    (0.045_758,  [2, -1, 0,  0]),
];

/// Periodic latitude terms: (amplitude_deg, [nD, nM, nM', nF]).
#[rustfmt::skip]
const LATITUDE_TERMS: [(f64, [i8; 4]); 8] = [
    (5.128_122, [0,  0, 0,  1]),
    (0.280_602, [0,  0, 1,  1]),
    (0.277_693, [0,  0, 1, -1]),
    (0.173_237, [2,  0, 0, -1]),
    (0.055_413, [2,  0, -1, 1]),
    (0.046_271, [2,  0, -1, -1]),
    (0.032_573, [2,  0, 0,  1]),
    (0.017_198, [0,  0, 2,  1]),
];

/// Periodic distance terms: (amplitude_km, [nD, nM, nM', nF]).
#[rustfmt::skip]
const DISTANCE_TERMS: [(f64, [i8; 4]); 10] = [
    (-20_905.355, [0,  0, 1,  0]),
    (-3_699.111,  [2,  0, -1, 0]),
    (-2_955.968,  [2,  0, 0,  0]),
    (-569.925,    [0,  0, 2,  0]),
    (48.888,      [0,  1, 0,  0]),
    (-3.149,      [0,  0, 0,  2]),
    (-246.158,    [2,  0, -2, 0]),
    (-152.138,    [2, -1, -1, 0]),
    (-170.733,    [2,  0, 1,  0]),
    (-204.586,    [2, -1, 0,  0]),
];

/// Geocentric lunar position at `t` Julian centuries since J2000.0.
///
/// Returns `(longitude_deg [0,360), latitude_deg, distance_au,
/// phase_fraction)` where phase is 0 at new moon and 0.5 at full.
pub fn moon_position(t: f64) -> (f64, f64, f64, f64) {
    let t2 = t * t;

    // Mean longitude.
    let l = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2;
    // Mean elongation of the Moon from the Sun.
    let d_deg = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2;
    // Mean anomaly of the Sun.
    let m_deg = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2;
    // Mean anomaly of the Moon.
    let mp_deg = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2;
    // Argument of latitude.
    let f_deg = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2;

    let args = [
        d_deg.to_radians(),
        m_deg.to_radians(),
        mp_deg.to_radians(),
        f_deg.to_radians(),
    ];

    let angle = |mult: &[i8; 4]| -> f64 {
        mult.iter()
            .zip(args.iter())
            .map(|(&n, &a)| f64::from(n) * a)
            .sum()
    };

    let dl: f64 = LONGITUDE_TERMS
        .iter()
        .map(|(amp, mult)| amp * angle(mult).sin())
        .sum();
    let lat: f64 = LATITUDE_TERMS
        .iter()
        .map(|(amp, mult)| amp * angle(mult).sin())
        .sum();
    let dr: f64 = DISTANCE_TERMS
        .iter()
        .map(|(amp, mult)| amp * angle(mult).cos())
        .sum();

    let longitude = (l + dl).rem_euclid(360.0);
    let distance_au = (385_000.56 + dr) / KM_PER_AU;
    let phase = (1.0 - d_deg.to_radians().cos()) / 2.0;

    (longitude, lat, distance_au, phase)
}
