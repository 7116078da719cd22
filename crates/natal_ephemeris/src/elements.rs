//! Mean orbital elements for the planets, J2000.0 values plus
//! per-Julian-century rates.
//!
//! Angles are in degrees, semi-major axes in au. The Earth row is the
//! Earth-Moon barycenter, used to reduce heliocentric positions to
//! geocentric ones.
//!
//! Source: Standish, "Keplerian Elements for Approximate Positions of the
//! Major Planets" (JPL, 1992), Table 1 (valid 1800 AD – 2050 AD).

use crate::body::Body;

/// Mean elements of one planet: value at J2000.0 and rate per century.
#[derive(Debug, Clone, Copy)]
pub struct PlanetElements {
    /// Semi-major axis, au.
    pub a: (f64, f64),
    /// Eccentricity.
    pub e: (f64, f64),
    /// Inclination to the ecliptic, degrees.
    pub i: (f64, f64),
    /// Mean longitude, degrees.
    pub l: (f64, f64),
    /// Longitude of perihelion, degrees.
    pub peri: (f64, f64),
    /// Longitude of the ascending node, degrees.
    pub node: (f64, f64),
}

impl PlanetElements {
    /// Element values evaluated at `t` Julian centuries since J2000.0.
    pub fn at(&self, t: f64) -> EvaluatedElements {
        EvaluatedElements {
            a: self.a.0 + self.a.1 * t,
            e: self.e.0 + self.e.1 * t,
            i_deg: self.i.0 + self.i.1 * t,
            l_deg: self.l.0 + self.l.1 * t,
            peri_deg: self.peri.0 + self.peri.1 * t,
            node_deg: self.node.0 + self.node.1 * t,
        }
    }
}

/// Elements evaluated at a single epoch.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatedElements {
    pub a: f64,
    pub e: f64,
    pub i_deg: f64,
    pub l_deg: f64,
    pub peri_deg: f64,
    pub node_deg: f64,
}

#[rustfmt::skip]
pub const MERCURY: PlanetElements = PlanetElements {
    a:    (0.387_099_27,    0.000_000_37),
    e:    (0.205_635_93,    0.000_019_06),
    i:    (7.004_979_02,   -0.005_947_49),
    l:    (252.250_323_50,  149_472.674_111_75),
    peri: (77.457_796_28,   0.160_476_89),
    node: (48.330_765_93,  -0.125_340_81),
};

#[rustfmt::skip]
pub const VENUS: PlanetElements = PlanetElements {
    a:    (0.723_335_66,    0.000_003_90),
    e:    (0.006_776_72,   -0.000_041_07),
    i:    (3.394_676_05,   -0.000_788_90),
    l:    (181.979_099_50,  58_517.815_387_29),
    peri: (131.602_467_18,  0.002_683_29),
    node: (76.679_842_55,  -0.277_694_18),
};

/// Earth-Moon barycenter.
#[rustfmt::skip]
pub const EARTH: PlanetElements = PlanetElements {
    a:    (1.000_002_61,    0.000_005_62),
    e:    (0.016_711_23,   -0.000_043_92),
    i:    (-0.000_015_31,  -0.012_946_68),
    l:    (100.464_571_66,  35_999.372_449_81),
    peri: (102.937_681_93,  0.323_273_64),
    node: (0.0,             0.0),
};

#[rustfmt::skip]
pub const MARS: PlanetElements = PlanetElements {
    a:    (1.523_710_34,    0.000_018_47),
    e:    (0.093_394_10,    0.000_078_82),
    i:    (1.849_691_42,   -0.008_131_31),
    l:    (355.432_999_58,  19_140.302_684_99),
    peri: (286.501_992_00,  0.920_230_80),
    node: (49.559_538_91,  -0.292_573_43),
};

#[rustfmt::skip]
pub const JUPITER: PlanetElements = PlanetElements {
    a:    (5.202_887_00,   -0.000_116_07),
    e:    (0.048_386_24,   -0.000_132_53),
    i:    (1.304_396_95,   -0.001_837_14),
    l:    (34.396_440_51,   3034.746_127_75),
    peri: (273.867_400_70,  0.164_505_28),
    node: (100.473_909_09,  0.204_691_06),
};

#[rustfmt::skip]
pub const SATURN: PlanetElements = PlanetElements {
    a:    (9.536_675_94,   -0.001_250_60),
    e:    (0.053_861_79,   -0.000_509_91),
    i:    (2.485_991_87,    0.001_936_09),
    l:    (49.954_244_23,   1222.493_622_01),
    peri: (339.391_647_00,  0.976_671_60),
    node: (113.662_424_48, -0.288_677_94),
};

#[rustfmt::skip]
pub const URANUS: PlanetElements = PlanetElements {
    a:    (19.189_164_64,  -0.001_961_76),
    e:    (0.047_257_44,   -0.000_043_97),
    i:    (0.772_637_83,   -0.002_429_39),
    l:    (313.238_104_51,  428.482_027_85),
    peri: (170.954_276_30,  0.408_052_81),
    node: (74.016_925_03,   0.042_405_89),
};

#[rustfmt::skip]
pub const NEPTUNE: PlanetElements = PlanetElements {
    a:    (30.069_922_76,   0.000_262_91),
    e:    (0.008_590_48,    0.000_051_05),
    i:    (1.770_043_47,    0.000_353_72),
    l:    (-55.120_029_69,  218.459_453_25),
    peri: (44.964_762_27,  -0.322_414_64),
    node: (131.784_225_74, -0.005_086_64),
};

#[rustfmt::skip]
pub const PLUTO: PlanetElements = PlanetElements {
    a:    (39.482_116_75,  -0.000_315_96),
    e:    (0.248_827_30,    0.000_051_70),
    i:    (17.140_012_06,   0.000_048_18),
    l:    (238.929_038_33,  145.207_805_15),
    peri: (224.068_916_29, -0.040_629_42),
    node: (110.303_936_84, -0.011_834_82),
};

/// Element row for a planet, or `None` for the Sun and Moon (which use
/// dedicated series instead of Keplerian elements).
pub fn elements_for(body: Body) -> Option<&'static PlanetElements> {
    match body {
        Body::Sun | Body::Moon => None,
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
    }
}

/// Mean longitude (`L0 + L1·t`) in degrees [0, 360), used by the
/// simplified model. Defined for every body.
pub fn mean_longitude_deg(body: Body, t: f64) -> f64 {
    let (l0, l1) = match body {
        // Sun: geocentric mean longitude (Meeus Eq. 25.2, linear part).
        Body::Sun => (280.466_46, 36_000.769_83),
        // Moon: mean longitude (Meeus Eq. 47.1, linear part).
        Body::Moon => (218.316_447_7, 481_267.881_234_21),
        _ => {
            let el = elements_for(body).expect("planet has an element row");
            (el.l.0, el.l.1)
        }
    };
    (l0 + l1 * t).rem_euclid(360.0)
}

/// Mean daily motion in degrees per day (mean-element rate).
pub fn mean_motion_deg_per_day(body: Body, t: f64) -> f64 {
    let step = 1.0 / natal_time::DAYS_PER_CENTURY;
    let a = mean_longitude_deg(body, t);
    let b = mean_longitude_deg(body, t + step);
    let mut delta = b - a;
    if delta < -180.0 {
        delta += 360.0;
    } else if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_at_epoch_returns_j2000_values() {
        let el = MARS.at(0.0);
        assert!((el.a - 1.523_710_34).abs() < 1e-12);
        assert!((el.l_deg - 355.432_999_58).abs() < 1e-12);
    }

    #[test]
    fn sun_and_moon_have_no_element_row() {
        assert!(elements_for(Body::Sun).is_none());
        assert!(elements_for(Body::Moon).is_none());
        assert!(elements_for(Body::Pluto).is_some());
    }

    #[test]
    fn mean_longitude_normalized() {
        for body in Body::ALL {
            for i in -10..=10 {
                let t = i as f64 / 5.0;
                let l = mean_longitude_deg(body, t);
                assert!((0.0..360.0).contains(&l), "{body}: l = {l} at t = {t}");
            }
        }
    }

    #[test]
    fn moon_fastest_mean_motion() {
        let moon = mean_motion_deg_per_day(Body::Moon, 0.0);
        let sun = mean_motion_deg_per_day(Body::Sun, 0.0);
        assert!(moon > 12.0 && moon < 14.0, "moon rate = {moon}");
        assert!(sun > 0.9 && sun < 1.1, "sun rate = {sun}");
    }

    #[test]
    fn outer_planet_slow_mean_motion() {
        let pluto = mean_motion_deg_per_day(Body::Pluto, 0.0);
        assert!(pluto > 0.0 && pluto < 0.01, "pluto rate = {pluto}");
    }
}
