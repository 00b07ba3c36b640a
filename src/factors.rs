//! # Node Factors
//!
//! Equilibrium argument `v`, node factor `f`, phase correction `u` and
//! angular speed of a main constituent for one astronomical snapshot.
//!
//! ## Satellite Sum
//! The satellites of a constituent are folded into a single phasor
//!
//! ```text
//! 1 + Σ r_k · exp(i · 2π · (Δ_k · args + φ_k))
//! ```
//!
//! whose magnitude is `f` and whose angle, in cycles, is `u`. Ratios flagged
//! with a latitude correction are rescaled for the snapshot's latitude first;
//! a correction that turns negative flips that satellite by half a cycle.

use std::f64::consts::TAU;

use crate::astronomical::{leftover, AstronomicalArguments};
use crate::catalog::{ConstituentDefinition, LatitudeCorrection, SatelliteTerm};

/// Latitudes closer to the equator than this use it instead, keeping the
/// diurnal correction `1 / sin φ` bounded.
const MIN_CORRECTION_LATITUDE: f64 = 5.0;

/// Astronomical factors of one constituent at one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFactors {
    /// Equilibrium argument, cycles.
    pub v: f64,
    /// Amplitude modulation, never negative.
    pub f: f64,
    /// Phase correction, cycles.
    pub u: f64,
    /// Angular speed, cycles per day.
    pub speed: f64,
}

impl NodeFactors {
    /// Factors of a main constituent.
    pub fn from_constituent(def: &ConstituentDefinition, astro: &AstronomicalArguments) -> Self {
        let phases = astro.phases();
        let v = leftover(dot(&def.doodson, &phases) + def.phase);
        let speed = dot(&def.doodson, &astro.rates());

        let sin_lat = correction_latitude(astro.latitude).to_radians().sin();

        let (mut re, mut im) = (1.0, 0.0);
        for sat in def.satellites {
            let ratio = corrected_ratio(sat, sin_lat);
            let angle = TAU * leftover(dot(&sat.doodson, &phases) + sat.phase);
            re += ratio * angle.cos();
            im += ratio * angle.sin();
        }

        NodeFactors {
            v,
            f: re.hypot(im),
            u: im.atan2(re) / TAU,
            speed,
        }
    }
}

fn dot(doodson: &[i32; 6], args: &[f64; 6]) -> f64 {
    doodson
        .iter()
        .zip(args)
        .map(|(&n, &a)| f64::from(n) * a)
        .sum()
}

fn correction_latitude(latitude: f64) -> f64 {
    if latitude.abs() < MIN_CORRECTION_LATITUDE {
        if latitude < 0.0 {
            -MIN_CORRECTION_LATITUDE
        } else {
            MIN_CORRECTION_LATITUDE
        }
    } else {
        latitude
    }
}

fn corrected_ratio(sat: &SatelliteTerm, sin_lat: f64) -> f64 {
    match sat.correction {
        LatitudeCorrection::None => sat.ratio,
        LatitudeCorrection::Diurnal => {
            sat.ratio * 0.36309 * (1.0 - 5.0 * sin_lat * sin_lat) / sin_lat
        }
        LatitudeCorrection::Semidiurnal => sat.ratio * 2.59808 * sin_lat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const AT: f64 = 1_262_304_000.0; // 2010-01-01T00:00:00Z

    fn factors(name: &str, at: f64, latitude: f64) -> NodeFactors {
        let def = Catalog::builtin().resolve_main(name).unwrap();
        NodeFactors::from_constituent(def, &AstronomicalArguments::at(at, latitude, 0.0))
    }

    #[test]
    fn test_node_factor_never_negative() {
        let catalog = Catalog::builtin();
        for at in [0.0, AT, 1_500_000_000.0, 2_000_000_000.0] {
            for lat in [-89.0, -41.3, -2.0, 0.0, 3.0, 45.0, 89.0] {
                let astro = AstronomicalArguments::at(at, lat, 0.0);
                for name in catalog.names() {
                    if let Some(def) = catalog.resolve_main(name) {
                        let nf = NodeFactors::from_constituent(def, &astro);
                        assert!(nf.f >= 0.0, "{name} f = {}", nf.f);
                        assert!(nf.f.is_finite() && nf.u.is_finite() && nf.v.is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_satellites_means_unit_factor() {
        let nf = factors("S1", AT, 30.0);
        assert_eq!(nf.f, 1.0);
        assert_eq!(nf.u, 0.0);
    }

    #[test]
    fn test_m2_nodal_modulation_bounds() {
        // M2 node factor swings about 1 ± 0.037 over the nodal cycle
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for year in 0..19 {
            let nf = factors("M2", AT + year as f64 * 365.25 * 86_400.0, 45.0);
            lo = lo.min(nf.f);
            hi = hi.max(nf.f);
            assert!(nf.u.abs() < 0.01, "M2 u = {} cycles", nf.u);
        }
        assert!(lo > 0.955 && lo < 0.975, "min f {lo}");
        assert!(hi > 1.025 && hi < 1.045, "max f {hi}");
    }

    #[test]
    fn test_speeds_match_doodson_rates() {
        // degrees per hour
        let m2 = factors("M2", AT, 0.0).speed * 15.0;
        let s2 = factors("S2", AT, 0.0).speed * 15.0;
        let k1 = factors("K1", AT, 0.0).speed * 15.0;
        let o1 = factors("O1", AT, 0.0).speed * 15.0;
        assert!((m2 - 28.984_104).abs() < 1e-4, "M2 {m2}");
        assert!((s2 - 30.0).abs() < 1e-4, "S2 {s2}");
        assert!((k1 - 15.041_069).abs() < 1e-4, "K1 {k1}");
        assert!((o1 - 13.943_036).abs() < 1e-4, "O1 {o1}");
    }

    #[test]
    fn test_equilibrium_argument_includes_phase() {
        let astro = AstronomicalArguments::at(AT, 0.0, 0.0);
        let o1 = factors("O1", AT, 0.0);
        assert!((o1.v - leftover(astro.t - astro.s - 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_latitude_correction_flips_sign_across_equator() {
        let sat = SatelliteTerm::new(1, 0, 0, 0.75, 0.1, 2);
        let north = corrected_ratio(&sat, correction_latitude(30.0).to_radians().sin());
        let south = corrected_ratio(&sat, correction_latitude(-30.0).to_radians().sin());
        assert!(north > 0.0 && south < 0.0);
        assert!((north + south).abs() < 1e-12);

        // equatorial sites are clamped away from sin φ = 0
        assert_eq!(correction_latitude(0.0), 5.0);
        assert_eq!(correction_latitude(-1.0), -5.0);
        assert_eq!(correction_latitude(41.0), 41.0);
    }

    #[test]
    fn test_diurnal_correction_changes_sign_at_high_latitude() {
        // 1 - 5 sin²φ vanishes near 26.57°
        let sat = SatelliteTerm::new(1, 0, 0, 0.75, 0.1, 1);
        let low = corrected_ratio(&sat, 20.0_f64.to_radians().sin());
        let high = corrected_ratio(&sat, 40.0_f64.to_radians().sin());
        assert!(low > 0.0);
        assert!(high < 0.0);
    }
}
