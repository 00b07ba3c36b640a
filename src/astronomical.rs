//! # Astronomical Arguments
//!
//! Slowly varying mean longitudes of the sun, moon, their perigees and the
//! lunar node, evaluated at one instant and expressed in cycles.
//!
//! Each longitude is a cubic polynomial in days since midday 1899-12-31 GMT
//! with fixed published coefficients. The table below is part of the
//! prediction contract: changing any digit changes every predicted height.
//!
//! ## Argument Order
//! Doodson numbers in the catalog multiply the arguments in the order
//! `[t, s, h, p, np, pp]`, so M2 is `{2, 0, 0, 0, 0, 0}`:
//! - **t**: lunar time phase, `frac(days - 0.5) + h - s`
//! - **s**: mean longitude of the moon
//! - **h**: mean longitude of the sun
//! - **p**: mean longitude of the lunar perigee
//! - **np**: negative longitude of the mean ascending node
//! - **pp**: mean longitude of the solar perigee

use tracing::trace;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days from midday 1899-12-31 GMT to the POSIX epoch.
const EPOCH_OFFSET_DAYS: f64 = 25_567.5;

const MEAN_LONG_SUN: usize = 0;
const MEAN_LONG_MOON: usize = 1;
const MEAN_LONG_SOLAR_PERIGEE: usize = 2;
const MEAN_LONG_LUNAR_PERIGEE: usize = 3;
const MEAN_LONG_ASCENDING_NODE: usize = 4;

/// Polynomial coefficients in degrees: constant, linear, 1e-8 quadratic, 1e-12 cubic.
const COEFFICIENTS: [[f64; 4]; 5] = [
    [279.696678, 0.9856473354, 0.00002267, 0.0],
    [270.434164, 13.1763965268, -0.000085, 0.000000039],
    [281.220833, 0.0000470684, 0.0000339, 0.00000007],
    [334.329556, 0.1114040803, -0.0007739, -0.00000026],
    [-259.183275, 0.0529539222, -0.0001557, -0.00000005],
];

/// Fractional part of `x`, truncating toward zero.
///
/// The result lies in (-1, 1) and keeps the sign of `x`, so `-0.25` stays
/// `-0.25` instead of wrapping to `0.75`.
#[inline]
pub fn leftover(x: f64) -> f64 {
    x - x.trunc()
}

/// Reduce an angle in degrees to fractional cycles.
#[inline]
pub fn residual(degrees: f64) -> f64 {
    leftover(degrees / 360.0)
}

fn polynomial(c: &[f64; 4], d: f64) -> f64 {
    c[0] + c[1] * d + 1.0e-08 * c[2] * d * d + 1.0e-12 * c[3] * d * d * d
}

fn derivative(c: &[f64; 4], d: f64) -> f64 {
    c[1] + 2.0e-08 * c[2] * d + 3.0e-12 * c[3] * d * d
}

/// Astronomical snapshot at a single instant.
///
/// Longitudes are in cycles (range (-1, 1) after reduction), rates in cycles
/// per day. Built once per evaluation instant and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalArguments {
    /// Site latitude in degrees, kept for satellite latitude corrections.
    pub latitude: f64,
    pub t: f64,
    pub h: f64,
    pub s: f64,
    pub pp: f64,
    pub p: f64,
    pub np: f64,

    pub dt: f64,
    pub dh: f64,
    pub ds: f64,
    pub dpp: f64,
    pub dp: f64,
    pub dnp: f64,
}

impl AstronomicalArguments {
    /// Evaluate the arguments at `at` seconds since the POSIX epoch.
    ///
    /// `zone` is the site's offset from GMT in hours; it is subtracted so the
    /// baseline is local civil time.
    pub fn at(at: f64, latitude: f64, zone: f64) -> Self {
        let days = at / SECONDS_PER_DAY + EPOCH_OFFSET_DAYS - zone / 24.0;

        let h = residual(polynomial(&COEFFICIENTS[MEAN_LONG_SUN], days));
        let s = residual(polynomial(&COEFFICIENTS[MEAN_LONG_MOON], days));
        let pp = residual(polynomial(&COEFFICIENTS[MEAN_LONG_SOLAR_PERIGEE], days));
        let p = residual(polynomial(&COEFFICIENTS[MEAN_LONG_LUNAR_PERIGEE], days));
        let np = residual(polynomial(&COEFFICIENTS[MEAN_LONG_ASCENDING_NODE], days));

        let t = leftover(days - 0.5) + h - s;

        let dh = derivative(&COEFFICIENTS[MEAN_LONG_SUN], days) / 360.0;
        let ds = derivative(&COEFFICIENTS[MEAN_LONG_MOON], days) / 360.0;
        let dpp = derivative(&COEFFICIENTS[MEAN_LONG_SOLAR_PERIGEE], days) / 360.0;
        let dp = derivative(&COEFFICIENTS[MEAN_LONG_LUNAR_PERIGEE], days) / 360.0;
        let dnp = derivative(&COEFFICIENTS[MEAN_LONG_ASCENDING_NODE], days) / 360.0;

        let dt = 1.0 + dh - ds;

        trace!(days, h, s, p, np, pp, t, "astronomical arguments");

        AstronomicalArguments {
            latitude,
            t,
            h,
            s,
            pp,
            p,
            np,
            dt,
            dh,
            ds,
            dpp,
            dp,
            dnp,
        }
    }

    /// Arguments in Doodson order `[t, s, h, p, np, pp]`.
    pub fn phases(&self) -> [f64; 6] {
        [self.t, self.s, self.h, self.p, self.np, self.pp]
    }

    /// Rates in Doodson order, cycles per day.
    pub fn rates(&self) -> [f64; 6] {
        [self.dt, self.ds, self.dh, self.dp, self.dnp, self.dpp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftover_keeps_sign() {
        assert_eq!(leftover(2.75), 0.75);
        assert_eq!(leftover(-2.75), -0.75);
        assert_eq!(leftover(0.0), 0.0);
        assert_eq!(leftover(-0.25), -0.25);
    }

    #[test]
    fn test_residual_range_and_periodicity() {
        for &deg in &[-7_200.5, -359.9, -1.0, 0.0, 0.5, 123.456, 359.999, 98_765.4321] {
            let r = residual(deg);
            assert!(r > -1.0 && r < 1.0, "residual({deg}) = {r} out of range");

            // whole cycles on the same side of zero vanish
            for k in [1.0, 3.0, 10.0] {
                let shifted = residual(deg + deg.signum() * 360.0 * k);
                assert!((shifted - r).abs() < 1e-9, "residual not periodic at {deg}");
            }
        }
    }

    #[test]
    fn test_leftover_integer_shift() {
        for &x in &[0.125, 0.5, 0.875, 0.3] {
            for k in 1..5 {
                let shifted = leftover(x + k as f64);
                assert!((shifted - leftover(x)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_arguments_are_reduced() {
        for &at in &[0.0, 1_000_000_000.0, 1_700_000_000.0, -1_000_000_000.0] {
            let a = AstronomicalArguments::at(at, -41.3, 12.0);
            for v in [a.h, a.s, a.p, a.np, a.pp] {
                assert!(v > -1.0 && v < 1.0);
            }
            assert_eq!(a.latitude, -41.3);
        }
    }

    #[test]
    fn test_rates_match_published_speeds() {
        let a = AstronomicalArguments::at(1_262_304_000.0, 0.0, 0.0);

        // sun ~0.9856 deg/day, moon ~13.176 deg/day
        assert!((a.dh * 360.0 - 0.98565).abs() < 1e-4);
        assert!((a.ds * 360.0 - 13.17640).abs() < 1e-4);
        assert_eq!(a.dt, 1.0 + a.dh - a.ds);

        // M2 speed is 28.984 deg/hour
        let m2 = 2.0 * a.dt * 360.0 / 24.0;
        assert!((m2 - 28.984_104).abs() < 1e-4, "M2 speed {m2}");
    }

    #[test]
    fn test_zone_shifts_baseline() {
        // one hour east of GMT is the same baseline as one hour earlier at GMT
        let east = AstronomicalArguments::at(1_000_000_000.0, 10.0, 1.0);
        let gmt = AstronomicalArguments::at(1_000_000_000.0 - 3_600.0, 10.0, 0.0);
        assert!((east.s - gmt.s).abs() < 1e-10);
        assert!((east.t - gmt.t).abs() < 1e-9);
    }
}
