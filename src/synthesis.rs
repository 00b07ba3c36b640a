//! # Harmonic Synthesis
//!
//! Height contribution of one constituent:
//!
//! ```text
//! f · amplitude · cos(2π · (v + speed · offset + u - lag))
//! ```
//!
//! `offset` is measured in days from the instant the factors were computed
//! for. Node factors change over days while a batched window spans hours, so
//! `f`, `u` and `v` stay fixed across the window and only the speed term
//! advances.

use std::f64::consts::TAU;

use crate::factors::NodeFactors;

/// Height of one constituent `offset_days` after the factor snapshot.
///
/// `lag` is the site's phase lag in cycles.
#[inline]
pub fn contribution(factors: &NodeFactors, amplitude: f64, lag: f64, offset_days: f64) -> f64 {
    factors.f
        * amplitude
        * (TAU * (factors.v + factors.speed * offset_days + factors.u - lag)).cos()
}
