//! # Tide Prediction
//!
//! Orchestrates the engine for single instants and for evenly spaced series.
//!
//! ## Single Instant
//! One astronomical snapshot at the requested instant; every component is
//! resolved (main table first, shallow second) and synthesised at offset 0.
//!
//! ## Batched Series
//! One snapshot at the series midpoint `start + (count - 1) / 2 · step`.
//! Factors are resolved once per component and reused for every slot, slot
//! `i` sitting `(i - (count - 1) / 2) · step` seconds from the midpoint.
//!
//! Node factors drift by less than 1e-4 per day, so windows of up to a day
//! stay well inside millimetre accuracy for metre-scale tides. Longer spans
//! should be split into several calls; [`crate::extrema`] scans in one-hour
//! windows.
//!
//! ## Failure
//! Any unresolvable component name fails the whole call: no partial sums are
//! returned.

use tracing::debug;

use crate::astronomical::{AstronomicalArguments, SECONDS_PER_DAY};
use crate::catalog::{Catalog, Resolution};
use crate::error::{TidalError, TidalResult};
use crate::factors::NodeFactors;
use crate::shallow;
use crate::synthesis::contribution;
use crate::TidalComponent;

/// Prediction engine bound to a constituent catalog.
#[derive(Debug, Clone, Copy)]
pub struct TidePredictor<'a> {
    catalog: &'a Catalog,
}

impl Default for TidePredictor<'static> {
    fn default() -> Self {
        TidePredictor::new(Catalog::builtin())
    }
}

impl<'a> TidePredictor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        TidePredictor { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Factors for one constituent name, main table first.
    pub fn factors(&self, name: &str, astro: &AstronomicalArguments) -> TidalResult<NodeFactors> {
        match self.catalog.resolve(name) {
            Resolution::Main(def) => Ok(NodeFactors::from_constituent(def, astro)),
            Resolution::Shallow(def) => shallow::combine(self.catalog, def, astro),
            Resolution::NotFound => Err(TidalError::unknown(name)),
        }
    }

    /// Height at `at` seconds since the POSIX epoch.
    ///
    /// `latitude` in degrees, `zone` in hours east of GMT. An empty component
    /// list predicts 0.
    pub fn predict_height(
        &self,
        components: &[TidalComponent],
        at: f64,
        latitude: f64,
        zone: f64,
    ) -> TidalResult<f64> {
        let astro = AstronomicalArguments::at(at, latitude, zone);

        let mut height = 0.0;
        for component in components {
            let factors = self.factors(&component.name, &astro)?;
            height += contribution(&factors, component.amplitude, component.lag, 0.0);
        }
        Ok(height)
    }

    /// Heights at `start, start + step, ...`, `count` values in all.
    ///
    /// Node factors are evaluated once, at the midpoint of the series.
    pub fn predict_series(
        &self,
        components: &[TidalComponent],
        start: f64,
        latitude: f64,
        zone: f64,
        count: usize,
        step: f64,
    ) -> TidalResult<Vec<f64>> {
        if !start.is_finite() || !step.is_finite() {
            return Err(TidalError::InvalidSeries {
                reason: format!("start {start} and step {step} must be finite"),
            });
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let middle = (count - 1) as f64 / 2.0;
        let astro = AstronomicalArguments::at(start + middle * step, latitude, zone);

        let resolved = components
            .iter()
            .map(|c| Ok((self.factors(&c.name, &astro)?, c.amplitude, c.lag)))
            .collect::<TidalResult<Vec<_>>>()?;

        debug!(
            start,
            count,
            step,
            components = resolved.len(),
            "resolved series factors at midpoint"
        );

        let heights = (0..count)
            .map(|slot| {
                let offset_days = (slot as f64 - middle) * step / SECONDS_PER_DAY;
                resolved
                    .iter()
                    .map(|(factors, amplitude, lag)| contribution(factors, *amplitude, *lag, offset_days))
                    .sum()
            })
            .collect();

        Ok(heights)
    }
}

/// [`TidePredictor::predict_height`] against the built-in catalog.
pub fn predict_height(
    components: &[TidalComponent],
    at: f64,
    latitude: f64,
    zone: f64,
) -> TidalResult<f64> {
    TidePredictor::default().predict_height(components, at, latitude, zone)
}

/// [`TidePredictor::predict_series`] against the built-in catalog.
pub fn predict_series(
    components: &[TidalComponent],
    start: f64,
    latitude: f64,
    zone: f64,
    count: usize,
    step: f64,
) -> TidalResult<Vec<f64>> {
    TidePredictor::default().predict_series(components, start, latitude, zone, count, step)
}
