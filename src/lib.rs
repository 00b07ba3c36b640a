//! # Harmonic Tide Prediction Library
//!
//! Predicts the height of the tide at a site by summing tidal constituents,
//! each a cosine wave whose phase and amplitude are modulated by the slowly
//! varying positions of the sun and moon.
//!
//! ## Data Flow
//! 1. **[`astronomical`]**: instant → mean longitudes and rates (cycles)
//! 2. **[`catalog`]**: constituent name → Doodson number and satellites, or a
//!    shallow water combination of other constituents
//! 3. **[`factors`]**: main constituent → equilibrium argument, node factor,
//!    phase correction and speed
//! 4. **[`shallow`]**: shallow water constituent → combined factors
//! 5. **[`synthesis`]**: factors, amplitude and lag → height contribution
//! 6. **[`predictor`]**: single heights and batched series
//!
//! The engine holds no state between calls apart from the immutable built-in
//! catalog, so every operation may be called from any thread.
//!
//! ## Example
//! ```
//! use tidal_lib::{predictor, TidalComponent};
//!
//! let components = vec![
//!     TidalComponent::from_degrees("M2", 0.52, 220.0),
//!     TidalComponent::from_degrees("S2", 0.07, 260.0),
//! ];
//! let height = predictor::predict_height(&components, 1_262_304_000.0, -41.3, 12.0).unwrap();
//! assert!(height.abs() < 0.7);
//! ```

use serde::{Deserialize, Serialize};

pub mod astronomical;
pub mod catalog;
pub mod config;
pub mod constituents;
pub mod error;
pub mod extrema;
pub mod factors;
pub mod predictor;
pub mod shallow;
pub mod shallows;
pub mod synthesis;

pub use catalog::{Catalog, Resolution};
pub use error::{TidalError, TidalResult};
pub use predictor::{predict_height, predict_series, TidePredictor};

/// Site harmonic constant for one constituent.
///
/// `lag` is stored in cycles (published degrees divided by 360); the height
/// contribution is in the same length unit as `amplitude`.
///
/// # Example
/// ```
/// use tidal_lib::TidalComponent;
///
/// let m2 = TidalComponent::from_degrees("M2", 1.2, 90.0);
/// assert_eq!(m2.lag, 0.25);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TidalComponent {
    pub name: String,
    pub amplitude: f64,
    /// Phase lag in cycles.
    pub lag: f64,
}

impl TidalComponent {
    /// Component with the lag already in cycles.
    pub fn new(name: impl Into<String>, amplitude: f64, lag: f64) -> Self {
        TidalComponent {
            name: name.into(),
            amplitude,
            lag,
        }
    }

    /// Component with a published phase lag in degrees.
    pub fn from_degrees(name: impl Into<String>, amplitude: f64, lag_degrees: f64) -> Self {
        TidalComponent::new(name, amplitude, lag_degrees / 360.0)
    }
}

/// A predicted height at an instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the POSIX epoch.
    pub at: f64,
    /// Height above the datum.
    pub height: f64,
}

/// Evenly spaced predicted heights.
///
/// # Example
/// ```
/// use tidal_lib::{Sample, TideSeries};
///
/// let series = TideSeries::from_heights(0.0, 60.0, 1.5, &[0.25, 0.5]);
/// assert_eq!(series.samples[1], Sample { at: 60.0, height: 2.0 });
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideSeries {
    pub samples: Vec<Sample>,
}

impl TideSeries {
    /// Pair heights with their instants, adding `datum` to every height.
    pub fn from_heights(start: f64, step: f64, datum: f64, heights: &[f64]) -> Self {
        let samples = heights
            .iter()
            .enumerate()
            .map(|(i, h)| Sample {
                at: start + i as f64 * step,
                height: datum + h,
            })
            .collect();
        TideSeries { samples }
    }
}
