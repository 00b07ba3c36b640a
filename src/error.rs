//! # Prediction Errors
//!
//! Every failure in the prediction engine is deterministic: the same
//! constituents, instant and catalog always fail the same way, so nothing
//! here is retryable.
//!
//! | Variant | Raised by | When |
//! |---------|-----------|------|
//! | [`UnknownConstituent`](TidalError::UnknownConstituent) | predictor, shallow combiner | a name is in neither table |
//! | [`MalformedCatalogEntry`](TidalError::MalformedCatalogEntry) | catalog construction | a table row is structurally invalid |
//! | [`InvalidSeries`](TidalError::InvalidSeries) | predictor | series start or step is not finite |

use thiserror::Error;

/// Errors raised while building the catalog or predicting heights.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TidalError {
    /// Name not found among the main or the shallow water constituents.
    #[error("unknown tidal constituent: {name}")]
    UnknownConstituent { name: String },

    /// Structurally invalid catalog row, fatal when the catalog is loaded.
    #[error("malformed catalog entry {name}: {reason}")]
    MalformedCatalogEntry { name: String, reason: String },

    /// Series request that cannot be laid out in time.
    #[error("invalid series: {reason}")]
    InvalidSeries { reason: String },
}

impl TidalError {
    pub fn unknown(name: impl Into<String>) -> Self {
        TidalError::UnknownConstituent { name: name.into() }
    }

    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        TidalError::MalformedCatalogEntry {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type TidalResult<T> = Result<T, TidalError>;
