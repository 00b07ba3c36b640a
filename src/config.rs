//! # Configuration Management
//!
//! Site configuration loaded from a `tides.toml` file: where the site is,
//! which harmonic constants describe it, and how the driver prints output.
//!
//! ```toml
//! [site]
//! name = "Wellington"
//! latitude = -41.28
//! zone = 12.0
//! datum = 1.0
//!
//! [[constituents]]
//! name = "M2"
//! amplitude = 0.52
//! lag = 220.1   # degrees
//!
//! [output]
//! interval_seconds = 60.0
//! extrema = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

use crate::TidalComponent;

/// Application configuration loaded from tides.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    /// Harmonic constants of the site
    #[serde(default)]
    pub constituents: Vec<ConstituentConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Prediction site
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Human-readable site name for reference
    #[serde(default)]
    pub name: String,
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Hours east of GMT used for the astronomical baseline
    pub zone: f64,
    /// Height offset added to every prediction
    #[serde(default)]
    pub datum: f64,
}

/// One harmonic constant as published: phase lag in degrees
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConstituentConfig {
    pub name: String,
    pub amplitude: f64,
    /// Phase lag in degrees
    pub lag: f64,
}

/// Driver output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Seconds between printed heights
    pub interval_seconds: f64,
    /// Print high/low water instead of a height series
    #[serde(default)]
    pub extrema: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: String::new(),
            latitude: 0.0,
            zone: 0.0,
            datum: 0.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            interval_seconds: 60.0, // once a minute
            extrema: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteConfig::default(),
            constituents: Vec::new(),
            output: OutputConfig::default(),
        }
    }
}

impl From<&ConstituentConfig> for TidalComponent {
    fn from(c: &ConstituentConfig) -> Self {
        TidalComponent::from_degrees(c.name.clone(), c.amplitude, c.lag)
    }
}

/// A configuration file that could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Load configuration from tides.toml in the working directory
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("tides.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e @ ConfigError::Parse { .. }) => {
                warn!(error = %e, "using default configuration");
                Self::default()
            }
            Err(ConfigError::Read { .. }) => {
                info!(path = %path.as_ref().display(), "no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a file that must exist and parse
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let display = path.as_ref().display().to_string();
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config = toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;

        info!(
            site = %config.site.name,
            constituents = config.constituents.len(),
            "loaded site configuration"
        );
        Ok(config)
    }

    /// Save current configuration as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    /// Harmonic constants ready for prediction, lags in cycles
    pub fn components(&self) -> Vec<TidalComponent> {
        self.constituents.iter().map(TidalComponent::from).collect()
    }
}

/// A `name/amplitude/lag` constituent argument that could not be parsed
#[derive(Error, Debug, Clone, PartialEq)]
#[error("expected <name>/<amplitude>/<lag>, got {0:?}")]
pub struct ComponentParseError(pub String);

impl FromStr for ConstituentConfig {
    type Err = ComponentParseError;

    /// Parse `M2/0.52/220.1`: name, amplitude, lag in degrees
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ComponentParseError(s.to_string());
        let mut fields = s.split('/');

        let name = fields.next().map(str::trim).filter(|n| !n.is_empty()).ok_or_else(err)?;
        let amplitude = fields
            .next()
            .and_then(|a| a.trim().parse::<f64>().ok())
            .ok_or_else(err)?;
        let lag = fields
            .next()
            .and_then(|l| l.trim().parse::<f64>().ok())
            .ok_or_else(err)?;
        if fields.next().is_some() {
            return Err(err());
        }

        Ok(ConstituentConfig {
            name: name.to_string(),
            amplitude,
            lag,
        })
    }
}
