//! # Command Line Handling
//!
//! Argument parsing, date parsing and output formatting for the `tides`
//! binary. Everything here is a thin layer around the library: the only
//! clock read happens when no start or end date is given.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use tidal_lib::config::{Config, ConstituentConfig};

/// Predict tidal heights, or high and low water, from harmonic constants.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tides")]
#[command(about = "Predict tidal heights from astronomical arguments and tidal constituents")]
#[command(version)]
pub struct Cli {
    /// Run in verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Output high/low tides instead of a height series
    #[arg(short = 'm', long)]
    pub extrema: bool,

    /// Output JSON
    #[arg(short, long)]
    pub json: bool,

    /// Site configuration file [default: tides.toml when present]
    #[arg(short = 'C', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Datum added to every height
    #[arg(short, long, allow_negative_numbers = true)]
    pub datum: Option<f64>,

    /// Site latitude in degrees, north positive
    #[arg(short, long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Time zone correction in hours east of GMT
    #[arg(short, long, allow_negative_numbers = true)]
    pub zone: Option<f64>,

    /// Tidal constituent, lag in degrees (repeatable)
    #[arg(short = 'c', long = "constituent", value_name = "NAME/AMP/LAG")]
    pub constituents: Vec<ConstituentConfig>,

    /// Start date [default: now]
    #[arg(short, long, value_name = "DATE")]
    pub from: Option<String>,

    /// End date [default: now]
    #[arg(short, long, value_name = "DATE")]
    pub to: Option<String>,

    /// Output interval in seconds [default: 60]
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<f64>,
}

/// Everything the driver needs to run one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub json: bool,
    pub config: Config,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Cli {
    /// Merge the flags over the site configuration.
    ///
    /// A `-C` file must exist and parse; without one, `tides.toml` in the
    /// working directory is used when present. Every other flag then
    /// overrides the value loaded, and `-c` constituents are appended.
    pub fn into_options(self) -> anyhow::Result<Options> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path).context("unable to load site configuration")?,
            None => Config::load(),
        };

        if let Some(datum) = self.datum {
            config.site.datum = datum;
        }
        if let Some(latitude) = self.latitude {
            config.site.latitude = latitude;
        }
        if let Some(zone) = self.zone {
            config.site.zone = zone;
        }
        if let Some(interval) = self.interval {
            config.output.interval_seconds = interval;
        }
        if self.extrema {
            config.output.extrema = true;
        }
        config.constituents.extend(self.constituents);

        if !(config.output.interval_seconds > 0.0) {
            bail!("interval must be positive, got {}", config.output.interval_seconds);
        }

        Ok(Options {
            json: self.json,
            config,
            from: self.from,
            to: self.to,
        })
    }
}

/// Parse `YYYY[-MM[-DD[THH[:MM[:SS]]]]]` as UTC seconds since the epoch.
///
/// Fields may be separated by any of `- / : . T` or a space; missing month
/// and day default to 1, missing time fields to 0.
pub fn parse_date(text: &str) -> anyhow::Result<f64> {
    let fields = text
        .split(|c: char| matches!(c, '-' | '/' | ':' | '.' | 'T' | ' '))
        .filter(|f| !f.is_empty())
        .map(|f| f.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("unreadable date {text:?}"))?;

    if fields.is_empty() || fields.len() > 6 {
        bail!("unreadable date {text:?}");
    }
    let field = |i: usize, default: u32| fields.get(i).copied().unwrap_or(default);

    let year = i32::try_from(fields[0]).with_context(|| format!("year out of range in {text:?}"))?;
    let stamp = NaiveDate::from_ymd_opt(year, field(1, 1), field(2, 1))
        .and_then(|d| d.and_hms_opt(field(3, 0), field(4, 0), field(5, 0)))
        .ok_or_else(|| anyhow!("invalid date {text:?}"))?;

    Ok(stamp.and_utc().timestamp() as f64)
}

/// Resolve the `-f`/`-t` range; a missing end is `now`.
pub fn time_range(from: Option<&str>, to: Option<&str>, now: f64) -> anyhow::Result<(f64, f64)> {
    let start = from.map(parse_date).transpose()?.unwrap_or(now);
    let end = to.map(parse_date).transpose()?.unwrap_or(now);
    Ok((start, end))
}

/// `YYYY-MM-DDTHH:MM:SS` in UTC, rounded to the nearest second.
pub fn format_timestamp(at: f64) -> String {
    DateTime::<Utc>::from_timestamp(at.round() as i64, 0)
        .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|| format!("{at}"))
}

pub fn format_height(at: f64, height: f64) -> String {
    format!("{} {:10.6}", format_timestamp(at), height)
}
