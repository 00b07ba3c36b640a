//! # Tide Prediction Driver
//!
//! Prints predicted tidal heights, or high and low water, for a site
//! described on the command line or in a `tides.toml` configuration file.
//!
//! ```text
//! tides -l -41.28 -z 12 -c M2/0.52/220.1 -c S2/0.07/260.4 \
//!       -f 2024-03-01 -t 2024-03-02 -i 600
//! ```

// Test modules
#[cfg(test)]
mod tests;

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tidal_lib::astronomical::SECONDS_PER_DAY;
use tidal_lib::extrema::{find_extrema, ScanOptions};
use tidal_lib::{TidePredictor, TideSeries};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{format_height, format_timestamp, time_range, Cli, Options};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print one height per interval from `start` up to, not including, `end`.
///
/// Heights are predicted in batches spanning at most a day. A single instant
/// is printed when the range is empty.
fn print_series(options: &Options, start: f64, end: f64) -> anyhow::Result<()> {
    let config = &options.config;
    let predictor = TidePredictor::default();
    let components = config.components();
    let step = config.output.interval_seconds;

    let total = if end > start { ((end - start) / step).ceil() as usize } else { 1 };
    let per_batch = ((SECONDS_PER_DAY / step).floor() as usize).max(1);

    let mut series = TideSeries { samples: Vec::with_capacity(total) };
    let mut done = 0;
    while done < total {
        let count = per_batch.min(total - done);
        let batch_start = start + done as f64 * step;
        let heights = predictor
            .predict_series(&components, batch_start, config.site.latitude, config.site.zone, count, step)
            .with_context(|| format!("unable to predict tide: {}", format_timestamp(batch_start)))?;

        let batch = TideSeries::from_heights(batch_start, step, config.site.datum, &heights);
        if options.json {
            series.samples.extend(batch.samples);
        } else {
            for sample in &batch.samples {
                println!("{}", format_height(sample.at, sample.height));
            }
        }
        done += count;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    }
    Ok(())
}

/// Print high and low water between `start` and `end`.
fn print_extrema(options: &Options, start: f64, end: f64) -> anyhow::Result<()> {
    let config = &options.config;
    let predictor = TidePredictor::default();
    let scan = ScanOptions::default();

    // an empty range still scans one window, as a single instant does for heights
    let end = if end > start { end } else { start + scan.window };

    let found = find_extrema(
        &predictor,
        &config.components(),
        start,
        end,
        config.site.latitude,
        config.site.zone,
        scan,
    )
    .with_context(|| {
        format!(
            "unable to predict tide: {} to {}",
            format_timestamp(start),
            format_timestamp(end)
        )
    })?;

    let found: Vec<_> = found
        .into_iter()
        .map(|mut e| {
            e.height += config.site.datum;
            e
        })
        .collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for e in &found {
            println!("{} {}", format_height(e.at, e.height), e.kind.tag());
        }
    }
    Ok(())
}

fn run(options: &Options) -> anyhow::Result<()> {
    let now = Utc::now().timestamp() as f64;
    let (start, end) = time_range(options.from.as_deref(), options.to.as_deref(), now)?;

    debug!(
        start = %format_timestamp(start),
        end = %format_timestamp(end),
        latitude = options.config.site.latitude,
        zone = options.config.site.zone,
        constituents = options.config.constituents.len(),
        "predicting"
    );

    if options.config.output.extrema {
        print_extrema(options, start, end)
    } else {
        print_series(options, start, end)
    }
}

/// Main application entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.verbose {
        eprintln!("tides ({})", env!("CARGO_PKG_VERSION"));
    }

    match cli.into_options().and_then(|options| run(&options)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
