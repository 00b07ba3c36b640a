//! Argument, date and output formatting tests.

use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tempfile::NamedTempFile;

use crate::cli::{format_height, format_timestamp, parse_date, time_range, Cli, Options};

fn parse_args(list: &[&str]) -> anyhow::Result<Options> {
    Cli::try_parse_from(std::iter::once("tides").chain(list.iter().copied()))?.into_options()
}

/// The derived command definition is internally consistent.
#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

/// Site, constituents and mode flags all land in the configuration.
#[test]
fn parses_site_and_constituents() {
    let options = parse_args(&[
        "-l", "-41.28", "-z", "12", "-d", "1.5", "-c", "M2/0.52/220.1", "-c", "S2/0.07/260.4",
        "-i", "600", "-m", "-j",
    ])
    .unwrap();

    let config = &options.config;
    assert_eq!(config.site.latitude, -41.28);
    assert_eq!(config.site.zone, 12.0);
    assert_eq!(config.site.datum, 1.5);
    assert_eq!(config.output.interval_seconds, 600.0);
    assert!(config.output.extrema);
    assert!(options.json);

    let names: Vec<&str> = config.constituents.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["M2", "S2"]);
}

/// No arguments means defaults everywhere and a range ending now.
#[test]
fn empty_arguments_use_defaults() {
    let options = parse_args(&[]).unwrap();
    assert!(options.config.constituents.is_empty());
    assert_eq!(options.config.output.interval_seconds, 60.0);
    assert_eq!(options.from, None);
    assert_eq!(options.to, None);
}

/// Bad flags and bad values are reported rather than ignored.
#[test]
fn rejects_malformed_arguments() {
    assert!(parse_args(&["-x"]).is_err());
    assert!(parse_args(&["-l"]).is_err());
    assert!(parse_args(&["-l", "north"]).is_err());
    assert!(parse_args(&["-c", "M2/0.5"]).is_err());
    assert!(parse_args(&["-i", "0"]).is_err());
    assert!(parse_args(&["-i", "-60"]).is_err());
}

/// Flags given alongside `-C` override the file, and `-c` appends to it.
#[test]
fn command_line_overrides_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[site]
name = "Wellington"
latitude = -41.28
zone = 12.0

[[constituents]]
name = "M2"
amplitude = 0.52
lag = 220.1
"#,
    )
    .unwrap();

    let path = file.path().to_string_lossy().to_string();
    let options = parse_args(&["-z", "13", "-C", &path, "-c", "K1/0.12/90"]).unwrap();

    assert_eq!(options.config.site.name, "Wellington");
    assert_eq!(options.config.site.latitude, -41.28);
    assert_eq!(options.config.site.zone, 13.0);
    assert_eq!(options.config.constituents.len(), 2);
    assert_eq!(options.config.constituents[1].name, "K1");
}

/// Dates accept any of the usual separators and fill in missing fields.
#[test]
fn parses_lenient_dates() {
    assert_eq!(parse_date("2010-01-01").unwrap(), 1_262_304_000.0);
    assert_eq!(parse_date("2010").unwrap(), 1_262_304_000.0);
    assert_eq!(parse_date("2010/1/1 12:30").unwrap(), 1_262_349_000.0);
    assert_eq!(parse_date("2010-01-01T12:30:15").unwrap(), 1_262_349_015.0);
    assert_eq!(parse_date("2010.01.01.00.00.01").unwrap(), 1_262_304_001.0);

    assert!(parse_date("").is_err());
    assert!(parse_date("yesterday").is_err());
    assert!(parse_date("2010-13-01").is_err());
    assert!(parse_date("2010-02-30").is_err());
}

/// Missing ends of the range default to the supplied clock reading.
#[test]
fn time_range_defaults_to_now() {
    let now = 1_700_000_000.0;
    assert_eq!(time_range(None, None, now).unwrap(), (now, now));
    assert_eq!(
        time_range(Some("2010-01-01"), None, now).unwrap(),
        (1_262_304_000.0, now)
    );
    assert!(time_range(Some("soon"), None, now).is_err());
}

/// Output lines are an ISO timestamp followed by a fixed-width height.
#[test]
fn formats_output_lines() {
    assert_eq!(format_timestamp(1_262_304_000.0), "2010-01-01T00:00:00");
    assert_eq!(format_timestamp(1_262_304_000.4), "2010-01-01T00:00:00");
    assert_eq!(format_height(1_262_304_000.0, 0.5), "2010-01-01T00:00:00   0.500000");
    assert_eq!(format_height(1_262_304_060.0, -0.25), "2010-01-01T00:01:00  -0.250000");
}

/// A named configuration file must exist and parse; it never falls back to defaults.
#[test]
fn named_config_file_is_required() {
    let err = parse_args(&["-C", "/nonexistent/tides.toml"]).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/tides.toml"), "{err:#}");

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[site]\nlatitude = \"north\"\n").unwrap();
    let path = file.path().to_string_lossy().to_string();
    assert!(parse_args(&["-C", &path]).is_err());
}

/// Help and version are answered by the parser itself.
#[test]
fn help_and_version_flags() {
    let err = Cli::try_parse_from(["tides", "-h"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let help = err.to_string();
    for flag in ["-m", "-j", "-C", "-d", "-l", "-z", "-c", "-f", "-t", "-i"] {
        assert!(help.contains(flag), "help misses {flag}");
    }

    let err = Cli::try_parse_from(["tides", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}
