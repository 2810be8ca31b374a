//! CLI argument definitions for the title catalog cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use titles_cli::types::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SUMMARY};

#[derive(Parser)]
#[command(
    name = "titles-clean",
    version,
    about = "Clean a title catalog CSV and summarize the changes",
    long_about = "Clean a movie/show catalog CSV.\n\n\
                  Renames columns to snake_case, parses dates and durations,\n\
                  normalizes text, imputes missing values and adds derived\n\
                  features. Writes the cleaned CSV and a markdown summary."
)]
pub struct Cli {
    /// Catalog CSV to clean.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination of the cleaned CSV.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Destination of the markdown summary.
    #[arg(long = "summary", value_name = "PATH", default_value = DEFAULT_SUMMARY)]
    pub summary: PathBuf,

    /// Field delimiter of the input file (a single ASCII character).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got {value:?}")),
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
