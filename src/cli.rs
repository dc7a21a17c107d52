//! CLI argument parsing for timing-report

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text tables (default)
    Text,
    /// Standalone HTML document
    Html,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "timing-report")]
#[command(version)]
#[command(
    about = "Consolidated report over per-file timing aggregates",
    long_about = None
)]
pub struct Cli {
    /// Directory containing timing XML files (repeatable; default: target/jetm)
    #[arg(short = 't', long = "timings", value_name = "DIR")]
    pub timings: Vec<PathBuf>,

    /// Display unit: SECS or MILLIS (default: SECS)
    #[arg(short = 'u', long = "time-unit", value_name = "UNIT")]
    pub time_unit: Option<String>,

    /// Character encoding of the timing files (default: UTF-8)
    #[arg(long = "input-encoding", value_name = "LABEL")]
    pub input_encoding: Option<String>,

    /// Output format (default: text)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read settings from a TOML file; flags take precedence
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
