//! Error types for timing aggregation and report assembly

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or rendering a timing report
#[derive(Error, Debug)]
pub enum ReportError {
    /// A record was constructed with an empty name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An unrecognized display unit or input encoding was selected
    #[error("Unrecognized {setting}: {value}")]
    InvalidConfiguration { setting: &'static str, value: String },

    /// An average was requested from a record with no measurements
    #[error("Average of '{name}' is undefined: no measurements were taken")]
    DivisionUndefined { name: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
