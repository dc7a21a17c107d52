//! Report configuration file support
//!
//! Settings can be kept in a TOML file instead of being passed as flags:
//!
//! ```toml
//! timings = ["target/jetm", "integration/target/jetm"]
//! time_unit = "MILLIS"
//! input_encoding = "ISO-8859-1"
//! format = "html"
//! output = "target/site/timing-report.html"
//! ```
//!
//! Command-line flags override values from the file.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{ReportError, Result};
use crate::time_unit::TimeUnit;
use crate::xml_input::{input_encoding, DEFAULT_INPUT_ENCODING};

/// Unit used when none is configured
pub const DEFAULT_TIME_UNIT: &str = "SECS";

/// Report settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directories scanned for timing files; empty means the default directory
    pub timings: Vec<PathBuf>,

    /// Display unit identifier (`SECS`, `MILLIS`, `SECONDS`, `MILLISECONDS`)
    pub time_unit: String,

    /// Encoding label of the timing files (`UTF-8`, `ISO-8859-1`, ...)
    pub input_encoding: String,

    pub format: OutputFormat,

    /// Destination file; stdout when unset
    pub output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timings: Vec::new(),
            time_unit: DEFAULT_TIME_UNIT.to_string(),
            input_encoding: DEFAULT_INPUT_ENCODING.to_string(),
            format: OutputFormat::Text,
            output: None,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReportError::Config(e.to_string()))
    }

    /// Parsed display unit
    pub fn unit(&self) -> Result<TimeUnit> {
        self.time_unit.parse()
    }

    /// Parsed input encoding
    pub fn encoding(&self) -> Result<&'static Encoding> {
        input_encoding(&self.input_encoding)
    }

    /// Validate configuration before any file is read
    pub fn validate(&self) -> Result<()> {
        self.unit()?;
        self.encoding()?;
        Ok(())
    }
}
