//! End-to-end report generation
//!
//! Discovers timing files, reads them, builds the [`TimingReport`] and renders
//! it in the requested format.

use std::path::PathBuf;

use encoding_rs::Encoding;
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::ReportConfig;
use crate::csv_output::CsvOutput;
use crate::discovery::{find_timing_files, timing_directories};
use crate::error::Result;
use crate::html_output::HtmlOutput;
use crate::json_output::JsonOutput;
use crate::merge::Source;
use crate::report::TimingReport;
use crate::text_output::TextOutput;
use crate::time_unit::TimeUnit;
use crate::xml_input::read_source;

/// Resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub timings: Vec<PathBuf>,
    pub unit: TimeUnit,
    pub encoding: &'static Encoding,
    pub format: OutputFormat,
}

impl GeneratorConfig {
    /// Resolve a configuration, failing on an unknown time unit or encoding
    pub fn from_report_config(config: &ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            timings: timing_directories(&config.timings),
            unit: config.unit()?,
            encoding: config.encoding()?,
            format: config.format,
        })
    }
}

/// Read every timing file below `dirs`, in discovery order
pub fn load_sources(dirs: &[PathBuf], encoding: &'static Encoding) -> Result<Vec<Source>> {
    let files = find_timing_files(dirs);
    if files.is_empty() {
        info!("No timing files found; the report will have no data");
    }
    files.iter().map(|path| read_source(path, encoding)).collect()
}

/// Render a built report
pub fn render(report: &TimingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextOutput::new(report).to_text()),
        OutputFormat::Html => Ok(HtmlOutput::new(report).to_html()),
        OutputFormat::Csv => Ok(CsvOutput::new(report).to_csv()),
        OutputFormat::Json => JsonOutput::from_report(report).to_json(),
    }
}

/// Build and render a report from the files below the configured directories
pub fn generate(config: &GeneratorConfig) -> Result<String> {
    let sources = load_sources(&config.timings, config.encoding)?;
    let report = TimingReport::build(&sources, config.unit)?;
    info!(
        "Built report from {} files ({} with data)",
        sources.len(),
        report.sources.len()
    );
    render(&report, config.format)
}
