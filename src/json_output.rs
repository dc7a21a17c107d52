//! JSON output format for timing reports

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::html_output::NO_DATA_MESSAGE;
use crate::report::{Overview, ReportRow, TimingReport};

/// A single table line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRow {
    /// Measurement point name
    pub name: String,
    /// Average duration, `null` when nothing was measured
    pub average: Option<String>,
    pub measurements: u64,
    pub min: String,
    pub max: String,
    pub total: String,
}

impl From<&ReportRow> for JsonRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            name: row.name.clone(),
            average: row.average.clone(),
            measurements: row.measurements,
            min: row.min.clone(),
            max: row.max.clone(),
            total: row.total.clone(),
        }
    }
}

/// Rows read from one timing file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSource {
    pub source: String,
    pub rows: Vec<JsonRow>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Display unit label (`sec` or `ms`)
    pub unit: String,
    /// False when no timings were found; `summary` and `sources` are then empty
    pub has_data: bool,
    /// No-data message, present only when `has_data` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Merged rows by measurement name
    pub summary: Vec<JsonRow>,
    /// Per-file breakdown
    pub sources: Vec<JsonSource>,
}

impl JsonOutput {
    pub fn from_report(report: &TimingReport) -> Self {
        let summary = match &report.overview {
            Overview::NoData => Vec::new(),
            Overview::Rows(rows) => rows.iter().map(JsonRow::from).collect(),
        };

        let sources = report
            .sources
            .iter()
            .map(|section| JsonSource {
                source: section.source.clone(),
                rows: section.rows.iter().map(JsonRow::from).collect(),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "timing-report-json-v1".to_string(),
            unit: report.unit.display_name().to_string(),
            has_data: !report.is_empty(),
            message: report.is_empty().then(|| NO_DATA_MESSAGE.to_string()),
            summary,
            sources,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
