//! CSV output format for timing reports
//!
//! One table for the whole report. The leading `section` column is
//! `summary` for merged rows and the file name for per-file rows. A report
//! without data is the no-data message on its own, with no table.

use crate::html_output::NO_DATA_MESSAGE;
use crate::report::{Overview, ReportRow, TimingReport};

/// Section name used for merged rows
pub const SUMMARY_SECTION: &str = "summary";

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    report: &'a TimingReport,
}

impl<'a> CsvOutput<'a> {
    pub fn new(report: &'a TimingReport) -> Self {
        Self { report }
    }

    /// Generate CSV header row
    fn header(&self) -> String {
        let label = self.report.unit.display_name();
        format!(
            "section,name,average_{label},measurements,min_{label},max_{label},total_{label}",
            label = label
        )
    }

    /// Escape CSV field (handle commas, quotes, line breaks)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format a report row as CSV row
    fn format_row(section: &str, row: &ReportRow) -> String {
        let fields = [
            Self::escape_field(section),
            Self::escape_field(&row.name),
            row.average.clone().unwrap_or_default(),
            row.measurements.to_string(),
            row.min.clone(),
            row.max.clone(),
            row.total.clone(),
        ];

        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let rows = match &self.report.overview {
            Overview::NoData => return format!("{}\n", NO_DATA_MESSAGE),
            Overview::Rows(rows) => rows,
        };

        let mut output = String::new();
        output.push_str(&self.header());
        output.push('\n');

        for row in rows {
            output.push_str(&Self::format_row(SUMMARY_SECTION, row));
            output.push('\n');
        }

        for section in &self.report.sources {
            for row in &section.rows {
                output.push_str(&Self::format_row(&section.source, row));
                output.push('\n');
            }
        }

        output
    }
}
