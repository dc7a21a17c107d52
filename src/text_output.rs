//! Plain-text output format for timing reports
//!
//! Column-aligned tables for terminals, in the same section layout as the
//! HTML report.

use crate::html_output::{NO_DATA_MESSAGE, REPORT_TITLE};
use crate::report::{Overview, ReportRow, TimingReport};

const NAME_HEADER: &str = "Name";
const NUMBER_WIDTH: usize = 14;

/// Text output formatter
#[derive(Debug)]
pub struct TextOutput<'a> {
    report: &'a TimingReport,
}

impl<'a> TextOutput<'a> {
    pub fn new(report: &'a TimingReport) -> Self {
        Self { report }
    }

    fn name_width(rows: &[ReportRow]) -> usize {
        rows.iter()
            .map(|row| row.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(NAME_HEADER.len())
    }

    fn render_table(&self, rows: &[ReportRow]) -> String {
        let label = self.report.unit.display_name();
        let width = Self::name_width(rows);
        let mut out = String::new();

        let header = format!(
            "{:<width$} {:>nw$} {:>nw$} {:>nw$} {:>nw$} {:>nw$}",
            NAME_HEADER,
            format!("Average ({})", label),
            "Measurements",
            format!("Minimum ({})", label),
            format!("Maximum ({})", label),
            format!("Total ({})", label),
            width = width,
            nw = NUMBER_WIDTH,
        );
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.chars().count()));
        out.push('\n');

        for row in rows {
            out.push_str(&format!(
                "{:<width$} {:>nw$} {:>nw$} {:>nw$} {:>nw$} {:>nw$}\n",
                row.name,
                row.average.as_deref().unwrap_or("n/a"),
                row.measurements,
                row.min,
                row.max,
                row.total,
                width = width,
                nw = NUMBER_WIDTH,
            ));
        }

        out
    }

    /// Generate the text report
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n\n", REPORT_TITLE));

        let rows = match &self.report.overview {
            Overview::NoData => {
                out.push_str(NO_DATA_MESSAGE);
                out.push('\n');
                return out;
            }
            Overview::Rows(rows) => rows,
        };

        out.push_str("Summary\n\n");
        out.push_str(&self.render_table(rows));

        out.push_str("\nFile Breakdown\n");
        for section in &self.report.sources {
            out.push_str(&format!("\n{}\n\n", section.source));
            out.push_str(&self.render_table(&section.rows));
        }

        out
    }
}
