//! HTML output format for timing reports
//!
//! Styled tables with embedded CSS: a summary table by measurement name,
//! followed by one table per timing file.

use crate::report::{Overview, ReportRow, TimingReport};
use crate::time_unit::TimeUnit;

/// Title shown in the document head and as the top-level heading
pub const REPORT_TITLE: &str = "Timing Report";

/// Text rendered when no timings were found
pub const NO_DATA_MESSAGE: &str = "There are no timings available for reporting.";

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    report: &'a TimingReport,
}

impl<'a> HtmlOutput<'a> {
    pub fn new(report: &'a TimingReport) -> Self {
        Self { report }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2, h3 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        tr:hover {
            background-color: #f0f0f0;
        }
        .name {
            color: #0066cc;
            font-weight: bold;
            font-family: monospace;
        }
        .number {
            font-family: monospace;
            text-align: right;
        }
        .summary-table th {
            background-color: #5cb85c;
        }
        .no-data {
            color: #888;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Generate HTML table header
    fn generate_header(unit: TimeUnit) -> String {
        let label = unit.display_name();
        let headers = [
            "Name".to_string(),
            format!("Average ({})", label),
            "Measurements".to_string(),
            format!("Minimum ({})", label),
            format!("Maximum ({})", label),
            format!("Total ({})", label),
        ];

        let header_cells: Vec<String> = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();

        format!("<tr>{}</tr>", header_cells.join(""))
    }

    /// Format a report row as HTML table row
    fn format_row(row: &ReportRow) -> String {
        let cells = [
            format!(r#"<td class="name">{}</td>"#, Self::escape_html(&row.name)),
            format!(
                r#"<td class="number">{}</td>"#,
                row.average.as_deref().unwrap_or("n/a")
            ),
            format!(r#"<td class="number">{}</td>"#, row.measurements),
            format!(r#"<td class="number">{}</td>"#, row.min),
            format!(r#"<td class="number">{}</td>"#, row.max),
            format!(r#"<td class="number">{}</td>"#, row.total),
        ];

        format!("<tr>{}</tr>", cells.join(""))
    }

    fn render_table(&self, class: Option<&str>, rows: &[ReportRow]) -> String {
        let mut html = String::new();

        match class {
            Some(class) => html.push_str(&format!("    <table class=\"{}\">\n", class)),
            None => html.push_str("    <table>\n"),
        }
        html.push_str("        ");
        html.push_str(&Self::generate_header(self.report.unit));
        html.push('\n');

        for row in rows {
            html.push_str("        ");
            html.push_str(&Self::format_row(row));
            html.push('\n');
        }

        html.push_str("    </table>\n");
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", REPORT_TITLE));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str(&format!("    <h1>{}</h1>\n", REPORT_TITLE));

        match &self.report.overview {
            Overview::NoData => {
                html.push_str(&format!("    <p class=\"no-data\">{}</p>\n", NO_DATA_MESSAGE));
            }
            Overview::Rows(rows) => {
                html.push_str("    <h2>Summary</h2>\n");
                html.push_str(
                    "    <p>This is a summary, by measurement name, of the measurements taken.</p>\n",
                );
                html.push_str(&self.render_table(Some("summary-table"), rows));

                html.push_str("    <h2>File Breakdown</h2>\n");
                html.push_str("    <p>This is a list of, per file, the measurements taken.</p>\n");
                for section in &self.report.sources {
                    html.push_str(&format!(
                        "    <h3>{}</h3>\n",
                        Self::escape_html(&section.source)
                    ));
                    html.push_str(&self.render_table(None, &section.rows));
                }
            }
        }

        html.push_str("    <div class=\"footer\">\n");
        html.push_str(&format!(
            "        Generated by timing-report {}\n",
            env!("CARGO_PKG_VERSION")
        ));
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}
