//! timing-report - consolidated reports over per-file timing aggregates
//!
//! This library reads timing aggregates (name, minimum, maximum, total and
//! measurement count per measurement point) from a set of XML files, merges
//! them into running summaries, and renders a report in text, HTML, JSON or
//! CSV form with durations shown in seconds or milliseconds.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod html_output;
pub mod json_output;
pub mod merge;
pub mod ordering;
pub mod report;
pub mod text_output;
pub mod time_unit;
pub mod xml_input;

pub use aggregate::{Aggregate, AggregateSummary, Measured};
pub use error::{ReportError, Result};
pub use merge::{merge, Source};
pub use report::TimingReport;
pub use time_unit::TimeUnit;
