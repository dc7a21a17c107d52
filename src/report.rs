//! Assembly of display-ready report rows
//!
//! A [`TimingReport`] holds everything a renderer needs: the merged overview
//! and the per-source breakdown, already ordered, converted to the display
//! unit and rounded. Renderers never re-sort or re-round.

use crate::aggregate::{AggregateSummary, Measured};
use crate::error::Result;
use crate::merge::{merge, Source};
use crate::ordering::{row_order, sort_summaries};
use crate::time_unit::TimeUnit;

/// One rendered table line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    /// `None` when the record holds no measurements
    pub average: Option<String>,
    pub measurements: u64,
    pub min: String,
    pub max: String,
    pub total: String,
}

impl ReportRow {
    /// Convert one record into display form
    ///
    /// The average is only computed when at least one measurement exists.
    pub fn from_measured(record: &impl Measured, unit: TimeUnit) -> Result<Self> {
        let average = if record.measurements() > 0 {
            Some(unit.render(record.average()?))
        } else {
            None
        };

        Ok(Self {
            name: record.name().to_string(),
            average,
            measurements: record.measurements(),
            min: unit.render(record.min()),
            max: unit.render(record.max()),
            total: unit.render(record.total()),
        })
    }
}

/// Rows for one source, in row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSection {
    pub source: String,
    pub rows: Vec<ReportRow>,
}

/// Merged view across all sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overview {
    /// No source contributed a single record
    NoData,
    Rows(Vec<ReportRow>),
}

impl Overview {
    pub fn is_empty(&self) -> bool {
        matches!(self, Overview::NoData)
    }
}

/// Complete, display-ready timing report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingReport {
    pub unit: TimeUnit,
    pub overview: Overview,
    /// Sources with at least one record, in input order
    pub sources: Vec<SourceSection>,
}

impl TimingReport {
    /// Merge `sources` and render every table in `unit`
    ///
    /// Sources without records get no section. Any failure returns no report.
    pub fn build(sources: &[Source], unit: TimeUnit) -> Result<Self> {
        let summaries = sorted_summaries(sources)?;

        let overview = if summaries.is_empty() {
            Overview::NoData
        } else {
            Overview::Rows(rows_in_order(&summaries, unit)?)
        };

        let sections = sources
            .iter()
            .filter(|source| !source.is_empty())
            .map(|source| {
                Ok(SourceSection {
                    source: source.id.clone(),
                    rows: rows_in_order(&source.aggregates, unit)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            unit,
            overview,
            sources: sections,
        })
    }

    /// True when there is nothing to report
    pub fn is_empty(&self) -> bool {
        self.overview.is_empty()
    }
}

/// Merged summaries in summary-set order
pub fn sorted_summaries(sources: &[Source]) -> Result<Vec<AggregateSummary>> {
    let mut summaries: Vec<AggregateSummary> = merge(sources)?.into_values().collect();
    sort_summaries(&mut summaries);
    Ok(summaries)
}

/// Render records as rows sorted in row order
fn rows_in_order<M: Measured>(records: &[M], unit: TimeUnit) -> Result<Vec<ReportRow>> {
    let mut ordered: Vec<&M> = records.iter().collect();
    ordered.sort_by(|a, b| row_order(a.name(), b.name()));
    ordered
        .into_iter()
        .map(|record| ReportRow::from_measured(record, unit))
        .collect()
}
