//! Cross-source aggregation of timing records
//!
//! Every [`Aggregate`] of every [`Source`] is folded, by name, into one
//! [`AggregateSummary`]. Sources are visited in the order given and records in
//! file order; the numeric result does not depend on that order.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;

use crate::aggregate::{Aggregate, AggregateSummary, Measured};
use crate::error::Result;

/// Timing records read from one source (typically one file)
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Identity shown as the section title for this source
    pub id: String,
    pub aggregates: Vec<Aggregate>,
}

impl Source {
    pub fn new(id: impl Into<String>, aggregates: Vec<Aggregate>) -> Self {
        Self {
            id: id.into(),
            aggregates,
        }
    }

    /// True when the source contributed no records
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }
}

/// Merge all sources into one summary per measurement name
///
/// An empty input, or input where every source is empty, yields an empty map.
pub fn merge(sources: &[Source]) -> Result<BTreeMap<String, AggregateSummary>> {
    let mut summaries: BTreeMap<String, AggregateSummary> = BTreeMap::new();

    for source in sources {
        debug!(
            "Merging {} aggregates from {}",
            source.aggregates.len(),
            source.id
        );
        for aggregate in &source.aggregates {
            let summary = match summaries.entry(aggregate.name().to_string()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(AggregateSummary::new(aggregate.name())?),
            };
            summary.add(aggregate);
        }
    }

    debug!("Merged into {} summaries", summaries.len());
    Ok(summaries)
}
