//! Timing aggregate records
//!
//! An [`Aggregate`] is one measurement point as read from a single timing
//! file. An [`AggregateSummary`] folds together every aggregate that shares a
//! name. Both expose the same read-only view through [`Measured`].

use crate::error::{ReportError, Result};

/// Read-only view of an aggregated measurement point
///
/// All durations are in milliseconds.
pub trait Measured {
    fn name(&self) -> &str;
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn total(&self) -> f64;
    fn measurements(&self) -> u64;

    /// Mean duration of a single measurement
    ///
    /// Fails with [`ReportError::DivisionUndefined`] when nothing was measured;
    /// check `measurements() > 0` first if that is an expected case.
    fn average(&self) -> Result<f64> {
        if self.measurements() == 0 {
            return Err(ReportError::DivisionUndefined {
                name: self.name().to_string(),
            });
        }
        Ok(self.total() / self.measurements() as f64)
    }
}

fn require_name(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(ReportError::InvalidArgument(
            "name cannot be empty".to_string(),
        ));
    }
    Ok(name)
}

/// Statistics for one measurement point from one source
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    name: String,
    min: f64,
    max: f64,
    total: f64,
    measurements: u64,
}

impl Aggregate {
    /// Create an aggregate, rejecting an empty name
    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        total: f64,
        measurements: u64,
    ) -> Result<Self> {
        Ok(Self {
            name: require_name(name.into())?,
            min,
            max,
            total,
            measurements,
        })
    }
}

impl Measured for Aggregate {
    fn name(&self) -> &str {
        &self.name
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn total(&self) -> f64 {
        self.total
    }

    fn measurements(&self) -> u64 {
        self.measurements
    }
}

/// Running merge of every aggregate sharing a name
///
/// Minimum and maximum are true extrema over the contributing aggregates;
/// total and measurement count are sums.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    name: String,
    /// `(min, max)` over contributors that measured something
    extrema: Option<(f64, f64)>,
    total: f64,
    measurements: u64,
}

impl AggregateSummary {
    /// Create an empty summary, rejecting an empty name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_name(name.into())?,
            extrema: None,
            total: 0.0,
            measurements: 0,
        })
    }

    /// Fold one aggregate into the summary
    ///
    /// Aggregates with zero measurements carry no meaningful min/max and
    /// leave the running extrema untouched.
    pub fn add(&mut self, aggregate: &impl Measured) {
        if aggregate.measurements() > 0 {
            self.extrema = Some(match self.extrema {
                Some((min, max)) => (min.min(aggregate.min()), max.max(aggregate.max())),
                None => (aggregate.min(), aggregate.max()),
            });
        }
        self.total += aggregate.total();
        self.measurements += aggregate.measurements();
    }
}

impl Measured for AggregateSummary {
    fn name(&self) -> &str {
        &self.name
    }

    /// Smallest observed minimum, or 0 when nothing was measured
    fn min(&self) -> f64 {
        self.extrema.map_or(0.0, |(min, _)| min)
    }

    /// Largest observed maximum, or 0 when nothing was measured
    fn max(&self) -> f64 {
        self.extrema.map_or(0.0, |(_, max)| max)
    }

    fn total(&self) -> f64 {
        self.total
    }

    fn measurements(&self) -> u64 {
        self.measurements
    }
}
