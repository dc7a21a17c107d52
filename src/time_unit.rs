//! Display time units and fixed two-decimal rendering
//!
//! All raw timing values are stored in milliseconds. A [`TimeUnit`] converts
//! them for display and renders them with exactly two fraction digits.

use crate::error::{ReportError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Unit in which a report expresses its timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Amount by which milliseconds are divided to reach this unit
    pub fn divisor(self) -> u64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => 1000,
        }
    }

    /// Short label used in column headers
    pub fn display_name(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "sec",
        }
    }

    /// Convert a millisecond value into this unit
    pub fn from_millis(self, millis: f64) -> f64 {
        millis / self.divisor() as f64
    }

    /// Convert a millisecond value and render it with two decimal places
    pub fn render(self, millis: f64) -> String {
        format_fixed2(self.from_millis(millis))
    }
}

impl FromStr for TimeUnit {
    type Err = ReportError;

    /// Parse a unit identifier, ignoring case
    ///
    /// Accepts the full names (`MILLISECONDS`, `SECONDS`) as well as the
    /// abbreviations used in report configuration (`MILLIS`, `SECS`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MILLISECONDS" | "MILLIS" | "MS" => Ok(TimeUnit::Milliseconds),
            "SECONDS" | "SECS" | "SEC" | "S" => Ok(TimeUnit::Seconds),
            _ => Err(ReportError::InvalidConfiguration {
                setting: "time unit",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Render a value with exactly two decimal places, rounding half up
///
/// Rounding is done on the exact binary value of `value`, so `0.125` becomes
/// `0.13` while `1.005` (stored as `1.00499...`) becomes `1.00`.
pub fn format_fixed2(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Outside Decimal's range; float formatting is as precise as it gets there
        None => format!("{:.2}", value),
    }
}
