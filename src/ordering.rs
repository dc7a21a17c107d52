//! Name orderings for report presentation
//!
//! Two orderings exist:
//!
//! - [`row_order`] orders the rows of any rendered table: names compared
//!   ignoring case, ties broken by a case-sensitive comparison.
//! - [`summary_set_order`] orders the assembled list of merged summaries:
//!   case-sensitive comparison only.
//!
//! The two disagree on names that differ only in case.

use std::cmp::Ordering;

use crate::aggregate::Measured;

/// Compare two names character by character, ignoring case
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Ordering of rows within a single table
pub fn row_order(a: &str, b: &str) -> Ordering {
    cmp_ignore_case(a, b).then_with(|| a.cmp(b))
}

/// Ordering of the merged summary list
pub fn summary_set_order(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Sort summaries in summary-set order
pub fn sort_summaries<M: Measured>(summaries: &mut [M]) {
    summaries.sort_by(|a, b| summary_set_order(a.name(), b.name()));
}
