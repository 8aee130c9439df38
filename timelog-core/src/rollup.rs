//! Hierarchical rollup
//!
//! Activity names form a namespace via dots: `Work.ProjectA.Design` is a
//! descendant of `Work.ProjectA` and `Work`. Aggregation credits every
//! clipped interval's duration to the full name and to each ancestor, so a
//! parent's total is the sum over all intervals logged under it.

use crate::types::{ClippedInterval, DurationTotals};

/// Expand a dotted name into its ancestor chain, top level first.
///
/// `ancestors("Work.ProjectA.Design", '.')` yields
/// `["Work", "Work.ProjectA", "Work.ProjectA.Design"]`. A name without the
/// separator yields just itself.
pub fn ancestors(name: &str, separator: char) -> Vec<String> {
    let mut chain = Vec::new();
    let mut prefix = String::new();

    for part in name.split(separator) {
        if !prefix.is_empty() {
            prefix.push(separator);
        }
        prefix.push_str(part);
        chain.push(prefix.clone());
    }

    chain
}

/// Aggregate clipped intervals into per-activity totals.
///
/// Each interval credits its full duration once to every level of its name,
/// so within one interval nothing is double-counted, while intervals sharing
/// an ancestor add up. The returned map is fresh per call.
pub fn aggregate(intervals: &[ClippedInterval]) -> DurationTotals {
    let mut totals = DurationTotals::new();

    for interval in intervals {
        for name in ancestors(&interval.activity, '.') {
            *totals.entry(name).or_insert(0) += interval.seconds;
        }
    }

    totals
}
