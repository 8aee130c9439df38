//! Core domain types for timelog
//!
//! These types model the event log as an implicit state machine made
//! explicit: each log line marks the start of a new active activity, so an
//! ordered event sequence induces a sequence of disjoint active intervals
//! covering the timeline from the first event to the last.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Activity** | A named task, possibly hierarchical via dots (`Work.ProjectA`) |
//! | **Event** | A timestamped record marking the start of a new active activity |
//! | **Window** | A half-open time range `[start, end)` durations are aggregated over |
//! | **Clipping** | Restricting an active interval to its overlap with a window |
//! | **Rollup** | Crediting a duration to an activity and every dotted ancestor |
//!
//! Timestamps are [`NaiveDateTime`]: the log format carries no timezone, so
//! none is invented here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single log entry: the named activity becomes active at `timestamp` and
/// stays active until the next event (or the end of the log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// When the activity became active
    pub timestamp: NaiveDateTime,
    /// Activity name, possibly dot-separated (`Work.ProjectA.Design`)
    pub name: String,
}

impl ActivityEvent {
    pub fn new(timestamp: NaiveDateTime, name: impl Into<String>) -> Self {
        Self {
            timestamp,
            name: name.into(),
        }
    }
}

/// One activity's active span, derived from an event and its successor.
///
/// The last event of a log has no successor, so its interval is open-ended
/// (`end: None`) and is closed against the query window at clip time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInterval {
    pub activity: String,
    pub start: NaiveDateTime,
    /// `None` means still active at the end of the log
    pub end: Option<NaiveDateTime>,
}

/// A labeled half-open query range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Human-readable label for report headings ("Today", "Last 7d", ...)
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    pub fn new(label: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }
}

/// The portion of one active interval that lies inside a window.
///
/// Log timestamps have second resolution, so durations are whole seconds.
/// Zero is a valid duration (an event replaced at the instant the window
/// opens still produces a clipped interval).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedInterval {
    pub activity: String,
    pub seconds: i64,
}

/// Accumulated seconds per activity name, at every hierarchy level.
///
/// Built fresh per query; iteration order is unspecified (the report layer
/// sorts for display).
pub type DurationTotals = HashMap<String, i64>;
