//! Interval clipping
//!
//! Restricts each activity's active span to its overlap with a half-open
//! query window `[start, end)`.
//!
//! Boundary semantics:
//! - An interval that ends at or before `start` is skipped entirely.
//! - An interval that begins at or after `end` is excluded, and because the
//!   sequence is time-ordered, clipping stops there.
//! - An interval that begins exactly at `start` keeps its full span.
//! - An interval still in progress when the window opens is credited from
//!   `start` to its end (or to `end` if it never closes).
//!
//! Events must be supplied in non-decreasing timestamp order. Out-of-order
//! input is undefined behavior: the early stop on the first interval at or
//! past the window end would silently drop later events, so callers own the
//! ordering guarantee.

use crate::types::{ActiveInterval, ActivityEvent, ClippedInterval, Window};

/// Derive the explicit interval sequence from an ordered event log.
///
/// Each event's interval runs to its successor's timestamp; the last event's
/// interval is open-ended and is closed against a window by [`clip`].
pub fn active_intervals(events: &[ActivityEvent]) -> Vec<ActiveInterval> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| ActiveInterval {
            activity: event.name.clone(),
            start: event.timestamp,
            end: events.get(i + 1).map(|next| next.timestamp),
        })
        .collect()
}

/// Clip an ordered interval sequence against a window.
///
/// Emits at most one [`ClippedInterval`] per input interval; durations of
/// zero are kept. An empty input yields an empty output.
pub fn clip(intervals: &[ActiveInterval], window: &Window) -> Vec<ClippedInterval> {
    let mut clipped = Vec::new();

    for interval in intervals {
        // Closed before the window opens: nothing to credit.
        if let Some(end) = interval.end {
            if end <= window.start {
                continue;
            }
        }

        // At or past the window close; every later interval is too.
        if interval.start >= window.end {
            break;
        }

        let end = interval.end.unwrap_or(window.end);

        let seconds = if interval.start < window.start {
            // In progress when the window opened
            (end - window.start).num_seconds()
        } else if interval.end.is_some_and(|e| e > window.end) {
            // Runs past the window close
            (window.end - interval.start).num_seconds()
        } else {
            // Fully inside
            (end - interval.start).num_seconds()
        };

        clipped.push(ClippedInterval {
            activity: interval.activity.clone(),
            seconds,
        });
    }

    clipped
}

/// Convenience: derive intervals from raw events and clip in one step.
pub fn clip_events(events: &[ActivityEvent], window: &Window) -> Vec<ClippedInterval> {
    clip(&active_intervals(events), window)
}
