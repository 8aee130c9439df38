//! Report formatting
//!
//! Renders aggregated totals as an aligned text block, one activity per
//! line, sorted lexicographically. The sentinel closing activity
//! (conventionally `"Done"`) is a bookkeeping entry marking the end of the
//! day and is filtered here, not in the aggregator.

use crate::clip::clip_events;
use crate::rollup::aggregate;
use crate::types::{ActivityEvent, DurationTotals, Window};

/// Emitted when a window contains no reportable activity.
pub const NO_ENTRIES: &str = "No entries";

/// Format whole seconds as hours and minutes, e.g. "2 hours and 5 minutes".
///
/// Sub-minute remainders are dropped; anything under a minute renders as
/// "0 minutes".
pub fn format_duration(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} hour{}", hours, if hours == 1 { "" } else { "s" }));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }

    match parts.len() {
        0 => "0 minutes".to_string(),
        1 => parts.remove(0),
        _ => format!("{} and {}", parts[0], parts[1]),
    }
}

/// Render totals as aligned `name : duration` lines.
///
/// Names are sorted lexicographically and padded to the longest remaining
/// name; `closing_activity` is excluded. Returns [`NO_ENTRIES`] when
/// nothing is left to show.
pub fn render(totals: &DurationTotals, closing_activity: &str) -> String {
    let mut names: Vec<&String> = totals.keys().filter(|n| *n != closing_activity).collect();

    if names.is_empty() {
        return NO_ENTRIES.to_string();
    }

    names.sort();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);

    names
        .iter()
        .map(|name| format!("{:<width$} : {}", name, format_duration(totals[*name])))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full per-window pipeline: clip, aggregate, render.
pub fn summarize(events: &[ActivityEvent], window: &Window, closing_activity: &str) -> String {
    let totals = aggregate(&clip_events(events, window));
    render(&totals, closing_activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 minutes");
        assert_eq!(format_duration(59), "0 minutes");
        assert_eq!(format_duration(60), "1 minute");
        assert_eq!(format_duration(120), "2 minutes");
        assert_eq!(format_duration(3600), "1 hour");
        assert_eq!(format_duration(7200), "2 hours");
        assert_eq!(format_duration(3660), "1 hour and 1 minute");
        assert_eq!(format_duration(9000), "2 hours and 30 minutes");
    }

    #[test]
    fn test_render_sorts_and_aligns() {
        let mut totals = DurationTotals::new();
        totals.insert("Work.ProjectA".to_string(), 5400);
        totals.insert("Work".to_string(), 5400);

        assert_eq!(
            render(&totals, "Done"),
            "Work          : 1 hour and 30 minutes\n\
             Work.ProjectA : 1 hour and 30 minutes"
        );
    }

    #[test]
    fn test_render_filters_closing_activity() {
        let mut totals = DurationTotals::new();
        totals.insert("Done".to_string(), 3600);
        totals.insert("Work".to_string(), 60);

        let rendered = render(&totals, "Done");
        assert!(!rendered.contains("Done"));
        assert!(rendered.contains("Work"));
    }

    #[test]
    fn test_render_empty_totals() {
        assert_eq!(render(&DurationTotals::new(), "Done"), NO_ENTRIES);

        let mut only_done = DurationTotals::new();
        only_done.insert("Done".to_string(), 100);
        assert_eq!(render(&only_done, "Done"), NO_ENTRIES);
    }

    #[test]
    fn test_summarize_end_to_end() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let ts = |h, m| day.and_hms_opt(h, m, 0).unwrap();

        let events = vec![
            ActivityEvent::new(ts(9, 0), "Work.ProjectA"),
            ActivityEvent::new(ts(10, 30), "Work.ProjectB"),
            ActivityEvent::new(ts(12, 0), "Done"),
        ];
        let window = Window::new("Today", ts(9, 0), ts(12, 0));

        assert_eq!(
            summarize(&events, &window, "Done"),
            "Work          : 3 hours\n\
             Work.ProjectA : 1 hour and 30 minutes\n\
             Work.ProjectB : 1 hour and 30 minutes"
        );
    }

    #[test]
    fn test_summarize_empty_log() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let window = Window::new(
            "Today",
            day.and_hms_opt(4, 0, 0).unwrap(),
            day.and_hms_opt(23, 0, 0).unwrap(),
        );
        assert_eq!(summarize(&[], &window, "Done"), NO_ENTRIES);
    }
}
