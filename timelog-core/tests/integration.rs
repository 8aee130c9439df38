//! Integration tests for the timelog pipeline
//!
//! Exercise the full flow over a real file: parse -> clip -> aggregate ->
//! render, including the per-line error tolerance of the parser.

use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;
use timelog_core::clip::clip_events;
use timelog_core::rollup::aggregate;
use timelog_core::{parse_timelog, report, Window};

fn ts(d: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, d)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn write_log(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write log");
    file
}

const SAMPLE_LOG: &str = "\
2024-03-15 09:00:00 Work.ProjectA
garbage line
2024-03-15 10:30:00 Work.ProjectB
2024-03-15 12:00:00 Lunch
2024-03-15 12:45:00 Work.ProjectA
2024-03-15 17:00:00 Done
";

#[test]
fn test_full_day_report() {
    timelog_core::logging::init_test();

    let file = write_log(SAMPLE_LOG);
    let parsed = parse_timelog(file.path()).expect("parse should succeed");

    assert_eq!(parsed.events.len(), 5);
    assert_eq!(parsed.warnings.len(), 1);

    let window = Window::new("Today", ts(15, 4, 0), ts(15, 18, 0));
    let totals = aggregate(&clip_events(&parsed.events, &window));

    // ProjectA: 09:00-10:30 plus 12:45-17:00
    assert_eq!(totals["Work.ProjectA"], 5400 + 15300);
    assert_eq!(totals["Work.ProjectB"], 5400);
    assert_eq!(totals["Lunch"], 2700);
    assert_eq!(totals["Work"], 5400 + 15300 + 5400);
    // Done runs open-ended to the window close.
    assert_eq!(totals["Done"], 3600);

    let rendered = report::render(&totals, "Done");
    assert_eq!(
        rendered,
        "Lunch         : 45 minutes\n\
         Work          : 7 hours and 15 minutes\n\
         Work.ProjectA : 5 hours and 45 minutes\n\
         Work.ProjectB : 1 hour and 30 minutes"
    );
}

#[test]
fn test_partial_window_clips_both_ends() {
    let file = write_log(SAMPLE_LOG);
    let parsed = parse_timelog(file.path()).expect("parse should succeed");

    // Opens mid-ProjectA, closes mid-ProjectB.
    let window = Window::new("Midday", ts(15, 9, 45), ts(15, 11, 0));
    let totals = aggregate(&clip_events(&parsed.events, &window));

    assert_eq!(totals["Work.ProjectA"], 2700);
    assert_eq!(totals["Work.ProjectB"], 1800);
    assert_eq!(totals["Work"], 4500);
}

#[test]
fn test_window_with_no_activity() {
    let file = write_log(SAMPLE_LOG);
    let parsed = parse_timelog(file.path()).expect("parse should succeed");

    // The day before: every interval post-dates the window.
    let window = Window::new("Yesterday", ts(14, 4, 0), ts(15, 4, 0));
    assert_eq!(
        report::summarize(&parsed.events, &window, "Done"),
        report::NO_ENTRIES
    );
}

#[test]
fn test_same_events_reused_across_windows() {
    let file = write_log(SAMPLE_LOG);
    let parsed = parse_timelog(file.path()).expect("parse should succeed");

    let morning = Window::new("Morning", ts(15, 4, 0), ts(15, 12, 0));
    let afternoon = Window::new("Afternoon", ts(15, 12, 0), ts(15, 18, 0));
    let full = Window::new("Today", ts(15, 4, 0), ts(15, 18, 0));

    let part_a = aggregate(&clip_events(&parsed.events, &morning));
    let part_b = aggregate(&clip_events(&parsed.events, &afternoon));
    let whole = aggregate(&clip_events(&parsed.events, &full));

    // Adjacent half-open windows partition the day.
    for (name, total) in &whole {
        let split = part_a.get(name).unwrap_or(&0) + part_b.get(name).unwrap_or(&0);
        assert_eq!(split, *total, "split totals for {} should match", name);
    }
}

#[test]
fn test_empty_log_file() {
    let file = write_log("");
    let parsed = parse_timelog(file.path()).expect("parse should succeed");

    assert!(parsed.events.is_empty());
    let window = Window::new("Today", ts(15, 4, 0), ts(15, 18, 0));
    assert_eq!(
        report::summarize(&parsed.events, &window, "Done"),
        report::NO_ENTRIES
    );
}
