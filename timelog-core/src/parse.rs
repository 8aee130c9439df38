//! Timelog file parser
//!
//! Parses plain-text logs of the shape
//!
//! ```text
//! 2024-03-15 09:00:00 Work.ProjectA
//! 2024-03-15 10:30:00 Work.ProjectB fixing the importer
//! 2024-03-15 12:00:00 Done
//! ```
//!
//! The first two whitespace-separated fields are the timestamp; everything
//! after them is the activity name (spaces allowed).
//!
//! # Error Handling
//!
//! The parser is resilient: lines with too few fields or an unparsable
//! timestamp are logged as warnings, recorded on [`ParsedLog::warnings`],
//! and skipped. Only I/O failures are fatal.
//!
//! Events are returned in file order. The clipping engine requires
//! non-decreasing timestamps; the parser does not sort or verify.

use crate::error::Result;
use crate::types::ActivityEvent;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of parsing a timelog file.
#[derive(Debug, Default)]
pub struct ParsedLog {
    /// Events in file order
    pub events: Vec<ActivityEvent>,
    /// Per-line problems encountered while parsing (non-fatal)
    pub warnings: Vec<String>,
}

/// Parse a timelog file into an ordered event sequence.
pub fn parse_timelog(path: &Path) -> Result<ParsedLog> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut result = ParsedLog::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_line(trimmed) {
            Some(event) => result.events.push(event),
            None => {
                let warning = format!("line {}: skipping invalid line: {}", line_no + 1, trimmed);
                tracing::warn!(path = %path.display(), "{}", warning);
                result.warnings.push(warning);
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        events = result.events.len(),
        warnings = result.warnings.len(),
        "Parsed timelog"
    );

    Ok(result)
}

/// Parse one log line, or `None` if it is malformed.
fn parse_line(line: &str) -> Option<ActivityEvent> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }

    let timestamp =
        NaiveDateTime::parse_from_str(&format!("{} {}", parts[0], parts[1]), TIMESTAMP_FORMAT)
            .ok()?;

    Some(ActivityEvent::new(timestamp, parts[2..].join(" ")))
}
