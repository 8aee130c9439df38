//! # timelog-core
//!
//! Core library for timelog - a plain-text activity time tracker.
//!
//! This library provides:
//! - Domain types for activity events, intervals, and query windows
//! - The interval-clipping and hierarchical-rollup engine
//! - Log file parsing with per-line error tolerance
//! - Window resolution for named and relative time periods
//! - Report formatting, configuration, and logging infrastructure
//!
//! ## Architecture
//!
//! A query flows through four stages:
//! - **Parse:** log lines become ordered [`ActivityEvent`]s
//! - **Clip:** each event's active interval is restricted to the query window
//! - **Roll up:** clipped durations are credited to every level of the
//!   activity's dotted name
//! - **Render:** totals become an aligned text report
//!
//! ## Example
//!
//! ```rust,no_run
//! use timelog_core::{parse_timelog, Period, report};
//! use chrono::Local;
//!
//! let log = parse_timelog("timelog.txt".as_ref()).expect("failed to read log");
//! let window = Period::Today.resolve(Local::now().naive_local(), 4);
//! let summary = report::summarize(&log.events, &window, "Done");
//! println!("{}", summary);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use parse::{parse_timelog, ParsedLog};
pub use types::*;
pub use window::{Lookback, LookbackUnit, Period};

// Public modules
pub mod clip;
pub mod config;
pub mod error;
pub mod logging;
pub mod parse;
pub mod report;
pub mod rollup;
pub mod types;
pub mod window;
