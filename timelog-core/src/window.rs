//! Window resolution
//!
//! Turns user intent ("today", "last 7d", an explicit date range) into
//! concrete labeled `[start, end)` windows for the clipping engine.
//!
//! Day-based periods begin at a configurable day-start hour (04:00 by
//! default) rather than midnight, so late-night sessions count toward the
//! day they belong to. Weeks start on Monday.

use crate::error::{Error, Result};
use crate::types::Window;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

/// Unit of a relative lookback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackUnit {
    Days,
    Weeks,
    /// Approximate: 30 days
    Months,
}

impl LookbackUnit {
    pub fn as_char(&self) -> char {
        match self {
            LookbackUnit::Days => 'd',
            LookbackUnit::Weeks => 'w',
            LookbackUnit::Months => 'm',
        }
    }
}

/// A relative lookback such as `7d`, `2w`, or `3m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookback {
    pub value: u32,
    pub unit: LookbackUnit,
}

impl Lookback {
    /// The span this lookback covers, counting back from "now".
    pub fn to_duration(&self) -> Duration {
        let value = i64::from(self.value);
        match self.unit {
            LookbackUnit::Days => Duration::days(value),
            LookbackUnit::Weeks => Duration::weeks(value),
            LookbackUnit::Months => Duration::days(value * 30),
        }
    }
}

impl FromStr for Lookback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (value_str, unit_str) = s.split_at(s.len().saturating_sub(1));

        let unit = match unit_str {
            "d" => LookbackUnit::Days,
            "w" => LookbackUnit::Weeks,
            "m" => LookbackUnit::Months,
            _ if value_str.is_empty() => return Err(Error::InvalidLookback(s.to_string())),
            _ => return Err(Error::InvalidUnit(unit_str.to_string())),
        };

        let value = value_str
            .parse::<u32>()
            .map_err(|_| Error::InvalidLookback(s.to_string()))?;

        Ok(Lookback { value, unit })
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_char())
    }
}

/// A user-requested reporting period, resolved against "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    Last(Lookback),
    /// Explicit date range; `from` defaults to the beginning of time and
    /// `to` to now. Dates are taken at midnight.
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Period {
    /// Resolve this period into a concrete window ending at (or bounded by)
    /// `now`.
    pub fn resolve(&self, now: NaiveDateTime, day_start_hour: u32) -> Window {
        let day_start = |date: NaiveDate| -> NaiveDateTime {
            date.and_time(NaiveTime::from_hms_opt(day_start_hour, 0, 0).unwrap_or(NaiveTime::MIN))
        };

        match self {
            Period::Today => Window::new("Today", day_start(now.date()), now),
            Period::ThisWeek => {
                let monday = now.date()
                    - Duration::days(i64::from(now.weekday().num_days_from_monday()));
                Window::new("This week", day_start(monday), now)
            }
            Period::ThisMonth => {
                let first = now.date().with_day(1).unwrap_or(now.date());
                Window::new("This month", day_start(first), now)
            }
            Period::ThisYear => {
                let first = NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap_or(now.date());
                Window::new("This year", day_start(first), now)
            }
            Period::Last(lookback) => Window::new(
                format!("Last {}", lookback),
                now - lookback.to_duration(),
                now,
            ),
            Period::Range { from, to } => {
                let start = from
                    .map(|d| d.and_time(NaiveTime::MIN))
                    .unwrap_or(NaiveDateTime::MIN);
                let end = to.map(|d| d.and_time(NaiveTime::MIN)).unwrap_or(now);
                Window::new(format!("{} to {}", start.date(), end.date()), start, end)
            }
        }
    }
}
