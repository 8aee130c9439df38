//! timelog - aggregate activity time from a plain-text log
//!
//! Reads a log of "activity changed at time T" lines, clips each activity's
//! active span to one or more requested time windows, rolls durations up
//! through dotted activity namespaces, and prints an aligned summary per
//! window.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use timelog_core::{parse_timelog, report, Config, Lookback, Period};

#[derive(Parser)]
#[command(name = "timelog")]
#[command(about = "Aggregate activity data with flexible time filtering")]
#[command(version)]
struct Args {
    /// Path to the timelog file (default: from config, or timelog.txt)
    file: Option<PathBuf>,

    /// Aggregate data for today
    #[arg(short = 'd', long)]
    today: bool,

    /// Aggregate data for this week
    #[arg(short, long)]
    week: bool,

    /// Aggregate data for this month
    #[arg(short, long)]
    month: bool,

    /// Aggregate data for this year
    #[arg(short, long)]
    year: bool,

    /// Aggregate data for the last period (e.g. '7d', '2w', '3m')
    #[arg(long, value_name = "TIME")]
    last: Option<Lookback>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    to: Option<NaiveDate>,

    /// Show quick summary for today, this week, and this month
    #[arg(short, long)]
    quick: bool,
}

impl Args {
    /// Translate CLI flags into the ordered list of periods to report.
    ///
    /// With no period flags at all, reports today.
    fn periods(&self) -> Vec<Period> {
        let mut periods = Vec::new();

        if self.today || self.quick {
            periods.push(Period::Today);
        }
        if self.week || self.quick {
            periods.push(Period::ThisWeek);
        }
        if self.month || self.quick {
            periods.push(Period::ThisMonth);
        }
        if self.year {
            periods.push(Period::ThisYear);
        }
        if let Some(lookback) = self.last {
            periods.push(Period::Last(lookback));
        }
        if self.from.is_some() || self.to.is_some() {
            periods.push(Period::Range {
                from: self.from,
                to: self.to,
            });
        }

        if periods.is_empty() {
            periods.push(Period::Today);
        }

        periods
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging (to file, the console is for report output)
    let _log_guard =
        timelog_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let log_file = args.file.clone().unwrap_or_else(|| config.log.file.clone());

    tracing::debug!(path = %log_file.display(), "Reading timelog");

    let parsed = parse_timelog(&log_file)
        .with_context(|| format!("failed to read timelog {}", log_file.display()))?;

    for warning in &parsed.warnings {
        eprintln!("Warning: {}", warning);
    }

    let now = Local::now().naive_local();
    let periods = args.periods();

    for (i, period) in periods.iter().enumerate() {
        let window = period.resolve(now, config.report.day_start_hour);

        println!("{}", window.label);
        println!("---------------------------------------------");
        println!(
            "{}",
            report::summarize(&parsed.events, &window, &config.report.closing_activity)
        );
        if i < periods.len() - 1 {
            println!();
        }
    }

    Ok(())
}
