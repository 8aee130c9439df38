//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/timelog/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/timelog/` (~/.config/timelog/)
//! - State/Logs: `$XDG_STATE_HOME/timelog/` (~/.local/state/timelog/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Log file settings
    #[serde(default)]
    pub log: LogConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timelog file settings
#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Path to the timelog file, relative to the working directory unless
    /// absolute
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timelog.txt")
}

/// Report rendering settings
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Hour at which a "day" begins (periods like "today" start here, not
    /// at midnight)
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    /// Sentinel activity that closes the day and is excluded from reports
    #[serde(default = "default_closing_activity")]
    pub closing_activity: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            day_start_hour: default_day_start_hour(),
            closing_activity: default_closing_activity(),
        }
    }
}

fn default_day_start_hour() -> u32 {
    4
}

fn default_closing_activity() -> String {
    "Done".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.report.day_start_hour > 23 {
            return Err(Error::Config(format!(
                "report.day_start_hour must be 0-23, got {}",
                self.report.day_start_hour
            )));
        }
        Ok(())
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/timelog/config.toml` (~/.config/timelog/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("timelog").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/timelog/` (~/.local/state/timelog/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("timelog")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/timelog/timelog.log` (~/.local/state/timelog/timelog.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("timelog.log")
    }
}
