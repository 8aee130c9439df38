//! Error types for timelog-core

use thiserror::Error;

/// Main error type for the timelog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown unit in a relative lookback ("7d", "2w", "3m")
    #[error("invalid time unit '{0}': use 'd' for days, 'w' for weeks, or 'm' for months")]
    InvalidUnit(String),

    /// Lookback string that is not of the form `<number><unit>`
    #[error("invalid lookback '{0}': expected a number followed by 'd', 'w', or 'm'")]
    InvalidLookback(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for timelog-core
pub type Result<T> = std::result::Result<T, Error>;
