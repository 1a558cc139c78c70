//! CLI error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use MM/DD/YYYY or YYYY-MM-DD.")]
    InvalidDate(String),

    /// Principal could not be parsed or is negative.
    #[error("Invalid principal: {0}. Must be a non-negative amount.")]
    InvalidPrincipal(String),

    /// End date before start date.
    #[error("End date {end} is before start date {start}.")]
    InvertedPeriod {
        /// Start date as entered.
        start: String,
        /// End date as entered.
        end: String,
    },

    /// Series not present in the catalog.
    #[error("Unknown rate series: {0}")]
    UnknownSeries(String),

    /// Output format has no meaning for the command.
    #[error("Output format '{0}' is not available for this command")]
    UnsupportedFormat(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates an invalid principal error from a parsed amount.
    pub fn negative_principal(value: Decimal) -> Self {
        Self::InvalidPrincipal(value.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
