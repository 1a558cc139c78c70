//! Error types for CaseFlow.
//!
//! This module defines the error types used throughout the core crate.
//! Query-time "no applicable rate" is not an error: lookups return `Option`
//! and accruals return [`Accrual::Unresolved`](crate::accrual::Accrual).

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for CaseFlow operations.
pub type CaseflowResult<T> = Result<T, CaseflowError>;

/// The main error type for CaseFlow operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseflowError {
    /// A rate was appended out of chronological order.
    #[error("Rate effective date {date} must be after last date {last} in series {series}")]
    OrderingViolation {
        /// Series the append was attempted on.
        series: String,
        /// Effective date of the rejected record.
        date: Date,
        /// Effective date of the last accepted record.
        last: Date,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A calculation left the range of `Decimal`.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl CaseflowError {
    /// Creates an ordering violation error.
    #[must_use]
    pub fn ordering_violation(series: impl Into<String>, date: Date, last: Date) -> Self {
        Self::OrderingViolation {
            series: series.into(),
            date,
            last,
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
