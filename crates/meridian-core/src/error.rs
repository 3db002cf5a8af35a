//! Error types for core value types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing or parsing core value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A tenor string or value could not be interpreted.
    #[error("Invalid tenor: {reason}")]
    InvalidTenor {
        /// Description of the problem.
        reason: String,
    },

    /// A currency code is not a supported ISO 4217 code.
    #[error("Unknown currency code: '{code}'")]
    UnknownCurrencyCode {
        /// The code that failed to parse.
        code: String,
    },

    /// A currency pair string could not be interpreted.
    #[error("Invalid currency pair: {reason}")]
    InvalidCurrencyPair {
        /// Description of the problem.
        reason: String,
    },

    /// Day count convention name not recognised.
    #[error("Unknown day count convention: '{name}'")]
    DayCountParse {
        /// The name that failed to parse.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            reason: reason.into(),
        }
    }

    /// Creates an unknown currency code error.
    #[must_use]
    pub fn unknown_currency_code(code: impl Into<String>) -> Self {
        Self::UnknownCurrencyCode { code: code.into() }
    }

    /// Creates an invalid currency pair error.
    #[must_use]
    pub fn invalid_currency_pair(reason: impl Into<String>) -> Self {
        Self::InvalidCurrencyPair {
            reason: reason.into(),
        }
    }
}
