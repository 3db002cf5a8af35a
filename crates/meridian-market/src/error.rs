//! Error types for market data construction and queries.

use meridian_core::types::{Currency, Date};
use meridian_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for market data operations.
pub type MarketResult<T> = Result<T, MarketError>;

/// Errors raised by the FX matrix, the provider and their builders.
///
/// FX matrix errors surface when the matrix is built; currency and date
/// errors surface at query time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// FX quote is not a finite positive number, or a self-quote is not 1.
    #[error("Invalid FX rate {rate} for {base}/{counter}")]
    InvalidRate {
        /// Base currency of the quote.
        base: Currency,
        /// Counter currency of the quote.
        counter: Currency,
        /// The rejected rate.
        rate: f64,
    },

    /// A currency cannot be reached from the others through FX quotes.
    #[error("Currency {currency} is not connected to {anchor} by any chain of FX quotes")]
    DisconnectedCurrency {
        /// The unreachable currency.
        currency: Currency,
        /// The currency the walk started from.
        anchor: Currency,
    },

    /// A quote disagrees with the rate implied by the other quotes.
    #[error("Inconsistent FX rate for {base}/{counter}: quoted {quoted}, implied {implied}")]
    InconsistentRate {
        /// Base currency of the quote.
        base: Currency,
        /// Counter currency of the quote.
        counter: Currency,
        /// The quoted rate.
        quoted: f64,
        /// The rate implied by the rest of the quote graph.
        implied: f64,
    },

    /// No discount curve registered for the currency.
    #[error("No discount curve for {currency}")]
    NoCurve {
        /// The requested currency.
        currency: Currency,
    },

    /// Currency is not part of the FX matrix.
    #[error("Unknown currency {currency} in FX matrix")]
    UnknownCurrency {
        /// The requested currency.
        currency: Currency,
    },

    /// Date falls before the valuation date.
    #[error("Date {date} is before valuation date {valuation_date}")]
    InvalidDate {
        /// The requested date.
        date: Date,
        /// The provider's valuation date.
        valuation_date: Date,
    },

    /// No historical fixing on a past date.
    #[error("Missing fixing for {index} on {date}")]
    MissingFixing {
        /// Name of the index.
        index: String,
        /// The fixing date.
        date: Date,
    },

    /// A fixing series has duplicate dates or non-finite values.
    #[error("Invalid time series: {reason}")]
    InvalidTimeSeries {
        /// Description of the problem.
        reason: String,
    },

    /// A curve rejected its nodes or a query.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Configuration could not be parsed or is out of range.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },
}

impl MarketError {
    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(base: Currency, counter: Currency, rate: f64) -> Self {
        Self::InvalidRate {
            base,
            counter,
            rate,
        }
    }

    /// Creates a no-curve error.
    #[must_use]
    pub fn no_curve(currency: Currency) -> Self {
        Self::NoCurve { currency }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(currency: Currency) -> Self {
        Self::UnknownCurrency { currency }
    }

    /// Creates an invalid time series error.
    #[must_use]
    pub fn invalid_time_series(reason: impl Into<String>) -> Self {
        Self::InvalidTimeSeries {
            reason: reason.into(),
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
