//! Ordered currency pair (e.g., EUR/USD).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Currency;
use crate::error::CoreError;

/// An ordered pair of currencies.
///
/// For EUR/USD = 1.40, base=EUR, counter=USD, meaning 1 EUR = 1.40 USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base currency (the currency being priced).
    pub base: Currency,
    /// Counter currency (the currency the price is expressed in).
    pub counter: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    #[must_use]
    pub fn new(base: Currency, counter: Currency) -> Self {
        Self { base, counter }
    }

    /// Returns the inverse pair (swaps base and counter).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.counter, self.base)
    }

    /// Returns true if both sides are the same currency.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.base == self.counter
    }

    /// Returns true if the pair involves the given currency on either side.
    #[must_use]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base.code(), self.counter.code())
    }
}

impl FromStr for CurrencyPair {
    type Err = CoreError;

    /// Parses "EUR/USD" or "EURUSD".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (base, counter) = match s.split_once('/') {
            Some(parts) => parts,
            None if s.len() == 6 && s.is_ascii() => s.split_at(3),
            None => {
                return Err(CoreError::invalid_currency_pair(format!(
                    "expected 'AAA/BBB', got '{s}'"
                )))
            }
        };
        Ok(Self::new(base.parse()?, counter.parse()?))
    }
}
