//! Strike coordinate of a volatility surface node.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strike expressed in one of the usual surface conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strike {
    /// Absolute strike.
    Simple(Decimal),
    /// Option delta.
    Delta(Decimal),
    /// Strike divided by forward.
    Moneyness(Decimal),
    /// Log of strike divided by forward.
    LogMoneyness(Decimal),
}

impl Strike {
    /// The strike value, whatever its convention.
    #[must_use]
    pub fn value(&self) -> Decimal {
        match self {
            Strike::Simple(v) | Strike::Delta(v) | Strike::Moneyness(v) | Strike::LogMoneyness(v) => {
                *v
            }
        }
    }

    /// Label such as `Strike=1.5` or `Delta=0.25`.
    #[must_use]
    pub fn label(&self) -> String {
        let prefix = match self {
            Strike::Simple(_) => "Strike",
            Strike::Delta(_) => "Delta",
            Strike::Moneyness(_) => "Moneyness",
            Strike::LogMoneyness(_) => "LogMoneyness",
        };
        format!("{prefix}={}", self.value().normalize())
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
