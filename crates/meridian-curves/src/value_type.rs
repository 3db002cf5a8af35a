//! What a curve's y-values represent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes what a curve's values represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValueType {
    /// Continuously compounded zero rate r(t), with P(t) = exp(-r t).
    #[default]
    ZeroRate,
    /// Discount factor P(t), with P(0) = 1.
    DiscountFactor,
}

impl ValueType {
    /// Converts a curve value at time `t` to a discount factor.
    #[must_use]
    pub fn to_discount_factor(&self, value: f64, t: f64) -> f64 {
        match self {
            ValueType::ZeroRate => (-value * t).exp(),
            ValueType::DiscountFactor => value,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::ZeroRate => write!(f, "ZeroRate"),
            ValueType::DiscountFactor => write!(f, "DiscountFactor"),
        }
    }
}
