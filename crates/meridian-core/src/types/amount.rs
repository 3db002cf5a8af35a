//! Monetary amounts in one or several currencies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg};

use super::Currency;

/// An amount of money in a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// The currency of the amount.
    pub currency: Currency,
    /// The amount, in major units.
    pub amount: f64,
}

impl CurrencyAmount {
    /// Creates a new amount.
    #[must_use]
    pub fn new(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, 0.0)
    }

    /// Returns a copy with the amount replaced.
    #[must_use]
    pub fn with_amount(&self, amount: f64) -> Self {
        Self::new(self.currency, amount)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.*}",
            self.currency,
            self.currency.decimal_places() as usize,
            self.amount
        )
    }
}

impl Neg for CurrencyAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with_amount(-self.amount)
    }
}

impl Mul<f64> for CurrencyAmount {
    type Output = Self;

    fn mul(self, factor: f64) -> Self::Output {
        self.with_amount(self.amount * factor)
    }
}

/// A bag of amounts keyed by currency, at most one entry per currency.
///
/// Entries are kept in currency order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiCurrencyAmount {
    amounts: BTreeMap<Currency, f64>,
}

impl MultiCurrencyAmount {
    /// Creates an empty amount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount, summing with any existing entry in the same currency.
    #[must_use]
    pub fn plus(mut self, amount: CurrencyAmount) -> Self {
        *self.amounts.entry(amount.currency).or_insert(0.0) += amount.amount;
        self
    }

    /// Returns the amount held in the given currency, if any.
    #[must_use]
    pub fn get(&self, currency: Currency) -> Option<CurrencyAmount> {
        self.amounts
            .get(&currency)
            .map(|&amount| CurrencyAmount::new(currency, amount))
    }

    /// Returns the currencies present.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.amounts.keys().copied()
    }

    /// Iterates over the amounts in currency order.
    pub fn iter(&self) -> impl Iterator<Item = CurrencyAmount> + '_ {
        self.amounts
            .iter()
            .map(|(&currency, &amount)| CurrencyAmount::new(currency, amount))
    }

    /// Returns the number of currencies present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no currency is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl Add<CurrencyAmount> for MultiCurrencyAmount {
    type Output = Self;

    fn add(self, rhs: CurrencyAmount) -> Self::Output {
        self.plus(rhs)
    }
}

impl FromIterator<CurrencyAmount> for MultiCurrencyAmount {
    fn from_iter<I: IntoIterator<Item = CurrencyAmount>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::plus)
    }
}
