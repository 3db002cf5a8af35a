//! Cross-currency FX rate matrix.
//!
//! Quotes are accumulated in a [`FxRateMatrixBuilder`]. `build()` walks the
//! quote graph breadth-first from the first registered currency, prices
//! every currency in units of that anchor, checks each quote against the
//! resulting cross rate and caches the full n×n table.
//!
//! ```rust
//! use meridian_core::Currency;
//! use meridian_market::fx::FxRateMatrix;
//!
//! let matrix = FxRateMatrix::builder()
//!     .add_rate(Currency::EUR, Currency::USD, 1.40).unwrap()
//!     .add_rate(Currency::GBP, Currency::USD, 1.50).unwrap()
//!     .build()
//!     .unwrap();
//!
//! let eur_gbp = matrix.rate(Currency::EUR, Currency::GBP).unwrap();
//! assert!((eur_gbp - 1.40 / 1.50).abs() < 1e-12);
//! ```

use std::collections::{HashMap, VecDeque};

use meridian_core::types::{Currency, CurrencyAmount, CurrencyPair, MultiCurrencyAmount};
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};

/// Default relative tolerance when checking quotes against implied cross rates.
pub const DEFAULT_FX_TOLERANCE: f64 = 1e-8;

/// A single FX quote: 1 unit of `pair.base` buys `rate` units of `pair.counter`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    /// The quoted pair.
    pub pair: CurrencyPair,
    /// Units of counter per unit of base.
    pub rate: f64,
}

impl FxQuote {
    fn matches(&self, pair: CurrencyPair) -> bool {
        self.pair == pair || self.pair == pair.inverse()
    }
}

fn validate_rate(base: Currency, counter: Currency, rate: f64) -> MarketResult<()> {
    let valid = rate.is_finite() && rate > 0.0 && (base != counter || rate == 1.0);
    if valid {
        Ok(())
    } else {
        Err(MarketError::invalid_rate(base, counter, rate))
    }
}

/// Accumulates FX quotes for an [`FxRateMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct FxRateMatrixBuilder {
    currencies: Vec<Currency>,
    quotes: Vec<FxQuote>,
    tolerance: f64,
}

impl Default for FxRateMatrixBuilder {
    fn default() -> Self {
        Self {
            currencies: Vec::new(),
            quotes: Vec::new(),
            tolerance: DEFAULT_FX_TOLERANCE,
        }
    }
}

impl FxRateMatrixBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative tolerance used by the consistency check.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Adds a quote: 1 unit of `base` = `rate` units of `counter`.
    ///
    /// A self-quote of exactly 1 only registers the currency. Quotes that
    /// repeat a pair are kept and must agree with each other at build.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` if the rate is not finite and positive, or a
    /// self-quote is not 1.
    pub fn add_rate(mut self, base: Currency, counter: Currency, rate: f64) -> MarketResult<Self> {
        validate_rate(base, counter, rate)?;
        self.register(base);
        self.register(counter);
        if base != counter {
            self.quotes.push(FxQuote {
                pair: CurrencyPair::new(base, counter),
                rate,
            });
        }
        Ok(self)
    }

    /// Adds a quote, replacing any earlier quote on the same pair in either
    /// orientation.
    pub fn set_rate(mut self, base: Currency, counter: Currency, rate: f64) -> MarketResult<Self> {
        validate_rate(base, counter, rate)?;
        let pair = CurrencyPair::new(base, counter);
        self.quotes.retain(|quote| !quote.matches(pair));
        self.add_rate(base, counter, rate)
    }

    /// Adds every currency and quote of an existing matrix.
    pub fn merge(mut self, other: &FxRateMatrix) -> MarketResult<Self> {
        for &currency in other.currencies() {
            self.register(currency);
        }
        for quote in other.quotes() {
            self = self.add_rate(quote.pair.base, quote.pair.counter, quote.rate)?;
        }
        Ok(self)
    }

    /// Currencies registered so far, in insertion order.
    #[must_use]
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Quotes registered so far, in insertion order.
    #[must_use]
    pub fn quotes(&self) -> &[FxQuote] {
        &self.quotes
    }

    fn register(&mut self, currency: Currency) {
        if !self.currencies.contains(&currency) {
            self.currencies.push(currency);
        }
    }

    /// Resolves every cross rate and checks the quotes for consistency.
    ///
    /// # Errors
    ///
    /// - `DisconnectedCurrency` if some currency cannot be reached from the
    ///   first registered one
    /// - `InconsistentRate` if a quote differs from the implied cross rate by
    ///   more than the relative tolerance
    /// - `Config` if the tolerance is negative or not finite
    pub fn build(self) -> MarketResult<FxRateMatrix> {
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(MarketError::config(format!(
                "FX tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }

        let n = self.currencies.len();
        let index: HashMap<Currency, usize> = self
            .currencies
            .iter()
            .enumerate()
            .map(|(i, &currency)| (currency, i))
            .collect();

        // adjacency[i] holds (j, r) meaning 1 unit of i = r units of j
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for quote in &self.quotes {
            let (a, b) = (index[&quote.pair.base], index[&quote.pair.counter]);
            adjacency[a].push((b, quote.rate));
            adjacency[b].push((a, 1.0 / quote.rate));
        }

        // value[i] is the price of 1 unit of currency i in units of the anchor
        let mut value: Vec<Option<f64>> = vec![None; n];
        if n > 0 {
            value[0] = Some(1.0);
            let mut queue = VecDeque::from([0usize]);
            while let Some(i) = queue.pop_front() {
                let vi = value[i].unwrap_or(1.0);
                for &(j, rate) in &adjacency[i] {
                    if value[j].is_none() {
                        value[j] = Some(vi / rate);
                        queue.push_back(j);
                    }
                }
            }
        }

        let value: Vec<f64> = value
            .iter()
            .zip(&self.currencies)
            .map(|(v, &currency)| {
                v.ok_or_else(|| {
                    let anchor = self.currencies[0];
                    tracing::warn!(%currency, %anchor, "FX quote graph is disconnected");
                    MarketError::DisconnectedCurrency { currency, anchor }
                })
            })
            .collect::<MarketResult<_>>()?;

        for quote in &self.quotes {
            let implied = value[index[&quote.pair.base]] / value[index[&quote.pair.counter]];
            if (implied - quote.rate).abs() > self.tolerance * quote.rate {
                tracing::warn!(
                    pair = %quote.pair,
                    quoted = quote.rate,
                    implied,
                    "FX quote inconsistent with triangulated rate"
                );
                return Err(MarketError::InconsistentRate {
                    base: quote.pair.base,
                    counter: quote.pair.counter,
                    quoted: quote.rate,
                    implied,
                });
            }
        }

        let mut rates = vec![1.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    rates[i * n + j] = value[i] / value[j];
                }
            }
        }

        tracing::debug!(
            currencies = n,
            quotes = self.quotes.len(),
            "FX rate matrix built"
        );

        Ok(FxRateMatrix {
            currencies: self.currencies,
            index,
            rates,
            quotes: self.quotes,
            tolerance: self.tolerance,
        })
    }
}

/// Immutable table of spot FX rates between every pair of its currencies.
///
/// For all registered currencies `rate(a, b) * rate(b, a) == 1` and
/// `rate(a, b) * rate(b, c) == rate(a, c)` up to floating-point error.
#[derive(Debug, Clone, PartialEq)]
pub struct FxRateMatrix {
    currencies: Vec<Currency>,
    index: HashMap<Currency, usize>,
    /// Row-major n×n table, `rates[i * n + j]` = units of j per unit of i
    rates: Vec<f64>,
    quotes: Vec<FxQuote>,
    tolerance: f64,
}

impl Default for FxRateMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl FxRateMatrix {
    /// A matrix with no currencies.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            currencies: Vec::new(),
            index: HashMap::new(),
            rates: Vec::new(),
            quotes: Vec::new(),
            tolerance: DEFAULT_FX_TOLERANCE,
        }
    }

    /// Starts a builder.
    #[must_use]
    pub fn builder() -> FxRateMatrixBuilder {
        FxRateMatrixBuilder::new()
    }

    /// Builds a matrix from a single quote.
    pub fn of(base: Currency, counter: Currency, rate: f64) -> MarketResult<Self> {
        Self::builder().add_rate(base, counter, rate)?.build()
    }

    /// Relative tolerance the quotes were checked with.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns a builder holding this matrix's currencies and quotes.
    #[must_use]
    pub fn to_builder(&self) -> FxRateMatrixBuilder {
        FxRateMatrixBuilder {
            currencies: self.currencies.clone(),
            quotes: self.quotes.clone(),
            tolerance: self.tolerance,
        }
    }

    /// Units of `counter` per unit of `base`.
    ///
    /// Always 1.0 when both currencies are the same, registered or not.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if either currency is not in the matrix.
    pub fn rate(&self, base: Currency, counter: Currency) -> MarketResult<f64> {
        if base == counter {
            return Ok(1.0);
        }
        let i = self.position(base)?;
        let j = self.position(counter)?;
        Ok(self.rates[i * self.currencies.len() + j])
    }

    /// Rate for a currency pair.
    pub fn pair_rate(&self, pair: CurrencyPair) -> MarketResult<f64> {
        self.rate(pair.base, pair.counter)
    }

    /// Converts an amount from one currency to another.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> MarketResult<f64> {
        Ok(amount * self.rate(from, to)?)
    }

    /// Converts a currency amount into `to`.
    pub fn convert_amount(&self, amount: CurrencyAmount, to: Currency) -> MarketResult<CurrencyAmount> {
        Ok(CurrencyAmount::new(
            to,
            self.convert(amount.amount, amount.currency, to)?,
        ))
    }

    /// Converts and sums every amount into `to`.
    pub fn convert_total(
        &self,
        amounts: &MultiCurrencyAmount,
        to: Currency,
    ) -> MarketResult<CurrencyAmount> {
        amounts
            .iter()
            .try_fold(CurrencyAmount::zero(to), |total, amount| {
                let converted = self.convert_amount(amount, to)?;
                Ok(total.with_amount(total.amount + converted.amount))
            })
    }

    /// Registered currencies, in insertion order.
    #[must_use]
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// The quotes the matrix was built from.
    #[must_use]
    pub fn quotes(&self) -> &[FxQuote] {
        &self.quotes
    }

    /// Returns true if the currency is registered.
    #[must_use]
    pub fn contains(&self, currency: Currency) -> bool {
        self.index.contains_key(&currency)
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    fn position(&self, currency: Currency) -> MarketResult<usize> {
        self.index
            .get(&currency)
            .copied()
            .ok_or_else(|| MarketError::unknown_currency(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dataset_matrix() -> FxRateMatrix {
        FxRateMatrix::builder()
            .add_rate(Currency::EUR, Currency::USD, 1.40)
            .unwrap()
            .add_rate(Currency::KRW, Currency::USD, 1.0 / 1111.11)
            .unwrap()
            .add_rate(Currency::GBP, Currency::USD, 1.50)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_direct_and_inverse() {
        let matrix = dataset_matrix();
        assert_relative_eq!(matrix.rate(Currency::EUR, Currency::USD).unwrap(), 1.40, max_relative = 1e-12);
        assert_relative_eq!(
            matrix.rate(Currency::USD, Currency::EUR).unwrap(),
            1.0 / 1.40,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            matrix.rate(Currency::USD, Currency::KRW).unwrap(),
            1111.11,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_cross_rates() {
        let matrix = dataset_matrix();
        assert_relative_eq!(
            matrix.rate(Currency::EUR, Currency::GBP).unwrap(),
            1.40 / 1.50,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            matrix.rate(Currency::EUR, Currency::KRW).unwrap(),
            1.40 * 1111.11,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_same_currency_is_one() {
        let matrix = dataset_matrix();
        assert_eq!(matrix.rate(Currency::EUR, Currency::EUR).unwrap(), 1.0);
        assert_eq!(matrix.rate(Currency::JPY, Currency::JPY).unwrap(), 1.0);
    }

    #[test]
    fn test_unknown_currency() {
        let matrix = dataset_matrix();
        assert_eq!(
            matrix.rate(Currency::JPY, Currency::USD),
            Err(MarketError::unknown_currency(Currency::JPY))
        );
        assert_eq!(
            matrix.rate(Currency::USD, Currency::CHF),
            Err(MarketError::unknown_currency(Currency::CHF))
        );
    }

    #[test]
    fn test_invalid_rates() {
        for rate in [0.0, -1.4, f64::NAN, f64::INFINITY] {
            let err = FxRateMatrix::builder()
                .add_rate(Currency::EUR, Currency::USD, rate)
                .unwrap_err();
            assert!(matches!(err, MarketError::InvalidRate { .. }));
        }
        assert!(FxRateMatrix::builder()
            .add_rate(Currency::USD, Currency::USD, 1.1)
            .is_err());
    }

    #[test]
    fn test_self_quote_registers_currency() {
        let matrix = FxRateMatrix::builder()
            .add_rate(Currency::USD, Currency::USD, 1.0)
            .unwrap()
            .build()
            .unwrap();
        assert!(matrix.contains(Currency::USD));
        assert_eq!(matrix.len(), 1);
        assert!(matrix.quotes().is_empty());
    }

    #[test]
    fn test_disconnected() {
        let err = FxRateMatrix::builder()
            .add_rate(Currency::EUR, Currency::USD, 1.40)
            .unwrap()
            .add_rate(Currency::JPY, Currency::CHF, 0.008)
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            MarketError::DisconnectedCurrency {
                currency: Currency::JPY,
                anchor: Currency::EUR
            }
        );
    }

    #[test]
    fn test_inconsistent() {
        let err = FxRateMatrix::builder()
            .add_rate(Currency::EUR, Currency::USD, 1.40)
            .unwrap()
            .add_rate(Currency::GBP, Currency::USD, 1.50)
            .unwrap()
            .add_rate(Currency::EUR, Currency::GBP, 0.95)
            .unwrap()
            .build()
            .unwrap_err();
        match err {
            MarketError::InconsistentRate {
                base,
                counter,
                quoted,
                implied,
            } => {
                // the walk from EUR uses EUR/USD and EUR/GBP, so GBP/USD is the odd one out
                assert_eq!((base, counter), (Currency::GBP, Currency::USD));
                assert_relative_eq!(quoted, 1.50);
                assert_relative_eq!(implied, 1.40 / 0.95, max_relative = 1e-12);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_consistent_redundant_quote_accepted() {
        let matrix = FxRateMatrix::builder()
            .add_rate(Currency::EUR, Currency::USD, 1.40)
            .unwrap()
            .add_rate(Currency::GBP, Currency::USD, 1.50)
            .unwrap()
            .add_rate(Currency::EUR, Currency::GBP, 1.40 / 1.50)
            .unwrap()
            .add_rate(Currency::USD, Currency::EUR, 1.0 / 1.40)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.quotes().len(), 4);
    }

    #[test]
    fn test_tolerance_controls_check() {
        let quotes = |builder: FxRateMatrixBuilder| {
            builder
                .add_rate(Currency::EUR, Currency::USD, 1.40)
                .unwrap()
                .add_rate(Currency::USD, Currency::EUR, 1.0 / 1.4001)
                .unwrap()
        };
        assert!(quotes(FxRateMatrix::builder()).build().is_err());
        assert!(quotes(FxRateMatrix::builder().with_tolerance(1e-3)).build().is_ok());
        assert!(quotes(FxRateMatrix::builder().with_tolerance(-1.0)).build().is_err());
    }

    #[test]
    fn test_set_rate_replaces_either_orientation() {
        let matrix = dataset_matrix()
            .to_builder()
            .set_rate(Currency::USD, Currency::EUR, 1.0 / 1.45)
            .unwrap()
            .build()
            .unwrap();
        assert_relative_eq!(
            matrix.rate(Currency::EUR, Currency::USD).unwrap(),
            1.45,
            max_relative = 1e-12
        );
        assert_eq!(matrix.quotes().len(), 3);

        // the original quote would now conflict, so add_rate must fail at build
        assert!(matrix
            .to_builder()
            .add_rate(Currency::EUR, Currency::USD, 1.40)
            .unwrap()
            .build()
            .is_err());
    }

    #[test]
    fn test_merge() {
        let eur_usd = FxRateMatrix::of(Currency::EUR, Currency::USD, 1.40).unwrap();
        let merged = FxRateMatrix::builder()
            .add_rate(Currency::GBP, Currency::USD, 1.50)
            .unwrap()
            .merge(&eur_usd)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(merged.currencies(), &[Currency::GBP, Currency::USD, Currency::EUR]);
        assert_relative_eq!(
            merged.rate(Currency::GBP, Currency::EUR).unwrap(),
            1.50 / 1.40,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_empty() {
        let matrix = FxRateMatrix::builder().build().unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix, FxRateMatrix::empty());
        assert!(matrix.rate(Currency::USD, Currency::EUR).is_err());
    }

    #[test]
    fn test_conversions() {
        let matrix = dataset_matrix();
        assert_relative_eq!(
            matrix.convert(100.0, Currency::EUR, Currency::GBP).unwrap(),
            100.0 * 1.40 / 1.50,
            max_relative = 1e-12
        );

        let converted = matrix
            .convert_amount(CurrencyAmount::new(Currency::GBP, 10.0), Currency::USD)
            .unwrap();
        assert_eq!(converted.currency, Currency::USD);
        assert_relative_eq!(converted.amount, 15.0, max_relative = 1e-12);

        let bag = MultiCurrencyAmount::new()
            .plus(CurrencyAmount::new(Currency::EUR, 100.0))
            .plus(CurrencyAmount::new(Currency::USD, 60.0));
        let total = matrix.convert_total(&bag, Currency::USD).unwrap();
        assert_relative_eq!(total.amount, 200.0, max_relative = 1e-12);

        let bad = bag.plus(CurrencyAmount::new(Currency::JPY, 1.0));
        assert!(matrix.convert_total(&bad, Currency::USD).is_err());
    }

    #[test]
    fn test_pair_rate() {
        let matrix = dataset_matrix();
        let pair: CurrencyPair = "GBP/EUR".parse().unwrap();
        assert_relative_eq!(matrix.pair_rate(pair).unwrap(), 1.50 / 1.40, max_relative = 1e-12);
    }
}
