//! Immutable market-data provider.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::{Currency, CurrencyPair, Date};
use meridian_curves::{Curve, CurveError, CurveRef};

use crate::config::ProviderConfig;
use crate::error::{MarketError, MarketResult};
use crate::fx::{FxRateMatrix, FxRateMatrixBuilder};
use crate::index::{FxIndex, IndexId};
use crate::timeseries::DateSeries;

static EMPTY_SERIES: DateSeries = DateSeries::empty();

/// Furthest `zero_rate` looks ahead for a day that accrues curve time.
const ZERO_RATE_MAX_STEP_DAYS: i64 = 7;

/// Market data frozen on a valuation date.
///
/// Holds one discount curve per currency, an [`FxRateMatrix`] and fixing
/// series. Built once through [`MarketDataProviderBuilder`] and never
/// mutated; scenarios are produced with [`to_builder`](Self::to_builder).
/// Cloning is cheap since curves are shared.
///
/// Currencies in the FX matrix need not have curves, and curve currencies
/// need not be in the matrix.
#[derive(Debug, Clone)]
pub struct MarketDataProvider {
    valuation_date: Date,
    day_count: DayCountConvention,
    discount_curves: BTreeMap<Currency, CurveRef>,
    fx_matrix: FxRateMatrix,
    time_series: HashMap<IndexId, DateSeries>,
    config: ProviderConfig,
}

impl MarketDataProvider {
    /// Creates a builder for the given valuation date.
    #[must_use]
    pub fn builder(valuation_date: Date) -> MarketDataProviderBuilder {
        MarketDataProviderBuilder::new(valuation_date)
    }

    /// Returns a builder pre-filled with this provider's contents.
    #[must_use]
    pub fn to_builder(&self) -> MarketDataProviderBuilder {
        MarketDataProviderBuilder {
            valuation_date: self.valuation_date,
            day_count: self.day_count,
            discount_curves: self.discount_curves.clone(),
            fx_matrix: Some(self.fx_matrix.clone()),
            fx_overrides: Vec::new(),
            time_series: self.time_series.clone(),
            config: self.config,
        }
    }

    /// Returns a copy with the discount curve for `currency` added or replaced.
    #[must_use]
    pub fn with_discount_curve(&self, currency: Currency, curve: CurveRef) -> Self {
        let mut provider = self.clone();
        provider.discount_curves.insert(currency, curve);
        provider
    }

    /// The valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// The day count used for curves that do not fix their own.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// The provider configuration.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The FX matrix.
    #[must_use]
    pub fn fx_matrix(&self) -> &FxRateMatrix {
        &self.fx_matrix
    }

    /// Currencies with a discount curve, in `Currency` declaration order.
    #[must_use]
    pub fn discount_currencies(&self) -> Vec<Currency> {
        self.discount_curves.keys().copied().collect()
    }

    /// The discount curve for a currency.
    ///
    /// # Errors
    ///
    /// Returns `NoCurve` if none is registered.
    pub fn curve(&self, currency: Currency) -> MarketResult<&CurveRef> {
        self.discount_curves
            .get(&currency)
            .ok_or_else(|| MarketError::no_curve(currency))
    }

    /// Year fraction from the valuation date under the provider's day count.
    #[must_use]
    pub fn year_fraction(&self, date: Date) -> f64 {
        self.day_count.year_fraction_f64(self.valuation_date, date)
    }

    /// Maps a date onto a curve's time axis.
    fn curve_time(&self, curve: &dyn Curve, date: Date) -> MarketResult<f64> {
        if date < self.valuation_date && !self.config.allow_negative_periods {
            return Err(MarketError::InvalidDate {
                date,
                valuation_date: self.valuation_date,
            });
        }
        let day_count = curve.day_count().unwrap_or(self.day_count);
        Ok(day_count.year_fraction_f64(self.valuation_date, date))
    }

    /// Discount factor for `currency` from the valuation date to `date`.
    ///
    /// The curve's own day count is used when it has one, otherwise the
    /// provider's.
    ///
    /// # Errors
    ///
    /// - `NoCurve` if no curve is registered for the currency
    /// - `InvalidDate` if `date` is before the valuation date and negative
    ///   periods are not allowed
    /// - `Curve` if the curve cannot produce a finite positive value
    pub fn discount_factor(&self, currency: Currency, date: Date) -> MarketResult<f64> {
        let curve = self.curve(currency)?;
        let t = self.curve_time(curve.as_ref(), date)?;
        Ok(curve.discount_factor(t)?)
    }

    /// Continuously compounded zero rate implied by the discount factor.
    ///
    /// Where `date` sits at zero curve time (the valuation date, or a 31st
    /// under 30/360 counts) the rate up to the next day that accrues is
    /// returned.
    ///
    /// # Errors
    ///
    /// As [`discount_factor`](Self::discount_factor). `InvalidDate` if no
    /// day within a week of `date` accrues time.
    pub fn zero_rate(&self, currency: Currency, date: Date) -> MarketResult<f64> {
        let curve = self.curve(currency)?;
        let mut t = self.curve_time(curve.as_ref(), date)?;
        let mut accrual_date = date;
        while t == 0.0 {
            accrual_date = accrual_date.add_days(1);
            if accrual_date.days_between(&date).abs() > ZERO_RATE_MAX_STEP_DAYS {
                return Err(MarketError::InvalidDate {
                    date,
                    valuation_date: self.valuation_date,
                });
            }
            t = self.curve_time(curve.as_ref(), accrual_date)?;
        }

        let rate = -curve.discount_factor(t)?.ln() / t;
        if rate.is_finite() {
            Ok(rate)
        } else {
            Err(CurveError::invalid_value(format!(
                "zero rate for {currency} at t = {t} is not finite"
            ))
            .into())
        }
    }

    /// Spot rate: units of `counter` per unit of `base`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if either currency is not in the matrix.
    pub fn fx_rate(&self, base: Currency, counter: Currency) -> MarketResult<f64> {
        self.fx_matrix.rate(base, counter)
    }

    /// Converts an amount at spot.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> MarketResult<f64> {
        self.fx_matrix.convert(amount, from, to)
    }

    /// Outright forward rate for `pair` on `date` by covered interest parity:
    /// `spot × DF_base / DF_counter`.
    pub fn fx_forward_rate(&self, pair: CurrencyPair, date: Date) -> MarketResult<f64> {
        let spot = self.fx_rate(pair.base, pair.counter)?;
        if pair.is_identity() {
            return Ok(spot);
        }
        let df_base = self.discount_factor(pair.base, date)?;
        let df_counter = self.discount_factor(pair.counter, date)?;
        Ok(spot * df_base / df_counter)
    }

    /// Rate of an FX index for a fixing date.
    ///
    /// Past dates use the stored fixing. On the valuation date the fixing is
    /// used if present, spot otherwise. Future dates use the forward rate.
    ///
    /// # Errors
    ///
    /// Returns `MissingFixing` for a past date with no stored fixing.
    pub fn fx_index_rate(&self, index: &FxIndex, fixing_date: Date) -> MarketResult<f64> {
        let fixings = self.time_series(index.id());
        if fixing_date < self.valuation_date {
            return fixings
                .get(fixing_date)
                .ok_or_else(|| MarketError::MissingFixing {
                    index: index.id().to_string(),
                    date: fixing_date,
                });
        }
        if fixing_date == self.valuation_date {
            if let Some(fixing) = fixings.get(fixing_date) {
                return Ok(fixing);
            }
            return self.fx_rate(index.pair().base, index.pair().counter);
        }
        self.fx_forward_rate(index.pair(), fixing_date)
    }

    /// Fixing series for an index; empty if none is registered.
    #[must_use]
    pub fn time_series(&self, index: &IndexId) -> &DateSeries {
        self.time_series.get(index).unwrap_or(&EMPTY_SERIES)
    }

    /// Indices with a registered series.
    #[must_use]
    pub fn time_series_indices(&self) -> Vec<&IndexId> {
        let mut ids: Vec<&IndexId> = self.time_series.keys().collect();
        ids.sort();
        ids
    }
}

/// Builder for [`MarketDataProvider`].
#[derive(Debug, Clone)]
pub struct MarketDataProviderBuilder {
    valuation_date: Date,
    day_count: DayCountConvention,
    discount_curves: BTreeMap<Currency, CurveRef>,
    fx_matrix: Option<FxRateMatrix>,
    fx_overrides: Vec<(Currency, Currency, f64)>,
    time_series: HashMap<IndexId, DateSeries>,
    config: ProviderConfig,
}

impl MarketDataProviderBuilder {
    /// Creates an empty builder. The default day count is ACT/360.
    #[must_use]
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            day_count: DayCountConvention::Act360,
            discount_curves: BTreeMap::new(),
            fx_matrix: None,
            fx_overrides: Vec::new(),
            time_series: HashMap::new(),
            config: ProviderConfig::default(),
        }
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn valuation_date(mut self, valuation_date: Date) -> Self {
        self.valuation_date = valuation_date;
        self
    }

    /// Sets the default day count.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds or replaces the discount curve for a currency.
    #[must_use]
    pub fn discount_curve(mut self, currency: Currency, curve: CurveRef) -> Self {
        self.discount_curves.insert(currency, curve);
        self
    }

    /// Adds or replaces the discount curve for a currency from an owned curve.
    #[must_use]
    pub fn discount_curve_from<C: Curve + 'static>(self, currency: Currency, curve: C) -> Self {
        self.discount_curve(currency, Arc::new(curve))
    }

    /// Sets a prebuilt FX matrix.
    ///
    /// Its quotes are checked again at `build()` when its tolerance differs
    /// from the configured `fx_tolerance`.
    #[must_use]
    pub fn fx_matrix(mut self, matrix: FxRateMatrix) -> Self {
        self.fx_matrix = Some(matrix);
        self
    }

    /// Sets an FX quote, replacing any quote on the same pair.
    ///
    /// Quotes are validated and triangulated in `build()`.
    #[must_use]
    pub fn fx_rate(mut self, base: Currency, counter: Currency, rate: f64) -> Self {
        self.fx_overrides.push((base, counter, rate));
        self
    }

    /// Adds or replaces the fixing series for an index.
    #[must_use]
    pub fn time_series(mut self, index: impl Into<IndexId>, series: DateSeries) -> Self {
        self.time_series.insert(index.into(), series);
        self
    }

    fn build_fx_matrix(
        fx_matrix: Option<FxRateMatrix>,
        overrides: Vec<(Currency, Currency, f64)>,
        tolerance: f64,
    ) -> MarketResult<FxRateMatrix> {
        let untouched = fx_matrix
            .as_ref()
            .map_or(true, |matrix| matrix.tolerance() == tolerance);
        if overrides.is_empty() && untouched {
            return Ok(fx_matrix.unwrap_or_default());
        }
        let builder = fx_matrix
            .as_ref()
            .map_or_else(FxRateMatrixBuilder::new, FxRateMatrix::to_builder)
            .with_tolerance(tolerance);
        overrides
            .into_iter()
            .try_fold(builder, |builder, (base, counter, rate)| {
                builder.set_rate(base, counter, rate)
            })?
            .build()
    }

    /// Builds the provider.
    ///
    /// # Errors
    ///
    /// Returns `Config` for an unusable configuration, or any FX matrix
    /// error raised while resolving quotes under the configured tolerance.
    pub fn build(self) -> MarketResult<MarketDataProvider> {
        self.config.validate()?;
        let fx_matrix =
            Self::build_fx_matrix(self.fx_matrix, self.fx_overrides, self.config.fx_tolerance)?;

        tracing::debug!(
            valuation_date = %self.valuation_date,
            curves = self.discount_curves.len(),
            fx_currencies = fx_matrix.len(),
            time_series = self.time_series.len(),
            "Market data provider built"
        );

        Ok(MarketDataProvider {
            valuation_date: self.valuation_date,
            day_count: self.day_count,
            discount_curves: self.discount_curves,
            fx_matrix,
            time_series: self.time_series,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meridian_curves::{ConstantCurve, InterpolatedNodalCurve, InterpolationMethod, ValueType};

    fn valuation() -> Date {
        Date::from_ymd(2011, 11, 10).unwrap()
    }

    fn flat(name: &str, rate: f64) -> CurveRef {
        Arc::new(ConstantCurve::zero_rate(name, rate).unwrap())
    }

    fn provider() -> MarketDataProvider {
        MarketDataProvider::builder(valuation())
            .discount_curve(Currency::USD, flat("USD", 0.01))
            .discount_curve(Currency::EUR, flat("EUR", 0.02))
            .fx_rate(Currency::EUR, Currency::USD, 1.40)
            .build()
            .unwrap()
    }

    #[test]
    fn test_discount_factor_uses_default_day_count() {
        let provider = provider();
        let date = valuation().add_days(180);
        assert_relative_eq!(
            provider.discount_factor(Currency::USD, date).unwrap(),
            (-0.01 * 0.5_f64).exp(),
            epsilon = 1e-14
        );
        assert_eq!(provider.discount_factor(Currency::USD, valuation()).unwrap(), 1.0);
    }

    #[test]
    fn test_curve_day_count_overrides_default() {
        let curve = ConstantCurve::zero_rate("USD 365", 0.01)
            .unwrap()
            .with_day_count(DayCountConvention::Act365Fixed);
        let provider = provider().with_discount_curve(Currency::USD, Arc::new(curve));
        let date = valuation().add_days(365);
        assert_relative_eq!(
            provider.discount_factor(Currency::USD, date).unwrap(),
            (-0.01_f64).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_no_curve() {
        assert_eq!(
            provider().discount_factor(Currency::GBP, valuation()),
            Err(MarketError::no_curve(Currency::GBP))
        );
    }

    #[test]
    fn test_date_before_valuation() {
        let before = valuation().add_days(-1);
        assert_eq!(
            provider().discount_factor(Currency::USD, before),
            Err(MarketError::InvalidDate {
                date: before,
                valuation_date: valuation()
            })
        );

        let lenient = provider()
            .to_builder()
            .config(ProviderConfig {
                allow_negative_periods: true,
                ..ProviderConfig::default()
            })
            .build()
            .unwrap();
        let df = lenient.discount_factor(Currency::USD, before).unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn test_zero_rate() {
        let provider = provider();
        assert_relative_eq!(
            provider.zero_rate(Currency::EUR, valuation().add_days(90)).unwrap(),
            0.02,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            provider.zero_rate(Currency::EUR, valuation()).unwrap(),
            0.02,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_skips_days_without_accrual() {
        let valuation = Date::from_ymd(2011, 10, 30).unwrap();
        let provider = MarketDataProvider::builder(valuation)
            .day_count(DayCountConvention::Thirty360E)
            .discount_curve(Currency::USD, flat("USD", 0.01))
            .build()
            .unwrap();

        // 30 Oct to 31 Oct accrues nothing under 30E/360; 1 Nov accrues a day
        for date in [valuation, valuation.add_days(1)] {
            let rate = provider.zero_rate(Currency::USD, date).unwrap();
            assert!(rate.is_finite());
            assert_relative_eq!(rate, 0.01, epsilon = 1e-12);
        }
        assert_relative_eq!(
            provider.zero_rate(Currency::USD, valuation.add_days(2)).unwrap(),
            0.01,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_prebuilt_matrix_checked_with_configured_tolerance() {
        let loose = FxRateMatrix::builder()
            .with_tolerance(0.05)
            .add_rate(Currency::EUR, Currency::USD, 1.40)
            .unwrap()
            .add_rate(Currency::GBP, Currency::USD, 1.50)
            .unwrap()
            .add_rate(Currency::EUR, Currency::GBP, 0.94)
            .unwrap()
            .build()
            .unwrap();

        let strict = MarketDataProvider::builder(valuation())
            .fx_matrix(loose.clone())
            .build();
        assert!(matches!(strict, Err(MarketError::InconsistentRate { .. })));

        let relaxed = MarketDataProvider::builder(valuation())
            .config(ProviderConfig {
                fx_tolerance: 0.05,
                ..ProviderConfig::default()
            })
            .fx_matrix(loose)
            .build()
            .unwrap();
        assert_relative_eq!(
            relaxed.fx_rate(Currency::EUR, Currency::USD).unwrap(),
            1.40,
            max_relative = 1e-12
        );
        assert_eq!(relaxed.fx_matrix().tolerance(), 0.05);
    }

    #[test]
    fn test_fx_forward_rate() {
        let provider = provider();
        let date = valuation().add_days(360);
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
        let expected = 1.40 * (-0.02_f64).exp() / (-0.01_f64).exp();
        assert_relative_eq!(
            provider.fx_forward_rate(pair, date).unwrap(),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            provider.fx_forward_rate(pair, valuation()).unwrap(),
            1.40,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fx_index_rate() {
        let index = FxIndex::new(CurrencyPair::new(Currency::EUR, Currency::USD));
        let yesterday = valuation().add_days(-1);
        let series = DateSeries::from_points([(yesterday, 1.38), (valuation(), 1.39)]).unwrap();
        let provider = provider()
            .to_builder()
            .time_series(index.id().clone(), series)
            .build()
            .unwrap();

        assert_relative_eq!(provider.fx_index_rate(&index, yesterday).unwrap(), 1.38);
        assert_relative_eq!(provider.fx_index_rate(&index, valuation()).unwrap(), 1.39);
        assert!(matches!(
            provider.fx_index_rate(&index, valuation().add_days(-2)),
            Err(MarketError::MissingFixing { .. })
        ));

        let later = valuation().add_days(90);
        assert_relative_eq!(
            provider.fx_index_rate(&index, later).unwrap(),
            provider
                .fx_forward_rate(CurrencyPair::new(Currency::EUR, Currency::USD), later)
                .unwrap()
        );
    }

    #[test]
    fn test_fx_index_rate_falls_back_to_spot_today() {
        let index = FxIndex::new(CurrencyPair::new(Currency::EUR, Currency::USD));
        assert_relative_eq!(
            provider().fx_index_rate(&index, valuation()).unwrap(),
            1.40,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_time_series_unregistered_is_empty() {
        let provider = provider();
        assert!(provider.time_series(&IndexId::from("USD/KRW")).is_empty());
        assert!(provider.time_series_indices().is_empty());
    }

    #[test]
    fn test_to_builder_fx_override() {
        let base = provider();
        let bumped = base
            .to_builder()
            .fx_rate(Currency::EUR, Currency::USD, 1.45)
            .build()
            .unwrap();
        assert_relative_eq!(bumped.fx_rate(Currency::EUR, Currency::USD).unwrap(), 1.45, max_relative = 1e-12);
        assert_relative_eq!(base.fx_rate(Currency::EUR, Currency::USD).unwrap(), 1.40, max_relative = 1e-12);
    }

    #[test]
    fn test_with_discount_curve_leaves_original() {
        let base = provider();
        let curve = InterpolatedNodalCurve::new(
            "GBP Dsc",
            ValueType::ZeroRate,
            vec![0.0, 1.0],
            vec![0.016, 0.016],
            InterpolationMethod::Linear,
        )
        .unwrap();
        let extended = base.with_discount_curve(Currency::GBP, Arc::new(curve));
        assert_eq!(
            extended.discount_currencies(),
            vec![Currency::USD, Currency::EUR, Currency::GBP]
        );
        assert_eq!(base.discount_currencies(), vec![Currency::USD, Currency::EUR]);
    }

    #[test]
    fn test_bad_config_rejected() {
        let result = MarketDataProvider::builder(valuation())
            .config(ProviderConfig {
                fx_tolerance: -1.0,
                ..ProviderConfig::default()
            })
            .build();
        assert!(matches!(result, Err(MarketError::Config { .. })));
    }

    #[test]
    fn test_invalid_fx_quote_fails_build() {
        let result = MarketDataProvider::builder(valuation())
            .fx_rate(Currency::EUR, Currency::USD, 0.0)
            .build();
        assert!(matches!(result, Err(MarketError::InvalidRate { .. })));
    }

    #[test]
    fn test_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarketDataProvider>();
    }
}
