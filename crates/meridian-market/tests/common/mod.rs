//! Shared market dataset for the integration tests.
//!
//! Valuation date: November 10, 2011. ACT/360 by default.
//!
//! | Time | USD    | EUR    | GBP    | KRW    |
//! |------|--------|--------|--------|--------|
//! | 0.0  | 1.00%  | 1.50%  | 1.60%  | 3.50%  |
//! | 0.5  | 1.20%  | 1.25%  | 1.35%  | 3.25%  |
//! | 1.0  | 1.20%  | 1.50%  | 1.60%  | 3.50%  |
//! | 2.0  | 1.40%  | 1.75%  | 1.85%  | 3.75%  |
//! | 5.0  | 1.40%  | 1.50%  | 1.60%  | 3.50%  |
//!
//! FX: EUR/USD 1.40, KRW/USD 1/1111.11, GBP/USD 1.50.

#![allow(dead_code)]

use std::sync::Arc;

use meridian_market::prelude::*;
use tracing_subscriber::EnvFilter;

/// Routes provider logs to the test output; `RUST_LOG=debug` shows builds.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub const TIMES: [f64; 5] = [0.0, 0.5, 1.0, 2.0, 5.0];
pub const USD_RATES: [f64; 5] = [0.0100, 0.0120, 0.0120, 0.0140, 0.0140];
pub const EUR_RATES: [f64; 5] = [0.0150, 0.0125, 0.0150, 0.0175, 0.0150];
pub const GBP_RATES: [f64; 5] = [0.0160, 0.0135, 0.0160, 0.0185, 0.0160];
pub const KRW_RATES: [f64; 5] = [0.0350, 0.0325, 0.0350, 0.0375, 0.0350];

pub const EUR_USD: f64 = 1.40;
pub const GBP_USD: f64 = 1.50;
pub const KRW_USD: f64 = 1.0 / 1111.11;

pub fn valuation_date() -> Date {
    Date::from_ymd(2011, 11, 10).unwrap()
}

pub fn usd_krw_index() -> FxIndex {
    FxIndex::new(CurrencyPair::new(Currency::USD, Currency::KRW))
}

fn zero_curve(name: &str, rates: [f64; 5]) -> CurveRef {
    Arc::new(
        InterpolatedNodalCurve::new(
            name,
            ValueType::ZeroRate,
            TIMES.to_vec(),
            rates.to_vec(),
            InterpolationMethod::Linear,
        )
        .unwrap(),
    )
}

pub fn usd_curve() -> CurveRef {
    zero_curve("USD Dsc", USD_RATES)
}

pub fn eur_curve() -> CurveRef {
    zero_curve("EUR Dsc", EUR_RATES)
}

pub fn gbp_curve() -> CurveRef {
    zero_curve("GBP Dsc", GBP_RATES)
}

pub fn krw_curve() -> CurveRef {
    zero_curve("KRW Dsc", KRW_RATES)
}

/// EUR, USD, GBP and KRW quoted against USD.
pub fn fx_matrix() -> FxRateMatrix {
    FxRateMatrix::builder()
        .add_rate(Currency::EUR, Currency::USD, EUR_USD)
        .unwrap()
        .add_rate(Currency::KRW, Currency::USD, KRW_USD)
        .unwrap()
        .add_rate(Currency::GBP, Currency::USD, GBP_USD)
        .unwrap()
        .build()
        .unwrap()
}

/// All four curves, the full FX matrix and an empty USD/KRW fixing series.
pub fn provider() -> MarketDataProvider {
    init_tracing();
    MarketDataProvider::builder(valuation_date())
        .day_count(DayCountConvention::Act360)
        .discount_curve(Currency::USD, usd_curve())
        .discount_curve(Currency::EUR, eur_curve())
        .discount_curve(Currency::GBP, gbp_curve())
        .discount_curve(Currency::KRW, krw_curve())
        .fx_matrix(fx_matrix())
        .time_series(usd_krw_index().id().clone(), DateSeries::empty())
        .build()
        .unwrap()
}

/// USD and EUR only, FX quoted as USD/EUR.
pub fn provider_eur_usd() -> MarketDataProvider {
    MarketDataProvider::builder(valuation_date())
        .discount_curve(Currency::USD, usd_curve())
        .discount_curve(Currency::EUR, eur_curve())
        .fx_rate(Currency::USD, Currency::EUR, 1.0 / EUR_USD)
        .build()
        .unwrap()
}
