//! JSON snapshots of market data.
//!
//! A snapshot is the plain-data form of a [`MarketDataProvider`]: curve
//! nodes, FX quotes and fixings. Loading one runs the same validation as
//! building a provider by hand.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::{Currency, Date};
use meridian_curves::{ExtrapolationMethod, InterpolatedNodalCurve, InterpolationMethod, ValueType};

use crate::config::ProviderConfig;
use crate::error::{MarketError, MarketResult};
use crate::fx::FxRateMatrixBuilder;
use crate::index::IndexId;
use crate::provider::MarketDataProvider;
use crate::timeseries::DateSeries;

fn default_day_count() -> String {
    DayCountConvention::Act360.name().to_string()
}

/// A discount curve given by its nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Currency discounted by the curve.
    pub currency: Currency,
    /// Curve name; defaults to "<CCY> Dsc".
    #[serde(default)]
    pub name: Option<String>,
    /// Meaning of `values`.
    #[serde(default)]
    pub value_type: ValueType,
    /// Interpolation between nodes.
    #[serde(default)]
    pub interpolation: InterpolationMethod,
    /// Behavior beyond the last node.
    #[serde(default)]
    pub extrapolation: ExtrapolationMethod,
    /// Day count fixed by the curve, e.g. "ACT/365F".
    #[serde(default)]
    pub day_count: Option<String>,
    /// Node times in years.
    pub times: Vec<f64>,
    /// Node values.
    pub values: Vec<f64>,
}

/// One FX quote: `rate` units of `counter` per unit of `base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxQuoteSnapshot {
    /// Base currency.
    pub base: Currency,
    /// Counter currency.
    pub counter: Currency,
    /// Quoted rate.
    pub rate: f64,
}

/// Historical fixings for one index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixingSnapshot {
    /// Index name.
    pub index: IndexId,
    /// `(date, value)` observations.
    #[serde(default)]
    pub points: Vec<(Date, f64)>,
}

/// Serializable market data for one valuation date.
///
/// # JSON Format
///
/// ```json
/// {
///   "valuation_date": "2011-11-10",
///   "day_count": "ACT/360",
///   "curves": [
///     { "currency": "USD", "times": [0.0, 1.0], "values": [0.01, 0.012] }
///   ],
///   "fx_quotes": [ { "base": "EUR", "counter": "USD", "rate": 1.40 } ],
///   "fixings": [ { "index": "EUR/USD", "points": [["2011-11-09", 1.39]] } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataSnapshot {
    /// Valuation date.
    pub valuation_date: Date,
    /// Default day count name.
    #[serde(default = "default_day_count")]
    pub day_count: String,
    /// Provider settings.
    #[serde(default)]
    pub config: ProviderConfig,
    /// Discount curves, at most one per currency.
    #[serde(default)]
    pub curves: Vec<CurveSnapshot>,
    /// FX quotes. All must be mutually consistent.
    #[serde(default)]
    pub fx_quotes: Vec<FxQuoteSnapshot>,
    /// Fixing series.
    #[serde(default)]
    pub fixings: Vec<FixingSnapshot>,
}

fn parse_day_count(name: &str) -> MarketResult<DayCountConvention> {
    name.parse()
        .map_err(|e| MarketError::config(format!("Invalid day count '{name}': {e}")))
}

impl CurveSnapshot {
    fn into_curve(self) -> MarketResult<InterpolatedNodalCurve> {
        let name = self
            .name
            .unwrap_or_else(|| format!("{} Dsc", self.currency));
        let curve = InterpolatedNodalCurve::new(
            name,
            self.value_type,
            self.times,
            self.values,
            self.interpolation,
        )?
        .with_extrapolation(self.extrapolation);
        match self.day_count {
            Some(day_count) => Ok(curve.with_day_count(parse_day_count(&day_count)?)),
            None => Ok(curve),
        }
    }
}

impl MarketDataSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> MarketResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MarketError::config(format!("Failed to parse JSON: {e}")))
    }

    /// Reads and parses a snapshot file.
    pub fn from_json_file(path: impl AsRef<Path>) -> MarketResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| MarketError::config(format!("Failed to read file: {e}")))?;
        Self::from_json(&content)
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> MarketResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MarketError::config(format!("Failed to write JSON: {e}")))
    }

    /// Builds a provider from the snapshot.
    ///
    /// # Errors
    ///
    /// Fails on an unknown day count, a duplicate curve currency, or any
    /// curve, FX or fixing validation error.
    pub fn into_provider(self) -> MarketResult<MarketDataProvider> {
        self.config.validate()?;
        let day_count = parse_day_count(&self.day_count)?;

        let fx_matrix = self
            .fx_quotes
            .iter()
            .try_fold(
                FxRateMatrixBuilder::new().with_tolerance(self.config.fx_tolerance),
                |builder, quote| builder.add_rate(quote.base, quote.counter, quote.rate),
            )?
            .build()?;

        let mut builder = MarketDataProvider::builder(self.valuation_date)
            .day_count(day_count)
            .config(self.config)
            .fx_matrix(fx_matrix);

        let mut seen = Vec::with_capacity(self.curves.len());
        for snapshot in self.curves {
            if seen.contains(&snapshot.currency) {
                return Err(MarketError::config(format!(
                    "Duplicate curve for {}",
                    snapshot.currency
                )));
            }
            seen.push(snapshot.currency);
            let currency = snapshot.currency;
            builder = builder.discount_curve(currency, Arc::new(snapshot.into_curve()?));
        }

        for fixing in self.fixings {
            builder = builder.time_series(fixing.index, DateSeries::from_points(fixing.points)?);
        }

        builder.build()
    }
}
