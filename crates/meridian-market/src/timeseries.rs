//! Historical fixing series.

use std::collections::BTreeMap;

use meridian_core::types::Date;

use crate::error::{MarketError, MarketResult};

/// Values keyed by date, unique and in ascending date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSeries {
    points: BTreeMap<Date, f64>,
}

impl DateSeries {
    /// A series with no points.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Builds a series from (date, value) points in any order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimeSeries` on a repeated date or a non-finite value.
    pub fn from_points(points: impl IntoIterator<Item = (Date, f64)>) -> MarketResult<Self> {
        let mut series = BTreeMap::new();
        for (date, value) in points {
            if !value.is_finite() {
                return Err(MarketError::invalid_time_series(format!(
                    "value {value} on {date} is not finite"
                )));
            }
            if series.insert(date, value).is_some() {
                return Err(MarketError::invalid_time_series(format!(
                    "duplicate date {date}"
                )));
            }
        }
        Ok(Self { points: series })
    }

    /// Value on the given date, if present.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<f64> {
        self.points.get(&date).copied()
    }

    /// Most recent point on or before the given date.
    #[must_use]
    pub fn latest_on_or_before(&self, date: Date) -> Option<(Date, f64)> {
        self.points
            .range(..=date)
            .next_back()
            .map(|(&d, &v)| (d, v))
    }

    /// Earliest point.
    #[must_use]
    pub fn earliest(&self) -> Option<(Date, f64)> {
        self.points.first_key_value().map(|(&d, &v)| (d, v))
    }

    /// Latest point.
    #[must_use]
    pub fn latest(&self) -> Option<(Date, f64)> {
        self.points.last_key_value().map(|(&d, &v)| (d, v))
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over points in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.points.iter().map(|(&d, &v)| (d, v))
    }
}
