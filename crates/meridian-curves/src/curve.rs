//! The curve abstraction shared by the market-data provider.

use meridian_core::daycounts::DayCountConvention;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{CurveError, CurveResult};
use crate::value_type::ValueType;

/// Shared, immutable curve handle.
pub type CurveRef = Arc<dyn Curve>;

/// Name of a curve, unique within a market-data provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveName(String);

impl CurveName {
    /// Creates a curve name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurveName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CurveName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A curve mapping time in years to a value.
///
/// Time is measured from the valuation date of whatever holds the curve.
/// Implementations are immutable and shared across threads.
pub trait Curve: Send + Sync + fmt::Debug {
    /// Returns the curve name.
    fn name(&self) -> &CurveName;

    /// Returns what the curve's values represent.
    fn value_type(&self) -> ValueType;

    /// Returns the curve value at time `t`, extrapolating outside the nodes.
    fn y_value(&self, t: f64) -> CurveResult<f64>;

    /// Number of parameters (nodes) defining the curve.
    fn parameter_count(&self) -> usize;

    /// Day count used to turn dates into curve time, if the curve fixes one.
    fn day_count(&self) -> Option<DayCountConvention> {
        None
    }

    /// Returns the discount factor at time `t`.
    ///
    /// Fails if `t` is not finite or the result is not a finite positive number.
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if !t.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "time {t} is not finite"
            )));
        }
        let df = self.value_type().to_discount_factor(self.y_value(t)?, t);
        if df.is_finite() && df > 0.0 {
            Ok(df)
        } else {
            Err(CurveError::invalid_value(format!(
                "curve '{}' gives discount factor {df} at t={t}",
                self.name()
            )))
        }
    }
}
