//! Single-value curve.

use meridian_core::daycounts::DayCountConvention;

use crate::curve::{Curve, CurveName};
use crate::error::{CurveError, CurveResult};
use crate::value_type::ValueType;

/// A curve with the same value at every time.
///
/// A constant zero rate gives `exp(-r t)`; a constant discount factor is
/// only sensible for flat test scenarios.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantCurve {
    name: CurveName,
    value_type: ValueType,
    value: f64,
    day_count: Option<DayCountConvention>,
}

impl ConstantCurve {
    /// Creates a constant curve.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the value is not finite, or is a
    /// non-positive discount factor.
    pub fn new(name: impl Into<CurveName>, value_type: ValueType, value: f64) -> CurveResult<Self> {
        if !value.is_finite() {
            return Err(CurveError::invalid_value(format!("value {value} is not finite")));
        }
        if value_type == ValueType::DiscountFactor && value <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "discount factor {value} is not positive"
            )));
        }
        Ok(Self {
            name: name.into(),
            value_type,
            value,
            day_count: None,
        })
    }

    /// Creates a flat continuously compounded zero-rate curve.
    pub fn zero_rate(name: impl Into<CurveName>, rate: f64) -> CurveResult<Self> {
        Self::new(name, ValueType::ZeroRate, rate)
    }

    /// Fixes the day count used to map dates onto this curve.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// The constant value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Curve for ConstantCurve {
    fn name(&self) -> &CurveName {
        &self.name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn y_value(&self, t: f64) -> CurveResult<f64> {
        if t.is_nan() {
            return Err(CurveError::invalid_value("time is NaN"));
        }
        Ok(self.value)
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn day_count(&self) -> Option<DayCountConvention> {
        self.day_count
    }
}
