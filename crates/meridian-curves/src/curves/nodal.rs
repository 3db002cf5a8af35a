//! Curve interpolated through (time, value) nodes.

use std::fmt;
use std::sync::Arc;

use meridian_core::daycounts::DayCountConvention;
use meridian_math::extrapolation::ExtrapolationMethod;
use meridian_math::interpolation::Interpolator;

use crate::curve::{Curve, CurveName};
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;
use crate::metadata::YearFractionParameterMetadata;
use crate::value_type::ValueType;

/// A curve defined by nodes and an interpolation method.
///
/// Node times are strictly increasing and all values are finite. Outside
/// the node range the curve follows its [`ExtrapolationMethod`] (flat by
/// default).
#[derive(Clone)]
pub struct InterpolatedNodalCurve {
    name: CurveName,
    value_type: ValueType,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    interpolation: InterpolationMethod,
    extrapolation: ExtrapolationMethod,
    day_count: Option<DayCountConvention>,
    interpolator: Arc<dyn Interpolator>,
}

impl InterpolatedNodalCurve {
    /// Creates a curve from node times and values.
    ///
    /// # Errors
    ///
    /// - `InsufficientPoints` if fewer nodes than the interpolation needs
    /// - `NonMonotonicTimes` if times are not strictly increasing
    /// - `InvalidValue` on mismatched lengths, non-finite values, or
    ///   non-positive discount factors
    pub fn new(
        name: impl Into<CurveName>,
        value_type: ValueType,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        interpolation: InterpolationMethod,
    ) -> CurveResult<Self> {
        validate_nodes(&x_values, &y_values, value_type, interpolation)?;
        let interpolator = interpolation.interpolator(x_values.clone(), y_values.clone())?;

        Ok(Self {
            name: name.into(),
            value_type,
            x_values,
            y_values,
            interpolation,
            extrapolation: ExtrapolationMethod::default(),
            day_count: None,
            interpolator: Arc::from(interpolator),
        })
    }

    /// Sets the extrapolation used outside the node range.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: ExtrapolationMethod) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Fixes the day count used to map dates onto this curve.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Returns a copy of the curve with new y-values at the same times.
    pub fn with_values(&self, y_values: Vec<f64>) -> CurveResult<Self> {
        let rebuilt = Self::new(
            self.name.clone(),
            self.value_type,
            self.x_values.clone(),
            y_values,
            self.interpolation,
        )?;
        Ok(Self {
            extrapolation: self.extrapolation,
            day_count: self.day_count,
            ..rebuilt
        })
    }

    /// Returns a copy with `shift` added to every y-value.
    pub fn with_parallel_shift(&self, shift: f64) -> CurveResult<Self> {
        self.with_values(self.y_values.iter().map(|y| y + shift).collect())
    }

    /// Node times.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Node values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Interpolation method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    /// Extrapolation method.
    #[must_use]
    pub fn extrapolation(&self) -> ExtrapolationMethod {
        self.extrapolation
    }

    /// Metadata for each node, labelled by its year fraction.
    #[must_use]
    pub fn parameter_metadata(&self) -> Vec<YearFractionParameterMetadata> {
        self.x_values
            .iter()
            .map(|&t| YearFractionParameterMetadata::of(t))
            .collect()
    }
}

fn validate_nodes(
    xs: &[f64],
    ys: &[f64],
    value_type: ValueType,
    interpolation: InterpolationMethod,
) -> CurveResult<()> {
    let required = interpolation.min_points();
    if xs.len() < required {
        return Err(CurveError::insufficient_points(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(CurveError::invalid_value(format!(
            "{} times but {} values",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(t) = xs.iter().find(|t| !t.is_finite()) {
        return Err(CurveError::invalid_value(format!("node time {t} is not finite")));
    }
    if let Some(y) = ys.iter().find(|y| !y.is_finite()) {
        return Err(CurveError::invalid_value(format!("node value {y} is not finite")));
    }
    for (i, w) in xs.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(CurveError::non_monotonic_times(i + 1, w[0], w[1]));
        }
    }
    if value_type == ValueType::DiscountFactor {
        if let Some(y) = ys.iter().find(|&&y| y <= 0.0) {
            return Err(CurveError::invalid_value(format!(
                "discount factor {y} is not positive"
            )));
        }
    }
    Ok(())
}

impl Curve for InterpolatedNodalCurve {
    fn name(&self) -> &CurveName {
        &self.name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn y_value(&self, t: f64) -> CurveResult<f64> {
        Ok(self.extrapolation.evaluate(self.interpolator.as_ref(), t)?)
    }

    fn parameter_count(&self) -> usize {
        self.x_values.len()
    }

    fn day_count(&self) -> Option<DayCountConvention> {
        self.day_count
    }
}

impl fmt::Debug for InterpolatedNodalCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatedNodalCurve")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .field("x_values", &self.x_values)
            .field("y_values", &self.y_values)
            .field("interpolation", &self.interpolation)
            .field("extrapolation", &self.extrapolation)
            .field("day_count", &self.day_count)
            .finish_non_exhaustive()
    }
}

impl PartialEq for InterpolatedNodalCurve {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value_type == other.value_type
            && self.x_values == other.x_values
            && self.y_values == other.y_values
            && self.interpolation == other.interpolation
            && self.extrapolation == other.extrapolation
            && self.day_count == other.day_count
    }
}
