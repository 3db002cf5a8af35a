//! Interpolation through curve nodes.
//!
//! - [`LinearInterpolator`]: Piecewise linear, the usual choice on zero rates
//! - [`LogLinearInterpolator`]: Linear on `ln(y)`, for discount factors
//! - [`NaturalCubicSpline`]: C2 spline with zero end curvature
//!
//! All interpolators reject queries outside `[min_x, max_x]`. Behaviour
//! beyond the nodes is chosen separately through
//! [`ExtrapolationMethod`](crate::extrapolation::ExtrapolationMethod).

mod cubic_spline;
mod linear;
mod log_linear;

pub use cubic_spline::NaturalCubicSpline;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates node arrays shared by every interpolator.
pub(crate) fn validate_nodes(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(i) = xs.iter().chain(ys).position(|v| !v.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "non-finite node value at position {i}"
        )));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input("x values must be strictly increasing"));
    }
    Ok(())
}

/// Rejects queries outside the node range.
pub(crate) fn check_range(xs: &[f64], x: f64) -> MathResult<()> {
    let (min, max) = (xs[0], xs[xs.len() - 1]);
    if x >= min && x <= max {
        Ok(())
    } else {
        Err(MathError::ExtrapolationNotAllowed { x, min, max })
    }
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the last segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let upper = xs.partition_point(|&probe| probe <= x);
    upper.saturating_sub(1).min(xs.len() - 2)
}
