//! Log-linear interpolation.

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::{MathError, MathResult};

/// Linear interpolation of `ln(y)`, exponentiated back.
///
/// Interpolated values stay positive and forward rates are piecewise
/// constant, which makes this the natural choice for discount factors.
///
/// ```rust
/// use meridian_math::interpolation::{Interpolator, LogLinearInterpolator};
///
/// let interp = LogLinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.97, 0.94]).unwrap();
/// assert!(interp.interpolate(1.5).unwrap() > 0.94);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    log_ys: Vec<f64>,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error on the usual node checks, or if any y value is not positive.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 2)?;
        if let Some((i, y)) = ys.iter().enumerate().find(|(_, &y)| y <= 0.0) {
            return Err(MathError::invalid_input(format!(
                "y[{i}] = {y} is not positive; log-linear requires positive values"
            )));
        }
        let log_ys = ys.iter().map(|y| y.ln()).collect();
        Ok(Self { xs, log_ys })
    }

    fn log_slope(&self, i: usize) -> f64 {
        (self.log_ys[i + 1] - self.log_ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        let i = find_segment(&self.xs, x);
        Ok((self.log_ys[i] + self.log_slope(i) * (x - self.xs[i])).exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        // d/dx exp(l(x)) = l'(x) * exp(l(x))
        let y = self.interpolate(x)?;
        Ok(self.log_slope(find_segment(&self.xs, x)) * y)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
