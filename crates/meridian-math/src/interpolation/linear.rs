//! Linear interpolation.

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Piecewise linear interpolation between nodes.
///
/// ```rust
/// use meridian_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(interp.interpolate(1.5).unwrap(), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths differ,
    /// values are not finite or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }

    fn slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        let i = find_segment(&self.xs, x);
        Ok(self.ys[i] + self.slope(i) * (x - self.xs[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        Ok(self.slope(find_segment(&self.xs, x)))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_zero_rate_nodes() {
        let interp = LinearInterpolator::new(
            vec![0.0, 0.5, 1.0, 2.0, 5.0],
            vec![0.0100, 0.0120, 0.0120, 0.0140, 0.0140],
        )
        .unwrap();

        assert_relative_eq!(interp.interpolate(0.25).unwrap(), 0.0110, epsilon = 1e-14);
        assert_relative_eq!(interp.interpolate(0.75).unwrap(), 0.0120, epsilon = 1e-14);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.0130, epsilon = 1e-14);
        assert_relative_eq!(interp.interpolate(5.0).unwrap(), 0.0140, epsilon = 1e-14);
    }

    #[test]
    fn test_derivative_is_segment_slope() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 3.0], vec![1.0, 2.0, 0.0]).unwrap();
        assert_relative_eq!(interp.derivative(0.5).unwrap(), 1.0);
        assert_relative_eq!(interp.derivative(2.0).unwrap(), -1.0);
        assert_relative_eq!(interp.derivative(3.0).unwrap(), -1.0);
    }

    #[test]
    fn test_two_points_minimum() {
        assert!(LinearInterpolator::new(vec![1.0], vec![1.0]).is_err());
        assert!(LinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 1.0]).is_ok());
    }
}
