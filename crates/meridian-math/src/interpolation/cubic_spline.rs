//! Natural cubic spline interpolation.

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Natural cubic spline: piecewise cubics with continuous first and second
/// derivatives, and zero second derivative at both ends.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Creates a natural cubic spline.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points or the node checks fail.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 3)?;
        let y2s = second_derivatives(&xs, &ys);
        Ok(Self { xs, ys, y2s })
    }

    /// Weights (a, b) of the left and right knots at x on segment i.
    fn weights(&self, i: usize, x: f64) -> (f64, f64, f64) {
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        (a, 1.0 - a, h)
    }
}

impl Interpolator for NaturalCubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        let i = find_segment(&self.xs, x);
        let (a, b, h) = self.weights(i, x);

        Ok(a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        let i = find_segment(&self.xs, x);
        let (a, b, h) = self.weights(i, x);

        Ok((self.ys[i + 1] - self.ys[i]) / h
            - (3.0 * a * a - 1.0) / 6.0 * h * self.y2s[i]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.y2s[i + 1])
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Solves the tridiagonal system for knot second derivatives, natural end conditions.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        let d = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * d / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}
