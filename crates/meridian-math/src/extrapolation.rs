//! Extrapolation beyond the first and last node.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// How a curve is extended outside its node range.
///
/// | Method | Left of first node | Right of last node |
/// |--------|--------------------|--------------------|
/// | None   | error              | error              |
/// | Flat   | first value        | last value         |
/// | Linear | boundary slope     | boundary slope     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExtrapolationMethod {
    /// No extrapolation - return error outside range
    None,
    /// Constant value from boundary
    #[default]
    Flat,
    /// Linear continuation with boundary slope
    Linear,
}

impl ExtrapolationMethod {
    /// Evaluates the interpolator at x, extending it outside the node range.
    ///
    /// # Errors
    ///
    /// Returns `MathError::ExtrapolationNotAllowed` for `None` outside the
    /// range, or `InvalidInput` if x is NaN.
    pub fn evaluate(&self, interpolator: &dyn Interpolator, x: f64) -> MathResult<f64> {
        if x.is_nan() {
            return Err(MathError::invalid_input("cannot evaluate at NaN"));
        }
        if interpolator.in_range(x) {
            return interpolator.interpolate(x);
        }

        let boundary = if x < interpolator.min_x() {
            interpolator.min_x()
        } else {
            interpolator.max_x()
        };

        match self {
            ExtrapolationMethod::None => Err(MathError::ExtrapolationNotAllowed {
                x,
                min: interpolator.min_x(),
                max: interpolator.max_x(),
            }),
            ExtrapolationMethod::Flat => interpolator.interpolate(boundary),
            ExtrapolationMethod::Linear => {
                let value = interpolator.interpolate(boundary)?;
                let slope = interpolator.derivative(boundary)?;
                Ok(value + slope * (x - boundary))
            }
        }
    }

    /// Returns the name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ExtrapolationMethod::None => "None",
            ExtrapolationMethod::Flat => "Flat",
            ExtrapolationMethod::Linear => "Linear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::LinearInterpolator;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn interp() -> LinearInterpolator {
        LinearInterpolator::new(vec![1.0, 2.0, 4.0], vec![0.02, 0.03, 0.04]).unwrap()
    }

    #[test]
    fn test_in_range_ignores_method() {
        for method in [
            ExtrapolationMethod::None,
            ExtrapolationMethod::Flat,
            ExtrapolationMethod::Linear,
        ] {
            assert_relative_eq!(method.evaluate(&interp(), 1.5).unwrap(), 0.025, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_none_rejects() {
        let err = ExtrapolationMethod::None.evaluate(&interp(), 0.5).unwrap_err();
        assert_eq!(
            err,
            MathError::ExtrapolationNotAllowed {
                x: 0.5,
                min: 1.0,
                max: 4.0
            }
        );
    }

    #[test]
    fn test_flat() {
        let flat = ExtrapolationMethod::Flat;
        assert_relative_eq!(flat.evaluate(&interp(), 0.0).unwrap(), 0.02);
        assert_relative_eq!(flat.evaluate(&interp(), 30.0).unwrap(), 0.04);
    }

    #[test]
    fn test_linear() {
        let linear = ExtrapolationMethod::Linear;
        assert_relative_eq!(linear.evaluate(&interp(), 0.0).unwrap(), 0.01, epsilon = 1e-14);
        assert_relative_eq!(linear.evaluate(&interp(), 6.0).unwrap(), 0.05, epsilon = 1e-14);
    }

    #[test]
    fn test_nan_rejected() {
        assert!(ExtrapolationMethod::Flat.evaluate(&interp(), f64::NAN).is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ExtrapolationMethod::Flat).unwrap();
        assert_eq!(json, "\"Flat\"");
        assert_eq!(ExtrapolationMethod::default(), ExtrapolationMethod::Flat);
    }

    proptest! {
        #[test]
        fn flat_stays_within_node_bounds(x in -50.0f64..50.0) {
            let y = ExtrapolationMethod::Flat.evaluate(&interp(), x).unwrap();
            prop_assert!((0.02..=0.04).contains(&y));
        }
    }
}
