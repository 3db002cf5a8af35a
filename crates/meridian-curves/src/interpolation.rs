//! Interpolation methods for nodal curves.

use meridian_math::interpolation::{
    Interpolator, LinearInterpolator, LogLinearInterpolator, NaturalCubicSpline,
};
use meridian_math::MathResult;
use serde::{Deserialize, Serialize};

/// Interpolation applied to a curve's y-values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation on the values.
    #[default]
    Linear,

    /// Linear interpolation on the log of the values. Values must be positive.
    LogLinear,

    /// Natural cubic spline on the values. Needs at least three nodes.
    NaturalCubicSpline,
}

impl InterpolationMethod {
    /// Builds the interpolator for the given nodes.
    pub fn interpolator(&self, xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Box<dyn Interpolator>> {
        Ok(match self {
            Self::Linear => Box::new(LinearInterpolator::new(xs, ys)?),
            Self::LogLinear => Box::new(LogLinearInterpolator::new(xs, ys)?),
            Self::NaturalCubicSpline => Box::new(NaturalCubicSpline::new(xs, ys)?),
        })
    }

    /// Minimum number of nodes the method accepts.
    #[must_use]
    pub fn min_points(&self) -> usize {
        match self {
            Self::Linear | Self::LogLinear => 2,
            Self::NaturalCubicSpline => 3,
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::LogLinear => "Log-Linear",
            Self::NaturalCubicSpline => "Natural Cubic Spline",
        };
        write!(f, "{name}")
    }
}
