//! # Meridian Math
//!
//! Numerical routines behind Meridian curves.
//!
//! - **Interpolation**: Linear, log-linear and natural cubic spline through
//!   curve nodes
//! - **Extrapolation**: Behaviour outside the node range (none, flat, linear)
//!
//! ## Example
//!
//! ```rust
//! use meridian_math::prelude::*;
//!
//! let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.01, 0.012, 0.014]).unwrap();
//! let mid = interp.interpolate(1.5).unwrap();
//! assert!((mid - 0.013).abs() < 1e-12);
//!
//! let far = ExtrapolationMethod::Flat.evaluate(&interp, 10.0).unwrap();
//! assert!((far - 0.014).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::ExtrapolationMethod;
    pub use crate::interpolation::{
        Interpolator, LinearInterpolator, LogLinearInterpolator, NaturalCubicSpline,
    };
}

pub use error::{MathError, MathResult};
