//! # Meridian Curves
//!
//! Discount curves keyed by year fraction, and the metadata describing their
//! parameters.
//!
//! - **Curve Trait**: [`Curve`], shared behind [`CurveRef`] (`Arc<dyn Curve>`)
//! - **Curve Types**: [`InterpolatedNodalCurve`] over (time, value) nodes and
//!   [`ConstantCurve`]
//! - **Value Types**: zero rates (continuous) or discount factors
//! - **Metadata**: [`ParameterMetadata`] labels for curve and surface nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_curves::prelude::*;
//!
//! let curve = InterpolatedNodalCurve::new(
//!     "USD Dsc",
//!     ValueType::ZeroRate,
//!     vec![0.0, 0.5, 1.0, 2.0, 5.0],
//!     vec![0.0100, 0.0120, 0.0120, 0.0140, 0.0140],
//!     InterpolationMethod::Linear,
//! )
//! .unwrap();
//!
//! assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
//! let df = curve.discount_factor(1.5).unwrap();
//! assert!((df - (-0.013_f64 * 1.5).exp()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod curve;
pub mod curves;
pub mod error;
pub mod interpolation;
pub mod metadata;
pub mod value_type;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::{Curve, CurveName, CurveRef};
    pub use crate::curves::{ConstantCurve, InterpolatedNodalCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::metadata::{
        ParameterMetadata, Strike, SurfacePeriodParameterMetadata,
        SurfacePeriodParameterMetadataBuilder, YearFractionParameterMetadata,
    };
    pub use crate::value_type::ValueType;
    pub use meridian_math::extrapolation::ExtrapolationMethod;
}

pub use curve::{Curve, CurveName, CurveRef};
pub use curves::{ConstantCurve, InterpolatedNodalCurve};
pub use error::{CurveError, CurveResult};
pub use interpolation::InterpolationMethod;
pub use metadata::{ParameterMetadata, Strike, SurfacePeriodParameterMetadata};
pub use value_type::ValueType;
pub use meridian_math::extrapolation::ExtrapolationMethod;
