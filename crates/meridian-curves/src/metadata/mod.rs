//! Metadata describing the parameters of curves and surfaces.
//!
//! Each parameter carries a human-readable label used in sensitivity
//! reports. Labels are never empty and are fixed at construction.

mod strike;
mod surface;
mod year_fraction;

pub use strike::Strike;
pub use surface::{SurfacePeriodParameterMetadata, SurfacePeriodParameterMetadataBuilder};
pub use year_fraction::YearFractionParameterMetadata;

/// Describes a single parameter of a curve or surface.
pub trait ParameterMetadata: std::fmt::Debug + Send + Sync {
    /// The label of the parameter. Never empty.
    fn label(&self) -> &str;
}
