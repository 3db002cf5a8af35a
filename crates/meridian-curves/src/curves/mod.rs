//! Concrete curve implementations.

mod constant;
mod nodal;

pub use constant::ConstantCurve;
pub use nodal::InterpolatedNodalCurve;
