//! Metadata for a curve node identified by its year fraction.

use serde::{Deserialize, Serialize};

use super::ParameterMetadata;
use crate::error::{CurveError, CurveResult};

/// Metadata for one node of a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearFractionParameterMetadata {
    year_fraction: f64,
    label: String,
}

impl YearFractionParameterMetadata {
    /// Creates metadata labelled with the year fraction itself.
    #[must_use]
    pub fn of(year_fraction: f64) -> Self {
        Self {
            year_fraction,
            label: year_fraction.to_string(),
        }
    }

    /// Creates metadata with an explicit label.
    pub fn with_label(year_fraction: f64, label: impl Into<String>) -> CurveResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(CurveError::invalid_metadata("label must not be empty"));
        }
        Ok(Self {
            year_fraction,
            label,
        })
    }

    /// The node time in years.
    #[must_use]
    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }
}

impl ParameterMetadata for YearFractionParameterMetadata {
    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label() {
        assert_eq!(YearFractionParameterMetadata::of(0.5).label(), "0.5");
        assert_eq!(YearFractionParameterMetadata::of(2.0).label(), "2");
    }

    #[test]
    fn test_explicit_label() {
        let meta = YearFractionParameterMetadata::with_label(0.5, "6M").unwrap();
        assert_eq!(meta.label(), "6M");
        assert_eq!(meta.year_fraction(), 0.5);
        assert!(YearFractionParameterMetadata::with_label(0.5, "").is_err());
    }
}
