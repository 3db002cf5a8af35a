//! Metadata for a volatility surface node keyed by expiry period and strike.

use meridian_core::types::Tenor;
use serde::{Deserialize, Serialize};

use super::{ParameterMetadata, Strike};
use crate::error::{CurveError, CurveResult};

/// Surface node metadata: an expiry period, a strike and a label.
///
/// When no label is given it is derived once, at construction, as
/// `[<period>, <strike label>]`:
///
/// ```rust
/// use meridian_core::types::Tenor;
/// use meridian_curves::metadata::{ParameterMetadata, Strike, SurfacePeriodParameterMetadata};
/// use rust_decimal::Decimal;
///
/// let strike = Strike::Simple(Decimal::new(15, 1));
/// let meta = SurfacePeriodParameterMetadata::of(Tenor::Months(6), strike);
/// assert_eq!(meta.label(), "[6M, Strike=1.5]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SurfacePeriodParameterMetadataBuilder")]
pub struct SurfacePeriodParameterMetadata {
    period: Tenor,
    strike: Strike,
    label: String,
}

impl SurfacePeriodParameterMetadata {
    /// Creates metadata with the derived label.
    #[must_use]
    pub fn of(period: Tenor, strike: Strike) -> Self {
        Self {
            period,
            strike,
            label: derived_label(period, strike),
        }
    }

    /// Creates metadata with an explicit label.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetadata` if the label is empty.
    pub fn with_label(
        period: Tenor,
        strike: Strike,
        label: impl Into<String>,
    ) -> CurveResult<Self> {
        Self::builder()
            .period(period)
            .strike(strike)
            .label(label)
            .build()
    }

    /// Starts a builder.
    #[must_use]
    pub fn builder() -> SurfacePeriodParameterMetadataBuilder {
        SurfacePeriodParameterMetadataBuilder::default()
    }

    /// The expiry period.
    #[must_use]
    pub fn period(&self) -> Tenor {
        self.period
    }

    /// The strike.
    #[must_use]
    pub fn strike(&self) -> Strike {
        self.strike
    }

    /// The (period, strike) pair identifying the node within its surface.
    #[must_use]
    pub fn identifier(&self) -> (Tenor, Strike) {
        (self.period, self.strike)
    }
}

impl ParameterMetadata for SurfacePeriodParameterMetadata {
    fn label(&self) -> &str {
        &self.label
    }
}

fn derived_label(period: Tenor, strike: Strike) -> String {
    format!("[{period}, {}]", strike.label())
}

/// Builder for [`SurfacePeriodParameterMetadata`].
///
/// Period and strike are required. The label is derived in `build()` if
/// not set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfacePeriodParameterMetadataBuilder {
    #[serde(default)]
    period: Option<Tenor>,
    #[serde(default)]
    strike: Option<Strike>,
    #[serde(default)]
    label: Option<String>,
}

impl SurfacePeriodParameterMetadataBuilder {
    /// Sets the expiry period.
    #[must_use]
    pub fn period(mut self, period: Tenor) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the strike.
    #[must_use]
    pub fn strike(mut self, strike: Strike) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets an explicit label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builds the metadata, deriving the label if none was set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetadata` if period or strike is missing, or the
    /// label is empty.
    pub fn build(self) -> CurveResult<SurfacePeriodParameterMetadata> {
        let period = self
            .period
            .ok_or_else(|| CurveError::invalid_metadata("period is required"))?;
        let strike = self
            .strike
            .ok_or_else(|| CurveError::invalid_metadata("strike is required"))?;
        let label = self
            .label
            .unwrap_or_else(|| derived_label(period, strike));
        if label.is_empty() {
            return Err(CurveError::invalid_metadata("label must not be empty"));
        }
        Ok(SurfacePeriodParameterMetadata {
            period,
            strike,
            label,
        })
    }
}

impl TryFrom<SurfacePeriodParameterMetadataBuilder> for SurfacePeriodParameterMetadata {
    type Error = CurveError;

    fn try_from(builder: SurfacePeriodParameterMetadataBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
