//! Provider configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};
use crate::fx::DEFAULT_FX_TOLERANCE;

/// Settings applied when building and querying a market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Relative tolerance for the FX quote consistency check.
    pub fx_tolerance: f64,
    /// Accept discount factor queries before the valuation date.
    pub allow_negative_periods: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            fx_tolerance: DEFAULT_FX_TOLERANCE,
            allow_negative_periods: false,
        }
    }
}

impl ProviderConfig {
    /// Checks the settings are usable.
    pub fn validate(&self) -> MarketResult<()> {
        if self.fx_tolerance.is_finite() && self.fx_tolerance >= 0.0 {
            Ok(())
        } else {
            Err(MarketError::config(format!(
                "fx_tolerance must be finite and non-negative, got {}",
                self.fx_tolerance
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.fx_tolerance, 1e-8);
        assert!(!config.allow_negative_periods);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ProviderConfig = serde_json::from_str(r#"{"allow_negative_periods":true}"#).unwrap();
        assert!(config.allow_negative_periods);
        assert_eq!(config.fx_tolerance, 1e-8);
    }

    #[test]
    fn test_validate() {
        let config = ProviderConfig {
            fx_tolerance: f64::NAN,
            ..ProviderConfig::default()
        };
        assert!(matches!(config.validate(), Err(MarketError::Config { .. })));
    }
}
