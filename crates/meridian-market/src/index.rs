//! Identifiers for fixing indices.

use meridian_core::types::CurrencyPair;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of an index whose fixings are stored as a time series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexId(String);

impl IndexId {
    /// Creates an index identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndexId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for IndexId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An FX fixing index on a currency pair, e.g. `USD/KRW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FxIndex {
    id: IndexId,
    pair: CurrencyPair,
}

impl FxIndex {
    /// Creates an index named after its pair ("USD/KRW").
    #[must_use]
    pub fn new(pair: CurrencyPair) -> Self {
        Self {
            id: IndexId::new(pair.to_string()),
            pair,
        }
    }

    /// Creates an index with an explicit name.
    #[must_use]
    pub fn named(id: impl Into<IndexId>, pair: CurrencyPair) -> Self {
        Self {
            id: id.into(),
            pair,
        }
    }

    /// The identifier under which fixings are stored.
    #[must_use]
    pub fn id(&self) -> &IndexId {
        &self.id
    }

    /// The currency pair being fixed.
    #[must_use]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }
}

impl fmt::Display for FxIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::types::Currency;

    #[test]
    fn test_default_name() {
        let index = FxIndex::new(CurrencyPair::new(Currency::USD, Currency::KRW));
        assert_eq!(index.id().as_str(), "USD/KRW");
        assert_eq!(index.to_string(), "USD/KRW");
        assert_eq!(index.pair().counter, Currency::KRW);
    }

    #[test]
    fn test_named() {
        let index = FxIndex::named("WM/Reuters EURUSD", CurrencyPair::new(Currency::EUR, Currency::USD));
        assert_eq!(index.id(), &IndexId::from("WM/Reuters EURUSD"));
    }
}
