//! # Meridian Market
//!
//! An immutable bundle of the market data needed to value multi-currency
//! trades on a single valuation date:
//!
//! - **FX**: [`FxRateMatrix`], a triangulated and consistency-checked table of
//!   spot rates between every registered currency
//! - **Discounting**: one discount curve per currency, queried by date
//! - **Fixings**: historical [`DateSeries`] keyed by [`IndexId`]
//! - **Configuration**: [`ProviderConfig`] and JSON [`MarketDataSnapshot`]s
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use meridian_market::prelude::*;
//!
//! let valuation = Date::from_ymd(2011, 11, 10).unwrap();
//! let usd = InterpolatedNodalCurve::new(
//!     "USD Dsc",
//!     ValueType::ZeroRate,
//!     vec![0.0, 0.5, 1.0, 2.0, 5.0],
//!     vec![0.0100, 0.0120, 0.0120, 0.0140, 0.0140],
//!     InterpolationMethod::Linear,
//! )
//! .unwrap();
//!
//! let provider = MarketDataProvider::builder(valuation)
//!     .discount_curve(Currency::USD, Arc::new(usd))
//!     .fx_rate(Currency::EUR, Currency::USD, 1.40)
//!     .fx_rate(Currency::GBP, Currency::USD, 1.50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(provider.discount_factor(Currency::USD, valuation).unwrap(), 1.0);
//! let gbp = provider.convert(100.0, Currency::EUR, Currency::GBP).unwrap();
//! assert!((gbp - 100.0 * 1.40 / 1.50).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod fx;
pub mod index;
pub mod provider;
pub mod snapshot;
pub mod timeseries;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::ProviderConfig;
    pub use crate::error::{MarketError, MarketResult};
    pub use crate::fx::{FxQuote, FxRateMatrix, FxRateMatrixBuilder};
    pub use crate::index::{FxIndex, IndexId};
    pub use crate::provider::{MarketDataProvider, MarketDataProviderBuilder};
    pub use crate::snapshot::MarketDataSnapshot;
    pub use crate::timeseries::DateSeries;

    pub use meridian_core::prelude::*;
    pub use meridian_curves::prelude::*;
}

pub use config::ProviderConfig;
pub use error::{MarketError, MarketResult};
pub use fx::{FxQuote, FxRateMatrix, FxRateMatrixBuilder};
pub use index::{FxIndex, IndexId};
pub use provider::{MarketDataProvider, MarketDataProviderBuilder};
pub use snapshot::MarketDataSnapshot;
pub use timeseries::DateSeries;
