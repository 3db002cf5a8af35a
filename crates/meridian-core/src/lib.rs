//! # Meridian Core
//!
//! Core value types and conventions for the Meridian market-data library.
//!
//! This crate provides the foundational building blocks used by the curve and
//! market-data crates:
//!
//! - **Types**: `Date`, `Currency`, `CurrencyPair`, `Tenor`, `CurrencyAmount`,
//!   `MultiCurrencyAmount`
//! - **Day Count Conventions**: Year fraction calculations consumed when
//!   mapping dates onto curve time
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//!
//! let valuation = Date::from_ymd(2011, 11, 10).unwrap();
//! let maturity = valuation.add_days(90);
//! let t = DayCountConvention::Act360.year_fraction_f64(valuation, maturity);
//! assert!((t - 0.25).abs() < 1e-12);
//!
//! let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
//! assert_eq!(pair.to_string(), "EUR/USD");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        Currency, CurrencyAmount, CurrencyPair, Date, MultiCurrencyAmount, Tenor,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, CurrencyAmount, CurrencyPair, Date, MultiCurrencyAmount, Tenor};
