//! Domain value types.
//!
//! - [`Date`]: Calendar date for valuation and fixing dates
//! - [`Currency`]: ISO currency codes
//! - [`CurrencyPair`]: Ordered base/counter pair
//! - [`Tenor`]: Calendar period (6M, 1Y)
//! - [`CurrencyAmount`] / [`MultiCurrencyAmount`]: Money in one or several currencies

mod amount;
mod currency;
mod currency_pair;
mod date;
mod tenor;

pub use amount::{CurrencyAmount, MultiCurrencyAmount};
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use date::Date;
pub use tenor::Tenor;
