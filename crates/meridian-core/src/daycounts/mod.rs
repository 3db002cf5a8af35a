//! Day count conventions.
//!
//! A day count turns a pair of dates into a year fraction. Market data uses
//! it to place dates on the time axis of a curve.
//!
//! - [`Act360`]: Actual/360
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`ActActIsda`]: Actual/Actual ISDA
//! - [`Thirty360US`]: 30/360 US (with Feb EOM rules)
//! - [`Thirty360E`]: 30E/360
//!
//! # Usage
//!
//! ```rust
//! use meridian_core::daycounts::{DayCount, Thirty360US};
//! use meridian_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(Thirty360US.day_count(start, end), 180);
//! assert_eq!(Thirty360US.year_fraction_f64(start, end), 0.5);
//! ```

mod act360;
mod actact;
mod thirty360;

pub use act360::{Act360, Act365Fixed};
pub use actact::ActActIsda;
pub use thirty360::{Thirty360E, Thirty360US};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so they can sit behind
/// shared market data.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g., "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates under the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Year fraction as `f64`, for curve lookups.
    ///
    /// Returns NaN if the decimal cannot be represented.
    fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.year_fraction(start, end).to_f64().unwrap_or(f64::NAN)
    }
}

/// Runtime-selectable day count convention.
///
/// ```rust
/// use meridian_core::daycounts::DayCountConvention;
/// use meridian_core::types::Date;
///
/// let convention: DayCountConvention = "ACT/365F".parse().unwrap();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2026, 1, 1).unwrap();
/// assert_eq!(convention.year_fraction_f64(start, end), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360
    #[default]
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// Actual/Actual ISDA
    ActActIsda,
    /// 30/360 US (Bond Basis)
    Thirty360US,
    /// 30E/360 (Eurobond Basis)
    Thirty360E,
}

impl DayCountConvention {
    /// The implementation behind this convention.
    #[must_use]
    pub fn implementation(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::ActActIsda => &ActActIsda,
            DayCountConvention::Thirty360US => &Thirty360US,
            DayCountConvention::Thirty360E => &Thirty360E,
        }
    }

    /// Year fraction between two dates.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.implementation().year_fraction(start, end)
    }

    /// Year fraction as `f64`. NaN if the decimal cannot be represented.
    #[must_use]
    pub fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.implementation().year_fraction_f64(start, end)
    }

    /// Market name, e.g. "ACT/360".
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.implementation().name()
    }

    /// Returns all available conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const ALIASES: [(&str, DayCountConvention); 9] = [
    ("ACTUAL/360", DayCountConvention::Act360),
    ("ACT/365", DayCountConvention::Act365Fixed),
    ("ACT/365 FIXED", DayCountConvention::Act365Fixed),
    ("ACTUAL/365", DayCountConvention::Act365Fixed),
    ("ACT/ACT", DayCountConvention::ActActIsda),
    ("ACTUAL/ACTUAL", DayCountConvention::ActActIsda),
    ("30/360", DayCountConvention::Thirty360US),
    ("BOND", DayCountConvention::Thirty360US),
    ("EUROBOND", DayCountConvention::Thirty360E),
];

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Accepts market names ("ACT/360"), variant names ("Act360") and a few
    /// common aliases, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name) || format!("{c:?}").eq_ignore_ascii_case(name))
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|&(_, c)| c)
            })
            .ok_or_else(|| CoreError::DayCountParse {
                name: s.to_string(),
            })
    }
}
