//! Tenor (period) representation such as 3M, 1Y, 10Y.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A calendar period expressed in a single unit.
///
/// Serialized as its display string ("6M", "10Y").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tenor {
    /// Days
    Days(u32),
    /// Weeks
    Weeks(u32),
    /// Months
    Months(u32),
    /// Years
    Years(u32),
}

impl Tenor {
    /// Parses a tenor from a string such as "3M", "1Y", "2W".
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTenor` if the string is malformed.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let s = s.trim().to_uppercase();
        if s.len() < 2 || !s.is_ascii() {
            return Err(CoreError::invalid_tenor(format!("'{s}' is too short")));
        }

        let (num_str, unit) = s.split_at(s.len() - 1);
        let num: u32 = num_str
            .parse()
            .map_err(|_| CoreError::invalid_tenor(format!("invalid number: {num_str}")))?;

        match unit {
            "D" => Ok(Tenor::Days(num)),
            "W" => Ok(Tenor::Weeks(num)),
            "M" => Ok(Tenor::Months(num)),
            "Y" => Ok(Tenor::Years(num)),
            _ => Err(CoreError::invalid_tenor(format!("invalid unit: {unit}"))),
        }
    }

    /// Approximate length in years (Days/365, Weeks*7/365, Months/12, Years).
    #[must_use]
    pub fn approx_years(&self) -> f64 {
        match self {
            Tenor::Days(d) => f64::from(*d) / 365.0,
            Tenor::Weeks(w) => f64::from(*w) * 7.0 / 365.0,
            Tenor::Months(m) => f64::from(*m) / 12.0,
            Tenor::Years(y) => f64::from(*y),
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenor::Days(d) => write!(f, "{}D", d),
            Tenor::Weeks(w) => write!(f, "{}W", w),
            Tenor::Months(m) => write!(f, "{}M", m),
            Tenor::Years(y) => write!(f, "{}Y", y),
        }
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tenor::parse(s)
    }
}

impl TryFrom<String> for Tenor {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tenor::parse(&value)
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}
