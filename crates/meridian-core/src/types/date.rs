//! Calendar date used for valuation dates, maturities and fixings.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Tenor;

/// A calendar date without time zone.
///
/// Newtype over `chrono::NaiveDate`, serialized as an ISO 8601 string.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{Date, Tenor};
///
/// let valuation = Date::from_ymd(2011, 11, 10).unwrap();
/// let six_months = valuation.add_tenor(Tenor::Months(6)).unwrap();
/// assert_eq!(six_months, Date::from_ymd(2012, 5, 10).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.0.leap_year() {
            366
        } else {
            365
        }
    }

    /// True on the last day of a month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.add_days(1).month() != self.month()
    }

    /// Shifts the date by a signed number of calendar days.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Shifts the date by a signed number of months. Days past the end of
    /// the target month fall back to its last day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(step)
        } else {
            self.0.checked_sub_months(step)
        };
        shifted
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} shifted by {months} months")))
    }

    /// Adds a tenor using calendar arithmetic (no business day adjustment).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_tenor(&self, tenor: Tenor) -> CoreResult<Self> {
        let out_of_range = || CoreError::invalid_date(format!("{self} shifted by {tenor}"));
        match tenor {
            Tenor::Days(d) => self.checked_add_days(i64::from(d)).ok_or_else(out_of_range),
            Tenor::Weeks(w) => self.checked_add_days(7 * i64::from(w)).ok_or_else(out_of_range),
            Tenor::Months(m) => self.add_months(i32::try_from(m).map_err(|_| out_of_range())?),
            Tenor::Years(y) => {
                let months = y
                    .checked_mul(12)
                    .and_then(|m| i32::try_from(m).ok())
                    .ok_or_else(out_of_range)?;
                self.add_months(months)
            }
        }
    }

    fn checked_add_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|step| self.0.checked_add_signed(step))
            .map(Date)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Negative when `other` is before `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
