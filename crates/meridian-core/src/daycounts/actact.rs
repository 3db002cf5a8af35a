//! Actual/Actual ISDA day count convention.

use chrono::Datelike;
use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA.
///
/// Days falling in leap years are divided by 366, the rest by 365.
/// Reversed dates give the negated fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl ActActIsda {
    fn forward_fraction(start: Date, end: Date) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut current = start;

        while current.year() < end.year() {
            let ordinal = i64::from(current.as_naive_date().ordinal());
            let days_in_year = i64::from(current.days_in_year());
            // days up to and including Dec 31
            let days = days_in_year - ordinal + 1;
            total += Decimal::from(days) / Decimal::from(days_in_year);
            current = current.add_days(days);
        }

        if current < end {
            total += Decimal::from(current.days_between(&end))
                / Decimal::from(current.days_in_year());
        }

        total
    }
}

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start <= end {
            Self::forward_fraction(start, end)
        } else {
            -Self::forward_fraction(end, start)
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_years() {
        let dc = ActActIsda;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(dc.year_fraction(start, end), dec!(2));
    }

    #[test]
    fn test_spans_leap_boundary() {
        let dc = ActActIsda;
        let start = Date::from_ymd(2023, 11, 1).unwrap();
        let end = Date::from_ymd(2024, 3, 1).unwrap();

        // 61 days in 2023, 60 days in 2024
        let expected = dec!(61) / dec!(365) + dec!(60) / dec!(366);
        assert_eq!(dc.year_fraction(start, end), expected);
        assert_eq!(dc.day_count(start, end), 121);
    }

    #[test]
    fn test_reversed_dates_negate() {
        let dc = ActActIsda;
        let a = Date::from_ymd(2023, 11, 1).unwrap();
        let b = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(dc.year_fraction(b, a), -dc.year_fraction(a, b));
        assert_eq!(dc.year_fraction(a, a), Decimal::ZERO);
    }
}
