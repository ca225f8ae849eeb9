//! # Dates
//!
//! A stock only cares about "which day" something happened, so dates are
//! stored as `(year, day_of_year)` pairs instead of full timestamps.
//!
//! Day differences use a flat 365-day year. Leap days are not accounted for,
//! so a span crossing Feb 29 can be off by one.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// Days in a year for the purpose of `days_since`.
pub const DAYS_PER_YEAR: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: i32,
    /// 1-based ordinal day within `year`.
    pub day_of_year: u16,
}

impl Date {
    /// Build a date. A `day_of_year` of 0 is bumped to 1.
    pub fn new(year: i32, day_of_year: u16) -> Self {
        Self {
            year,
            day_of_year: day_of_year.max(1),
        }
    }

    /// Today's date according to the local clock.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Number of days from `other` to `self` (positive when `self` is later).
    pub fn days_since(&self, other: Date) -> i64 {
        self.day_number() - other.day_number()
    }

    fn day_number(&self) -> i64 {
        i64::from(self.year) * DAYS_PER_YEAR + i64::from(self.day_of_year)
    }

    /// The calendar date, if `day_of_year` exists in `year`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.year, u32::from(self.day_of_year))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        // ordinal() is always in 1..=366
        Date::new(date.year(), date.ordinal() as u16)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive_date() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "{} day {}", self.year, self.day_of_year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_since_same_year() {
        let later = Date::new(2024, 200);
        let earlier = Date::new(2024, 150);
        assert_eq!(later.days_since(earlier), 50);
    }

    #[test]
    fn test_days_since_is_antisymmetric() {
        let pairs = [
            (Date::new(2024, 1), Date::new(2023, 365)),
            (Date::new(1, 300), Date::new(2024, 200)),
            (Date::new(2000, 60), Date::new(2000, 60)),
            (Date::new(-5, 10), Date::new(3, 1)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.days_since(b), -b.days_since(a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_days_since_crosses_year_boundary() {
        assert_eq!(Date::new(2024, 1).days_since(Date::new(2023, 365)), 1);
    }

    #[test]
    fn test_days_since_ignores_leap_years() {
        // 2024 has 366 days, but the flat multiplier treats it as 365.
        assert_eq!(Date::new(2025, 1).days_since(Date::new(2024, 1)), 365);
    }

    #[test]
    fn test_zero_day_of_year_is_clamped() {
        assert_eq!(Date::new(2024, 0).day_of_year, 1);
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(Date::from(naive), Date::new(2024, 32));
    }

    #[test]
    fn test_display() {
        assert_eq!(Date::new(2024, 32).to_string(), "2024-02-01");
        assert_eq!(Date::new(2023, 366).to_string(), "2023 day 366");
    }
}
