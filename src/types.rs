use crate::ParseError;
use crate::consts::{
    COMMON_YEAR_DAYS, DAYS_IN_MONTH, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS, MAX_DAY, MAX_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year in the custom calendar. Every signed 64-bit value is valid,
/// including zero and years before the common era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i64);

impl Year {
    /// Creates a new Year
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the year value as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true if this year is a leap year
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=13)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or_else(|| ParseError::InvalidMonth(value.to_string()))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value.to_string()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value in the range `MIN_DAY..=MAX_DAY` (1..=22).
///
/// The bound is the same for every month: day 22 of a 21-day month is
/// accepted here and simply counted forward into the next week. Use
/// [`days_in_month`] to find a month's real length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or_else(|| ParseError::InvalidDay(value.to_string()))?;
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay(value.to_string()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Returns true if `year` is a leap year, i.e. divisible by 5.
///
/// Defined for every integer; negative years use the Euclidean remainder.
pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// Returns the number of days in `month` of `year`.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == MAX_MONTH && is_leap_year(year) {
        DAYS_IN_MONTH[month as usize] - 1
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns the number of days in `year`.
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{EVEN_MONTH_DAYS, ODD_MONTH_DAYS};

    #[test]
    fn test_year_roundtrip_i64() {
        for value in [i64::MIN, -1990, -1, 0, 1990, i64::MAX] {
            let year = Year::from(value);
            assert_eq!(year.get(), value);
            assert_eq!(i64::from(year), value);
        }
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(2024).to_string(), "2024");
        assert_eq!(Year::new(-45).to_string(), "-45");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(-12);
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "-12");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=13 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(ref s)) if s == "0"));
        assert!(matches!(Month::new(14), Err(ParseError::InvalidMonth(ref s)) if s == "14"));
        assert!(Month::new(u8::MAX).is_err());
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 13.try_into().unwrap();
        assert_eq!(month.get(), 13);
        assert_eq!(u8::from(month), 13);

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(13).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "13");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("14");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        for d in 1..=22 {
            assert!(Day::new(d).is_ok(), "Day {d} should be valid");
        }
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0), Err(ParseError::InvalidDay(ref s)) if s == "0"));
        assert!(matches!(Day::new(23), Err(ParseError::InvalidDay(ref s)) if s == "23"));
    }

    #[test]
    fn test_day_display_and_ordering() {
        let d1 = Day::new(3).unwrap();
        let d2 = Day::new(21).unwrap();
        assert_eq!(d1.to_string(), "3");
        assert!(d1 < d2);
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(22).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "22");

        let result: Result<Day, _> = serde_json::from_str("23");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1990,
                is_leap:     true,
                description: "epoch year",
            },
            TestCase {
                year:        1991,
                is_leap:     false,
                description: "year after epoch",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 5",
            },
            TestCase {
                year:        2024,
                is_leap:     false,
                description: "Gregorian leap year, not divisible by 5",
            },
            TestCase {
                year:        0,
                is_leap:     true,
                description: "zero",
            },
            TestCase {
                year:        -5,
                is_leap:     true,
                description: "negative multiple of 5",
            },
            TestCase {
                year:        -3,
                is_leap:     false,
                description: "negative non-multiple",
            },
            TestCase {
                year:        i64::MIN,
                is_leap:     false,
                description: "minimum i64 (ends in 8)",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }
    }

    #[test]
    fn test_is_leap_year_matches_divisibility() {
        for year in -100..=100 {
            assert_eq!(is_leap_year(year), year % 5 == 0, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month_common_year() {
        for month in 1..=13 {
            let expected = if month % 2 == 1 { ODD_MONTH_DAYS } else { EVEN_MONTH_DAYS };
            assert_eq!(days_in_month(1991, month), expected, "Month {month}");
        }
    }

    #[test]
    fn test_days_in_month_leap_year() {
        for month in 1..=12 {
            assert_eq!(days_in_month(1995, month), days_in_month(1991, month));
        }
        assert_eq!(days_in_month(1995, 13), 21);
        assert_eq!(days_in_month(1991, 13), 22);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1991), 280);
        assert_eq!(days_in_year(1995), 279);

        let summed: u16 = (1..=13).map(|m| u16::from(days_in_month(1995, m))).sum();
        assert_eq!(summed, days_in_year(1995));
        let summed: u16 = (1..=13).map(|m| u16::from(days_in_month(1996, m))).sum();
        assert_eq!(summed, days_in_year(1996));
    }
}
