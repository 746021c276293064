//! Weekday lookup for a thirteen-month calendar.
//!
//! Odd months have 22 days and even months 21, so a common year is exactly
//! 280 days (40 weeks). Every year divisible by 5 is a leap year whose last
//! month loses a day. Weekdays are anchored to January 1st 1990, a Monday.
//!
//! ```
//! use custom_calendar::{Weekday, resolve_weekday};
//!
//! assert_eq!(resolve_weekday("02.07.1991"), Some(Weekday::Thursday));
//! assert_eq!(resolve_weekday("01/01/2018"), None);
//! ```

mod consts;
mod prelude;
mod resolver;
mod types;
mod weekday;

pub use consts::*;
pub use resolver::{january_first, weekday_of};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
pub use weekday::Weekday;

use crate::prelude::*;
use std::str::FromStr;

/// A validated date in the custom calendar.
///
/// Ordering is chronological: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}.{:02}.{:04}", "day.get()", "month.get()", "year.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Reason a date could not be resolved. The message names the offending
/// token and is meant for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not three `.`-separated components.
    #[error("Invalid date format: {0:?} (expected dd{sep}mm{sep}yyyy)", sep = DATE_SEPARATOR)]
    InvalidFormat(String),

    /// Year is not an integer.
    #[error("Invalid year: {0:?} (must be an integer)")]
    InvalidYear(String),

    /// Month is not an integer in `1..=MAX_MONTH`.
    #[error("Invalid month: {0:?} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(String),

    /// Day is not an integer in `1..=MAX_DAY`.
    #[error("Invalid day: {0:?} (must be 1-{max})", max = MAX_DAY)]
    InvalidDay(String),
}

impl CalendarDate {
    /// Creates a new date (types are already validated)
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw components
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` if a
    /// component is out of range.
    pub fn from_parts(year: i64, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year),
            month: Month::new(month)?,
            day:   Day::new(day)?,
        })
    }

    /// Returns the year
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns the day of the week this date falls on
    pub const fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month, self.day)
    }

    /// Returns true if the date's year is a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Returns true if the day exists in its month.
    ///
    /// Parsing only bounds days by `MAX_DAY`, so day 22 of an even month
    /// (or of month 13 in a leap year) is a valid `CalendarDate` for which
    /// this returns false.
    pub const fn fits_month(&self) -> bool {
        self.day.get() <= days_in_month(self.year.get(), self.month.get())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let year = Self::parse_year(year)?;
        let month = Self::parse_month(month)?;
        let day = Self::parse_day(day)?;

        Ok(Self { year, month, day })
    }
}

impl CalendarDate {
    fn parse_year(s: &str) -> Result<Year, ParseError> {
        s.parse::<i64>()
            .map(Year::new)
            .map_err(|_| ParseError::InvalidYear(s.to_owned()))
    }

    fn parse_month(s: &str) -> Result<Month, ParseError> {
        s.parse::<u8>()
            .ok()
            .and_then(|value| Month::new(value).ok())
            .ok_or_else(|| ParseError::InvalidMonth(s.to_owned()))
    }

    fn parse_day(s: &str) -> Result<Day, ParseError> {
        s.parse::<u8>()
            .ok()
            .and_then(|value| Day::new(value).ok())
            .ok_or_else(|| ParseError::InvalidDay(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolves a `dd.mm.yyyy` date to its weekday, reporting why it failed.
///
/// # Errors
/// Returns the first `ParseError` found, checking the format, then the year,
/// month and day.
pub fn try_resolve_weekday(text: &str) -> Result<Weekday, ParseError> {
    text.parse::<CalendarDate>().map(|date| date.weekday())
}

/// Resolves a `dd.mm.yyyy` date to its weekday, or `None` if the input is
/// not a valid date.
pub fn resolve_weekday(text: &str) -> Option<Weekday> {
    try_resolve_weekday(text).ok()
}
