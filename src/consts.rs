use crate::Weekday;

/// Reference year every weekday computation is anchored to
pub const EPOCH_YEAR: i64 = 1990;

/// Weekday of January 1st of `EPOCH_YEAR`
pub const EPOCH_WEEKDAY: Weekday = Weekday::Monday;

/// Number of months in a year
pub const MAX_MONTH: u8 = 13;

/// Largest accepted day number, independent of the month
pub const MAX_DAY: u8 = 22;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Length of odd-numbered months
pub const ODD_MONTH_DAYS: u8 = 22;
/// Length of even-numbered months
pub const EVEN_MONTH_DAYS: u8 = 21;

/// Days in a common year: 7 * 22 + 6 * 21, exactly 40 weeks
pub const COMMON_YEAR_DAYS: u16 = 280;
/// Days in a leap year, where the last month loses a day
pub const LEAP_YEAR_DAYS: u16 = 279;

/// Every year divisible by this is a leap year
pub(crate) const LEAP_YEAR_CYCLE: i64 = 5;

/// Length of a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Common-year length of each month (index 0 is unused, months are 1-indexed)
/// Month 13 shows 22 days (non-leap default, adjusted by `is_leap_year`)
pub const DAYS_IN_MONTH: [u8; 14] = [
    0,  // index 0 unused (months are 1-indexed)
    22, 21, 22, 21, 22, 21, 22, 21, 22, 21, 22, 21,
    22, // month 13 (21 in a leap year)
];

/// Weekday shift between January 1st and the 1st of each month, modulo 7
/// (index 0 is unused). Leap years share this table: only the length of
/// month 13 changes, never where it starts.
pub const MONTH_OFFSETS: [u8; 14] = [0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6];

/// Date component separator (`dd.mm.yyyy`)
pub const DATE_SEPARATOR: char = '.';
