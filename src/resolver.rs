//! Weekday resolution relative to the 1990 epoch.
//!
//! A common year is exactly 40 weeks long, so January 1st only moves when a
//! leap year (one day short) is crossed. [`epoch_shift`] counts those
//! crossings, [`january_first`] anchors the count to the epoch weekday, and
//! the month offset table plus the day number finish the job.

use crate::consts::{DAYS_IN_WEEK, EPOCH_WEEKDAY, EPOCH_YEAR, LEAP_YEAR_CYCLE, MONTH_OFFSETS};
use crate::types::{Day, Month, Year};
use crate::Weekday;

/// Number of weekdays January 1st of `year` is shifted from the epoch's.
///
/// `(EPOCH_YEAR - year) / 5`, rounded away from zero: ceiling for years
/// before the epoch, floor for years after it, zero at the epoch itself.
pub(crate) const fn epoch_shift(year: Year) -> i128 {
    let distance = EPOCH_YEAR as i128 - year.get() as i128;
    let cycle = LEAP_YEAR_CYCLE as i128;
    if distance < 0 {
        distance.div_euclid(cycle)
    } else {
        -(-distance).div_euclid(cycle)
    }
}

/// Returns the weekday of January 1st of `year`.
pub const fn january_first(year: Year) -> Weekday {
    Weekday::wrapping(epoch_shift(year) + EPOCH_WEEKDAY.index() as i128)
}

/// Weekday index of the 1st of `month`, not yet reduced modulo 7.
pub(crate) const fn first_of_month(year: Year, month: Month) -> u8 {
    january_first(year).index() + MONTH_OFFSETS[month.get() as usize]
}

/// Returns the weekday of the given day.
pub const fn weekday_of(year: Year, month: Month, day: Day) -> Weekday {
    let index = (first_of_month(year, month) + day.get() - 1) % DAYS_IN_WEEK;
    Weekday::ALL[index as usize]
}
