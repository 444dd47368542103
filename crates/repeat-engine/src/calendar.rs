//! Calendar arithmetic on zone-less Gregorian dates.
//!
//! Everything here is a pure function over `chrono::NaiveDate`. The shift
//! functions never clamp: when the anchor's day-of-month does not exist in the
//! target month they report [`Shifted::Missing`] and leave the decision to the
//! caller.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{RepeatError, Result};

/// Outcome of moving a date by a calendar offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shifted {
    /// The shifted date exists.
    Exists(NaiveDate),
    /// The target month exists but lacks the source day-of-month
    /// (e.g. the 31st in September, or Feb 29 in a common year).
    Missing { year: i32, month: u32 },
    /// The target lies outside the range `NaiveDate` can represent.
    OutOfRange,
}

impl Shifted {
    /// The shifted date, if it exists.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Shifted::Exists(date) => Some(date),
            Shifted::Missing { .. } | Shifted::OutOfRange => None,
        }
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
///
/// # Errors
/// Returns `RepeatError::InvalidMonth` if `month` is outside `1..=12`.
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(RepeatError::InvalidMonth(month));
    }
    Ok(month_length(year, month))
}

// Caller guarantees 1 <= month <= 12.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of `date` as `0..=6`, with 0 = Sunday.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Move `date` by a (possibly negative) number of days. Every day offset
/// lands on an existing date unless the calendar range is exceeded.
pub fn try_shift_by_days(date: NaiveDate, days: i64) -> Shifted {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.map_or(Shifted::OutOfRange, Shifted::Exists)
}

/// Move `date` by `months`, keeping its day-of-month.
///
/// `2025-08-31` shifted by one month is `Missing { year: 2025, month: 9 }`,
/// never `2025-09-30`.
pub fn try_shift_by_months(date: NaiveDate, months: i32) -> Shifted {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let Ok(year) = i32::try_from(total.div_euclid(12)) else {
        return Shifted::OutOfRange;
    };
    // rem_euclid(12) is always in 0..12.
    let month = total.rem_euclid(12) as u32 + 1;

    let day = date.day();
    if day > month_length(year, month) {
        return Shifted::Missing { year, month };
    }

    NaiveDate::from_ymd_opt(year, month, day).map_or(Shifted::OutOfRange, Shifted::Exists)
}

/// Move `date` by `years`, keeping month and day. A Feb 29 source landing on
/// a common year is `Missing`, never remapped to Feb 28 or Mar 1.
pub fn try_shift_by_years(date: NaiveDate, years: i32) -> Shifted {
    match years.checked_mul(12) {
        Some(months) => try_shift_by_months(date, months),
        None => Shifted::OutOfRange,
    }
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Signed number of calendar months from `from`'s month to `to`'s month,
/// ignoring the day-of-month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (i64::from(to.year()) - i64::from(from.year())) * 12 + i64::from(to.month())
        - i64::from(from.month())
}

/// Signed number of calendar years from `from`'s year to `to`'s year.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year()) - i64::from(from.year())
}

/// First day of the given month, if representable.
pub(crate) fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Only the 10-character zero-padded form is accepted; `2025-8-1`,
/// `2025-08-01T00:00:00` and nonexistent days such as `2025-02-30` are errors.
///
/// # Errors
/// Returns `RepeatError::InvalidDate` describing what is wrong with `input`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = |reason: &str| RepeatError::InvalidDate {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid("expected YYYY-MM-DD"));
    }
    let all_digits = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !all_digits {
        return Err(invalid("expected YYYY-MM-DD"));
    }

    // All ten bytes are ASCII, so these slices are on char boundaries.
    let year: i32 = input[0..4].parse().map_err(|_| invalid("bad year"))?;
    let month: u32 = input[5..7].parse().map_err(|_| invalid("bad month"))?;
    let day: u32 = input[8..10].parse().map_err(|_| invalid("bad day"))?;

    if !(1..=12).contains(&month) {
        return Err(invalid("month out of range"));
    }
    if day == 0 || day > month_length(year, month) {
        return Err(invalid("day does not exist in month"));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("date out of range"))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
