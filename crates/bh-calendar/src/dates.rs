//! Date helpers layered over `chrono::NaiveDate`.
//!
//! `chrono` supplies construction, weekday, ordering, and day arithmetic.
//! This module adds the checked constructors and weekday lookups the
//! holiday rules need, mapping chrono's `Option`s onto [`Error::Date`].

use bh_core::ensure;
use bh_core::errors::{Error, Result};
use bh_core::{DayCount, Year};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Create a date from year, month (1–12), and day-of-month.
pub fn ymd(year: Year, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a valid date")))
}

/// Check that every day of `year` is representable.
pub fn check_year(year: Year) -> Result<()> {
    ymd(year, 1, 1)?;
    ymd(year, 12, 31)?;
    Ok(())
}

/// Return `true` if `date` is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance by `n` days (negative `n` moves backwards).
pub fn add_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let step = Days::new(n.unsigned_abs());
    let moved = if n >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    moved.ok_or_else(|| Error::Date(format!("{date} moved by {n} days is out of range")))
}

/// Return `date` itself if it is a weekday, otherwise the following Monday.
///
/// Only Saturdays and Sundays are skipped; bank holidays are not.
pub fn roll_past_weekend(date: NaiveDate) -> Result<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => add_days(date, 2),
        Weekday::Sun => add_days(date, 1),
        _ => Ok(date),
    }
}

/// Return the *n*-th occurrence of `weekday` in `month` of `year`.
///
/// `nth_weekday(1, Weekday::Mon, 2011, 5)` is the first Monday of May 2011
/// (2011-05-02).
pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u32) -> Result<NaiveDate> {
    ensure!(n >= 1, "nth_weekday: n must be >= 1");
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).ok_or_else(|| {
        Error::Date(format!(
            "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
        ))
    })
}

/// Return the last day of `month` in `year`.
pub fn end_of_month(year: Year, month: u32) -> Result<NaiveDate> {
    ymd(year, month, 1)?;
    let next_first = if month == 12 {
        ymd(year + 1, 1, 1)
    } else {
        ymd(year, month + 1, 1)
    };
    match next_first {
        Ok(next) => add_days(next, -1),
        // December of the last representable year.
        Err(_) => ymd(year, 12, 31),
    }
}

/// Return the last occurrence of `weekday` in `month` of `year`.
pub fn last_weekday(weekday: Weekday, year: Year, month: u32) -> Result<NaiveDate> {
    let last = end_of_month(year, month)?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    add_days(last, -i64::from(back))
}

/// Number of days in the inclusive range `[start, end]` (zero if
/// `end < start`).
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> DayCount {
    let span = end.signed_duration_since(start).num_days() + 1;
    DayCount::try_from(span.max(0)).unwrap_or(DayCount::MAX)
}

/// Number of Saturdays and Sundays in the inclusive range `[start, end]`.
///
/// Walks the range one day at a time.
pub fn weekend_days_between(start: NaiveDate, end: NaiveDate) -> DayCount {
    let mut count = 0;
    for day in start.iter_days().take_while(|d| *d <= end) {
        if is_weekend(day) {
            count += 1;
        }
    }
    count
}
