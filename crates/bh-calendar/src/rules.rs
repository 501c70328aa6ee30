//! The England and Wales bank-holiday rules.
//!
//! Each function maps a year to the date on which the holiday is observed
//! that year, after any weekend substitution.  They are pure functions of
//! the year; the only failure is a year whose dates `chrono` cannot
//! represent.
//!
//! Substitution rules:
//! * New Year's Day (Jan 1; Sat or Sun → next Monday)
//! * Christmas Day (Dec 25; Sat → Mon 27, Sun → Tue 27)
//! * Boxing Day (Dec 26; Sat → Mon 28, Sun → Tue 28)
//!
//! The Easter holidays and the three Monday holidays never fall on a
//! weekend.

use bh_core::errors::Result;
use bh_core::Year;
use chrono::{Datelike, NaiveDate, Weekday};

use crate::dates::{add_days, last_weekday, nth_weekday, roll_past_weekend, ymd};
use crate::easter::easter_sunday;

/// New Year's Day: January 1, or the next Monday if that is a weekend.
pub fn new_years_day(year: Year) -> Result<NaiveDate> {
    roll_past_weekend(ymd(year, 1, 1)?)
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: Year) -> Result<NaiveDate> {
    add_days(easter_sunday(year)?, -2)
}

/// Easter Monday: the day after Easter Sunday.
pub fn easter_monday(year: Year) -> Result<NaiveDate> {
    add_days(easter_sunday(year)?, 1)
}

/// Early May bank holiday: the first Monday of May.
pub fn early_may_bank_holiday(year: Year) -> Result<NaiveDate> {
    nth_weekday(1, Weekday::Mon, year, 5)
}

/// Spring bank holiday: the last Monday of May.
pub fn spring_bank_holiday(year: Year) -> Result<NaiveDate> {
    last_weekday(Weekday::Mon, year, 5)
}

/// Summer bank holiday: the last Monday of August.
pub fn summer_bank_holiday(year: Year) -> Result<NaiveDate> {
    last_weekday(Weekday::Mon, year, 8)
}

/// Christmas Day: December 25.
///
/// A Saturday Christmas is observed on Monday 27th.  A Sunday Christmas is
/// observed on Tuesday 27th, because Boxing Day keeps Monday 26th.
pub fn christmas_day(year: Year) -> Result<NaiveDate> {
    substitute_for_weekend(ymd(year, 12, 25)?)
}

/// Boxing Day: December 26.
///
/// A Saturday Boxing Day is observed on Monday 28th.  A Sunday Boxing Day
/// is observed on Tuesday 28th, because Christmas takes Monday 27th.
pub fn boxing_day(year: Year) -> Result<NaiveDate> {
    substitute_for_weekend(ymd(year, 12, 26)?)
}

// Christmas and Boxing Day both move two days forward from a weekend:
// whichever of the pair lands on Saturday or Sunday skips past the other.
fn substitute_for_weekend(date: NaiveDate) -> Result<NaiveDate> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => add_days(date, 2),
        _ => Ok(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_2011() {
        assert_eq!(new_years_day(2011).unwrap(), date(2011, 1, 3));
        assert_eq!(good_friday(2011).unwrap(), date(2011, 4, 22));
        assert_eq!(easter_monday(2011).unwrap(), date(2011, 4, 25));
        assert_eq!(early_may_bank_holiday(2011).unwrap(), date(2011, 5, 2));
        assert_eq!(spring_bank_holiday(2011).unwrap(), date(2011, 5, 30));
        assert_eq!(summer_bank_holiday(2011).unwrap(), date(2011, 8, 29));
        assert_eq!(christmas_day(2011).unwrap(), date(2011, 12, 27));
        assert_eq!(boxing_day(2011).unwrap(), date(2011, 12, 26));
    }

    #[test]
    fn new_year_on_sunday() {
        // 2017-01-01 is a Sunday
        assert_eq!(new_years_day(2017).unwrap(), date(2017, 1, 2));
    }

    #[test]
    fn christmas_on_saturday() {
        // 2021-12-25 is a Saturday
        assert_eq!(christmas_day(2021).unwrap(), date(2021, 12, 27));
        assert_eq!(boxing_day(2021).unwrap(), date(2021, 12, 28));
    }

    #[test]
    fn christmas_on_friday() {
        // 2020-12-25 is a Friday, Boxing Day a Saturday
        assert_eq!(christmas_day(2020).unwrap(), date(2020, 12, 25));
        assert_eq!(boxing_day(2020).unwrap(), date(2020, 12, 28));
    }

    #[test]
    fn christmas_midweek() {
        // 2019-12-25 is a Wednesday
        assert_eq!(christmas_day(2019).unwrap(), date(2019, 12, 25));
        assert_eq!(boxing_day(2019).unwrap(), date(2019, 12, 26));
    }

    #[test]
    fn out_of_range_year() {
        assert!(new_years_day(Year::MAX).is_err());
        assert!(good_friday(Year::MIN).is_err());
    }
}
