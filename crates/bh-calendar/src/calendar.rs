//! `Calendar` trait and the England and Wales calendar.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].

use bh_core::errors::Result;
use chrono::{Datelike, NaiveDate};

use crate::business_day_convention::BusinessDayConvention;
use crate::calculator::BankHolidayCalculator;
use crate::dates::add_days;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"England and Wales"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        crate::dates::is_weekend(date)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: NaiveDate, convention: BusinessDayConvention) -> Result<NaiveDate> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.roll(date, 1),
            BusinessDayConvention::Preceding => self.roll(date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.roll(date, 1)?;
                if adjusted.month() != date.month() {
                    self.roll(date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.roll(date, -1)?;
                if adjusted.month() != date.month() {
                    self.roll(date, 1)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Step from `date` in direction `step` (±1) until a business day is
    /// reached.  Returns `date` itself if it is already a business day.
    fn roll(&self, mut date: NaiveDate, step: i64) -> Result<NaiveDate> {
        while self.is_holiday(date) {
            date = add_days(date, step)?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` business days (negative `n` moves backwards).
    fn advance_business_days(&self, mut date: NaiveDate, n: i32) -> Result<NaiveDate> {
        let step: i64 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = add_days(date, step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Negative if `d2 < d1`.
    fn business_days_between(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_day(*d))
            .count() as i64;
        sign * count
    }
}

/// The England and Wales bank-holiday calendar: Saturdays, Sundays, and
/// the eight bank holidays are non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglandAndWales;

impl Calendar for EnglandAndWales {
    fn name(&self) -> &str {
        "England and Wales"
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        BankHolidayCalculator::for_date(date).is_working_day(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
    }
}
