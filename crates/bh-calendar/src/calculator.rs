//! `BankHolidayCalculator`: holiday lookups and range arithmetic.
//!
//! The calculator is anchored at a year, which is only the default for the
//! no-argument holiday accessors.  Membership tests use the year of the date
//! being tested, and range queries evaluate every spanned year explicitly,
//! so the anchor is never changed after construction.

use bh_core::errors::{Error, Result};
use bh_core::{DayCount, Settings, Year};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::dates::{check_year, days_inclusive, is_weekend, weekend_days_between, ymd};
use crate::holiday::{BankHoliday, HolidayDate};

/// Computes England and Wales bank holidays and working-day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BankHolidayCalculator {
    year: Year,
}

impl BankHolidayCalculator {
    /// Anchor a calculator at `year`.
    ///
    /// Returns an error if `chrono` cannot represent every day of `year`.
    pub fn new(year: Year) -> Result<Self> {
        check_year(year)?;
        Ok(Self { year })
    }

    /// Anchor a calculator at the year of `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self { year: date.year() }
    }

    /// Anchor a calculator at the year of the evaluation date in
    /// [`Settings`] (today, unless overridden).
    pub fn current() -> Self {
        Self::for_date(Settings::instance().evaluation_date())
    }

    /// The anchor year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// January 1 of the anchor year.
    pub fn anchor_date(&self) -> NaiveDate {
        self.resolve(ymd(self.year, 1, 1))
    }

    // ── Holidays in the anchor year ──────────────────────────────────────────

    /// The observed date of `holiday` in the anchor year.
    pub fn date_of(&self, holiday: BankHoliday) -> NaiveDate {
        self.resolve(holiday.date_in(self.year))
    }

    /// The observed date of `holiday` in the year of `date`.
    pub fn date_for(&self, holiday: BankHoliday, date: NaiveDate) -> NaiveDate {
        self.resolve(holiday.date_in(date.year()))
    }

    /// New Year's Day in the anchor year.
    pub fn new_years_day(&self) -> NaiveDate {
        self.date_of(BankHoliday::NewYearsDay)
    }

    /// New Year's Day in the year of `date`.
    pub fn new_years_day_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::NewYearsDay, date)
    }

    /// Good Friday in the anchor year.
    pub fn good_friday(&self) -> NaiveDate {
        self.date_of(BankHoliday::GoodFriday)
    }

    /// Good Friday in the year of `date`.
    pub fn good_friday_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::GoodFriday, date)
    }

    /// Easter Monday in the anchor year.
    pub fn easter_monday(&self) -> NaiveDate {
        self.date_of(BankHoliday::EasterMonday)
    }

    /// Easter Monday in the year of `date`.
    pub fn easter_monday_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::EasterMonday, date)
    }

    /// Early May bank holiday in the anchor year.
    pub fn early_may_bank_holiday(&self) -> NaiveDate {
        self.date_of(BankHoliday::EarlyMayBankHoliday)
    }

    /// Early May bank holiday in the year of `date`.
    pub fn early_may_bank_holiday_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::EarlyMayBankHoliday, date)
    }

    /// Spring bank holiday in the anchor year.
    pub fn spring_bank_holiday(&self) -> NaiveDate {
        self.date_of(BankHoliday::SpringBankHoliday)
    }

    /// Spring bank holiday in the year of `date`.
    pub fn spring_bank_holiday_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::SpringBankHoliday, date)
    }

    /// Summer bank holiday in the anchor year.
    pub fn summer_bank_holiday(&self) -> NaiveDate {
        self.date_of(BankHoliday::SummerBankHoliday)
    }

    /// Summer bank holiday in the year of `date`.
    pub fn summer_bank_holiday_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::SummerBankHoliday, date)
    }

    /// Christmas Day in the anchor year.
    pub fn christmas_day(&self) -> NaiveDate {
        self.date_of(BankHoliday::ChristmasDay)
    }

    /// Christmas Day in the year of `date`.
    pub fn christmas_day_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::ChristmasDay, date)
    }

    /// Boxing Day in the anchor year.
    pub fn boxing_day(&self) -> NaiveDate {
        self.date_of(BankHoliday::BoxingDay)
    }

    /// Boxing Day in the year of `date`.
    pub fn boxing_day_for(&self, date: NaiveDate) -> NaiveDate {
        self.date_for(BankHoliday::BoxingDay, date)
    }

    /// Every bank holiday of the anchor year, in registry order.
    pub fn holidays(&self) -> Vec<HolidayDate> {
        self.resolve(holidays_in_year(self.year))
    }

    // ── Membership ───────────────────────────────────────────────────────────

    /// Return the bank holiday observed on `date`, if any.
    ///
    /// The rules are evaluated for the year of `date`, whatever the anchor.
    pub fn is_a_bank_holiday(&self, date: NaiveDate) -> Option<BankHoliday> {
        BankHoliday::ALL
            .into_iter()
            .find(|h| h.date_in(date.year()).ok() == Some(date))
    }

    /// Return `true` if `date` is a weekday and not a bank holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && self.is_a_bank_holiday(date).is_none()
    }

    /// The first working day strictly after `date`.
    pub fn next_working_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        let mut d = date;
        loop {
            d = d
                .succ_opt()
                .ok_or_else(|| Error::Date(format!("no working day after {date}")))?;
            if self.is_working_day(d) {
                return Ok(d);
            }
        }
    }

    // ── Range queries ────────────────────────────────────────────────────────

    /// Every bank holiday in the inclusive range `[start, end]`, in date
    /// order.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] unless `start < end`.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<HolidayDate>> {
        check_range(start, end)?;
        let mut found = Vec::new();
        for year in start.year()..=end.year() {
            let in_range: Vec<_> = holidays_in_year(year)?
                .into_iter()
                .filter(|h| (start..=end).contains(&h.date))
                .collect();
            trace!(year, count = in_range.len(), "bank holidays in range for year");
            found.extend(in_range);
        }
        found.sort();
        Ok(found)
    }

    /// Number of bank holidays in the inclusive range `[start, end]`.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] unless `start < end`.
    pub fn bank_holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Result<DayCount> {
        let count = self.holidays_between(start, end)?.len() as DayCount;
        debug!(%start, %end, count, "counted bank holidays");
        Ok(count)
    }

    /// Number of working days (weekdays that are not bank holidays) in the
    /// inclusive range `[start, end]`.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] unless `start < end`.
    pub fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> Result<DayCount> {
        let holidays = self.bank_holidays_between(start, end)?;
        let days = days_inclusive(start, end);
        let weekends = weekend_days_between(start, end);
        // Every rule lands on a weekday, so holidays and weekends are disjoint.
        let working = days - weekends - holidays;
        debug!(%start, %end, days, weekends, holidays, working, "counted working days");
        Ok(working)
    }

    // Anchor years are validated at construction and holiday dates never
    // leave their year, so rule evaluation for an anchor cannot fail.
    fn resolve<T>(&self, value: Result<T>) -> T {
        match value {
            Ok(v) => v,
            Err(e) => unreachable!("year {} was validated: {e}", self.year),
        }
    }
}

impl Default for BankHolidayCalculator {
    /// Same as [`BankHolidayCalculator::current`].
    fn default() -> Self {
        Self::current()
    }
}

/// Every bank holiday of `year`, in registry order.
pub fn holidays_in_year(year: Year) -> Result<Vec<HolidayDate>> {
    BankHoliday::ALL
        .iter()
        .map(|h| h.observed_in(year))
        .collect()
}

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start >= end {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor() {
        let calc = BankHolidayCalculator::new(2011).unwrap();
        assert_eq!(calc.year(), 2011);
        assert_eq!(calc.anchor_date(), date(2011, 1, 1));
        assert!(BankHolidayCalculator::new(Year::MAX).is_err());
    }

    #[test]
    fn accessors_use_anchor_or_supplied_year() {
        let calc = BankHolidayCalculator::new(2011).unwrap();
        assert_eq!(calc.christmas_day(), date(2011, 12, 27));
        assert_eq!(calc.christmas_day_for(date(2019, 7, 4)), date(2019, 12, 25));
        assert_eq!(calc.new_years_day_for(date(2017, 12, 31)), date(2017, 1, 2));
    }

    #[test]
    fn membership_uses_date_year() {
        let calc = BankHolidayCalculator::new(2011).unwrap();
        assert_eq!(
            calc.is_a_bank_holiday(date(2021, 12, 28)),
            Some(BankHoliday::BoxingDay)
        );
        assert_eq!(calc.is_a_bank_holiday(date(2021, 12, 26)), None);
    }

    #[test]
    fn next_working_day_skips_weekend_and_holidays() {
        let calc = BankHolidayCalculator::new(2011).unwrap();
        // Friday 2011-12-23 → Wednesday 2011-12-28
        assert_eq!(calc.next_working_day(date(2011, 12, 23)).unwrap(), date(2011, 12, 28));
        assert!(calc.next_working_day(NaiveDate::MAX).is_err());
    }

    #[test]
    fn invalid_range() {
        let calc = BankHolidayCalculator::new(2011).unwrap();
        let d = date(2011, 5, 2);
        assert_eq!(
            calc.bank_holidays_between(d, d),
            Err(Error::InvalidRange { start: d, end: d })
        );
        assert!(calc.working_days_between(date(2011, 6, 1), d).is_err());
    }

    #[test]
    fn holidays_between_sorted_across_years() {
        let calc = BankHolidayCalculator::new(2011).unwrap();
        let found = calc
            .holidays_between(date(2011, 12, 1), date(2012, 1, 31))
            .unwrap();
        let dates: Vec<_> = found.iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            [date(2011, 12, 26), date(2011, 12, 27), date(2012, 1, 2)]
        );
        assert_eq!(found[0].holiday, BankHoliday::BoxingDay);
        assert_eq!(found[1].holiday, BankHoliday::ChristmasDay);
    }
}
