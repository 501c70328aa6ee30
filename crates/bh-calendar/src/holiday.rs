//! The named bank holidays and their fixed registry order.
//!
//! [`BankHoliday::ALL`] is the registry: membership tests and range counts
//! iterate it in order, and each variant dispatches to its rule in
//! [`crate::rules`].

use bh_core::errors::{Error, Result};
use bh_core::Year;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::rules;

/// A named England and Wales bank holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BankHoliday {
    /// January 1, or the following Monday.
    NewYearsDay,
    /// The Friday before Easter Sunday.
    GoodFriday,
    /// The Monday after Easter Sunday.
    EasterMonday,
    /// First Monday of May.
    EarlyMayBankHoliday,
    /// Last Monday of May.
    SpringBankHoliday,
    /// Last Monday of August.
    SummerBankHoliday,
    /// December 25, or its substitute.
    ChristmasDay,
    /// December 26, or its substitute.
    BoxingDay,
}

impl BankHoliday {
    /// Every bank holiday, in registry order.
    pub const ALL: [BankHoliday; 8] = [
        BankHoliday::NewYearsDay,
        BankHoliday::GoodFriday,
        BankHoliday::EasterMonday,
        BankHoliday::EarlyMayBankHoliday,
        BankHoliday::SpringBankHoliday,
        BankHoliday::SummerBankHoliday,
        BankHoliday::ChristmasDay,
        BankHoliday::BoxingDay,
    ];

    /// Stable snake_case identifier (`"new_years_day"`, `"boxing_day"`, …).
    pub fn identifier(&self) -> &'static str {
        match self {
            BankHoliday::NewYearsDay => "new_years_day",
            BankHoliday::GoodFriday => "good_friday",
            BankHoliday::EasterMonday => "easter_monday",
            BankHoliday::EarlyMayBankHoliday => "early_may_bank_holiday",
            BankHoliday::SpringBankHoliday => "spring_bank_holiday",
            BankHoliday::SummerBankHoliday => "summer_bank_holiday",
            BankHoliday::ChristmasDay => "christmas_day",
            BankHoliday::BoxingDay => "boxing_day",
        }
    }

    /// Human-readable name (`"New Year's Day"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            BankHoliday::NewYearsDay => "New Year's Day",
            BankHoliday::GoodFriday => "Good Friday",
            BankHoliday::EasterMonday => "Easter Monday",
            BankHoliday::EarlyMayBankHoliday => "Early May bank holiday",
            BankHoliday::SpringBankHoliday => "Spring bank holiday",
            BankHoliday::SummerBankHoliday => "Summer bank holiday",
            BankHoliday::ChristmasDay => "Christmas Day",
            BankHoliday::BoxingDay => "Boxing Day",
        }
    }

    /// The date on which this holiday is observed in `year`.
    pub fn date_in(&self, year: Year) -> Result<NaiveDate> {
        let rule: fn(Year) -> Result<NaiveDate> = match self {
            BankHoliday::NewYearsDay => rules::new_years_day,
            BankHoliday::GoodFriday => rules::good_friday,
            BankHoliday::EasterMonday => rules::easter_monday,
            BankHoliday::EarlyMayBankHoliday => rules::early_may_bank_holiday,
            BankHoliday::SpringBankHoliday => rules::spring_bank_holiday,
            BankHoliday::SummerBankHoliday => rules::summer_bank_holiday,
            BankHoliday::ChristmasDay => rules::christmas_day,
            BankHoliday::BoxingDay => rules::boxing_day,
        };
        rule(year)
    }

    /// Evaluate this holiday for `year`, pairing the rule with its date.
    pub fn observed_in(&self, year: Year) -> Result<HolidayDate> {
        Ok(HolidayDate {
            holiday: *self,
            date: self.date_in(year)?,
        })
    }
}

impl std::fmt::Display for BankHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BankHoliday {
    type Err = Error;

    /// Parse an identifier.  Hyphens and underscores are interchangeable
    /// and case is ignored, so `"boxing-day"` and `"Boxing_Day"` both parse.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        BankHoliday::ALL
            .into_iter()
            .find(|h| h.identifier() == wanted)
            .ok_or_else(|| Error::UnknownHoliday(s.to_string()))
    }
}

/// One evaluation of a holiday rule: which holiday, and the date it is
/// observed on.
///
/// Ordered by date first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayDate {
    /// Observed date.
    pub date: NaiveDate,
    /// The holiday observed on `date`.
    pub holiday: BankHoliday,
}

impl std::fmt::Display for HolidayDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.holiday, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order() {
        let ids: Vec<_> = BankHoliday::ALL.iter().map(|h| h.identifier()).collect();
        assert_eq!(
            ids,
            [
                "new_years_day",
                "good_friday",
                "easter_monday",
                "early_may_bank_holiday",
                "spring_bank_holiday",
                "summer_bank_holiday",
                "christmas_day",
                "boxing_day",
            ]
        );
    }

    #[test]
    fn parse_identifiers() {
        for h in BankHoliday::ALL {
            assert_eq!(h.identifier().parse::<BankHoliday>().unwrap(), h);
        }
        assert_eq!(
            "Boxing-Day".parse::<BankHoliday>().unwrap(),
            BankHoliday::BoxingDay
        );
        assert_eq!(
            "whit_monday".parse::<BankHoliday>(),
            Err(Error::UnknownHoliday("whit_monday".into()))
        );
    }

    #[test]
    fn display() {
        let hd = BankHoliday::ChristmasDay.observed_in(2011).unwrap();
        assert_eq!(hd.to_string(), "Christmas Day (2011-12-27)");
    }

    #[test]
    fn dates_in_a_year_are_distinct() {
        for year in 1900..=2100 {
            let mut dates: Vec<_> = BankHoliday::ALL
                .iter()
                .map(|h| h.date_in(year).unwrap())
                .collect();
            dates.sort();
            dates.dedup();
            assert_eq!(dates.len(), 8, "collision in {year}");
        }
    }
}
