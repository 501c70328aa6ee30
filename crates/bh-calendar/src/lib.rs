//! # bh-calendar
//!
//! England and Wales bank-holiday rules, the holiday registry, and
//! working-day arithmetic over `chrono` dates.
//!
//! ```
//! use bh_calendar::{BankHoliday, BankHolidayCalculator};
//! use chrono::NaiveDate;
//!
//! let calc = BankHolidayCalculator::new(2011).unwrap();
//! assert_eq!(calc.christmas_day(), NaiveDate::from_ymd_opt(2011, 12, 27).unwrap());
//! assert_eq!(
//!     calc.is_a_bank_holiday(NaiveDate::from_ymd_opt(2011, 12, 26).unwrap()),
//!     Some(BankHoliday::BoxingDay)
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `BankHolidayCalculator` and range queries.
pub mod calculator;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Checked date helpers over `chrono::NaiveDate`.
pub mod dates;

/// Easter Sunday computation.
pub mod easter;

/// `BankHoliday` registry and `HolidayDate`.
pub mod holiday;

/// One function per bank holiday, mapping a year to its observed date.
pub mod rules;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calculator::{holidays_in_year, BankHolidayCalculator};
pub use calendar::{Calendar, EnglandAndWales, WeekendsOnly};
pub use easter::easter_sunday;
pub use holiday::{BankHoliday, HolidayDate};
