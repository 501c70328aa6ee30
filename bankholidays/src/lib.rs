//! # bankholidays
//!
//! England and Wales bank-holiday dates and working-day arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bh-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bankholidays = "0.1"
//! ```
//!
//! ```rust
//! use bankholidays::prelude::*;
//!
//! let calc = BankHolidayCalculator::new(2011)?;
//! let start = NaiveDate::from_ymd_opt(2011, 12, 23).unwrap();
//! let end = NaiveDate::from_ymd_opt(2012, 1, 3).unwrap();
//! assert_eq!(calc.bank_holidays_between(start, end)?, 3);
//! assert_eq!(calc.working_days_between(start, end)?, 5);
//! # Ok::<(), bankholidays::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and library settings.
pub use bh_core as core;

/// Holiday rules, registry, calculator, and calendars.
pub use bh_calendar as calendar;

/// The types most programs need, plus `chrono`'s `NaiveDate`.
pub mod prelude {
    pub use bh_calendar::{
        BankHoliday, BankHolidayCalculator, BusinessDayConvention, Calendar, EnglandAndWales,
        HolidayDate,
    };
    pub use bh_core::{Error, Result};
    pub use chrono::NaiveDate;
}
