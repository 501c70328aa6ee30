//! Error types for bankholidays-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` macro
//! gives an early-return shorthand for precondition checks.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type used throughout bankholidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A range query was given a start date that does not strictly precede
    /// its end date.
    #[error("invalid date range: start {start} must be before end {end}")]
    InvalidRange {
        /// First date of the requested range.
        start: NaiveDate,
        /// Last date of the requested range.
        end: NaiveDate,
    },

    /// Date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// A holiday identifier did not name any known bank holiday.
    #[error("unknown bank holiday: {0:?}")]
    UnknownHoliday(String),
}

/// Shorthand `Result` type used throughout bankholidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bh_core::{ensure, errors::Error};
/// fn positive(x: i32) -> bh_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
