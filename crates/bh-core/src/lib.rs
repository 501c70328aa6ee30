//! # bh-core
//!
//! Core definitions shared by the bankholidays-rs crates: the error
//! hierarchy, the `ensure!` macro, and process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year, as used by `chrono`.
pub type Year = i32;

/// Number of days (holidays, working days) counted over a range.
pub type DayCount = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
