//! Global library settings.
//!
//! [`Settings`] holds an optional **evaluation date** override, the date
//! treated as "today" when a calculator is built without an explicit year.
//! When no override is set, today's local date is used.
//!
//! The override sits behind a `Mutex` so it can be changed from any thread.
//! Prefer [`ScopedEvaluationDate`] in tests so the previous value is restored.

use chrono::{Local, NaiveDate};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by bankholidays-rs.
pub struct Settings {
    evaluation_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<NaiveDate>> {
        // The guarded value is a plain `Option<NaiveDate>`; a poisoned lock
        // cannot leave it half-written.
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the evaluation date override, if one has been set.
    pub fn evaluation_date_override(&self) -> Option<NaiveDate> {
        *self.slot()
    }

    /// Return the evaluation date: the override if set, else today's
    /// local date.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.evaluation_date_override()
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Set the evaluation date override.
    pub fn set_evaluation_date(&self, date: NaiveDate) {
        *self.slot() = Some(date);
    }

    /// Clear the override, resetting the evaluation date to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// RAII guard that sets the evaluation date and restores the previous
/// override when dropped.
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<NaiveDate>,
}

impl ScopedEvaluationDate {
    /// Override the evaluation date until the returned guard is dropped.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_override();
        settings.set_evaluation_date(date);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(date) => settings.set_evaluation_date(date),
            None => settings.reset_evaluation_date(),
        }
    }
}
