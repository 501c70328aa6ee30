//! Easter Sunday for a Gregorian year.
//!
//! `chrono` has no computus, so the date of Easter Sunday is derived here
//! with Oudin's algorithm and handed to the holiday rules as a `NaiveDate`.

use bh_core::errors::Result;
use bh_core::Year;
use chrono::NaiveDate;

use crate::dates::ymd;

/// Return the date of Easter Sunday in `year` (Gregorian computus).
pub fn easter_sunday(year: Year) -> Result<NaiveDate> {
    let (month, day) = easter_month_day(year);
    ymd(year, month, day)
}

/// Oudin's algorithm; returns (month, day) with month 3 or 4.
fn easter_month_day(year: Year) -> (u32, u32) {
    let y = i64::from(year);
    let g = y.rem_euclid(19);
    let c = y.div_euclid(100);
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    // p lies in -6..=28, so both values are small and positive.
    (month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let known = [
            (1818, 3, 22), // earliest possible
            (1943, 4, 25), // latest possible
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn easter_is_always_a_sunday_in_spring() {
        use chrono::{Datelike, Weekday};
        for y in 1583..=2500 {
            let e = easter_sunday(y).unwrap();
            assert_eq!(e.weekday(), Weekday::Sun, "Easter {y}");
            assert!(e >= date(y, 3, 22) && e <= date(y, 4, 25), "Easter {y}: {e}");
        }
    }
}
