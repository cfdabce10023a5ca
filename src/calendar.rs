//! Calendar date arithmetic for the proleptic Gregorian calendar.

use chrono::Datelike;

use crate::error::CalError;
use crate::types::{CalContext, MONTHS_PER_YEAR};

/// Day of the week for a date, 0 = Sunday .. 6 = Saturday.
///
/// Congruence method from Claus Tøndering's calendar FAQ. Intermediate
/// values stay non-negative for every year >= 1, where truncating and
/// flooring division agree.
pub fn day_of_week(month: u32, day: u32, year: i32) -> u32 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = i64::from(year) - a;
    let m = month + 12 * a - 2;
    let d = (i64::from(day) + y + y / 4 - y / 100 + y / 400 + (31 * m) / 12).rem_euclid(7);
    d as u32
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1..=12).
pub fn days_in_month(month: u32, year: i32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month {month} out of range");
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// ISO date key used by the holiday data, e.g. `2023-07-04`.
pub fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

impl CalContext {
    /// Change the number of calendars per row in the year view.
    ///
    /// The value must be positive and divide 12; otherwise the current
    /// value is kept and an error is returned.
    pub fn set_cals_per_row(&mut self, cals_per_row: i64) -> Result<(), CalError> {
        match usize::try_from(cals_per_row) {
            Ok(n) if n > 0 && MONTHS_PER_YEAR % n == 0 => {
                self.cals_per_row = n;
                Ok(())
            }
            _ => Err(CalError::Config(format!(
                "Number of calendars per row given ('{cals_per_row}') must be evenly divisible into 12"
            ))),
        }
    }

    /// Whether the given date is today.
    pub fn is_today(&self, year: i32, month: u32, day: u32) -> bool {
        self.today.year() == year && self.today.month() == month && self.today.day() == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_of_the_common_era() {
        // 1 January 1 was a Monday in the proleptic Gregorian calendar.
        assert_eq!(day_of_week(1, 1, 1), 1);
    }

    #[test]
    fn agrees_with_chrono() {
        use chrono::NaiveDate;
        for year in [6, 71, 1600, 1752, 1900, 2000, 2024, 2099, 3000] {
            for month in 1..=12 {
                let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                assert_eq!(
                    day_of_week(month, 1, year),
                    date.weekday().num_days_from_sunday(),
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "month 13 out of range")]
    fn days_in_month_rejects_invalid_month() {
        days_in_month(13, 2023);
    }

    #[test]
    fn iso_date_is_zero_padded() {
        assert_eq!(iso_date(2023, 7, 4), "2023-07-04");
        assert_eq!(iso_date(2023, 12, 25), "2023-12-25");
    }
}
