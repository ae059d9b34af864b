//! Month-length-safe calendar arithmetic
//!
//! All dates in the engine are plain calendar dates (`chrono::NaiveDate`)
//! with no time-of-day or zone. Day-of-month arithmetic here never rolls a
//! date into the next month implicitly: a nominal day that exceeds the
//! target month's length is clamped to the month's last day, and month
//! overflow is carried into the year explicitly.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors related to calendar operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Returns true for Gregorian leap years
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month (28/29/30/31)
///
/// Fails with [`CalendarError::InvalidDate`] when `month` is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(CalendarError::InvalidDate {
            year,
            month,
            day: 1,
        }),
    }
}

/// Builds the date `(year, month, min(day, days_in_month))`
///
/// This is the only sanctioned way to place a nominal day-of-month into an
/// arbitrary month: a day past the end of the month lands on the month's
/// last day instead of rolling over. `month` outside 1-12 or `day == 0`
/// fails with [`CalendarError::InvalidDate`].
pub fn clamp_day(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if day == 0 {
        return Err(CalendarError::InvalidDate { year, month, day });
    }
    let last = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last))
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Adds `delta` months to `(year, month)`, carrying overflow into the year
///
/// `delta` may be negative. The returned month is always in 1-12.
pub fn add_months(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

/// Checked date constructor
///
/// Unlike [`clamp_day`] this rejects a day past the end of the month rather
/// than clamping it.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}
