//! Proleptic Gregorian calendar arithmetic.
//!
//! Conversion between (year, month, day) triples and [`JulianDay`] numbers
//! uses the standard Fliegel–Van Flandern integer formulas. Years are
//! astronomical year numbers (1 BC is year 0), so the formulas are valid
//! over the whole proleptic range.

use crate::julian_day::JulianDay;
use hijri_core::{ensure_date, Result};

/// Whether a given Gregorian year is a leap year.
///
/// Divisible by 4, except century years not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given Gregorian month/year.
///
/// `month` must be in 1–12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert a Gregorian (year, month, day) to its Julian Day Number.
///
/// # Errors
/// `InvalidDate` if `month` is outside 1–12 or `day` exceeds the length of
/// that month in that year.
pub fn to_jdn(year: i32, month: u8, day: u8) -> Result<JulianDay> {
    ensure_date!(
        (1..=12).contains(&month),
        "month {month} out of range [1, 12]"
    );
    let days_in = days_in_month(year, month);
    ensure_date!(
        day >= 1 && day <= days_in,
        "day {day} out of range [1, {days_in}] for Gregorian {year}-{month:02}"
    );

    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    // Fliegel–Van Flandern; the (m - 14) / 12 terms rely on truncating
    // division, which is what Rust's `/` does for integers.
    let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
        + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075;
    Ok(JulianDay::new(jdn))
}

/// Convert a Julian Day Number to its Gregorian (year, month, day).
///
/// Total over all integer JDNs; the exact inverse of [`to_jdn`].
pub fn from_jdn(jdn: JulianDay) -> (i32, u8, u8) {
    let j = jdn.number();
    let f = j + 1401 + (((4 * j + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u8, day as u8)
}
