//! Tabular Islamic calendar arithmetic.
//!
//! The tabular (arithmetic) Hijri calendar is deterministic: a 30-year
//! cycle contains 11 leap years of 355 days at the fixed positions
//! {2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29} and 19 common years of 354
//! days. Within a year, odd months have 30 days and even months 29, except
//! month 12, which has 30 days only in a leap year.
//!
//! The epoch is the civil one: 1 Muharram 1 AH = JDN 1 948 440
//! (19 July 622 CE, proleptic Gregorian).

use crate::julian_day::JulianDay;
use hijri_core::{ensure_date, Result};

/// JDN of 1 Muharram 1 AH.
pub const EPOCH: JulianDay = JulianDay::new(1_948_440);

/// Whether a given Hijri year is a leap year (355 days) in the 30-year
/// tabular cycle.
pub fn is_leap_year(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) < 11
}

/// Number of days in a given Hijri year: 355 if leap, else 354.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        355
    } else {
        354
    }
}

/// Number of days in a given Hijri month/year.
///
/// `month` must be in 1–12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 9 | 11 => 30,
        12 => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
        _ => 29,
    }
}

/// JDN of 1 Muharram of the given Hijri year.
fn year_start(year: i32) -> JulianDay {
    let y = year as i64;
    EPOCH + 354 * (y - 1) + (3 + 11 * y).div_euclid(30)
}

/// Convert a Hijri (year, month, day) to its Julian Day Number.
///
/// # Errors
/// `InvalidDate` if `month` is outside 1–12 or `day` exceeds the tabular
/// length of that month in that year (in particular, day 30 of a 29-day
/// month).
pub fn to_jdn(year: i32, month: u8, day: u8) -> Result<JulianDay> {
    ensure_date!(
        (1..=12).contains(&month),
        "month {month} out of range [1, 12]"
    );
    let days_in = days_in_month(year, month);
    ensure_date!(
        day >= 1 && day <= days_in,
        "day {day} out of range [1, {days_in}] for Hijri {year}-{month:02}"
    );
    // Months alternate 30/29 starting with 30, so the day-of-year offset at
    // the start of month m is ceil(29.5 * (m - 1)).
    let month_offset = (59 * (month as i64 - 1) + 1) / 2;
    Ok(year_start(year) + month_offset + day as i64 - 1)
}

/// Convert a Julian Day Number to its Hijri (year, month, day).
///
/// Total over all integer JDNs; the exact inverse of [`to_jdn`].
pub fn from_jdn(jdn: JulianDay) -> (i32, u8, u8) {
    // Estimate the year from the mean year length (10631 days per 30 years),
    // then adjust until the JDN falls within the year.
    let days = jdn - EPOCH;
    let mut year = ((30 * days + 10_646).div_euclid(10_631)) as i32;
    loop {
        if jdn < year_start(year) {
            year -= 1;
        } else if jdn >= year_start(year + 1) {
            year += 1;
        } else {
            break;
        }
    }
    // Walk the months.
    let mut remaining = (jdn - year_start(year)) as i32 + 1; // 1-based day of year
    let mut month = 1u8;
    loop {
        let days = days_in_month(year, month) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        month += 1;
    }
    (year, month, remaining as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_first_of_muharram() {
        assert_eq!(to_jdn(1, 1, 1).unwrap(), EPOCH);
        assert_eq!(from_jdn(EPOCH), (1, 1, 1));
    }

    #[test]
    fn leap_cycle_positions() {
        let leap_positions = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];
        for pos in 1..=30 {
            assert_eq!(
                is_leap_year(pos),
                leap_positions.contains(&pos),
                "cycle position {pos}"
            );
        }
    }

    #[test]
    fn eleven_leap_years_per_cycle() {
        // Check a few full cycles, including one far from the epoch.
        for cycle_start in [1, 31, 1441, 1471] {
            let leaps = (cycle_start..cycle_start + 30)
                .filter(|&y| is_leap_year(y))
                .count();
            assert_eq!(leaps, 11, "cycle starting at {cycle_start}");
        }
    }

    #[test]
    fn year_lengths_match_year_starts() {
        for year in 1440..1470 {
            let length = (year_start(year + 1) - year_start(year)) as u16;
            assert_eq!(length, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn month_lengths() {
        // 1445 is leap (cycle position 5), 1446 is not.
        assert!(is_leap_year(1445));
        assert!(!is_leap_year(1446));
        for month in 1..=11u8 {
            let expected = if month % 2 == 1 { 30 } else { 29 };
            assert_eq!(days_in_month(1445, month), expected);
            assert_eq!(days_in_month(1446, month), expected);
        }
        assert_eq!(days_in_month(1445, 12), 30);
        assert_eq!(days_in_month(1446, 12), 29);
    }

    #[test]
    fn ramadan_1445_reference() {
        // 1 Ramadan 1445 AH = 11 March 2024 = JDN 2460381.
        assert_eq!(to_jdn(1445, 9, 1).unwrap().number(), 2_460_381);
        assert_eq!(from_jdn(JulianDay::new(2_460_381)), (1445, 9, 1));
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(to_jdn(1445, 13, 1).is_err());
        assert!(to_jdn(1445, 0, 1).is_err());
        assert!(to_jdn(1445, 2, 30).is_err()); // even month has 29 days
        assert!(to_jdn(1446, 12, 30).is_err()); // common year
        assert!(to_jdn(1445, 12, 30).is_ok()); // leap year
        assert!(to_jdn(1445, 1, 0).is_err());
        assert!(to_jdn(1445, 1, 31).is_err());
    }

    #[test]
    fn roundtrip_over_a_full_cycle() {
        // Sweep every day of Hijri years 1441-1470 (one full 30-year cycle).
        let start = to_jdn(1441, 1, 1).unwrap();
        let end = to_jdn(1470, 12, 29).unwrap();
        let mut jdn = start;
        while jdn <= end {
            let (y, m, d) = from_jdn(jdn);
            assert_eq!(to_jdn(y, m, d).unwrap(), jdn, "at {y}-{m:02}-{d:02}");
            jdn = jdn + 1;
        }
    }
}
