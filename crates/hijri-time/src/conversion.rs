//! Gregorian ↔ Hijri conversion engine.
//!
//! Every conversion pivots through the Julian Day Number and applies a
//! caller-supplied day adjustment on the Hijri side: Gregorian → Hijri adds
//! the adjustment before decomposing the JDN into a Hijri triple, Hijri →
//! Gregorian subtracts it. Adding on one side and subtracting on the other
//! keeps the two directions mutually consistent, so a conversion followed by
//! the inverse with the same adjustment reproduces the original date
//! exactly, for any adjustment.

use crate::date::CivilDate;
use crate::month::HijriMonth;
use crate::weekday::Weekday;
use crate::{gregorian, tabular};
use hijri_core::Result;

/// A single civil day rendered in both calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayConversion {
    /// The Gregorian rendering of the day.
    pub gregorian: CivilDate,
    /// The Hijri rendering of the day (after adjustment).
    pub hijri: CivilDate,
    /// Weekday of the Gregorian civil day.
    pub weekday: Weekday,
}

impl DayConversion {
    /// The Hijri month as a typed enum.
    ///
    /// The Hijri side always comes out of the tabular kernel, so its month
    /// is in 1–12.
    pub fn hijri_month(&self) -> HijriMonth {
        match HijriMonth::from_number(self.hijri.month) {
            Some(m) => m,
            None => unreachable!(),
        }
    }
}

/// Convert a Gregorian date to its Hijri rendering.
///
/// The adjustment (a small signed day count calibrating the tabular rule
/// against local sighting practice) is added to the JDN before the Hijri
/// decomposition; the Gregorian side of the result is the unadjusted input
/// date, re-derived from its own JDN.
///
/// # Errors
/// `InvalidDate` if the Gregorian input is not a real date.
pub fn gregorian_to_hijri(year: i32, month: u8, day: u8, adjustment: i32) -> Result<DayConversion> {
    let jdn = gregorian::to_jdn(year, month, day)?;
    let (hy, hm, hd) = tabular::from_jdn(jdn + adjustment as i64);
    let (gy, gm, gd) = gregorian::from_jdn(jdn);
    Ok(DayConversion {
        gregorian: CivilDate::new(gy, gm, gd),
        hijri: CivilDate::new(hy, hm, hd),
        weekday: Weekday::from_jdn(jdn),
    })
}

/// Convert a Hijri date to its Gregorian rendering.
///
/// The adjustment is subtracted from the JDN before the Gregorian
/// decomposition, mirroring [`gregorian_to_hijri`] so that the two
/// directions round-trip exactly under the same adjustment.
///
/// # Errors
/// `InvalidDate` if the Hijri input is not a real date under the tabular
/// rule.
pub fn hijri_to_gregorian(year: i32, month: u8, day: u8, adjustment: i32) -> Result<DayConversion> {
    let jdn = tabular::to_jdn(year, month, day)? - adjustment as i64;
    let (gy, gm, gd) = gregorian::from_jdn(jdn);
    Ok(DayConversion {
        gregorian: CivilDate::new(gy, gm, gd),
        hijri: CivilDate::new(year, month, day),
        weekday: Weekday::from_jdn(jdn),
    })
}

/// Convert every day of a Gregorian month, in ascending day order.
///
/// # Errors
/// `InvalidDate` if `month` is outside 1–12.
pub fn gregorian_month_to_hijri(
    year: i32,
    month: u8,
    adjustment: i32,
) -> Result<Vec<DayConversion>> {
    // Validate the month by converting day 1.
    let first = gregorian_to_hijri(year, month, 1, adjustment)?;
    let len = gregorian::days_in_month(year, month);
    let mut days = Vec::with_capacity(len as usize);
    days.push(first);
    for day in 2..=len {
        days.push(gregorian_to_hijri(year, month, day, adjustment)?);
    }
    Ok(days)
}

/// Convert every day of a Hijri month, in ascending day order.
///
/// # Errors
/// `InvalidDate` if `month` is outside 1–12.
pub fn hijri_month_to_gregorian(
    year: i32,
    month: u8,
    adjustment: i32,
) -> Result<Vec<DayConversion>> {
    let first = hijri_to_gregorian(year, month, 1, adjustment)?;
    let len = tabular::days_in_month(year, month);
    let mut days = Vec::with_capacity(len as usize);
    days.push(first);
    for day in 2..=len {
        days.push(hijri_to_gregorian(year, month, day, adjustment)?);
    }
    Ok(days)
}
