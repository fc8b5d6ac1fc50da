//! The query operations and their result types.

use hijri_core::{ensure, Result};
use hijri_holidays::{registry, HolidayEntry};
use hijri_time::{conversion, gregorian, tabular, CivilDate, HijriMonth};

/// A Hijri year/month pair, as returned by [`current_hijri_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrentMonth {
    /// Hijri year.
    pub year: i32,
    /// Hijri month.
    pub month: HijriMonth,
}

impl CurrentMonth {
    /// English name of the month.
    pub fn name(&self) -> &'static str {
        self.month.long_name()
    }
}

/// A registry entry resolved to a concrete Gregorian date in some Hijri
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedHoliday {
    /// The recurring registry entry.
    pub entry: &'static HolidayEntry,
    /// The Gregorian date the entry falls on in the queried year.
    pub gregorian: CivilDate,
}

/// The result of a successful next-holiday scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NextHoliday {
    /// Every registry entry falling on the winning day.
    pub entries: Vec<&'static HolidayEntry>,
    /// The Gregorian rendering of the winning day.
    pub gregorian: CivilDate,
    /// The Hijri rendering of the winning day (after adjustment).
    pub hijri: CivilDate,
}

/// Hijri year of the given Gregorian date, without adjustment.
///
/// # Errors
/// `InvalidDate` if `today` is not a real Gregorian date.
pub fn current_hijri_year(today: CivilDate) -> Result<i32> {
    let conv = conversion::gregorian_to_hijri(today.year, today.month, today.day, 0)?;
    Ok(conv.hijri.year)
}

/// Hijri year and month of the given Gregorian date, under the given
/// adjustment.
///
/// # Errors
/// `InvalidDate` if `today` is not a real Gregorian date.
pub fn current_hijri_month(today: CivilDate, adjustment: i32) -> Result<CurrentMonth> {
    let conv = conversion::gregorian_to_hijri(today.year, today.month, today.day, adjustment)?;
    Ok(CurrentMonth {
        year: conv.hijri.year,
        month: conv.hijri_month(),
    })
}

/// Holidays recurring on a (day, month) pair, year-independent.
///
/// An empty result is a normal outcome, not an error.
///
/// # Errors
/// `InvalidInput` if `day` is outside 1–30 or `month` is outside 1–12.
pub fn holidays_on_hijri_day(day: u8, month: u8) -> Result<Vec<&'static HolidayEntry>> {
    registry::lookup_by_hijri_day(day, month)
}

/// Every registry entry resolved to its Gregorian date in the given Hijri
/// year, in (month, day) order.
///
/// Entries that do not resolve under the tabular rule are skipped rather
/// than aborting the whole batch.
pub fn holidays_for_hijri_year(year: i32, adjustment: i32) -> Vec<ResolvedHoliday> {
    registry::all_entries()
        .iter()
        .filter_map(|entry| {
            conversion::hijri_to_gregorian(year, entry.month.number(), entry.day, adjustment)
                .ok()
                .map(|conv| ResolvedHoliday {
                    entry,
                    gregorian: conv.gregorian,
                })
        })
        .collect()
}

/// Scan forward from `start` (inclusive) for up to `horizon_days` days and
/// return the first day matching any registry entry under the given
/// adjustment, together with every entry falling on that day.
///
/// Returns `Ok(None)` only if the whole horizon yields no match; with the
/// conventional 360-day horizon that cannot happen, since the registry
/// covers every 360-day window.
///
/// # Errors
/// `InvalidInput` if `horizon_days` is negative; `InvalidDate` if `start`
/// is not a real Gregorian date.
pub fn next_holiday_from(
    start: CivilDate,
    horizon_days: i32,
    adjustment: i32,
) -> Result<Option<NextHoliday>> {
    ensure!(
        horizon_days >= 0,
        "horizon must be non-negative, got {horizon_days}"
    );
    let start_jdn = gregorian::to_jdn(start.year, start.month, start.day)?;
    for offset in 0..horizon_days as i64 {
        let jdn = start_jdn + offset;
        let (hy, hm, hd) = tabular::from_jdn(jdn + adjustment as i64);
        let entries = registry::lookup_by_hijri_day(hd, hm)?;
        if !entries.is_empty() {
            let (gy, gm, gd) = gregorian::from_jdn(jdn);
            return Ok(Some(NextHoliday {
                entries,
                gregorian: CivilDate::new(gy, gm, gd),
                hijri: CivilDate::new(hy, hm, hd),
            }));
        }
    }
    Ok(None)
}

/// The Hijri year whose Ramadan falls within the given Gregorian year.
///
/// The year's midpoint (1 July) is converted to Hijri to get a candidate
/// year; the candidate and its two neighbours are then checked for a
/// 1 Ramadan falling inside the Gregorian year. In Gregorian years that
/// contain two Ramadan starts (roughly every 33 years), the year of the
/// midpoint wins.
///
/// # Errors
/// `InvalidInput` if `year <= 622` (the Hijri epoch year).
pub fn hijri_year_for_gregorian_ramadan(year: i32) -> Result<i32> {
    ensure!(
        year > 622,
        "year {year} precedes the Hijri epoch (622 CE)"
    );
    let candidate = conversion::gregorian_to_hijri(year, 7, 1, 0)?.hijri.year;
    let matched = [candidate, candidate - 1, candidate + 1]
        .into_iter()
        .find(|&h| {
            conversion::hijri_to_gregorian(h, 9, 1, 0)
                .map(|conv| conv.gregorian.year == year)
                .unwrap_or(false)
        });
    // A Hijri year is at most 355 days, so every Gregorian year after the
    // epoch contains a 1 Ramadan within one Hijri year of its midpoint.
    Ok(matched.unwrap_or(candidate))
}
