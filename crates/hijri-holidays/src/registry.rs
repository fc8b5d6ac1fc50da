//! The holiday table and its lookup operations.

use hijri_core::{ensure, Result};
use hijri_time::HijriMonth;

/// A recurring holiday or special day in the Hijri calendar.
///
/// Multiple entries may share a month (the nights of Qadr all fall in
/// Ramadan); the first and last days of Ramadan are distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayEntry {
    /// Hijri month of the observance.
    pub month: HijriMonth,
    /// Hijri day of the month, 1–30.
    pub day: u8,
    /// English name of the observance.
    pub name: &'static str,
}

const fn entry(month: HijriMonth, day: u8, name: &'static str) -> HolidayEntry {
    HolidayEntry { month, day, name }
}

/// The full table, in (month, day) order.
///
/// Every 360-day window intersects this table, so a 360-day forward scan
/// from any start date is guaranteed to find an entry.
static HOLIDAYS: [HolidayEntry; 16] = [
    entry(HijriMonth::Muharram, 1, "Islamic New Year"),
    entry(HijriMonth::Muharram, 10, "Day of Ashura"),
    entry(HijriMonth::RabiAlAwwal, 12, "Mawlid al-Nabi"),
    entry(HijriMonth::Rajab, 27, "Lailat-ul-Miraj"),
    entry(HijriMonth::Shaban, 15, "Lailat-ul-Bara'at"),
    entry(HijriMonth::Ramadan, 1, "1st Day of Ramadan"),
    entry(HijriMonth::Ramadan, 21, "Lailat-ul-Qadr"),
    entry(HijriMonth::Ramadan, 23, "Lailat-ul-Qadr"),
    entry(HijriMonth::Ramadan, 25, "Lailat-ul-Qadr"),
    entry(HijriMonth::Ramadan, 27, "Lailat-ul-Qadr"),
    entry(HijriMonth::Ramadan, 29, "Lailat-ul-Qadr"),
    entry(HijriMonth::Ramadan, 30, "Last Day of Ramadan"),
    entry(HijriMonth::Shawwal, 1, "Eid-ul-Fitr"),
    entry(HijriMonth::DhuAlHijjah, 8, "Hajj begins"),
    entry(HijriMonth::DhuAlHijjah, 9, "Day of Arafa"),
    entry(HijriMonth::DhuAlHijjah, 10, "Eid-ul-Adha"),
];

/// Exact-match lookup of holidays on a (day, month) pair, year-independent.
///
/// An empty result is a normal outcome, not an error.
///
/// # Errors
/// `InvalidInput` if `day` is outside 1–30 or `month` is outside 1–12.
pub fn lookup_by_hijri_day(day: u8, month: u8) -> Result<Vec<&'static HolidayEntry>> {
    ensure!((1..=30).contains(&day), "day {day} out of range [1, 30]");
    ensure!(
        (1..=12).contains(&month),
        "month {month} out of range [1, 12]"
    );
    Ok(HOLIDAYS
        .iter()
        .filter(|e| e.day == day && e.month.number() == month)
        .collect())
}

/// The full static table, in (month, day) order.
pub fn all_entries() -> &'static [HolidayEntry] {
    &HOLIDAYS
}

/// The twelve Hijri months in calendar order.
pub fn month_names() -> &'static [HijriMonth; 12] {
    &HijriMonth::ALL
}
