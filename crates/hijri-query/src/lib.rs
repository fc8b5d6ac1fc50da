//! # hijri-query
//!
//! Calendrical queries composed from the conversion engine and the holiday
//! registry: current Hijri year and month, per-day and per-year holiday
//! resolution, a bounded forward scan for the next upcoming holiday, and
//! the Hijri-year-of-Ramadan mapping for a Gregorian year.
//!
//! Every operation takes all of its inputs explicitly — including "today"
//! and the day adjustment — and holds no state of its own, so concurrent
//! calls are fully independent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The query operations and their result types.
pub mod queries;

pub use queries::{
    current_hijri_month, current_hijri_year, hijri_year_for_gregorian_ramadan,
    holidays_for_hijri_year, holidays_on_hijri_day, next_holiday_from, CurrentMonth, NextHoliday,
    ResolvedHoliday,
};
