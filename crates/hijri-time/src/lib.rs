//! # hijri-time
//!
//! Julian Day kernel and the Gregorian ↔ tabular-Hijri conversion engine.
//!
//! The [`JulianDay`] number is the sole interchange format between the two
//! calendar systems: each system converts its (year, month, day) triples to
//! and from an absolute day count, and the conversion engine composes the
//! two kernels, shifting the Hijri side by a small caller-supplied day
//! adjustment.
//!
//! The Hijri calendar implemented here is the fixed *tabular* (arithmetic)
//! variant with an 11-in-30 leap-year cycle, not an observational one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Gregorian ↔ Hijri conversion engine.
pub mod conversion;

/// `CivilDate` — a plain (year, month, day) triple.
pub mod date;

/// Proleptic Gregorian calendar arithmetic.
pub mod gregorian;

/// `JulianDay` — absolute day count.
pub mod julian_day;

/// `HijriMonth` — month-of-year enum with English names.
pub mod month;

/// Tabular Islamic calendar arithmetic.
pub mod tabular;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use conversion::{
    gregorian_month_to_hijri, gregorian_to_hijri, hijri_month_to_gregorian, hijri_to_gregorian,
    DayConversion,
};
pub use date::CivilDate;
pub use julian_day::JulianDay;
pub use month::HijriMonth;
pub use weekday::Weekday;
