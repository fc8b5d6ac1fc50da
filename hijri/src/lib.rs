//! # hijri
//!
//! Conversion between the Gregorian civil calendar and the tabular Islamic
//! (Hijri) calendar, plus the calendrical queries derived from that
//! conversion: current Hijri year and month, recurring holidays, the next
//! upcoming holiday within a horizon, and the Hijri year of a Gregorian
//! year's Ramadan.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hijri-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hijri = "0.1"
//! ```
//!
//! ```rust
//! use hijri::time::conversion::gregorian_to_hijri;
//!
//! let day = gregorian_to_hijri(2024, 3, 11, 0).unwrap();
//! assert_eq!(day.hijri.year, 1445);
//! assert_eq!(day.hijri_month().long_name(), "Ramadan");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and result aliases.
pub use hijri_core as core;

/// Julian Day kernel and the Gregorian ↔ Hijri conversion engine.
pub use hijri_time as time;

/// Static registry of recurring Hijri holidays and special days.
pub use hijri_holidays as holidays;

/// Calendrical queries (current year/month, holidays, next-holiday scan).
pub use hijri_query as query;
