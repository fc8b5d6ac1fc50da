//! # hijri-holidays
//!
//! Static registry of recurring Hijri holidays and special days.
//!
//! Entries are (Hijri month, Hijri day, name) triples fixed at compile
//! time; lookups are exact matches on (day, month) and are independent of
//! any year. The table is read-only and safe for unlimited concurrent
//! reads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The holiday table and its lookup operations.
pub mod registry;

pub use registry::{all_entries, lookup_by_hijri_day, month_names, HolidayEntry};
