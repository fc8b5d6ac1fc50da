//! `CivilDate` — a plain (year, month, day) triple.

/// A (year, month, day) triple in either calendar system.
///
/// Whether the triple names a real date depends on which calendar it is
/// offered to; validity is checked by the conversion kernels
/// ([`crate::gregorian::to_jdn`], [`crate::tabular::to_jdn`]), never assumed
/// here. The year is an astronomical year number (1 BC is year 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CivilDate {
    /// Year.
    pub year: i32,
    /// Month, 1–12.
    pub month: u8,
    /// Day of the month, 1–31.
    pub day: u8,
}

impl CivilDate {
    /// Create a triple without validating it.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        CivilDate { year, month, day }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
