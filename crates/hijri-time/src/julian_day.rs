//! `JulianDay` — the absolute day count used as the interchange point
//! between calendar systems.
//!
//! A Julian Day Number is a signed integer count of days since the Julian
//! epoch (JDN 0 = 1 January 4713 BC, proleptic Julian calendar). It is
//! monotonically increasing with calendar time in either calendar system,
//! which is what makes it usable as a neutral pivot: every conversion goes
//! (year, month, day) → JDN → (year, month, day).

/// An absolute day count (Julian Day Number).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Create a Julian Day from its raw day number.
    pub const fn new(number: i64) -> Self {
        JulianDay(number)
    }

    /// Return the raw day number.
    pub const fn number(self) -> i64 {
        self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for JulianDay {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        JulianDay(self.0 + rhs)
    }
}

impl std::ops::Sub<i64> for JulianDay {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        JulianDay(self.0 - rhs)
    }
}

impl std::ops::Sub<JulianDay> for JulianDay {
    type Output = i64;
    fn sub(self, rhs: JulianDay) -> i64 {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

impl std::fmt::Debug for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JulianDay({})", self.0)
    }
}
