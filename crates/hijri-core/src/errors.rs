//! Error types for the hijri workspace.
//!
//! The taxonomy is deliberately small. A civil-calendar triple that does not
//! name a real date in its calendar system is an [`Error::InvalidDate`]; a
//! non-date argument outside its documented domain is an
//! [`Error::InvalidInput`]. A well-formed query that legitimately has no
//! answer (an exhausted search horizon) is *not* an error — such operations
//! return `Ok(None)` instead.

use thiserror::Error;

/// The error type used throughout the hijri workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A (year, month, day) triple does not correspond to a real date in the
    /// calendar system it was offered to.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A non-date argument is outside its documented domain (negative
    /// horizon, registry month/day out of range, pre-epoch Gregorian year).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Shorthand `Result` type used throughout the hijri workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Precondition check on a non-date argument.
///
/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hijri_core::ensure;
/// fn horizon(days: i32) -> hijri_core::Result<i32> {
///     ensure!(days >= 0, "horizon must be non-negative, got {days}");
///     Ok(days)
/// }
/// assert!(horizon(360).is_ok());
/// assert!(horizon(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Validity check on a civil-calendar field.
///
/// Returns `Err(Error::InvalidDate(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hijri_core::ensure_date;
/// fn month(m: u8) -> hijri_core::Result<u8> {
///     ensure_date!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(9).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure_date {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidDate(
                format!($($msg)*)
            ));
        }
    };
}
