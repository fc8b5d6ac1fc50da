//! # hijri-core
//!
//! Error types and the `ensure!` / `ensure_date!` macros shared across the
//! hijri workspace.
//!
//! Every fallible operation in the workspace returns
//! [`errors::Result`], built on the single [`errors::Error`] enum. Invalid
//! input is a normal, expected outcome of a stateless pure function; nothing
//! in this workspace panics on bad arguments.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `ensure_date!` macros.
pub mod errors;

pub use errors::{Error, Result};
