//! Exhaustiveness helpers.
//!
//! [`assert_never`] accepts only an uninhabited value, so a call to it
//! type-checks exactly when the compiler has proven the arm dead. For
//! arms the type system cannot rule out, [`unexpected`] fails loudly
//! with the value that got through.

use crate::error::PiperError;
use std::convert::Infallible;
use std::fmt;

/// Discharge an arm that cannot be reached.
pub fn assert_never(value: Infallible) -> ! {
    match value {}
}

/// Abort on a value that should not have been possible.
///
/// Panics with `Unexpected value: {value}`.
#[track_caller]
pub fn unexpected(value: impl fmt::Display) -> ! {
    panic!("{}", PiperError::unexpected(value))
}
