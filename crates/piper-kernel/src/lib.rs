//! # Piper Kernel
//!
//! Tools for functional composition: build one function out of many
//! unary steps, applied strictly left to right.
//!
//! The kernel is pure and synchronous. It holds no state between calls
//! and catches nothing: a step that panics or returns `Err` ends the
//! chain, and the failure reaches the caller unchanged.
//!
//! ## Architecture
//!
//! ```text
//! combinators      ← identity, always, noop, UnaryFunction
//!     │
//! compose          ← then / pipe! (typed), pipe (runtime fold), try_ variants
//!     │
//! pipeline         ← Pipeline<'f, A, B>: persistent builder over compose
//!
//! pick             ← Record lookups, direct (pick) and curried (picker)
//! never            ← assert_never / unexpected for dead arms
//! ```
//!
//! ## Example
//!
//! ```
//! use piper_kernel::{pipe, pipeline};
//!
//! let upper = |s: &str| s.to_uppercase();
//! let chars = |s: String| s.chars().rev().collect::<String>();
//!
//! assert_eq!(pipe!(upper, chars)("food"), "DOOF");
//! assert_eq!(pipeline(upper).map(chars).run("food"), "DOOF");
//! ```

pub mod combinators;
pub mod compose;
pub mod error;
pub mod never;
pub mod pick;
pub mod pipeline;

pub use combinators::{UnaryFunction, always, identity, noop};
pub use compose::{pipe, then, then_try, try_pipe};
pub use error::PiperError;
pub use never::{assert_never, unexpected};
pub use pick::{Record, pick, pick_as, picker};
pub use pipeline::{Pipeline, pipeline};
