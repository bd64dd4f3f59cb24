//! Error types for piper kernel operations.

use std::fmt;

/// Errors raised by the kernel itself.
///
/// Failures produced by composed steps are never wrapped in this type;
/// they reach the caller exactly as the step returned them.
#[derive(Debug, thiserror::Error)]
pub enum PiperError {
    /// A value reached a branch that exhaustiveness checking should have
    /// ruled out.
    #[error("Unexpected value: {0}")]
    Unexpected(String),

    /// A typed lookup found nothing at the requested key.
    #[error("missing key: {0}")]
    MissingKey(String),

    /// A typed lookup found a value that does not decode as requested.
    #[error("failed to decode value at {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PiperError {
    /// Build a [`PiperError::Unexpected`] from the offending value.
    pub fn unexpected(value: impl fmt::Display) -> Self {
        Self::Unexpected(value.to_string())
    }
}
