//! Error types for cardkit

use thiserror::Error;

/// Errors raised while parsing, loading or rendering card configurations.
///
/// Rendering a card never fails; these only cover the edges where text or
/// files are turned into a [`CardConfig`](crate::CardConfig).
#[derive(Error, Debug)]
pub enum CardError {
    /// A variant name did not match any known value
    #[error("Unknown {kind}: '{value}' (expected one of: {})", .expected.join(", "))]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    /// No story is registered under the given id
    #[error("Unknown story: {0}")]
    UnknownStory(String),

    /// JSON card configuration could not be decoded
    #[error("Invalid card config: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cardkit operations
pub type Result<T> = std::result::Result<T, CardError>;
