//! Error types for immutable views

use thiserror::Error;

/// Immu error types
#[derive(Debug, Error)]
pub enum ImmuError {
    /// A write was attempted on an immutable view.
    #[error("Cannot change value \"{key}\" to \"{value}\" of an immutable property")]
    MutationRejected {
        /// Key, index, or `length` the caller tried to assign
        key: String,
        /// String rendering of the rejected value
        value: String,
    },
    /// A strictness name could not be parsed.
    #[error("Invalid strictness: {0} (expected \"strict\" or \"relaxed\")")]
    InvalidStrictness(String),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImmuError {
    /// Whether this error is a rejected write
    pub fn is_mutation_rejected(&self) -> bool {
        matches!(self, ImmuError::MutationRejected { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ImmuError>;
