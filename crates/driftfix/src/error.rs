//! Error types for the driftfix library.

use std::path::PathBuf;
use thiserror::Error;

use crate::value::ValueKind;

/// Main error type for driftfix operations.
#[derive(Debug, Error)]
pub enum DriftError {
    /// The adjustment set or id filter could not be decoded.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A payload could not be coerced to its declared type.
    #[error("Malformed {kind} value for '{id}': {reason}")]
    MalformedValue {
        id: String,
        kind: ValueKind,
        reason: String,
    },

    /// The preference store could not be read or written.
    #[error("Store access failed for '{path}': {reason}")]
    StoreAccess { path: PathBuf, reason: String },

    /// Error reading an input file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriftError {
    pub(crate) fn malformed_value(
        id: impl Into<String>,
        kind: ValueKind,
        reason: impl Into<String>,
    ) -> Self {
        DriftError::MalformedValue {
            id: id.into(),
            kind,
            reason: reason.into(),
        }
    }
}

/// Result type alias for driftfix operations.
pub type Result<T> = std::result::Result<T, DriftError>;
