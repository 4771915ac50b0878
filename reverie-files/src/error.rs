//! Error types for the persistence layer.

use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors that can occur while loading, upgrading or saving files.
#[derive(Debug, Error)]
pub enum FileError {
    /// Content matched none of the supported formats.
    #[error("unsupported file format")]
    UnsupportedFormat,

    /// A recognized format with invalid content.
    #[error("malformed {format} file: {reason}")]
    Malformed {
        format: &'static str,
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid value inside an otherwise well-formed file.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] reverie_types::Error),
}
