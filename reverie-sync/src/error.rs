//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The external process is gone; the session has been forced Off.
    #[error("external entity is stale (process unreachable)")]
    StaleEntity,

    /// A configured lease-acquisition timeout elapsed. Retryable.
    #[error("timed out waiting for the write lease")]
    LeaseTimeout,

    /// The session shut down while waiting for the lease.
    #[error("session shut down")]
    Shutdown,

    /// The target actor's kind does not support editing.
    #[error("actor kind \"{0}\" does not support editing")]
    UneditableActor(reverie_types::ObjectKind),

    /// Failure in the persistence layer.
    #[error(transparent)]
    File(#[from] reverie_files::FileError),

    /// A single external-process access failed.
    #[error("process access failed: {0}")]
    Port(String),
}
