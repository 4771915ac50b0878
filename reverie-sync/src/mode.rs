//! Synchronization modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a tracked entity's mirror is kept in sync with the external
/// process. Transitions are the coordination primitive: bulk writes are
/// bracketed by a lease that parks the session in `Write`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// No synchronization; the mirror is a frozen snapshot.
    Off,
    /// Background reader only; bulk writers queue.
    Read,
    /// Reader paused; exactly one writer holds the lease.
    Write,
    /// Steady state: reader active, a writer may take the lease.
    #[default]
    ReadWrite,
}

impl SyncMode {
    /// Whether the background reader runs passes in this mode.
    #[must_use]
    pub const fn reads(self) -> bool {
        matches!(self, SyncMode::Read | SyncMode::ReadWrite)
    }

    /// Whether writes are permitted in this mode.
    #[must_use]
    pub const fn writes(self) -> bool {
        matches!(self, SyncMode::Write | SyncMode::ReadWrite)
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncMode::Off => "off",
            SyncMode::Read => "read",
            SyncMode::Write => "write",
            SyncMode::ReadWrite => "read-write",
        };
        f.write_str(name)
    }
}
