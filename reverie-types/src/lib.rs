//! Core value types for Reverie.
//!
//! This crate defines the small, game-agnostic vocabulary shared by the
//! mirror model, the file formats, and the sync layer:
//! - Actor and NPC identifiers
//! - Equipment slot keys and item references
//! - The `SaveModes` field-group bitmask
//! - Actor kind classification
//!
//! Anything with behavior (the mirror itself, file formats, sessions)
//! belongs in the higher crates, not here.

mod ids;
mod item;
mod kind;
mod save_modes;
mod slot;

pub use ids::{ActorId, NpcId};
pub use item::ItemRef;
pub use kind::ObjectKind;
pub use save_modes::SaveModes;
pub use slot::SlotId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing persisted value forms.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown equipment slot: {0}")]
    UnknownSlot(String),

    #[error("invalid item reference: {0}")]
    InvalidItem(String),
}
