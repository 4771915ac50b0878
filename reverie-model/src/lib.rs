//! In-memory character model for Reverie.
//!
//! These are passive data holders: the structured local copy of an
//! external entity's appearance and equipment. All live mutation is
//! mediated by the sync layer; nothing here touches the external process.

mod appearance;
mod equipment;
mod mirror;

pub use appearance::{Appearance, CUSTOMIZE_LEN};
pub use equipment::{Equipment, WeaponModel, WeaponSet};
pub use mirror::EntityMirror;
