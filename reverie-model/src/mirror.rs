//! The entity mirror.

use crate::{Appearance, Equipment, WeaponSet};
use reverie_types::{ActorId, ItemRef, ObjectKind, SlotId};
use serde::{Deserialize, Serialize};

/// The in-process structured copy of one external entity.
///
/// A passive record: the sync layer owns the live instance and mediates
/// every mutation, so nothing here reaches the external process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMirror {
    pub actor: ActorId,
    pub kind: ObjectKind,
    pub equipment: Equipment,
    pub weapons: WeaponSet,
    pub appearance: Appearance,
}

impl EntityMirror {
    /// Creates a mirror with default (empty) state for an actor.
    #[must_use]
    pub fn new(actor: ActorId, kind: ObjectKind) -> Self {
        Self {
            actor,
            kind,
            equipment: Equipment::default(),
            weapons: WeaponSet::default(),
            appearance: Appearance::default(),
        }
    }

    /// Returns the item in a slot.
    #[must_use]
    pub fn slot(&self, slot: SlotId) -> ItemRef {
        self.equipment.get(slot)
    }

    /// Replaces the item in a slot.
    pub fn set_slot(&mut self, slot: SlotId, item: ItemRef) {
        self.equipment.set(slot, item);
    }

    /// Sets a slot to the empty sentinel, distinct from leaving it untouched.
    pub fn clear_slot(&mut self, slot: SlotId) {
        self.equipment.clear(slot);
    }

    /// Whether this entity's kind supports appearance/equipment editing.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.kind.is_editable()
    }
}
