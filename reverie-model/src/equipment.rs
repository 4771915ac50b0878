//! Equipment slots and weapon models.

use reverie_types::{ItemRef, SlotId};
use serde::{Deserialize, Serialize};

/// The ten equipment slots of a character.
///
/// Every slot is always present; "nothing equipped" is the
/// [`ItemRef::EMPTY`] sentinel, never a missing key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub head: ItemRef,
    pub chest: ItemRef,
    pub arms: ItemRef,
    pub legs: ItemRef,
    pub feet: ItemRef,
    pub ear: ItemRef,
    pub neck: ItemRef,
    pub wrist: ItemRef,
    pub left_ring: ItemRef,
    pub right_ring: ItemRef,
}

impl Equipment {
    /// Returns the item in a slot.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> ItemRef {
        match slot {
            SlotId::Head => self.head,
            SlotId::Chest => self.chest,
            SlotId::Arms => self.arms,
            SlotId::Legs => self.legs,
            SlotId::Feet => self.feet,
            SlotId::Ear => self.ear,
            SlotId::Neck => self.neck,
            SlotId::Wrist => self.wrist,
            SlotId::LeftRing => self.left_ring,
            SlotId::RightRing => self.right_ring,
        }
    }

    /// Replaces the item in a slot.
    pub fn set(&mut self, slot: SlotId, item: ItemRef) {
        let target = match slot {
            SlotId::Head => &mut self.head,
            SlotId::Chest => &mut self.chest,
            SlotId::Arms => &mut self.arms,
            SlotId::Legs => &mut self.legs,
            SlotId::Feet => &mut self.feet,
            SlotId::Ear => &mut self.ear,
            SlotId::Neck => &mut self.neck,
            SlotId::Wrist => &mut self.wrist,
            SlotId::LeftRing => &mut self.left_ring,
            SlotId::RightRing => &mut self.right_ring,
        };
        *target = item;
    }

    /// Sets a slot to the empty sentinel.
    pub fn clear(&mut self, slot: SlotId) {
        self.set(slot, ItemRef::EMPTY);
    }

    /// Iterates all ten slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, ItemRef)> + '_ {
        SlotId::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

/// One weapon model: the item and whether it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponModel {
    pub item: ItemRef,
    pub visible: bool,
}

impl WeaponModel {
    /// Hides the model without unequipping the item.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for WeaponModel {
    fn default() -> Self {
        Self {
            item: ItemRef::EMPTY,
            visible: true,
        }
    }
}

/// Main-hand weapon plus the off-hand submodel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSet {
    pub main_hand: WeaponModel,
    pub off_hand: WeaponModel,
}
