//! The current character file format.

use reverie_model::{Appearance, EntityMirror, Equipment, WeaponSet};
use reverie_types::{ItemRef, SaveModes, SlotId};
use serde::{Deserialize, Serialize};

/// Format tag written into every current-format file.
pub const CURRENT_FORMAT_TAG: &str = "reverie/character";

const CURRENT_FORMAT_VERSION: u32 = 3;

fn current_tag() -> String {
    CURRENT_FORMAT_TAG.to_string()
}

fn current_version() -> u32 {
    CURRENT_FORMAT_VERSION
}

/// The five gear slots as stored in a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearSet {
    pub head: ItemRef,
    pub chest: ItemRef,
    pub arms: ItemRef,
    pub legs: ItemRef,
    pub feet: ItemRef,
}

impl GearSet {
    /// Snapshots the gear half of an equipment record.
    #[must_use]
    pub fn from_equipment(equipment: &Equipment) -> Self {
        Self {
            head: equipment.head,
            chest: equipment.chest,
            arms: equipment.arms,
            legs: equipment.legs,
            feet: equipment.feet,
        }
    }

    /// Returns the stored item for a gear slot, `None` for accessories.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<ItemRef> {
        match slot {
            SlotId::Head => Some(self.head),
            SlotId::Chest => Some(self.chest),
            SlotId::Arms => Some(self.arms),
            SlotId::Legs => Some(self.legs),
            SlotId::Feet => Some(self.feet),
            _ => None,
        }
    }
}

/// The five accessory slots as stored in a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorySet {
    pub ear: ItemRef,
    pub neck: ItemRef,
    pub wrist: ItemRef,
    pub left_ring: ItemRef,
    pub right_ring: ItemRef,
}

impl AccessorySet {
    /// Snapshots the accessory half of an equipment record.
    #[must_use]
    pub fn from_equipment(equipment: &Equipment) -> Self {
        Self {
            ear: equipment.ear,
            neck: equipment.neck,
            wrist: equipment.wrist,
            left_ring: equipment.left_ring,
            right_ring: equipment.right_ring,
        }
    }

    /// Returns the stored item for an accessory slot, `None` for gear.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<ItemRef> {
        match slot {
            SlotId::Ear => Some(self.ear),
            SlotId::Neck => Some(self.neck),
            SlotId::Wrist => Some(self.wrist),
            SlotId::LeftRing => Some(self.left_ring),
            SlotId::RightRing => Some(self.right_ring),
            _ => None,
        }
    }
}

/// The canonical persisted character snapshot.
///
/// The `saved` header declares which groups the file carries; a group
/// only counts as contained when it is both declared and present. Groups
/// the file does not contain are `None` — distinct from a group that
/// explicitly stores empty slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterFile {
    #[serde(default = "current_tag")]
    pub format: String,
    #[serde(default = "current_version")]
    pub version: u32,
    pub saved: SaveModes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear: Option<GearSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<AccessorySet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapons: Option<WeaponSet>,
}

impl Default for CharacterFile {
    fn default() -> Self {
        Self {
            format: current_tag(),
            version: CURRENT_FORMAT_VERSION,
            saved: SaveModes::NONE,
            appearance: None,
            gear: None,
            accessories: None,
            weapons: None,
        }
    }
}

impl CharacterFile {
    /// Snapshots the selected groups of a live mirror.
    #[must_use]
    pub fn from_mirror(mirror: &EntityMirror, modes: SaveModes) -> Self {
        Self {
            format: current_tag(),
            version: CURRENT_FORMAT_VERSION,
            saved: modes,
            appearance: modes
                .contains(SaveModes::APPEARANCE)
                .then_some(mirror.appearance),
            gear: modes
                .contains(SaveModes::EQUIPMENT_GEAR)
                .then(|| GearSet::from_equipment(&mirror.equipment)),
            accessories: modes
                .contains(SaveModes::EQUIPMENT_ACCESSORIES)
                .then(|| AccessorySet::from_equipment(&mirror.equipment)),
            weapons: modes
                .contains(SaveModes::EQUIPMENT_WEAPONS)
                .then_some(mirror.weapons),
        }
    }

    /// The groups this file actually carries: the declared header
    /// intersected with the groups that are present.
    #[must_use]
    pub fn contained_modes(&self) -> SaveModes {
        let mut present = SaveModes::NONE;
        if self.appearance.is_some() {
            present |= SaveModes::APPEARANCE;
        }
        if self.gear.is_some() {
            present |= SaveModes::EQUIPMENT_GEAR;
        }
        if self.accessories.is_some() {
            present |= SaveModes::EQUIPMENT_ACCESSORIES;
        }
        if self.weapons.is_some() {
            present |= SaveModes::EQUIPMENT_WEAPONS;
        }
        present & self.saved
    }

    /// The stored item for a slot, if the slot's group is present.
    /// A stored [`ItemRef::EMPTY`] is a value, not an absence.
    #[must_use]
    pub fn slot_item(&self, slot: SlotId) -> Option<ItemRef> {
        if slot.is_gear() {
            self.gear.as_ref().and_then(|g| g.get(slot))
        } else {
            self.accessories.as_ref().and_then(|a| a.get(slot))
        }
    }

    /// Whether the format tag identifies this as a current-format file.
    #[must_use]
    pub fn has_current_tag(&self) -> bool {
        self.format == CURRENT_FORMAT_TAG
    }
}
