//! Equipment slot keys.
//!
//! Exactly ten well-known slots exist: five gear pieces and five
//! accessories. The set is closed — persisted data naming any other slot
//! is rejected at the parse boundary and can never reach the mirror.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten equipment slots on a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotId {
    Head,
    Chest,
    Arms,
    Legs,
    Feet,
    Ear,
    Neck,
    Wrist,
    LeftRing,
    RightRing,
}

impl SlotId {
    /// All ten slots, gear first.
    pub const ALL: [SlotId; 10] = [
        SlotId::Head,
        SlotId::Chest,
        SlotId::Arms,
        SlotId::Legs,
        SlotId::Feet,
        SlotId::Ear,
        SlotId::Neck,
        SlotId::Wrist,
        SlotId::LeftRing,
        SlotId::RightRing,
    ];

    /// The five gear slots.
    pub const GEAR: [SlotId; 5] = [
        SlotId::Head,
        SlotId::Chest,
        SlotId::Arms,
        SlotId::Legs,
        SlotId::Feet,
    ];

    /// The five accessory slots.
    pub const ACCESSORIES: [SlotId; 5] = [
        SlotId::Ear,
        SlotId::Neck,
        SlotId::Wrist,
        SlotId::LeftRing,
        SlotId::RightRing,
    ];

    /// Returns true for the five gear slots.
    #[must_use]
    pub const fn is_gear(self) -> bool {
        matches!(
            self,
            SlotId::Head | SlotId::Chest | SlotId::Arms | SlotId::Legs | SlotId::Feet
        )
    }

    /// Returns true for the five accessory slots.
    #[must_use]
    pub const fn is_accessory(self) -> bool {
        !self.is_gear()
    }

    /// Stable name used in persisted files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SlotId::Head => "head",
            SlotId::Chest => "chest",
            SlotId::Arms => "arms",
            SlotId::Legs => "legs",
            SlotId::Feet => "feet",
            SlotId::Ear => "ear",
            SlotId::Neck => "neck",
            SlotId::Wrist => "wrist",
            SlotId::LeftRing => "left_ring",
            SlotId::RightRing => "right_ring",
        }
    }

    /// Parses a persisted slot name.
    pub fn from_name(name: &str) -> crate::Result<Self> {
        match name {
            "head" => Ok(SlotId::Head),
            "chest" => Ok(SlotId::Chest),
            "arms" => Ok(SlotId::Arms),
            "legs" => Ok(SlotId::Legs),
            "feet" => Ok(SlotId::Feet),
            "ear" => Ok(SlotId::Ear),
            "neck" => Ok(SlotId::Neck),
            "wrist" => Ok(SlotId::Wrist),
            "left_ring" => Ok(SlotId::LeftRing),
            "right_ring" => Ok(SlotId::RightRing),
            other => Err(crate::Error::UnknownSlot(other.to_string())),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
