//! Field-group selection bitmask.
//!
//! `SaveModes` plays two roles: a file header describing which field
//! groups the file contains, and an apply argument describing which groups
//! the caller wants. The effective apply set is the intersection of the
//! two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Bitmask over the four persistable field groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveModes(u8);

impl SaveModes {
    /// No groups.
    pub const NONE: SaveModes = SaveModes(0);
    /// The whole appearance record.
    pub const APPEARANCE: SaveModes = SaveModes(1);
    /// The five gear slots.
    pub const EQUIPMENT_GEAR: SaveModes = SaveModes(1 << 1);
    /// The five accessory slots.
    pub const EQUIPMENT_ACCESSORIES: SaveModes = SaveModes(1 << 2);
    /// Both weapons and their visibility flags.
    pub const EQUIPMENT_WEAPONS: SaveModes = SaveModes(1 << 3);
    /// All three equipment groups.
    pub const EQUIPMENT: SaveModes = SaveModes(0b1110);
    /// Everything.
    pub const ALL: SaveModes = SaveModes(0b1111);

    /// Returns true when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: SaveModes) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true when at least one bit is shared with `other`.
    #[must_use]
    pub const fn intersects(self, other: SaveModes) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true when no group is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw header byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Reconstructs from a persisted header byte, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }
}

impl BitOr for SaveModes {
    type Output = SaveModes;

    fn bitor(self, rhs: SaveModes) -> SaveModes {
        SaveModes(self.0 | rhs.0)
    }
}

impl BitOrAssign for SaveModes {
    fn bitor_assign(&mut self, rhs: SaveModes) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SaveModes {
    type Output = SaveModes;

    fn bitand(self, rhs: SaveModes) -> SaveModes {
        SaveModes(self.0 & rhs.0)
    }
}

impl BitAndAssign for SaveModes {
    fn bitand_assign(&mut self, rhs: SaveModes) {
        self.0 &= rhs.0;
    }
}

impl fmt::Display for SaveModes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (bit, name) in [
            (SaveModes::APPEARANCE, "appearance"),
            (SaveModes::EQUIPMENT_GEAR, "gear"),
            (SaveModes::EQUIPMENT_ACCESSORIES, "accessories"),
            (SaveModes::EQUIPMENT_WEAPONS, "weapons"),
        ] {
            if self.contains(bit) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
