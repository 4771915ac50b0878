//! Item references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an equippable item by its model triple.
///
/// `model_set` is nonzero only for weapons. The all-zero value is the
/// "slot intentionally empty" sentinel — a stored empty is a value to
/// apply, distinct from a slot a file simply does not mention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub model_set: u16,
    pub model_base: u16,
    pub model_variant: u16,
}

impl ItemRef {
    /// The empty-slot sentinel.
    pub const EMPTY: ItemRef = ItemRef {
        model_set: 0,
        model_base: 0,
        model_variant: 0,
    };

    /// The fixed NPC smallclothes body item.
    pub const NPC_BODY: ItemRef = ItemRef {
        model_set: 0,
        model_base: 9903,
        model_variant: 1,
    };

    /// Creates a gear or accessory item reference (no weapon set id).
    #[must_use]
    pub const fn gear(model_base: u16, model_variant: u16) -> Self {
        Self {
            model_set: 0,
            model_base,
            model_variant,
        }
    }

    /// Creates a weapon item reference.
    #[must_use]
    pub const fn weapon(model_set: u16, model_base: u16, model_variant: u16) -> Self {
        Self {
            model_set,
            model_base,
            model_variant,
        }
    }

    /// Returns true for the empty-slot sentinel.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.model_set == 0 && self.model_base == 0 && self.model_variant == 0
    }

    /// Parses the legacy string form: `"base,variant"` for gear,
    /// `"set,base,variant"` for weapons.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let invalid = || crate::Error::InvalidItem(s.to_string());
        let parts: Vec<u16> = s
            .split(',')
            .map(|p| p.trim().parse::<u16>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        match parts[..] {
            [base, variant] => Ok(Self::gear(base, variant)),
            [set, base, variant] => Ok(Self::weapon(set, base, variant)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.model_set != 0 {
            write!(
                f,
                "{},{},{}",
                self.model_set, self.model_base, self.model_variant
            )
        } else {
            write!(f, "{},{}", self.model_base, self.model_variant)
        }
    }
}
