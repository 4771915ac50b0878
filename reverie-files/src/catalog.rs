//! NPC catalog collaborator boundary.

use crate::current::{AccessorySet, CharacterFile, GearSet};
use reverie_model::{Appearance, Equipment, WeaponSet};
use reverie_types::{NpcId, SaveModes};
use serde::{Deserialize, Serialize};

/// A catalog NPC's full look: appearance, equipment and weapons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcAppearance {
    pub npc: NpcId,
    pub name: String,
    pub appearance: Appearance,
    pub equipment: Equipment,
    pub weapons: WeaponSet,
}

impl NpcAppearance {
    /// Pure projection into the current file format. The result contains
    /// every group, so it rides the same apply path as a loaded file.
    #[must_use]
    pub fn to_file(&self) -> CharacterFile {
        CharacterFile {
            saved: SaveModes::ALL,
            appearance: Some(self.appearance),
            gear: Some(GearSet::from_equipment(&self.equipment)),
            accessories: Some(AccessorySet::from_equipment(&self.equipment)),
            weapons: Some(self.weapons),
            ..CharacterFile::default()
        }
    }
}

/// Resolves catalog ids to appearances. Backed by game data elsewhere;
/// the core only needs the lookup.
pub trait NpcCatalog: Send + Sync {
    fn resolve(&self, id: NpcId) -> Option<NpcAppearance>;
}
