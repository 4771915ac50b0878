//! External actor classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of object the external entity is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Player,
    BattleNpc,
    EventNpc,
    Companion,
    Mount,
    #[default]
    Other,
}

impl ObjectKind {
    /// Whether appearance/equipment editing is supported for this kind.
    /// Only players and the two NPC kinds carry the full character model.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(
            self,
            ObjectKind::Player | ObjectKind::BattleNpc | ObjectKind::EventNpc
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Player => "player",
            ObjectKind::BattleNpc => "battle npc",
            ObjectKind::EventNpc => "event npc",
            ObjectKind::Companion => "companion",
            ObjectKind::Mount => "mount",
            ObjectKind::Other => "other",
        };
        f.write_str(name)
    }
}
