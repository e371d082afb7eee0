//! Capability classes

use serde::Deserialize;
use std::fmt;

/// Closed set of creature kinds, each with a fixed set of capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityClass {
    /// No equipment, no special state
    Ambient,
    /// Can wear armor and hold items
    Mob,
    /// A mob with a persistent anger timer
    #[serde(alias = "angerable")]
    AngerableMob,
    /// A mob with a peek (shell opening) state
    Shulker,
    /// Wears equipment but is not alive
    ArmorStand,
}

impl EntityClass {
    /// Whether a remaining anger timer can be set
    pub fn supports_timer(self) -> bool {
        matches!(self, EntityClass::AngerableMob)
    }

    /// Whether a peek state can be set
    pub fn supports_peek_state(self) -> bool {
        matches!(self, EntityClass::Shulker)
    }

    /// Whether armor and hand items can be equipped
    pub fn can_equip(self) -> bool {
        !matches!(self, EntityClass::Ambient)
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityClass::Ambient => "ambient",
            EntityClass::Mob => "mob",
            EntityClass::AngerableMob => "angerable_mob",
            EntityClass::Shulker => "shulker",
            EntityClass::ArmorStand => "armor_stand",
        }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
