//! Identifier table used as the default entity factory

use super::class::EntityClass;
use super::model::Entity;
use super::{namespaced, EntityFactory};
use crate::error::{Result, TrophyError};
use crate::tag::Compound;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Vanilla creatures known out of the box
const DEFAULT_ENTRIES: &[(&str, EntityClass)] = &[
    ("armor_stand", EntityClass::ArmorStand),
    ("bat", EntityClass::Ambient),
    ("bee", EntityClass::AngerableMob),
    ("chicken", EntityClass::Mob),
    ("cow", EntityClass::Mob),
    ("creeper", EntityClass::Mob),
    ("enderman", EntityClass::AngerableMob),
    ("iron_golem", EntityClass::AngerableMob),
    ("pig", EntityClass::Mob),
    ("polar_bear", EntityClass::AngerableMob),
    ("sheep", EntityClass::Mob),
    ("shulker", EntityClass::Shulker),
    ("skeleton", EntityClass::Mob),
    ("spider", EntityClass::Mob),
    ("villager", EntityClass::Mob),
    ("wolf", EntityClass::AngerableMob),
    ("zombie", EntityClass::Mob),
    ("zombified_piglin", EntityClass::AngerableMob),
];

/// Maps identifiers to the class of creature they construct
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entries: HashMap<String, EntityClass>,
}

impl EntityRegistry {
    /// An empty registry; every identifier is unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the vanilla creatures
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (id, class) in DEFAULT_ENTRIES {
            registry.register(id, *class);
        }
        registry
    }

    pub fn register(&mut self, id: &str, class: EntityClass) {
        self.entries.insert(namespaced(id), class);
    }

    pub fn lookup(&self, id: &str) -> Option<EntityClass> {
        self.entries.get(&namespaced(id)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Add entries from a JSON object of `{"identifier": "class"}`
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)?;
        let entries: HashMap<String, EntityClass> =
            serde_json::from_str(&content).map_err(|e| {
                TrophyError::InvalidConfig(format!("registry '{}': {}", path.display(), e))
            })?;
        for (id, class) in &entries {
            self.register(id, *class);
        }
        Ok(entries.len())
    }
}

impl EntityFactory for EntityRegistry {
    fn create(&self, type_id: &str, description: &Compound) -> Result<Entity> {
        let id = namespaced(type_id);
        let class = self
            .lookup(&id)
            .ok_or_else(|| TrophyError::UnknownEntityType(type_id.to_string()))?;

        let mut entity = Entity::new(id, class);
        entity.load(description)?;
        Ok(entity)
    }
}
