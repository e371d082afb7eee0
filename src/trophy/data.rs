//! Trophy description loading, defaulting and saving

use crate::cache::{EntityCache, TYPE_FIELD};
use crate::config::Config;
use crate::entity::{namespaced, Entity, EntityFactory};
use crate::item::ItemStack;
use crate::tag::{Compound, Tag};
use std::sync::Arc;

/// Field of the block entity tag holding the trophy data
pub const BLOCK_ENTITY_FIELD: &str = "TrophyData";

const DEFAULT_ITEM: &str = "minecraft:enchanted_golden_apple";

/// What the trophy displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrophyKind {
    #[default]
    Item,
    Entity,
}

impl TrophyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TrophyKind::Item => "item",
            TrophyKind::Entity => "entity",
        }
    }

    /// Anything other than `entity` displays an item
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("entity") {
            TrophyKind::Entity
        } else {
            TrophyKind::Item
        }
    }
}

/// Block position in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned box used to cull trophy rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

/// Loaded trophy state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrophyData {
    pub kind: TrophyKind,
    pub item: Option<ItemStack>,
    pub entity_tag: Option<Compound>,
    pub offset_y: f64,
    pub scale: f32,
    pub base_block: String,
    pub name: Option<String>,
    /// Block position, when loaded from a full block entity tag
    pub pos: Option<BlockPos>,
    identifier: String,
}

impl TrophyData {
    /// Fill in the fields a trophy description may leave out
    pub fn populate_defaults(tag: &mut Compound, config: &Config) {
        if !tag.contains("TrophyType") {
            tag.put("TrophyType", TrophyKind::Item.as_str());
        }
        if !tag.contains("TrophyItem") && tag.get_string("TrophyType") == TrophyKind::Item.as_str()
        {
            tag.put("TrophyItem", ItemStack::new(DEFAULT_ITEM, 1).to_tag());
        }
        if !tag.contains("Scale") {
            tag.put("Scale", Tag::Float(config.default_scale));
        }
        if !tag.contains("OffsetY") {
            tag.put("OffsetY", Tag::Double(config.default_offset_y));
        }
        if !tag.contains("BaseBlock") {
            tag.put("BaseBlock", config.default_base_block.as_str());
        }
    }

    /// Load a `TrophyData` compound, applying defaults first
    pub fn load(tag: &Compound, config: &Config) -> Self {
        let mut tag = tag.clone();
        Self::populate_defaults(&mut tag, config);

        let mut data = TrophyData {
            kind: TrophyKind::parse(&tag.get_string("TrophyType")),
            identifier: tag.get_string("identifier"),
            ..Default::default()
        };

        if let Some(item_tag) = tag.try_compound("TrophyItem") {
            let mut item_tag = item_tag.clone();
            if !item_tag.contains("Count") {
                item_tag.put("Count", Tag::Double(1.0));
            }
            data.item = Some(ItemStack::from_tag(&item_tag));
        }

        if let Some(entity_tag) = tag.try_compound("TrophyEntity") {
            if data.identifier.is_empty() {
                data.identifier = entity_tag.get_string(TYPE_FIELD);
            }
            data.entity_tag = Some(entity_tag.clone());
        }

        data.scale = tag.get_float("Scale");
        data.offset_y = tag.get_double("OffsetY");
        data.base_block = namespaced(&tag.get_string("BaseBlock"));
        data.name = tag.try_string("Name").map(str::to_string);

        data
    }

    /// Serialize back into a `TrophyData` compound
    pub fn save(&self) -> Compound {
        let mut tag = Compound::new();
        tag.put("TrophyType", self.kind.as_str());
        if !self.identifier.is_empty() {
            tag.put("identifier", self.identifier.as_str());
        }
        if let Some(item) = &self.item {
            tag.put("TrophyItem", item.to_tag());
        }
        if let Some(entity_tag) = &self.entity_tag {
            tag.put("TrophyEntity", entity_tag.clone());
        }
        tag.put("OffsetY", Tag::Double(self.offset_y));
        tag.put("Scale", Tag::Float(self.scale));
        tag.put("BaseBlock", self.base_block.as_str());
        if let Some(name) = &self.name {
            tag.put("Name", name.as_str());
        }
        tag
    }

    /// Load from a full block entity tag
    pub fn load_block_entity(tag: &Compound, config: &Config) -> Self {
        let mut data = Self::load(&tag.get_compound(BLOCK_ENTITY_FIELD), config);
        if ["x", "y", "z"].iter().all(|axis| tag.try_i64(axis).is_some()) {
            data.pos = Some(BlockPos::new(
                tag.get_int("x"),
                tag.get_int("y"),
                tag.get_int("z"),
            ));
        }
        data
    }

    /// Serialize as a full block entity tag
    pub fn save_block_entity(&self) -> Compound {
        let mut tag = Compound::new();
        if let Some(pos) = self.pos {
            tag.put("x", pos.x);
            tag.put("y", pos.y);
            tag.put("z", pos.z);
        }
        tag.put(BLOCK_ENTITY_FIELD, self.save());
        tag
    }

    /// Tag sent to clients when the trophy changes
    #[allow(dead_code)]
    pub fn update_tag(&self) -> Compound {
        self.save_block_entity()
    }

    /// Replace this trophy's state with a received update tag
    #[allow(dead_code)]
    pub fn handle_update_tag(&mut self, tag: &Compound, config: &Config) {
        *self = Self::load_block_entity(tag, config);
    }

    /// Identifier shown for the trophy (explicit, or the creature type)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Render bounds of this trophy, if its position is known
    pub fn bounds(&self) -> Option<Aabb> {
        self.pos.map(Self::render_bounds)
    }

    /// Render bounds: the trophy block plus the space above it
    pub fn render_bounds(pos: BlockPos) -> Aabb {
        Aabb {
            min: [pos.x as f64, pos.y as f64, pos.z as f64],
            max: [pos.x as f64 + 1.0, pos.y as f64 + 2.0, pos.z as f64 + 1.0],
        }
    }

    /// Resolve the displayed creature, if this trophy carries one
    pub fn entity(&self, cache: &EntityCache, factory: &dyn EntityFactory) -> Option<Arc<Entity>> {
        self.entity_tag
            .as_ref()
            .and_then(|tag| cache.get(tag, factory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityRegistry;
    use pretty_assertions::assert_eq;

    fn entity_trophy() -> Compound {
        let mut creature = Compound::new();
        creature.put(TYPE_FIELD, "minecraft:bee");
        creature.put("AngerTime", 200);

        let mut tag = Compound::new();
        tag.put("TrophyType", "entity");
        tag.put("TrophyEntity", creature);
        tag
    }

    #[test]
    fn test_empty_tag_becomes_default_item_trophy() {
        let config = Config::default();
        let data = TrophyData::load(&Compound::new(), &config);

        assert_eq!(data.kind, TrophyKind::Item);
        assert_eq!(data.item.as_ref().unwrap().id(), DEFAULT_ITEM);
        assert_eq!(data.scale, 0.5);
        assert_eq!(data.offset_y, config.default_offset_y);
        assert_eq!(data.base_block, config.default_base_block);
        assert!(data.entity_tag.is_none());
        assert!(data.name.is_none());
    }

    #[test]
    fn test_entity_trophy_gets_no_default_item() {
        let data = TrophyData::load(&entity_trophy(), &Config::default());
        assert_eq!(data.kind, TrophyKind::Entity);
        assert!(data.item.is_none());
        assert_eq!(data.identifier(), "minecraft:bee");
    }

    #[test]
    fn test_explicit_identifier_wins() {
        let mut tag = entity_trophy();
        tag.put("identifier", "queen_bee");
        let data = TrophyData::load(&tag, &Config::default());
        assert_eq!(data.identifier(), "queen_bee");
    }

    #[test]
    fn test_item_without_count_counts_one() {
        let mut item = Compound::new();
        item.put("id", "minecraft:diamond");
        let mut tag = Compound::new();
        tag.put("TrophyItem", item);

        let data = TrophyData::load(&tag, &Config::default());
        let stack = data.item.unwrap();
        assert_eq!(stack.id(), "minecraft:diamond");
        assert_eq!(stack.count(), 1);
    }

    #[test]
    fn test_save_load_block_entity() {
        let config = Config::default();
        let mut tag = entity_trophy();
        tag.put("Name", "Buzz");
        tag.put("Scale", Tag::Float(1.5));
        let mut data = TrophyData::load(&tag, &config);
        data.pos = Some(BlockPos::new(4, 70, -9));

        let saved = data.save_block_entity();
        assert!(saved.contains(BLOCK_ENTITY_FIELD));
        assert_eq!(saved.get_int("y"), 70);
        assert_eq!(TrophyData::load_block_entity(&saved, &config), data);
    }

    #[test]
    fn test_handle_update_tag_replaces_state() {
        let config = Config::default();
        let source = TrophyData::load(&entity_trophy(), &config);
        let mut target = TrophyData::load(&Compound::new(), &config);

        target.handle_update_tag(&source.update_tag(), &config);
        assert_eq!(target, source);
    }

    #[test]
    fn test_render_bounds() {
        let bounds = TrophyData::render_bounds(BlockPos::new(10, 64, -3));
        assert_eq!(bounds.min, [10.0, 64.0, -3.0]);
        assert_eq!(bounds.max, [11.0, 66.0, -2.0]);
    }

    #[test]
    fn test_entity_resolves_through_cache() {
        let cache = EntityCache::new();
        let registry = EntityRegistry::with_defaults();
        let data = TrophyData::load(&entity_trophy(), &Config::default());

        let bee = data.entity(&cache, &registry).unwrap();
        assert_eq!(bee.anger_time(), Some(200));
        assert!(Arc::ptr_eq(&bee, &data.entity(&cache, &registry).unwrap()));

        let item_trophy = TrophyData::load(&Compound::new(), &Config::default());
        assert!(item_trophy.entity(&cache, &registry).is_none());
    }
}
