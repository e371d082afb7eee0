//! Item stacks as stored in trophy and equipment descriptions

use crate::entity::namespaced;
use crate::tag::{Compound, Tag};

const AIR: &str = "minecraft:air";

/// Armor slot index in the `ArmorItems` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorSlot {
    Head = 0,
    Chest = 1,
    Legs = 2,
    Feet = 3,
}

impl ArmorSlot {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Hand slot index in the `HandItems` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandSlot {
    MainHand = 0,
    OffHand = 1,
}

impl HandSlot {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// An item and its count, plus the optional item tag
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemStack {
    id: String,
    count: i32,
    tag: Option<Compound>,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        id: String::new(),
        count: 0,
        tag: None,
    };

    pub fn new(id: &str, count: i32) -> Self {
        Self {
            id: namespaced(id),
            count,
            tag: None,
        }
    }

    /// Read a stack; air, a missing id or a non-positive count read as empty
    pub fn from_tag(tag: &Compound) -> Self {
        let id = tag.get_string("id");
        let count = tag.get_int("Count");
        if id.is_empty() || count <= 0 {
            return Self::EMPTY;
        }
        let id = namespaced(&id);
        if id == AIR {
            return Self::EMPTY;
        }
        Self {
            id,
            count,
            tag: tag.try_compound("tag").cloned(),
        }
    }

    /// Serialize the stack; an empty stack is an empty compound
    pub fn to_tag(&self) -> Compound {
        let mut out = Compound::new();
        if self.is_empty() {
            return out;
        }
        out.put("id", self.id.as_str());
        // Int, since JSON keeps no byte width
        out.put("Count", Tag::Int(self.count.clamp(0, i8::MAX as i32)));
        if let Some(tag) = &self.tag {
            out.put("tag", tag.clone());
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() || self.count <= 0
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Same item type, ignoring count and item tag
    pub fn same_item(&self, other: &ItemStack) -> bool {
        self.id == other.id
    }

    /// Armor slot derived from the item type, if the item is armor
    pub fn armor_slot(&self) -> Option<ArmorSlot> {
        let path = self.path();
        if path.ends_with("_helmet") {
            Some(ArmorSlot::Head)
        } else if path.ends_with("_chestplate") || path == "elytra" {
            Some(ArmorSlot::Chest)
        } else if path.ends_with("_leggings") {
            Some(ArmorSlot::Legs)
        } else if path.ends_with("_boots") {
            Some(ArmorSlot::Feet)
        } else {
            None
        }
    }

    /// Shields go to the off hand, everything else to the main hand
    pub fn hand_slot(&self) -> HandSlot {
        if self.path() == "shield" {
            HandSlot::OffHand
        } else {
            HandSlot::MainHand
        }
    }

    fn path(&self) -> &str {
        self.id.rsplit(':').next().unwrap_or("")
    }
}
