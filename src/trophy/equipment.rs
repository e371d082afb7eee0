//! Armor and hand item toggling on creature trophies

use super::data::TrophyData;
use crate::cache::EntityCache;
use crate::entity::EntityFactory;
use crate::item::ItemStack;
use crate::tag::{Compound, Tag};

const ARMOR_FIELD: &str = "ArmorItems";
const HAND_FIELD: &str = "HandItems";
const ARMOR_SLOTS: usize = 4;
const HAND_SLOTS: usize = 2;

/// Outcome of an interaction with a trophy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// Nothing happened; the caller may try something else
    Pass,
    /// The interaction changed the trophy
    Consume,
}

/// Toggle `held` in its armor slot; returns false if `held` is not armor
pub fn toggle_armor(description: &mut Compound, held: &ItemStack) -> bool {
    match held.armor_slot() {
        Some(slot) => {
            toggle_slot(description, ARMOR_FIELD, ARMOR_SLOTS, slot.index(), held);
            true
        }
        None => false,
    }
}

/// Toggle `held` in its hand slot
pub fn toggle_hand(description: &mut Compound, held: &ItemStack) {
    toggle_slot(description, HAND_FIELD, HAND_SLOTS, held.hand_slot().index(), held);
}

/// Read the fixed-size slot list, toggle one slot and write the list back
///
/// The same item type in the slot clears it; anything else replaces it.
fn toggle_slot(description: &mut Compound, field: &str, size: usize, slot: usize, held: &ItemStack) {
    let stored = description.try_list(field).unwrap_or(&[]);
    let mut slots: Vec<ItemStack> = (0..size)
        .map(|i| {
            stored
                .get(i)
                .and_then(Tag::as_compound)
                .map(ItemStack::from_tag)
                .unwrap_or_default()
        })
        .collect();

    slots[slot] = if slots[slot].same_item(held) {
        ItemStack::EMPTY
    } else {
        held.clone()
    };

    let list: Vec<Tag> = slots.iter().map(|s| Tag::Compound(s.to_tag())).collect();
    description.remove(field);
    if !list.is_empty() {
        description.put(field, Tag::List(list));
    }
}

impl TrophyData {
    /// Put on or take off a piece of armor
    pub fn equip_armor(
        &mut self,
        held: &ItemStack,
        cache: &EntityCache,
        factory: &dyn EntityFactory,
    ) -> InteractionResult {
        if held.armor_slot().is_none() || !self.can_equip(cache, factory) {
            return InteractionResult::Pass;
        }
        match self.entity_tag.as_mut() {
            Some(description) => {
                toggle_armor(description, held);
                InteractionResult::Consume
            }
            None => InteractionResult::Pass,
        }
    }

    /// Put an item in or take it out of the creature's hands
    pub fn equip_tool(
        &mut self,
        held: &ItemStack,
        cache: &EntityCache,
        factory: &dyn EntityFactory,
    ) -> InteractionResult {
        if !self.can_equip(cache, factory) {
            return InteractionResult::Pass;
        }
        match self.entity_tag.as_mut() {
            Some(description) => {
                toggle_hand(description, held);
                InteractionResult::Consume
            }
            None => InteractionResult::Pass,
        }
    }

    fn can_equip(&self, cache: &EntityCache, factory: &dyn EntityFactory) -> bool {
        self.entity(cache, factory)
            .map_or(false, |entity| entity.can_equip())
    }
}
