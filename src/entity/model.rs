//! Constructed creatures

use super::class::EntityClass;
use crate::error::{Result, TrophyError};
use crate::item::ItemStack;
use crate::tag::{Compound, Tag};

pub const ARMOR_SLOTS: usize = 4;
pub const HAND_SLOTS: usize = 2;

/// A creature built from its description
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    type_id: String,
    class: EntityClass,
    custom_name: Option<String>,
    health: Option<f32>,
    anger_time: Option<i32>,
    peek: Option<i32>,
    armor: [ItemStack; ARMOR_SLOTS],
    hands: [ItemStack; HAND_SLOTS],
    passengers: Vec<Entity>,
}

impl Entity {
    pub fn new(type_id: impl Into<String>, class: EntityClass) -> Self {
        Self {
            type_id: type_id.into(),
            class,
            custom_name: None,
            health: None,
            anger_time: None,
            peek: None,
            armor: Default::default(),
            hands: Default::default(),
            passengers: Vec::new(),
        }
    }

    /// Load the generic fields of a description into this entity
    ///
    /// Absent fields are left alone; present fields of the wrong type fail
    /// the whole load.
    pub fn load(&mut self, description: &Compound) -> Result<()> {
        if let Some(value) = description.get("CustomName") {
            let name = value
                .as_str()
                .ok_or_else(|| self.load_error("CustomName is not a string"))?;
            self.custom_name = Some(name.to_string());
        }

        if let Some(value) = description.get("Health") {
            let health = value
                .as_f64()
                .ok_or_else(|| self.load_error("Health is not numeric"))?;
            self.health = Some(health as f32);
        }

        if self.class.can_equip() {
            read_slots(self, description, "ArmorItems", ARMOR_SLOTS)?
                .into_iter()
                .enumerate()
                .for_each(|(i, stack)| self.armor[i] = stack);
            read_slots(self, description, "HandItems", HAND_SLOTS)?
                .into_iter()
                .enumerate()
                .for_each(|(i, stack)| self.hands[i] = stack);
        }

        Ok(())
    }

    fn load_error(&self, reason: &str) -> TrophyError {
        TrophyError::EntityLoad {
            entity_type: self.type_id.clone(),
            reason: reason.to_string(),
        }
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn class(&self) -> EntityClass {
        self.class
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.custom_name.as_deref()
    }

    pub fn health(&self) -> Option<f32> {
        self.health
    }

    pub fn supports_timer(&self) -> bool {
        self.class.supports_timer()
    }

    pub fn supports_peek_state(&self) -> bool {
        self.class.supports_peek_state()
    }

    pub fn can_equip(&self) -> bool {
        self.class.can_equip()
    }

    pub fn anger_time(&self) -> Option<i32> {
        self.anger_time
    }

    /// Set the remaining anger timer; returns false if unsupported
    pub fn set_remaining_anger_time(&mut self, ticks: i32) -> bool {
        if !self.supports_timer() {
            return false;
        }
        self.anger_time = Some(ticks);
        true
    }

    pub fn peek(&self) -> Option<i32> {
        self.peek
    }

    /// Set the raw peek amount; returns false if unsupported
    pub fn set_peek_amount(&mut self, amount: i32) -> bool {
        if !self.supports_peek_state() {
            return false;
        }
        self.peek = Some(amount);
        true
    }

    pub fn armor(&self) -> &[ItemStack] {
        &self.armor
    }

    pub fn hands(&self) -> &[ItemStack] {
        &self.hands
    }

    pub fn passengers(&self) -> &[Entity] {
        &self.passengers
    }

    /// Seat `rider` on this entity, after any existing riders
    pub fn add_passenger(&mut self, rider: Entity) {
        self.passengers.push(rider);
    }

    /// Number of entities in this tree, including this one
    #[allow(dead_code)]
    pub fn tree_size(&self) -> usize {
        1 + self.passengers.iter().map(Entity::tree_size).sum::<usize>()
    }
}

fn read_slots(
    entity: &Entity,
    description: &Compound,
    field: &str,
    size: usize,
) -> Result<Vec<ItemStack>> {
    let Some(value) = description.get(field) else {
        return Ok(Vec::new());
    };
    let items = value
        .as_list()
        .ok_or_else(|| entity.load_error(&format!("{} is not a list", field)))?;

    items
        .iter()
        .take(size)
        .map(|item| match item {
            Tag::Compound(c) => Ok(ItemStack::from_tag(c)),
            _ => Err(entity.load_error(&format!("{} entry is not a compound", field))),
        })
        .collect()
}
