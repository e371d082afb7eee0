//! Equipment actions and parallel creature resolution

use crate::cache::EntityCache;
use crate::config::{Config, EquipAction, EquipTarget};
use crate::entity::{Entity, EntityFactory};
use crate::error::{Result, TrophyError};
use crate::item::ItemStack;
use crate::trophy::{InteractionResult, TrophyData};
use rayon::prelude::*;
use std::sync::Arc;

/// What happened to the creature of one trophy
#[derive(Debug, Clone)]
pub enum EntityOutcome {
    /// The trophy carries no creature description
    None,
    /// The creature was built (or found in the cache)
    Resolved(Arc<Entity>),
    /// The description names a creature that cannot be built
    NotFound,
}

/// Resolution result for one trophy
#[derive(Debug, Clone)]
pub struct TrophyReport {
    /// Position of the trophy in the input file
    pub index: usize,
    pub trophy: TrophyData,
    pub entity: EntityOutcome,
}

/// Result of resolving a batch
#[derive(Debug)]
pub struct BatchResult {
    pub reports: Vec<TrophyReport>,
    /// Creatures successfully resolved
    pub resolved: usize,
    /// Creature descriptions that could not be built
    pub not_found: usize,
    /// Distinct creatures held by the cache afterwards
    pub cache_entries: usize,
    /// Constructions performed for this batch
    pub builds: usize,
}

/// Apply equipment toggles in order; returns how many changed a trophy
pub fn apply_equipment(
    trophies: &mut [TrophyData],
    actions: &[EquipAction],
    cache: &EntityCache,
    factory: &dyn EntityFactory,
    progress: &impl Fn(&str),
) -> Result<usize> {
    let loaded = trophies.len();
    let mut applied = 0;
    for action in actions {
        let trophy = trophies.get_mut(action.index).ok_or_else(|| {
            TrophyError::InvalidConfig(format!(
                "equip action targets trophy {}, but only {} were loaded",
                action.index, loaded
            ))
        })?;

        let held = ItemStack::new(&action.item, 1);
        let result = match action.target {
            EquipTarget::Armor => trophy.equip_armor(&held, cache, factory),
            EquipTarget::Tool => trophy.equip_tool(&held, cache, factory),
        };

        match result {
            InteractionResult::Consume => applied += 1,
            InteractionResult::Pass => progress(&format!(
                "Warning: cannot equip '{}' on trophy {}",
                held.id(),
                action.index
            )),
        }
    }
    Ok(applied)
}

/// Resolve every creature trophy against the shared cache
pub fn resolve_trophies(
    trophies: &[TrophyData],
    cache: &EntityCache,
    factory: &dyn EntityFactory,
    config: &Config,
    progress: impl Fn(&str) + Send + Sync,
) -> Result<BatchResult> {
    let creatures = trophies.iter().filter(|t| t.entity_tag.is_some()).count();
    progress(&format!(
        "Resolving {} creature trophies out of {}...",
        creatures,
        trophies.len()
    ));

    let builds_before = cache.builds();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build()
        .map_err(|e| TrophyError::Other(format!("Failed to create thread pool: {}", e)))?;

    let reports: Vec<TrophyReport> = pool.install(|| {
        trophies
            .par_iter()
            .enumerate()
            .map(|(index, trophy)| {
                let entity = match &trophy.entity_tag {
                    None => EntityOutcome::None,
                    Some(_) => match trophy.entity(cache, factory) {
                        Some(entity) => EntityOutcome::Resolved(entity),
                        None => EntityOutcome::NotFound,
                    },
                };
                TrophyReport {
                    index,
                    trophy: trophy.clone(),
                    entity,
                }
            })
            .collect()
    });

    let resolved = reports
        .iter()
        .filter(|r| matches!(r.entity, EntityOutcome::Resolved(_)))
        .count();
    let not_found = reports
        .iter()
        .filter(|r| matches!(r.entity, EntityOutcome::NotFound))
        .count();

    let result = BatchResult {
        reports,
        resolved,
        not_found,
        cache_entries: cache.len(),
        builds: cache.builds() - builds_before,
    };

    progress(&format!(
        "Resolved {} creatures ({} built, {} not found)",
        result.resolved, result.builds, result.not_found
    ));

    Ok(result)
}
