//! Cache storage implementation

use super::assemble::assemble;
use crate::entity::{Entity, EntityFactory};
use crate::tag::{fingerprint, Compound, Fingerprint};
use dashmap::DashMap;
use log::{debug, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Construction slot for one fingerprint; `None` until a build succeeds
type Slot = Arc<Mutex<Option<Arc<Entity>>>>;

/// Memoizes constructed creatures by the fingerprint of their description
///
/// Entries are never evicted; they live as long as the cache value. A
/// failed construction leaves its slot empty, so the next request for the
/// same description tries again. Concurrent first requests for one fingerprint
/// serialize on that fingerprint's slot, so each description is built at
/// most once.
#[derive(Default)]
pub struct EntityCache {
    slots: DashMap<Fingerprint, Slot>,
    /// Number of successful constructions
    builds: AtomicUsize,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the creature `description` represents, building it on first use
    ///
    /// A hit is returned as-is without comparing descriptions. Returns `None`
    /// when the creature cannot be built; that outcome is not remembered.
    pub fn get(&self, description: &Compound, factory: &dyn EntityFactory) -> Option<Arc<Entity>> {
        let key = fingerprint(description);
        let slot = self.slots.entry(key).or_default().clone();
        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entity) = guard.as_ref() {
            debug!("Entity cache hit {}", key);
            return Some(Arc::clone(entity));
        }

        debug!("Entity cache miss {}", key);
        match assemble(description, factory) {
            Ok(built) => {
                for dropped in &built.dropped {
                    debug!("Dropped rider of {}: {}", built.entity.type_id(), dropped);
                }
                let entity = Arc::new(built.entity);
                *guard = Some(Arc::clone(&entity));
                self.builds.fetch_add(1, Ordering::Relaxed);
                Some(entity)
            }
            Err(e) => {
                warn!("Unable to load trophy entity: {}", e);
                warn!("Description: {}", description.to_json());
                None
            }
        }
    }

    /// Look up a description without building it
    #[allow(dead_code)]
    pub fn peek(&self, description: &Compound) -> Option<Arc<Entity>> {
        let key = fingerprint(description);
        let slot = self.slots.get(&key)?.clone();
        let guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Number of cached creatures
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| {
                slot.value()
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .is_some()
            })
            .count()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful constructions since the cache was created
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Drop every cached creature; callers keep the `Arc`s they hold
    #[allow(dead_code)]
    pub fn clear(&self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ANGER_TIME_FIELD, PASSENGERS_FIELD, PASSENGER_TYPE_FIELD, TYPE_FIELD};
    use crate::entity::EntityRegistry;
    use crate::error::{Result, TrophyError};
    use crate::tag::Tag;
    use rayon::prelude::*;

    /// Registry wrapper that counts factory calls
    struct CountingFactory {
        inner: EntityRegistry,
        calls: AtomicUsize,
    }

    impl CountingFactory {
        fn new() -> Self {
            Self {
                inner: EntityRegistry::with_defaults(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EntityFactory for CountingFactory {
        fn create(&self, type_id: &str, description: &Compound) -> Result<Entity> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.create(type_id, description)
        }
    }

    fn zombie() -> Compound {
        let mut c = Compound::new();
        c.put(TYPE_FIELD, "minecraft:zombie");
        c.put("CustomName", "Trophy");
        c
    }

    #[test]
    fn test_identical_descriptions_share_instance() {
        let cache = EntityCache::new();
        let factory = CountingFactory::new();

        let first = cache.get(&zombie(), &factory).unwrap();
        let second = cache.get(&zombie(), &factory).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.calls(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn test_distinct_descriptions_distinct_entries() {
        let cache = EntityCache::new();
        let factory = CountingFactory::new();
        let mut other = zombie();
        other.put("CustomName", "Other");

        let a = cache.get(&zombie(), &factory).unwrap();
        let b = cache.get(&other, &factory).unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_unknown_type_not_cached() {
        let cache = EntityCache::new();
        let factory = CountingFactory::new();
        let mut desc = Compound::new();
        desc.put(TYPE_FIELD, "minecraft:unicorn");

        assert!(cache.get(&desc, &factory).is_none());
        assert!(cache.get(&desc, &factory).is_none());

        assert_eq!(factory.calls(), 2);
        assert!(cache.is_empty());
        assert!(cache.peek(&desc).is_none());
    }

    #[test]
    fn test_malformed_rider_still_caches_parent() {
        let cache = EntityCache::new();
        let factory = CountingFactory::new();

        let mut good = Compound::new();
        good.put(PASSENGER_TYPE_FIELD, "minecraft:chicken");
        let mut bad = Compound::new();
        bad.put(PASSENGER_TYPE_FIELD, "minecraft:chicken");
        bad.put("Health", "not a number");

        let mut desc = Compound::new();
        desc.put(TYPE_FIELD, "minecraft:pig");
        desc.put(
            PASSENGERS_FIELD,
            Tag::List(vec![Tag::Compound(good), Tag::Compound(bad)]),
        );

        let pig = cache.get(&desc, &factory).unwrap();
        assert_eq!(pig.passengers().len(), 1);
        assert_eq!(pig.passengers()[0].type_id(), "minecraft:chicken");
        assert!(Arc::ptr_eq(&pig, &cache.peek(&desc).unwrap()));
    }

    #[test]
    fn test_anger_time_visible_after_construction() {
        let cache = EntityCache::new();
        let mut desc = Compound::new();
        desc.put(TYPE_FIELD, "minecraft:wolf");
        desc.put(ANGER_TIME_FIELD, 200);

        let wolf = cache.get(&desc, &EntityRegistry::with_defaults()).unwrap();
        assert_eq!(wolf.anger_time(), Some(200));
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let cache = EntityCache::new();
        let factory = CountingFactory::new();
        let desc = zombie();

        let results: Vec<Arc<Entity>> = (0..64)
            .into_par_iter()
            .map(|_| cache.get(&desc, &factory).unwrap())
            .collect();

        assert_eq!(factory.calls(), 1);
        assert!(results.iter().all(|e| Arc::ptr_eq(e, &results[0])));
    }

    #[test]
    fn test_clear_forces_rebuild() {
        let cache = EntityCache::new();
        let factory = CountingFactory::new();

        let before = cache.get(&zombie(), &factory).unwrap();
        cache.clear();
        assert!(cache.is_empty());

        let after = cache.get(&zombie(), &factory).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(cache.builds(), 2);
    }

    #[test]
    fn test_factory_error_kind_is_not_fatal() {
        let cache = EntityCache::new();
        let mut desc = zombie();
        desc.put("Health", Tag::List(vec![]));

        let registry = EntityRegistry::with_defaults();
        assert!(matches!(
            registry.create("minecraft:zombie", &desc),
            Err(TrophyError::EntityLoad { .. })
        ));
        assert!(cache.get(&desc, &registry).is_none());
    }
}
