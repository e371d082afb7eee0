//! Trophy block data
//!
//! A trophy displays either an item or a creature on a base block. Its
//! persisted form is a `TrophyData` compound; creature trophies carry the
//! creature description, which is resolved through the entity cache and
//! can be dressed with armor and hand items.

mod data;
mod equipment;

#[allow(unused_imports)]
pub use data::{Aabb, BlockPos, TrophyData, TrophyKind, BLOCK_ENTITY_FIELD};
#[allow(unused_imports)]
pub use equipment::{toggle_armor, toggle_hand, InteractionResult};
