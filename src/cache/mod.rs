//! Content-keyed cache of constructed creatures
//!
//! Creature trophies are described by tag trees that are loaded again and
//! again (every sync, every render pass). Building the creature is the
//! expensive part, so the result is memoized under the fingerprint of the
//! description and shared between every caller that asks for it.

mod assemble;
mod storage;

#[allow(unused_imports)]
pub use assemble::{assemble, Assembled, AttachError};
pub use storage::EntityCache;

/// Field naming the creature type of a top-level description
pub const TYPE_FIELD: &str = "entityType";

/// Field naming the creature type of a passenger description
pub const PASSENGER_TYPE_FIELD: &str = "id";

/// Remaining anger timer, applied when the creature supports it
pub const ANGER_TIME_FIELD: &str = "AngerTime";

/// Raw peek amount, applied when the creature supports it
pub const PEEK_FIELD: &str = "Peek";

/// Ordered list of riders
pub const PASSENGERS_FIELD: &str = "Passengers";
