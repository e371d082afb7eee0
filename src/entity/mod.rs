//! Creature construction from descriptions
//!
//! The cache never constructs creatures itself; it asks an [`EntityFactory`]
//! to turn a type identifier plus a description into an [`Entity`]. The
//! default factory is the [`EntityRegistry`], which knows a fixed table of
//! identifiers and the capability class of each.

mod class;
mod model;
mod registry;

use crate::error::Result;
use crate::tag::Compound;

#[allow(unused_imports)]
pub use class::EntityClass;
pub use model::Entity;
pub use registry::EntityRegistry;

/// Namespace applied to identifiers written without one
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Trait for building creatures from their descriptions
///
/// Implementations must be pure with respect to their inputs: the same
/// identifier and description always yield an equivalent entity.
pub trait EntityFactory: Send + Sync {
    /// Construct an entity of `type_id` and load `description` into it
    fn create(&self, type_id: &str, description: &Compound) -> Result<Entity>;
}

/// Qualify a bare identifier with the default namespace
pub fn namespaced(id: &str) -> String {
    let id = id.trim().to_lowercase();
    if id.is_empty() || id.contains(':') {
        id
    } else {
        format!("{}:{}", DEFAULT_NAMESPACE, id)
    }
}
