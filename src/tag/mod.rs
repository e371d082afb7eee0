//! Serialized description trees
//!
//! Persisted trophies and creatures arrive as ordered tag trees (the host's
//! compound/list format, rendered as JSON at the file boundary). This module
//! provides the tree itself, the JSON conversion and the content fingerprint
//! used as the cache key.

mod hash;
mod json;
mod value;

pub use hash::{fingerprint, Fingerprint};
pub use value::{Compound, Tag};
