//! Batch loading and resolution of trophy files

pub mod loader;
pub mod processor;

pub use loader::{load_trophies, save_trophies};
#[allow(unused_imports)]
pub use processor::{apply_equipment, resolve_trophies, BatchResult, EntityOutcome, TrophyReport};
