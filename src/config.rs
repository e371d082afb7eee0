//! Configuration types for trophy-cache

use crate::error::{Result, TrophyError};
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for the resolution report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON output with structured data
    Json,
}

/// Which equipment list an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipTarget {
    Armor,
    Tool,
}

/// Toggle an item on the creature of one trophy in the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipAction {
    /// Index of the trophy in the input file
    pub index: usize,
    /// Item identifier, e.g. `minecraft:iron_helmet`
    pub item: String,
    pub target: EquipTarget,
}

impl EquipAction {
    /// Parse `INDEX:ITEM`; the item may carry its own namespace
    pub fn parse(raw: &str, target: EquipTarget) -> Result<Self> {
        let (index, item) = raw.split_once(':').ok_or_else(|| {
            TrophyError::InvalidConfig(format!("equip action '{}' is not INDEX:ITEM", raw))
        })?;
        let index = usize::from_str(index.trim()).map_err(|e| {
            TrophyError::InvalidConfig(format!("equip action '{}': bad index: {}", raw, e))
        })?;
        if item.trim().is_empty() {
            return Err(TrophyError::InvalidConfig(format!(
                "equip action '{}' names no item",
                raw
            )));
        }
        Ok(Self {
            index,
            item: item.trim().to_string(),
            target,
        })
    }
}

/// Configuration options for trophy-cache
#[derive(Debug, Clone)]
pub struct Config {
    /// Vertical offset given to trophies that do not set one (default: 0.5)
    pub default_offset_y: f64,

    /// Scale given to trophies that do not set one (default: 0.5)
    pub default_scale: f32,

    /// Base block given to trophies that do not set one
    pub default_base_block: String,

    /// Number of threads for parallel resolution (default: num_cpus)
    pub num_threads: usize,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    /// Path to the JSON file of trophy descriptions (or "-" for stdin)
    pub input_filename: String,

    /// Path to output file (or "-" for stdout)
    pub output_filename: String,

    /// Extra entity identifiers to register before resolving
    pub registry_path: Option<PathBuf>,

    /// Equipment toggles applied before resolving
    pub equip: Vec<EquipAction>,

    /// Write the (possibly updated) trophy descriptions here
    pub save_path: Option<PathBuf>,

    /// Emit debug diagnostics on stderr
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_offset_y: 0.5,
            default_scale: 0.5,
            default_base_block: String::from("minecraft:smooth_stone"),
            num_threads: num_cpus::get(),
            output_format: OutputFormat::Console,
            input_filename: String::from("-"),
            output_filename: String::from("-"),
            registry_path: None,
            equip: Vec::new(),
            save_path: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Compute a hash of the options that fill in missing trophy fields.
    /// Reported alongside results so two runs can be compared.
    pub fn defaults_hash(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.default_offset_y.to_bits().hash(&mut hasher);
        self.default_scale.to_bits().hash(&mut hasher);
        self.default_base_block.hash(&mut hasher);
        hasher.finish()
    }
}
