//! CLI argument parsing using clap

use crate::config::{Config, EquipAction, EquipTarget, OutputFormat};
use crate::error::{Result, TrophyError};
use clap::Parser;
use std::path::PathBuf;

/// Trophy description loader with a content-keyed creature cache
#[derive(Parser, Debug)]
#[command(name = "trophy-cache")]
#[command(version)]
#[command(about = "Load trophy descriptions and resolve their creatures", long_about = None)]
pub struct Cli {
    /// JSON file containing an array of trophy descriptions
    /// Use "-" to read from stdin
    #[arg(value_name = "TROPHIES")]
    pub trophies: String,

    /// Output file for the report (use "-" for stdout)
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output: String,

    /// Number of threads for parallel resolution
    #[arg(short = 'j', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Vertical offset for trophies that do not set one
    #[arg(long = "offset-y", value_name = "Y", default_value = "0.5", allow_negative_numbers = true)]
    pub offset_y: f64,

    /// Scale for trophies that do not set one
    #[arg(long = "scale", value_name = "S", default_value = "0.5")]
    pub scale: f32,

    /// Base block for trophies that do not set one
    #[arg(long = "base-block", value_name = "ID", default_value = "minecraft:smooth_stone")]
    pub base_block: String,

    /// JSON object of extra creature identifiers and their classes
    #[arg(long = "registry", value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Toggle an armor piece on a creature trophy (INDEX:ITEM)
    #[arg(long = "equip", value_name = "INDEX:ITEM")]
    pub equip: Vec<String>,

    /// Toggle a held item on a creature trophy (INDEX:ITEM)
    #[arg(long = "equip-tool", value_name = "INDEX:ITEM")]
    pub equip_tool: Vec<String>,

    /// Write the updated trophy descriptions to this file
    #[arg(long = "save", value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Print debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if self.threads == Some(0) {
            return Err(TrophyError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(TrophyError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.offset_y.is_finite() {
            return Err(TrophyError::InvalidConfig(
                "offset must be a finite number".to_string(),
            ));
        }

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        // Armor actions first, then tools, each in the order given
        let equip = self
            .equip
            .iter()
            .map(|raw| EquipAction::parse(raw, EquipTarget::Armor))
            .chain(
                self.equip_tool
                    .iter()
                    .map(|raw| EquipAction::parse(raw, EquipTarget::Tool)),
            )
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            default_offset_y: self.offset_y,
            default_scale: self.scale,
            default_base_block: self.base_block,
            num_threads: self.threads.unwrap_or_else(num_cpus::get),
            output_format,
            input_filename: self.trophies,
            output_filename: self.output,
            registry_path: self.registry,
            equip,
            save_path: self.save,
            verbose: self.verbose,
        })
    }
}
