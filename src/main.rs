//! trophy-cache - Trophy description loader
//!
//! Loads persisted trophy descriptions, fills in defaults, toggles creature
//! equipment, and resolves every creature trophy through a cache keyed by
//! the content fingerprint of its description.

mod batch;
mod cache;
mod cli;
mod config;
mod entity;
mod error;
mod export;
mod item;
mod logging;
mod tag;
mod trophy;

use batch::{apply_equipment, load_trophies, resolve_trophies, save_trophies};
use cache::EntityCache;
use clap::Parser;
use cli::Cli;
use entity::EntityRegistry;
use export::{create_exporter, get_output_writer};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    logging::init(config.verbose);

    // Progress callback for logging
    let progress = |msg: &str| {
        eprintln!("{}", msg);
    };

    // === Phase 1: Entity Registry ===
    let mut registry = EntityRegistry::with_defaults();
    if let Some(ref path) = config.registry_path {
        match registry.extend_from_file(path) {
            Ok(added) => progress(&format!(
                "Registered {} extra creature types from '{}' ({} known)",
                added,
                path.display(),
                registry.len()
            )),
            Err(e) => {
                eprintln!("Error loading registry: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    // === Phase 2: Load Trophies ===
    let mut trophies = match load_trophies(&config.input_filename, &config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    progress(&format!("Loaded {} trophies", trophies.len()));

    let cache = EntityCache::new();

    // === Phase 3: Equipment ===
    if !config.equip.is_empty() {
        match apply_equipment(&mut trophies, &config.equip, &cache, &registry, &progress) {
            Ok(applied) => progress(&format!(
                "Applied {} of {} equipment actions",
                applied,
                config.equip.len()
            )),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    // === Phase 4: Resolve Creatures ===
    let result = match resolve_trophies(&trophies, &cache, &registry, &config, progress) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 5: Export Results ===
    let exporter = create_exporter(config.output_format);
    let mut writer = match get_output_writer(&config.output_filename) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error creating output: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = exporter.export(&result, &config, &mut *writer) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error flushing output: {}", e);
        return ExitCode::from(2);
    }

    // === Phase 5.5: Save Trophies ===
    if let Some(ref save_path) = config.save_path {
        if let Err(e) = save_trophies(&trophies, save_path) {
            eprintln!("Error saving trophies: {}", e);
            return ExitCode::from(2);
        }
        progress(&format!(
            "Saved {} trophies to '{}'",
            trophies.len(),
            save_path.display()
        ));
    }

    // === Phase 6: Exit Code ===
    if result.not_found > 0 {
        ExitCode::from(1) // Some creatures could not be built
    } else {
        ExitCode::SUCCESS
    }
}
