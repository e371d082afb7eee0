//! Reading and writing trophy files
//!
//! A trophy file is a JSON array. Each element is either a full block
//! entity tag (with a `TrophyData` field) or a bare `TrophyData` compound.

use crate::config::Config;
use crate::error::{Result, TrophyError};
use crate::tag::Compound;
use crate::trophy::{TrophyData, BLOCK_ENTITY_FIELD};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Load trophies from path (or stdin if "-"), applying defaults
pub fn load_trophies(path: &str, config: &Config) -> Result<Vec<TrophyData>> {
    let value: Value = if path == "-" {
        let mut content = String::new();
        io::stdin().lock().read_to_string(&mut content)?;
        serde_json::from_str(&content)?
    } else {
        let file = File::open(path).map_err(|e| {
            TrophyError::Other(format!("Cannot open trophy file '{}': {}", path, e))
        })?;
        serde_json::from_reader(BufReader::new(file))?
    };

    parse_trophies(&value, config)
}

fn parse_trophies(value: &Value, config: &Config) -> Result<Vec<TrophyData>> {
    let entries = value.as_array().ok_or_else(|| {
        TrophyError::MalformedTag("trophy file must contain a JSON array".to_string())
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let tag = Compound::from_json(entry)
                .map_err(|e| TrophyError::MalformedTag(format!("trophy {}: {}", i, e)))?;
            Ok(if tag.try_compound(BLOCK_ENTITY_FIELD).is_some() {
                TrophyData::load_block_entity(&tag, config)
            } else {
                TrophyData::load(&tag, config)
            })
        })
        .collect()
}

/// Write trophies as an array of block entity tags
pub fn save_trophies(trophies: &[TrophyData], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let entries: Vec<Value> = trophies
        .iter()
        .map(|t| t.save_block_entity().to_json())
        .collect();

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &Value::Array(entries))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
