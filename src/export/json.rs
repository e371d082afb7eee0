//! JSON exporter

use crate::batch::{BatchResult, EntityOutcome};
use crate::config::Config;
use crate::entity::Entity;
use crate::error::Result;
use crate::export::Exporter;
use serde::Serialize;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput {
    trophies: Vec<JsonTrophy>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonTrophy {
    index: usize,
    kind: &'static str,
    identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    scale: f32,
    offset_y: f64,
    base_block: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<JsonBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<JsonItem>,
    /// "none", "resolved" or "not_found"
    entity_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<JsonEntity>,
}

#[derive(Serialize)]
struct JsonBounds {
    min: [f64; 3],
    max: [f64; 3],
}

#[derive(Serialize)]
struct JsonItem {
    id: String,
    count: i32,
}

#[derive(Serialize)]
struct JsonEntity {
    #[serde(rename = "type")]
    type_id: String,
    class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    health: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anger_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    peek: Option<i32>,
    armor: Vec<Option<String>>,
    hands: Vec<Option<String>>,
    passengers: Vec<JsonEntity>,
}

#[derive(Serialize)]
struct JsonSummary {
    trophies: usize,
    resolved: usize,
    not_found: usize,
    builds: usize,
    cache_entries: usize,
    defaults_hash: String,
}

impl JsonEntity {
    fn from_entity(entity: &Entity) -> Self {
        let slot = |s: &crate::item::ItemStack| (!s.is_empty()).then(|| s.id().to_string());
        Self {
            type_id: entity.type_id().to_string(),
            class: entity.class().to_string(),
            custom_name: entity.custom_name().map(str::to_string),
            health: entity.health(),
            anger_time: entity.anger_time(),
            peek: entity.peek(),
            armor: entity.armor().iter().map(slot).collect(),
            hands: entity.hands().iter().map(slot).collect(),
            passengers: entity.passengers().iter().map(JsonEntity::from_entity).collect(),
        }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, result: &BatchResult, config: &Config, writer: &mut dyn Write) -> Result<()> {
        let trophies: Vec<JsonTrophy> = result
            .reports
            .iter()
            .map(|report| {
                let trophy = &report.trophy;
                let (entity_status, entity) = match &report.entity {
                    EntityOutcome::None => ("none", None),
                    EntityOutcome::Resolved(e) => ("resolved", Some(JsonEntity::from_entity(e))),
                    EntityOutcome::NotFound => ("not_found", None),
                };
                JsonTrophy {
                    index: report.index,
                    kind: trophy.kind.as_str(),
                    identifier: trophy.identifier().to_string(),
                    name: trophy.name.clone(),
                    scale: trophy.scale,
                    offset_y: trophy.offset_y,
                    base_block: trophy.base_block.clone(),
                    bounds: trophy.bounds().map(|b| JsonBounds {
                        min: b.min,
                        max: b.max,
                    }),
                    item: trophy.item.as_ref().filter(|i| !i.is_empty()).map(|i| JsonItem {
                        id: i.id().to_string(),
                        count: i.count(),
                    }),
                    entity_status,
                    entity,
                }
            })
            .collect();

        let output = JsonOutput {
            trophies,
            summary: JsonSummary {
                trophies: result.reports.len(),
                resolved: result.resolved,
                not_found: result.not_found,
                builds: result.builds,
                cache_entries: result.cache_entries,
                defaults_hash: format!("{:016x}", config.defaults_hash()),
            },
        };

        let json = serde_json::to_string_pretty(&output)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
