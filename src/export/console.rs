//! Console (human-readable) exporter

use crate::batch::{BatchResult, EntityOutcome};
use crate::config::Config;
use crate::entity::Entity;
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// Human-readable console output exporter
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export(&self, result: &BatchResult, config: &Config, writer: &mut dyn Write) -> Result<()> {
        for report in &result.reports {
            let trophy = &report.trophy;
            let label = trophy.name.as_deref().unwrap_or(trophy.identifier());
            writeln!(
                writer,
                "#{} {} trophy{}{} on {} (scale {}, offset {})",
                report.index,
                trophy.kind.as_str(),
                if label.is_empty() { "" } else { " " },
                label,
                trophy.base_block,
                trophy.scale,
                trophy.offset_y
            )?;

            if let Some(bounds) = trophy.bounds() {
                writeln!(
                    writer,
                    "    bounds: {:?} -> {:?}",
                    bounds.min, bounds.max
                )?;
            }

            if let Some(item) = trophy.item.as_ref().filter(|i| !i.is_empty()) {
                writeln!(writer, "    item: {} x{}", item.id(), item.count())?;
            }

            match &report.entity {
                EntityOutcome::None => {}
                EntityOutcome::Resolved(entity) => write_entity(writer, entity, 1)?,
                EntityOutcome::NotFound => writeln!(writer, "    entity: not found")?,
            }
        }
        writeln!(writer)?;

        writeln!(writer, "Configuration:")?;
        writeln!(writer, "  Default scale: {}", config.default_scale)?;
        writeln!(writer, "  Default Y offset: {}", config.default_offset_y)?;
        writeln!(writer, "  Default base block: {}", config.default_base_block)?;
        writeln!(writer)?;

        writeln!(writer, "Summary:")?;
        writeln!(writer, "  Trophies: {}", result.reports.len())?;
        writeln!(writer, "  Creatures resolved: {}", result.resolved)?;
        writeln!(writer, "  Creatures not found: {}", result.not_found)?;
        writeln!(writer, "  Constructions: {}", result.builds)?;
        writeln!(writer, "  Cached creatures: {}", result.cache_entries)?;

        Ok(())
    }
}

fn write_entity(writer: &mut dyn Write, entity: &Entity, depth: usize) -> Result<()> {
    let indent = "    ".repeat(depth);
    let mut line = format!("{}entity: {} [{}]", indent, entity.type_id(), entity.class());
    if let Some(name) = entity.custom_name() {
        line.push_str(&format!(" \"{}\"", name));
    }
    if let Some(ticks) = entity.anger_time() {
        line.push_str(&format!(" anger={}", ticks));
    }
    if let Some(peek) = entity.peek() {
        line.push_str(&format!(" peek={}", peek));
    }
    writeln!(writer, "{}", line)?;

    let worn: Vec<&str> = entity
        .armor()
        .iter()
        .chain(entity.hands())
        .filter(|s| !s.is_empty())
        .map(|s| s.id())
        .collect();
    if !worn.is_empty() {
        writeln!(writer, "{}  equipment: {}", indent, worn.join(", "))?;
    }

    for rider in entity.passengers() {
        write_entity(writer, rider, depth + 1)?;
    }
    Ok(())
}
