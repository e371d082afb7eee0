//! Building a creature and its riders from one description

use super::{ANGER_TIME_FIELD, PASSENGERS_FIELD, PASSENGER_TYPE_FIELD, PEEK_FIELD, TYPE_FIELD};
use crate::entity::{Entity, EntityFactory};
use crate::error::{Result, TrophyError};
use crate::tag::{Compound, Tag};
use thiserror::Error;

/// Riders nested deeper than this are dropped
const MAX_PASSENGER_DEPTH: usize = 64;

/// A rider branch that could not be built or attached
#[derive(Error, Debug)]
#[error("passenger {path}: {source}")]
pub struct AttachError {
    /// Location of the failing entry, e.g. `Passengers[1]/Passengers[0]`
    pub path: String,
    #[source]
    pub source: TrophyError,
}

impl AttachError {
    fn new(path: &str, source: TrophyError) -> Self {
        Self {
            path: path.to_string(),
            source,
        }
    }
}

/// A built creature plus the rider branches that were dropped on the way
#[derive(Debug)]
pub struct Assembled {
    pub entity: Entity,
    pub dropped: Vec<AttachError>,
}

/// Build the creature a description represents
///
/// Fails only when the top-level creature cannot be built. Once it exists,
/// the anger timer (or else the peek state) is applied, then riders are
/// attached depth-first in list order. A rider that fails is dropped
/// together with its own riders; its siblings are still attached.
pub fn assemble(description: &Compound, factory: &dyn EntityFactory) -> Result<Assembled> {
    let type_id = description
        .try_string(TYPE_FIELD)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| TrophyError::UnknownEntityType(format!("<missing {}>", TYPE_FIELD)))?;

    let mut entity = factory.create(type_id, description)?;

    if entity.supports_timer() && description.contains(ANGER_TIME_FIELD) {
        entity.set_remaining_anger_time(description.get_int(ANGER_TIME_FIELD));
    } else if entity.supports_peek_state() && description.contains(PEEK_FIELD) {
        entity.set_peek_amount(description.get_int(PEEK_FIELD));
    }

    let mut dropped = Vec::new();
    attach_passengers(&mut entity, description, factory, "", 0, &mut dropped);

    Ok(Assembled { entity, dropped })
}

fn attach_passengers(
    vehicle: &mut Entity,
    description: &Compound,
    factory: &dyn EntityFactory,
    path: &str,
    depth: usize,
    dropped: &mut Vec<AttachError>,
) {
    let Some(value) = description.get(PASSENGERS_FIELD) else {
        return;
    };
    let here = if path.is_empty() {
        PASSENGERS_FIELD.to_string()
    } else {
        format!("{}/{}", path, PASSENGERS_FIELD)
    };

    let Some(entries) = value.as_list() else {
        dropped.push(AttachError::new(
            &here,
            TrophyError::MalformedSubObject(format!("{} is not a list", PASSENGERS_FIELD)),
        ));
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        let branch = format!("{}[{}]", here, i);
        match build_rider(entry, factory, &branch, depth + 1, dropped) {
            Ok(rider) => vehicle.add_passenger(rider),
            Err(e) => dropped.push(e),
        }
    }
}

fn build_rider(
    entry: &Tag,
    factory: &dyn EntityFactory,
    branch: &str,
    depth: usize,
    dropped: &mut Vec<AttachError>,
) -> std::result::Result<Entity, AttachError> {
    if depth > MAX_PASSENGER_DEPTH {
        return Err(AttachError::new(
            branch,
            TrophyError::MalformedSubObject(format!(
                "riders nested deeper than {}",
                MAX_PASSENGER_DEPTH
            )),
        ));
    }

    let description = entry.as_compound().ok_or_else(|| {
        AttachError::new(
            branch,
            TrophyError::MalformedSubObject("entry is not a compound".to_string()),
        )
    })?;

    let type_id = description.get_string(PASSENGER_TYPE_FIELD);
    let mut rider = factory
        .create(&type_id, description)
        .map_err(|e| AttachError::new(branch, e))?;

    attach_passengers(&mut rider, description, factory, branch, depth, dropped);
    Ok(rider)
}
