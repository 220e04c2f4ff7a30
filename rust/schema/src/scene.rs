// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene document assembly, flattening and structural validation.
//!
//! A document is built once per generation run and never mutated after it
//! has been validated. [`SceneDocument::validate`] enforces the referential
//! invariants downstream consumers rely on: openings name real walls,
//! furniture and adjacency lists name real rooms, identifiers are unique,
//! and the rectangular footprint matches the declared floor area.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

use crate::error::{Result, SchemaError};
use crate::types::{
    Constraints, Exports, Furniture, House, Level, Meta, Opening, Room, Styles, Wall,
};

/// Top-level keys every serialized document must carry.
pub const REQUIRED_KEYS: [&str; 11] = [
    "meta",
    "house",
    "levels",
    "rooms",
    "walls",
    "openings",
    "furniture",
    "materials",
    "styles",
    "constraints",
    "exports",
];

/// Relative tolerance for `width * depth == total_area`
const FOOTPRINT_TOLERANCE: f64 = 1e-6;

/// The complete scene produced for one prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneDocument {
    pub meta: Meta,
    pub house: House,
    pub levels: Vec<Level>,
    pub rooms: Vec<Room>,
    pub walls: Vec<Wall>,
    pub openings: Vec<Opening>,
    pub furniture: Vec<Furniture>,
    /// Surface category (`walls`, `floor_<room type>`) to material name
    pub materials: BTreeMap<String, String>,
    pub styles: Styles,
    pub constraints: Constraints,
    pub exports: Exports,
}

impl SceneDocument {
    /// Fresh document with default sections and the single ground floor level
    pub fn new() -> Self {
        Self {
            meta: Meta::default(),
            house: House::default(),
            levels: vec![Level::default()],
            rooms: Vec::new(),
            walls: Vec::new(),
            openings: Vec::new(),
            furniture: Vec::new(),
            materials: BTreeMap::new(),
            styles: Styles::default(),
            constraints: Constraints::default(),
            exports: Exports::default(),
        }
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    pub fn wall(&self, wall_id: &str) -> Option<&Wall> {
        self.walls.iter().find(|w| w.wall_id == wall_id)
    }

    /// Openings whose identifier encodes the given room
    pub fn openings_for_room<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Opening> {
        self.openings
            .iter()
            .filter(move |o| o.opening_id.ends_with(room_id))
    }

    /// Flattens the document into a plain nested JSON object.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON text indented with two spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the construction invariants of an assembled document.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(SchemaError::NoLevels);
        }
        if self.rooms.is_empty() {
            return Err(SchemaError::NoRooms);
        }

        let room_ids = unique_ids("room", self.rooms.iter().map(|r| r.room_id.as_str()))?;
        let wall_ids = unique_ids("wall", self.walls.iter().map(|w| w.wall_id.as_str()))?;
        unique_ids("opening", self.openings.iter().map(|o| o.opening_id.as_str()))?;
        unique_ids(
            "furniture",
            self.furniture.iter().map(|f| f.furniture_id.as_str()),
        )?;

        for room in &self.rooms {
            for adjacent in &room.adjacent_rooms {
                if !room_ids.contains(adjacent.as_str()) {
                    return Err(SchemaError::DanglingReference {
                        kind: "room",
                        id: room.room_id.clone(),
                        target: "room",
                        reference: adjacent.clone(),
                    });
                }
            }
        }

        for opening in &self.openings {
            if !wall_ids.contains(opening.wall_id.as_str()) {
                return Err(SchemaError::DanglingReference {
                    kind: "opening",
                    id: opening.opening_id.clone(),
                    target: "wall",
                    reference: opening.wall_id.clone(),
                });
            }
            if !(0.0..=1.0).contains(&opening.position_ratio) {
                return Err(SchemaError::RatioOutOfRange(
                    opening.opening_id.clone(),
                    opening.position_ratio,
                ));
            }
        }

        for item in &self.furniture {
            if !room_ids.contains(item.room_id.as_str()) {
                return Err(SchemaError::DanglingReference {
                    kind: "furniture",
                    id: item.furniture_id.clone(),
                    target: "room",
                    reference: item.room_id.clone(),
                });
            }
        }

        if self.house.is_rectangular() {
            let house = &self.house;
            let product = house.width_m * house.depth_m;
            let tolerance = FOOTPRINT_TOLERANCE * house.total_area_m2.abs().max(1.0);
            if !product.is_finite() || (product - house.total_area_m2).abs() > tolerance {
                return Err(SchemaError::FootprintMismatch {
                    width: house.width_m,
                    depth: house.depth_m,
                    area: house.total_area_m2,
                });
            }
        }

        Ok(())
    }
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SchemaError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

/// Checks an already serialized document for the required sections.
///
/// Collects every problem instead of stopping at the first one, so callers
/// can report a complete list.
pub fn validate_value(data: &Value) -> Result<()> {
    let mut errors = Vec::new();

    let Some(object) = data.as_object() else {
        return Err(SchemaError::Structure(vec![
            "document is not a JSON object".to_string(),
        ]));
    };

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            errors.push(format!("Missing required key: {}", key));
        }
    }

    if let Some(meta) = object.get("meta") {
        if meta.get("version").is_none() || meta.get("confidence").is_none() {
            errors.push("Meta missing required fields".to_string());
        }
    }

    if let Some(house) = object.get("house") {
        if house.get("total_area_m2").is_none() || house.get("width_m").is_none() {
            errors.push("House missing required fields".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Structure(errors))
    }
}
