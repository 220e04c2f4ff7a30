// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity records of a scene document and their defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of the only level this model produces.
pub const GROUND_FLOOR: &str = "ground_floor";

/// Default floor-to-ceiling height in meters
const DEFAULT_CEILING_HEIGHT: f64 = 2.7;

/// A 2D point, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at `t` (0..1) along the segment from `self` to `other`
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        Point2D::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

/// Semantic room classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Kitchen,
    Bedroom,
    Bathroom,
    Living,
    Hallway,
    Storage,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Kitchen => "kitchen",
            RoomType::Bedroom => "bedroom",
            RoomType::Bathroom => "bathroom",
            RoomType::Living => "living",
            RoomType::Hallway => "hallway",
            RoomType::Storage => "storage",
        }
    }

    /// Display name used for `Room::name`
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Kitchen => "Kitchen",
            RoomType::Bedroom => "Bedroom",
            RoomType::Bathroom => "Bathroom",
            RoomType::Living => "Living",
            RoomType::Hallway => "Hallway",
            RoomType::Storage => "Storage",
        }
    }

    /// Access classification for zoning; fixed per room type
    pub fn privacy_level(&self) -> PrivacyLevel {
        match self {
            RoomType::Bedroom | RoomType::Bathroom => PrivacyLevel::Private,
            RoomType::Kitchen => PrivacyLevel::SemiPrivate,
            RoomType::Living | RoomType::Hallway | RoomType::Storage => PrivacyLevel::Public,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PrivacyLevel {
    #[default]
    Public,
    SemiPrivate,
    Private,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OpeningType {
    #[default]
    Door,
    Window,
}

/// Door swing direction; windows use `None`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Swing {
    Left,
    Right,
    #[default]
    None,
}

/// Style theme recognized in prompts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Scandinavian,
    Industrial,
    Minimalist,
    #[default]
    Modern,
    Rustic,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Scandinavian => "scandinavian",
            Theme::Industrial => "industrial",
            Theme::Minimalist => "minimalist",
            Theme::Modern => "modern",
            Theme::Rustic => "rustic",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    pub version: String,
    pub unit_system: String,
    pub scale: f64,
    pub generated_by: String,
    /// Heuristic confidence (0.0 - 1.0) that the prompt was understood
    pub confidence: f64,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            unit_system: "metric".to_string(),
            scale: 1.0,
            generated_by: "ArchPrompt".to_string(),
            confidence: 0.0,
        }
    }
}

/// Building-level geometry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct House {
    #[serde(rename = "type")]
    pub building_type: String,
    pub footprint_shape: String,
    pub total_area_m2: f64,
    pub width_m: f64,
    pub depth_m: f64,
    pub ceiling_height_m: f64,
    pub floors: u32,
}

impl House {
    pub fn is_rectangular(&self) -> bool {
        self.footprint_shape == "rectangle"
    }
}

impl Default for House {
    fn default() -> Self {
        Self {
            building_type: "residential".to_string(),
            footprint_shape: "rectangle".to_string(),
            total_area_m2: 0.0,
            width_m: 0.0,
            depth_m: 0.0,
            ceiling_height_m: DEFAULT_CEILING_HEIGHT,
            floors: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Level {
    pub level_id: String,
    pub elevation_m: f64,
    pub height_m: f64,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            level_id: GROUND_FLOOR.to_string(),
            elevation_m: 0.0,
            height_m: DEFAULT_CEILING_HEIGHT,
        }
    }
}

/// Axis-aligned room rectangle, relative to the footprint origin
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
}

impl RoomBounds {
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub room_id: String,
    pub name: String,
    pub level_id: String,
    pub area_m2: f64,
    pub shape: String,
    pub bounds: RoomBounds,
    pub adjacent_rooms: Vec<String>,
    pub room_type: RoomType,
    pub privacy_level: PrivacyLevel,
}

impl Room {
    /// Creates a room on the ground floor with type-derived name and privacy
    pub fn new(room_id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            room_id: room_id.into(),
            name: room_type.display_name().to_string(),
            level_id: GROUND_FLOOR.to_string(),
            area_m2: 0.0,
            shape: "rectangle".to_string(),
            bounds: RoomBounds::default(),
            adjacent_rooms: Vec::new(),
            room_type,
            privacy_level: room_type.privacy_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wall {
    pub wall_id: String,
    pub start: Point2D,
    pub end: Point2D,
    pub height_m: f64,
    pub thickness_m: f64,
    pub level_id: String,
    pub load_bearing: bool,
}

impl Wall {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Absolute location of a point at `ratio` along the wall
    pub fn point_at(&self, ratio: f64) -> Point2D {
        self.start.lerp(&self.end, ratio)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self {
            wall_id: String::new(),
            start: Point2D::default(),
            end: Point2D::default(),
            height_m: DEFAULT_CEILING_HEIGHT,
            thickness_m: 0.2,
            level_id: GROUND_FLOOR.to_string(),
            load_bearing: true,
        }
    }
}

/// Door or window hosted by a wall
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opening {
    pub opening_id: String,
    #[serde(rename = "type")]
    pub opening_type: OpeningType,
    pub wall_id: String,
    /// Location along the host wall (0.0 = start, 1.0 = end)
    pub position_ratio: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub swing: Swing,
    pub transparent: bool,
}

impl Default for Opening {
    fn default() -> Self {
        Self {
            opening_id: String::new(),
            opening_type: OpeningType::Door,
            wall_id: String::new(),
            position_ratio: 0.5,
            width_m: 0.9,
            height_m: 2.1,
            swing: Swing::None,
            transparent: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Furniture {
    pub furniture_id: String,
    #[serde(rename = "type")]
    pub furniture_type: String,
    pub room_id: String,
    /// Position relative to the owning room's origin
    pub position: Point2D,
    pub rotation_deg: f64,
    pub scale: f64,
    /// Name of an external furniture asset
    pub preset: String,
}

impl Default for Furniture {
    fn default() -> Self {
        Self {
            furniture_id: String::new(),
            furniture_type: String::new(),
            room_id: String::new(),
            position: Point2D::default(),
            rotation_deg: 0.0,
            scale: 1.0,
            preset: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Accessibility {
    pub wheelchair: bool,
    pub door_min_width_m: f64,
}

impl Default for Accessibility {
    fn default() -> Self {
        Self {
            wheelchair: false,
            door_min_width_m: 0.9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constraints {
    pub budget_level: String,
    pub accessibility: Accessibility,
    pub region_code: String,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            budget_level: "medium".to_string(),
            accessibility: Accessibility::default(),
            region_code: "NA".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Styles {
    pub theme: Theme,
    pub color_palette: Vec<String>,
    pub material_bias: BTreeMap<String, f64>,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            theme: Theme::Modern,
            color_palette: vec![
                "#ffffff".to_string(),
                "#cfcfcf".to_string(),
                "#8a8a8a".to_string(),
            ],
            material_bias: BTreeMap::from([
                ("wood".to_string(), 0.5),
                ("metal".to_string(), 0.3),
                ("concrete".to_string(), 0.2),
            ]),
        }
    }
}

/// Export formats declared for downstream tooling (never produced here)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exports {
    pub formats: Vec<String>,
    pub include_textures: bool,
    pub include_furniture: bool,
    pub optimize_mesh: bool,
}

impl Default for Exports {
    fn default() -> Self {
        Self {
            formats: ["glb", "fbx", "obj", "usd", "blend"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            include_textures: true,
            include_furniture: true,
            optimize_mesh: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_privacy_levels() {
        assert_eq!(RoomType::Bedroom.privacy_level(), PrivacyLevel::Private);
        assert_eq!(RoomType::Bathroom.privacy_level(), PrivacyLevel::Private);
        assert_eq!(RoomType::Kitchen.privacy_level(), PrivacyLevel::SemiPrivate);
        assert_eq!(RoomType::Living.privacy_level(), PrivacyLevel::Public);
        assert_eq!(RoomType::Storage.privacy_level(), PrivacyLevel::Public);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&PrivacyLevel::SemiPrivate).unwrap(),
            "\"semi-private\""
        );
        assert_eq!(serde_json::to_string(&RoomType::Living).unwrap(), "\"living\"");
        assert_eq!(serde_json::to_string(&Swing::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&Theme::Rustic).unwrap(), "\"rustic\"");
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point2D::new(1.5, 2.0)).unwrap();
        assert_eq!(json, "[1.5,2.0]");
        let back: Point2D = serde_json::from_str("[3.0,4.0]").unwrap();
        assert_eq!(back, Point2D::new(3.0, 4.0));
    }

    #[test]
    fn test_room_new_derives_name_and_privacy() {
        let room = Room::new("kitchen_1", RoomType::Kitchen);
        assert_eq!(room.name, "Kitchen");
        assert_eq!(room.level_id, GROUND_FLOOR);
        assert_eq!(room.privacy_level, PrivacyLevel::SemiPrivate);
        assert!(room.adjacent_rooms.is_empty());
    }

    #[test]
    fn test_wall_geometry() {
        let wall = Wall {
            wall_id: "w".into(),
            start: Point2D::new(0.0, 0.0),
            end: Point2D::new(4.0, 3.0),
            ..Default::default()
        };
        assert_relative_eq!(wall.length(), 5.0);
        let mid = wall.point_at(0.5);
        assert_relative_eq!(mid.x, 2.0);
        assert_relative_eq!(mid.y, 1.5);
    }

    #[test]
    fn test_opening_field_names() {
        let value = serde_json::to_value(Opening::default()).unwrap();
        assert_eq!(value["type"], "door");
        assert_eq!(value["swing"], "none");
        assert_eq!(value["transparent"], false);
    }
}
