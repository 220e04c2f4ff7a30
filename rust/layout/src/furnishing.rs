// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Furniture presets per room type and materials per style theme.
//!
//! Both are fixed lookups: nothing here depends on layout geometry.

use archprompt_schema::{Furniture, Point2D, Room, RoomType, Theme};
use std::collections::BTreeMap;

/// A furniture piece placed in every room of a given type
#[derive(Debug, Clone, Copy)]
pub struct FurniturePreset {
    pub furniture_type: &'static str,
    pub preset: &'static str,
    /// Position relative to the room's own origin
    pub position: [f64; 2],
}

const fn piece(furniture_type: &'static str, preset: &'static str, x: f64, y: f64) -> FurniturePreset {
    FurniturePreset {
        furniture_type,
        preset,
        position: [x, y],
    }
}

const BEDROOM: &[FurniturePreset] = &[
    piece("bed", "modern_bed_01", 1.5, 2.0),
    piece("wardrobe", "wardrobe_modern_01", 0.5, 1.0),
];

const KITCHEN: &[FurniturePreset] = &[
    piece("kitchen_cabinet", "kitchen_cabinet_modern_01", 2.0, 0.5),
    piece("refrigerator", "fridge_standard_01", 0.5, 0.6),
];

const LIVING: &[FurniturePreset] = &[
    piece("sofa", "modern_sofa_01", 2.0, 1.0),
    piece("coffee_table", "coffee_table_modern_01", 1.5, 0.8),
];

const BATHROOM: &[FurniturePreset] = &[
    piece("toilet", "toilet_standard_01", 0.5, 0.4),
    piece("sink", "sink_modern_01", 1.0, 0.5),
];

pub fn presets_for(room_type: RoomType) -> &'static [FurniturePreset] {
    match room_type {
        RoomType::Bedroom => BEDROOM,
        RoomType::Kitchen => KITCHEN,
        RoomType::Living => LIVING,
        RoomType::Bathroom => BATHROOM,
        RoomType::Hallway | RoomType::Storage => &[],
    }
}

/// One instance of every preset listed for each room's type
pub fn furnish(rooms: &[Room]) -> Vec<Furniture> {
    let furniture: Vec<Furniture> = rooms
        .iter()
        .flat_map(|room| {
            presets_for(room.room_type).iter().map(move |p| Furniture {
                furniture_id: format!("{}_{}", p.furniture_type, room.room_id),
                furniture_type: p.furniture_type.to_string(),
                room_id: room.room_id.clone(),
                position: Point2D::from(p.position),
                rotation_deg: 0.0,
                scale: 1.0,
                preset: p.preset.to_string(),
            })
        })
        .collect();

    tracing::debug!(pieces = furniture.len(), "Furnished rooms");
    furniture
}

/// Surface materials for a theme.
///
/// Themes only override `walls` and `floor_living`; modern and minimalist
/// keep the base map.
pub fn materials_for(theme: Theme) -> BTreeMap<String, String> {
    let mut materials: BTreeMap<String, String> = [
        ("walls", "paint_white_matte"),
        ("floor_living", "wood_oak_light"),
        ("floor_bedroom", "wood_oak_light"),
        ("floor_kitchen", "tile_ceramic_gray"),
        ("floor_bathroom", "tile_ceramic_gray"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let overrides = match theme {
        Theme::Scandinavian => Some(("paint_white_matte", "wood_oak_light")),
        Theme::Industrial => Some(("concrete_exposed", "concrete_polished")),
        Theme::Rustic => Some(("wood_panel_natural", "wood_dark_oak")),
        Theme::Modern | Theme::Minimalist => None,
    };

    if let Some((walls, floor_living)) = overrides {
        materials.insert("walls".to_string(), walls.to_string());
        materials.insert("floor_living".to_string(), floor_living.to_string());
    }

    materials
}

#[cfg(test)]
mod tests {
    use super::*;
    use archprompt_schema::RoomBounds;

    #[test]
    fn test_furniture_ids_and_relative_positions() {
        let mut room = Room::new("bedroom_2", RoomType::Bedroom);
        room.bounds = RoomBounds {
            x: 7.5,
            y: 0.0,
            width: 3.0,
            depth: 6.0,
        };

        let furniture = furnish(&[room]);
        assert_eq!(furniture.len(), 2);
        assert_eq!(furniture[0].furniture_id, "bed_bedroom_2");
        assert_eq!(furniture[0].preset, "modern_bed_01");
        // Positions stay in room-local coordinates.
        assert_eq!(furniture[0].position, Point2D::new(1.5, 2.0));
        assert_eq!(furniture[1].furniture_id, "wardrobe_bedroom_2");
        assert!(furniture.iter().all(|f| f.room_id == "bedroom_2"));
    }

    #[test]
    fn test_unfurnished_room_types() {
        let rooms = [
            Room::new("hallway_1", RoomType::Hallway),
            Room::new("storage_1", RoomType::Storage),
        ];
        assert!(furnish(&rooms).is_empty());
    }

    #[test]
    fn test_every_furnished_type_has_two_pieces() {
        for room_type in [
            RoomType::Bedroom,
            RoomType::Kitchen,
            RoomType::Living,
            RoomType::Bathroom,
        ] {
            assert_eq!(presets_for(room_type).len(), 2, "{}", room_type);
        }
    }

    #[test]
    fn test_theme_materials() {
        let industrial = materials_for(Theme::Industrial);
        assert_eq!(industrial["walls"], "concrete_exposed");
        assert_eq!(industrial["floor_living"], "concrete_polished");
        assert_eq!(industrial["floor_kitchen"], "tile_ceramic_gray");

        let rustic = materials_for(Theme::Rustic);
        assert_eq!(rustic["walls"], "wood_panel_natural");
        assert_eq!(rustic["floor_living"], "wood_dark_oak");

        assert_eq!(materials_for(Theme::Minimalist), materials_for(Theme::Modern));
        assert_eq!(materials_for(Theme::Scandinavian), materials_for(Theme::Modern));
        assert_eq!(materials_for(Theme::Modern).len(), 5);
    }
}
