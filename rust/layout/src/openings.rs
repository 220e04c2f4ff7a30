// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and window placement from a per-room-type rule table

use archprompt_schema::{Opening, OpeningType, Room, RoomType, Swing, Wall};

use crate::walls::{exterior_wall_id, interior_wall_id};

/// Dimensions and placement of one opening kind
#[derive(Debug, Clone, Copy)]
pub struct OpeningSpec {
    pub position_ratio: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub swing: Swing,
}

pub const DOOR: OpeningSpec = OpeningSpec {
    position_ratio: 0.5,
    width_m: 0.9,
    height_m: 2.1,
    swing: Swing::Left,
};

/// Exterior wall that receives every window
pub const WINDOW_WALL: usize = 2;
/// Exterior wall that receives the door of the last room
pub const FALLBACK_DOOR_WALL: usize = 1;

/// Room types that get a window, and the window they get.
/// Living rooms and bathrooms get none.
pub const WINDOW_RULES: &[(RoomType, OpeningSpec)] = &[
    (
        RoomType::Bedroom,
        OpeningSpec {
            position_ratio: 0.5,
            width_m: 1.2,
            height_m: 1.5,
            swing: Swing::None,
        },
    ),
    (
        RoomType::Kitchen,
        OpeningSpec {
            position_ratio: 0.3,
            width_m: 0.8,
            height_m: 1.2,
            swing: Swing::None,
        },
    ),
];

pub fn window_spec(room_type: RoomType) -> Option<&'static OpeningSpec> {
    WINDOW_RULES
        .iter()
        .find(|(t, _)| *t == room_type)
        .map(|(_, spec)| spec)
}

/// Places one door per room plus the windows of [`WINDOW_RULES`].
///
/// The k-th room's door goes on partition `wall_int_k` when it exists;
/// otherwise (the last room) on `wall_ext_1`.
pub fn place_openings(rooms: &[Room], walls: &[Wall]) -> Vec<Opening> {
    let mut openings = Vec::new();

    for (i, room) in rooms.iter().enumerate() {
        let partition = interior_wall_id(i + 1);
        let door_wall = if walls.iter().any(|w| w.wall_id == partition) {
            partition
        } else {
            exterior_wall_id(FALLBACK_DOOR_WALL)
        };

        openings.push(build_opening(
            format!("door_{}", room.room_id),
            OpeningType::Door,
            door_wall,
            &DOOR,
        ));

        if let Some(spec) = window_spec(room.room_type) {
            openings.push(build_opening(
                format!("window_{}", room.room_id),
                OpeningType::Window,
                exterior_wall_id(WINDOW_WALL),
                spec,
            ));
        }
    }

    tracing::debug!(openings = openings.len(), "Placed openings");
    openings
}

fn build_opening(
    opening_id: String,
    opening_type: OpeningType,
    wall_id: String,
    spec: &OpeningSpec,
) -> Opening {
    Opening {
        opening_id,
        opening_type,
        wall_id,
        position_ratio: spec.position_ratio,
        width_m: spec.width_m,
        height_m: spec.height_m,
        swing: spec.swing,
        transparent: opening_type == OpeningType::Window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::footprint::solve_layout;
    use crate::interpreter::RoomRequest;
    use crate::walls::synthesize_walls;

    fn openings_for(program: &[(RoomType, &str)]) -> Vec<Opening> {
        let requests: Vec<_> = program
            .iter()
            .map(|&(t, id)| RoomRequest::new(t, id))
            .collect();
        let config = LayoutConfig::default();
        let layout = solve_layout(&requests, None, &config).unwrap();
        let walls = synthesize_walls(&layout.house, &layout.rooms, &config);
        place_openings(&layout.rooms, &walls)
    }

    fn find<'a>(openings: &'a [Opening], id: &str) -> &'a Opening {
        openings
            .iter()
            .find(|o| o.opening_id == id)
            .unwrap_or_else(|| panic!("missing opening {}", id))
    }

    #[test]
    fn test_door_wall_assignment() {
        let openings = openings_for(&[
            (RoomType::Bedroom, "bedroom_1"),
            (RoomType::Bathroom, "bathroom_1"),
            (RoomType::Living, "living_room_1"),
        ]);

        assert_eq!(find(&openings, "door_bedroom_1").wall_id, "wall_int_1");
        assert_eq!(find(&openings, "door_bathroom_1").wall_id, "wall_int_2");
        assert_eq!(find(&openings, "door_living_room_1").wall_id, "wall_ext_1");
    }

    #[test]
    fn test_door_dimensions() {
        let openings = openings_for(&[(RoomType::Living, "living_room_1")]);
        assert_eq!(openings.len(), 1);
        let door = &openings[0];
        assert_eq!(door.opening_type, OpeningType::Door);
        assert_eq!(door.wall_id, "wall_ext_1");
        assert_eq!(door.position_ratio, 0.5);
        assert_eq!(door.width_m, 0.9);
        assert_eq!(door.height_m, 2.1);
        assert_eq!(door.swing, Swing::Left);
        assert!(!door.transparent);
    }

    #[test]
    fn test_window_rules() {
        let openings = openings_for(&[
            (RoomType::Bedroom, "bedroom_1"),
            (RoomType::Kitchen, "kitchen_1"),
            (RoomType::Bathroom, "bathroom_1"),
            (RoomType::Living, "living_room_1"),
        ]);

        let bedroom = find(&openings, "window_bedroom_1");
        assert_eq!(bedroom.wall_id, "wall_ext_2");
        assert_eq!(bedroom.position_ratio, 0.5);
        assert_eq!((bedroom.width_m, bedroom.height_m), (1.2, 1.5));
        assert_eq!(bedroom.swing, Swing::None);
        assert!(bedroom.transparent);

        let kitchen = find(&openings, "window_kitchen_1");
        assert_eq!(kitchen.wall_id, "wall_ext_2");
        assert_eq!(kitchen.position_ratio, 0.3);
        assert_eq!((kitchen.width_m, kitchen.height_m), (0.8, 1.2));

        let windows = openings
            .iter()
            .filter(|o| o.opening_type == OpeningType::Window)
            .count();
        assert_eq!(windows, 2);
        assert_eq!(openings.len(), 6);
    }
}
