// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exterior shell and interior partitions derived from room bounds

use archprompt_schema::{House, Point2D, Room, Wall, GROUND_FLOOR};

use crate::config::LayoutConfig;

/// Id of the `n`-th exterior wall (1-based)
pub fn exterior_wall_id(n: usize) -> String {
    format!("wall_ext_{}", n)
}

/// Id of the partition between rooms `n` and `n + 1` (1-based)
pub fn interior_wall_id(n: usize) -> String {
    format!("wall_int_{}", n)
}

/// All walls of the footprint: four exterior walls, then partitions.
pub fn synthesize_walls(house: &House, rooms: &[Room], config: &LayoutConfig) -> Vec<Wall> {
    let mut walls = exterior_walls(house, config);
    walls.extend(interior_walls(rooms, house.ceiling_height_m, config));

    tracing::debug!(walls = walls.len(), "Synthesized walls");
    walls
}

/// Closed loop (0,0) → (w,0) → (w,d) → (0,d) → (0,0)
fn exterior_walls(house: &House, config: &LayoutConfig) -> Vec<Wall> {
    let w = house.width_m;
    let d = house.depth_m;
    let corners = [
        Point2D::new(0.0, 0.0),
        Point2D::new(w, 0.0),
        Point2D::new(w, d),
        Point2D::new(0.0, d),
    ];

    (0..corners.len())
        .map(|i| Wall {
            wall_id: exterior_wall_id(i + 1),
            start: corners[i],
            end: corners[(i + 1) % corners.len()],
            height_m: house.ceiling_height_m,
            thickness_m: config.exterior_wall_thickness_m,
            level_id: GROUND_FLOOR.to_string(),
            load_bearing: true,
        })
        .collect()
}

/// One partition per neighbouring pair, at the shared x boundary.
///
/// The partition spans the depth of the first room of the pair.
fn interior_walls(rooms: &[Room], height: f64, config: &LayoutConfig) -> Vec<Wall> {
    rooms
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let first = &pair[0].bounds;
            let x = first.max_x();
            Wall {
                wall_id: interior_wall_id(i + 1),
                start: Point2D::new(x, 0.0),
                end: Point2D::new(x, first.depth),
                height_m: height,
                thickness_m: config.interior_wall_thickness_m,
                level_id: GROUND_FLOOR.to_string(),
                load_bearing: false,
            }
        })
        .collect()
}
