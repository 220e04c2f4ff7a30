// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular footprint and room placement

use archprompt_schema::{House, Room, RoomBounds};

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::interpreter::RoomRequest;

/// Confidence reported when the prompt yielded several rooms
const CONFIDENT: f64 = 0.8;
/// Confidence reported for a single (possibly fallback) room
const UNCERTAIN: f64 = 0.6;

/// Footprint geometry and placed rooms
#[derive(Debug, Clone)]
pub struct Layout {
    pub house: House,
    pub rooms: Vec<Room>,
    pub confidence: f64,
}

/// Computes the footprint and lays rooms out left to right.
///
/// Every room receives an equal share of the floor area and an equal slice
/// of the footprint width, so the slices tile the footprint exactly. The
/// adjacency graph is a chain in placement order.
pub fn solve_layout(
    requests: &[RoomRequest],
    area_override: Option<f64>,
    config: &LayoutConfig,
) -> Result<Layout> {
    if requests.is_empty() {
        return Err(Error::EmptyProgram);
    }

    let room_count = requests.len() as f64;
    let total_area = area_override.unwrap_or(config.area_per_room_m2 * room_count);
    if !(total_area.is_finite() && total_area > 0.0) {
        return Err(Error::InvalidParameters(format!(
            "total floor area must be positive, got {}",
            total_area
        )));
    }

    let width = (total_area / config.aspect_ratio).sqrt();
    let depth = total_area / width;

    let house = House {
        total_area_m2: total_area,
        width_m: width,
        depth_m: depth,
        ceiling_height_m: config.ceiling_height_m,
        footprint_shape: "rectangle".to_string(),
        ..Default::default()
    };

    let room_area = total_area / room_count;
    let room_width = width / room_count;
    let room_depth = room_area / room_width;

    let mut rooms = Vec::with_capacity(requests.len());
    let mut current_x = 0.0;

    for (i, request) in requests.iter().enumerate() {
        let mut room = Room::new(request.room_id.clone(), request.room_type);
        room.area_m2 = room_area;
        room.bounds = RoomBounds {
            x: current_x,
            y: 0.0,
            width: room_width,
            depth: room_depth,
        };

        if i > 0 {
            room.adjacent_rooms.push(requests[i - 1].room_id.clone());
        }
        if let Some(next) = requests.get(i + 1) {
            room.adjacent_rooms.push(next.room_id.clone());
        }

        rooms.push(room);
        current_x += room_width;
    }

    let confidence = if rooms.len() > 1 { CONFIDENT } else { UNCERTAIN };

    tracing::debug!(
        total_area,
        width,
        depth,
        rooms = rooms.len(),
        "Solved footprint"
    );

    Ok(Layout {
        house,
        rooms,
        confidence,
    })
}
