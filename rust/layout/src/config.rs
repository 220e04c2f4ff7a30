// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tunable constants of the layout pipeline

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layout parameters shared by the footprint solver and wall synthesizer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Floor area assumed per room when the prompt gives no total (m²)
    pub area_per_room_m2: f64,
    /// Footprint depth / width ratio
    pub aspect_ratio: f64,
    /// Floor-to-ceiling height in meters
    pub ceiling_height_m: f64,
    /// Exterior (load-bearing) wall thickness in meters
    pub exterior_wall_thickness_m: f64,
    /// Interior partition thickness in meters
    pub interior_wall_thickness_m: f64,
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("area_per_room_m2", self.area_per_room_m2),
            ("aspect_ratio", self.aspect_ratio),
            ("ceiling_height_m", self.ceiling_height_m),
            ("exterior_wall_thickness_m", self.exterior_wall_thickness_m),
            ("interior_wall_thickness_m", self.interior_wall_thickness_m),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidParameters(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            area_per_room_m2: 18.0,
            aspect_ratio: 1.3, // slightly deeper than wide
            ceiling_height_m: 2.7,
            exterior_wall_thickness_m: 0.2,
            interior_wall_thickness_m: 0.15,
        }
    }
}
