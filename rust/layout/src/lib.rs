// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text-to-layout generation for residential scenes
//!
//! This crate turns a short description such as
//! `"Scandinavian 2-bedroom apartment, 70 sqm"` into a validated
//! [`SceneDocument`]:
//! 1. Interpret the prompt (room program, style theme, floor area)
//! 2. Solve a rectangular footprint and place rooms along its width
//! 3. Synthesize exterior and interior walls from room bounds
//! 4. Place doors and windows by room type
//! 5. Attach furniture presets and theme materials
//!
//! Generation is a pure function of the prompt: there is no engine state,
//! so independent calls may run concurrently and identical prompts yield
//! byte-identical JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use archprompt_layout::generate;
//!
//! let json = generate("A 3-bedroom house with 2 bathrooms")?;
//! ```

pub mod config;
pub mod error;
pub mod footprint;
pub mod furnishing;
pub mod interpreter;
pub mod openings;
pub mod walls;

pub use archprompt_schema::SceneDocument;
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use footprint::{solve_layout, Layout};
pub use furnishing::{furnish, materials_for};
pub use interpreter::{interpret, Interpretation, RoomRequest};
pub use openings::place_openings;
pub use walls::synthesize_walls;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Extra keyword parameters accepted alongside a prompt.
///
/// No parameter is consumed yet; unknown keys are accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerateOptions {
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Builds the scene document for a prompt
///
/// The document is validated before it is returned; a validation failure
/// means a pipeline stage broke a construction invariant.
pub fn build_scene(prompt: &str, config: &LayoutConfig) -> Result<SceneDocument> {
    config.validate()?;

    let interpretation = interpret(prompt);
    let layout = solve_layout(
        &interpretation.rooms,
        interpretation.area_override,
        config,
    )?;

    let walls = synthesize_walls(&layout.house, &layout.rooms, config);
    let openings = place_openings(&layout.rooms, &walls);
    let furniture = furnish(&layout.rooms);

    let mut scene = SceneDocument::new();
    scene.meta.confidence = layout.confidence;
    scene.house = layout.house;
    for level in &mut scene.levels {
        level.height_m = config.ceiling_height_m;
    }
    scene.rooms = layout.rooms;
    scene.walls = walls;
    scene.openings = openings;
    scene.furniture = furniture;
    scene.materials = materials_for(interpretation.theme);
    scene.styles.theme = interpretation.theme;

    scene.validate()?;

    tracing::info!(
        rooms = scene.rooms.len(),
        walls = scene.walls.len(),
        openings = scene.openings.len(),
        furniture = scene.furniture.len(),
        theme = %scene.styles.theme,
        confidence = scene.meta.confidence,
        "Generated scene"
    );

    Ok(scene)
}

/// Generates compact scene JSON for a prompt.
pub fn generate(prompt: &str) -> Result<String> {
    generate_with(prompt, &GenerateOptions::default())
}

/// Generates compact scene JSON, accepting extra keyword parameters.
pub fn generate_with(prompt: &str, options: &GenerateOptions) -> Result<String> {
    if !options.extra.is_empty() {
        tracing::debug!(
            keys = ?options.extra.keys().collect::<Vec<_>>(),
            "Ignoring unused generation parameters"
        );
    }

    let scene = build_scene(prompt, &LayoutConfig::default())?;
    Ok(scene.to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use archprompt_schema::Theme;

    #[test]
    fn test_build_scene_sections() {
        let scene = build_scene("A 2-bedroom apartment with modern kitchen", &LayoutConfig::default())
            .unwrap();

        assert_eq!(scene.rooms.len(), 3);
        assert_eq!(scene.walls.len(), 6);
        // three doors, two bedroom windows, one kitchen window
        assert_eq!(scene.openings.len(), 6);
        assert_eq!(scene.furniture.len(), 6);
        assert_eq!(scene.levels.len(), 1);
        assert_eq!(scene.styles.theme, Theme::Modern);
        assert_eq!(scene.meta.confidence, 0.8);
    }

    #[test]
    fn test_unknown_options_are_ignored() {
        let mut options = GenerateOptions::default();
        options
            .extra
            .insert("style".to_string(), Value::String("baroque".to_string()));
        options.extra.insert("floors".to_string(), Value::from(3));

        let with_options = generate_with("A rustic cabin", &options).unwrap();
        let without = generate("A rustic cabin").unwrap();
        assert_eq!(with_options, without);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LayoutConfig {
            ceiling_height_m: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            build_scene("A kitchen", &config),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_options_deserialize_any_keys() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"budget": "low", "wheelchair": true}"#).unwrap();
        assert_eq!(options.extra.len(), 2);
    }
}
