// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ArchPrompt Schema
//!
//! Scene document model for prompt-driven residential layouts.
//!
//! A [`SceneDocument`] is the single artifact the layout engine produces:
//! building metadata, one level, rooms, walls, door/window openings,
//! furniture, materials, styles, and the static constraint and export
//! sections consumed by downstream 3D and CAD pipelines.
//!
//! Every entity is a plain value record with the defaults the pipeline
//! relies on. The document flattens to a nested JSON object whose eleven
//! top-level keys are listed in [`REQUIRED_KEYS`].
//!
//! ```rust,ignore
//! use archprompt_schema::{SceneDocument, Theme};
//!
//! let mut scene = SceneDocument::new();
//! scene.styles.theme = Theme::Scandinavian;
//! let json = scene.to_json()?;
//! ```

pub mod error;
pub mod scene;
pub mod types;

pub use error::{Result, SchemaError};
pub use scene::{validate_value, SceneDocument, REQUIRED_KEYS};
pub use types::{
    Accessibility, Constraints, Exports, Furniture, House, Level, Meta, Opening, OpeningType,
    Point2D, PrivacyLevel, Room, RoomBounds, RoomType, Styles, Swing, Theme, Wall,
    GROUND_FLOOR,
};
