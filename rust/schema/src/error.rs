// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for scene document assembly and validation.

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised when a scene document breaks a construction invariant.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document has no rooms.
    #[error("scene has no rooms")]
    NoRooms,

    /// The document has no levels.
    #[error("scene has no levels")]
    NoLevels,

    /// Two entities of the same kind share an identifier.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// An entity references another entity that does not exist.
    #[error("{kind} {id} references unknown {target}: {reference}")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        reference: String,
    },

    /// An opening is placed outside its host wall.
    #[error("opening {0} has position ratio {1} outside [0, 1]")]
    RatioOutOfRange(String, f64),

    /// The rectangular footprint does not match the declared floor area.
    #[error("footprint {width} x {depth} does not match total area {area}")]
    FootprintMismatch { width: f64, depth: f64, area: f64 },

    /// A serialized document is missing required content.
    #[error("invalid scene document: {}", .0.join("; "))]
    Structure(Vec<String>),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
