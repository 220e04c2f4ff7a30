// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use archprompt_schema::SchemaError;
use thiserror::Error;

/// Result type for layout generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during layout generation
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty room program: at least one room is required")]
    EmptyProgram,

    #[error("Invalid layout parameters: {0}")]
    InvalidParameters(String),

    #[error("Scene invariant violated: {0}")]
    Schema(#[from] SchemaError),
}
