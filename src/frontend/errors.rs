//! Error types for the line-oriented front end

use thiserror::Error;

use crate::transposition::TransposeError;

/// Failure while handling one line of user input
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The line carries no `@offset` suffix
    #[error("No transpose constant found!")]
    MissingOffsetMarker,

    #[error(transparent)]
    Transpose(#[from] TransposeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Token dump could not be rendered as JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
