//! Error types for honeybee-vtk-rs.

use glam::DVec3;
use thiserror::Error;

/// The main error type for honeybee-vtk-rs operations.
#[derive(Error, Debug)]
pub enum HbVtkError {
    /// A flat parallel view was requested without any bounds to frame.
    #[error(
        "bounds of actors are required to generate a flat view - \
         use Actors::bounds() to compute them"
    )]
    MissingBounds,

    /// Cameras were requested from a model that has no views.
    #[error("no radiance views were found in the model")]
    MissingViews,

    /// The camera direction is not one of the six axis-aligned directions.
    #[error("direction {0} is not a flat view direction")]
    NotAFlatView(DVec3),

    /// A field was given a value it cannot hold.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Result data does not line up with the sensor grids of a model.
    #[error("grid mismatch: {0}")]
    GridMismatch(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HbVtkError {
    /// Shorthand for building an [`HbVtkError::InvalidField`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for honeybee-vtk-rs operations.
pub type Result<T> = std::result::Result<T, HbVtkError>;
