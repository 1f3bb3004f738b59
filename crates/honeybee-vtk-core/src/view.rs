//! Radiance view definitions carried by a model.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Projection type of a view.
///
/// Serialized with the radiance view type letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective projection (`v`).
    #[default]
    #[serde(rename = "v")]
    Perspective,
    /// Parallel (orthographic) projection (`l`).
    #[serde(rename = "l")]
    Parallel,
}

/// A named view stored on a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Name of the view.
    pub identifier: String,
    /// Position of the view point.
    pub position: DVec3,
    /// Direction the view looks at.
    pub direction: DVec3,
    /// Where the top of the view is.
    #[serde(default = "default_up_vector")]
    pub up_vector: DVec3,
    /// Horizontal view size in degrees.
    #[serde(default = "default_size")]
    pub h_size: f64,
    /// Vertical view size in degrees.
    #[serde(default = "default_size")]
    pub v_size: f64,
    /// Projection type.
    #[serde(default)]
    pub view_type: Projection,
}

fn default_up_vector() -> DVec3 {
    DVec3::Y
}

fn default_size() -> f64 {
    60.0
}

impl View {
    /// Creates a perspective view with default up vector and sizes.
    pub fn new(identifier: impl Into<String>, position: DVec3, direction: DVec3) -> Self {
        Self {
            identifier: identifier.into(),
            position,
            direction,
            up_vector: default_up_vector(),
            h_size: default_size(),
            v_size: default_size(),
            view_type: Projection::Perspective,
        }
    }

    /// Sets the projection type.
    #[must_use]
    pub fn with_view_type(mut self, view_type: Projection) -> Self {
        self.view_type = view_type;
        self
    }

    /// Sets the up vector.
    #[must_use]
    pub fn with_up_vector(mut self, up_vector: DVec3) -> Self {
        self.up_vector = up_vector;
        self
    }
}
