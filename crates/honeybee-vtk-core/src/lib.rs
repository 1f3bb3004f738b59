//! Core abstractions for honeybee-vtk-rs.
//!
//! This crate provides the fundamental types used throughout honeybee-vtk-rs:
//! - [`CameraConfig`] and the flat-view camera positioning
//! - [`Actor`] trait for visible geometry and the [`Actors`] collection
//! - [`Model`] with its radiance [`View`]s
//! - Result data and legend configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Config structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod camera;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use actor::{Actor, Actors};
pub use camera::{
    flat_view, outermost_point, Bounds, CameraConfig, CameraConfigBuilder, FlatView, Sign,
    FLAT_VIEW_DIRECTIONS,
};
pub use config::{
    load_config, Autocalculate, ColorSet, DataConfig, DataSetName, DecimalCount, LegendConfig,
    Orientation, TextConfig,
};
pub use error::{HbVtkError, Result};
pub use model::{GridInfo, Model};
pub use view::{Projection, View};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec3};
