//! Rendering-side types for honeybee-vtk-rs.
//!
//! This crate turns core configuration into what the visualization toolkit
//! consumes:
//! - [`RenderCamera`], the toolkit camera built from a `CameraConfig`
//! - [`ColorMap`] and [`Legend`] for coloring result data

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Colors are f32, model data is f64
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod camera;
pub mod color_maps;

pub use camera::RenderCamera;
pub use color_maps::{ColorMap, Legend};
