//! Structure implementations for honeybee-vtk-rs.
//!
//! This crate provides the geometry that ends up in `.vtk` files:
//! - [`PolyData`] with vertex, line and polygon cells
//! - Model faces grouped by [`FaceType`]
//! - Sensor grids and their [`GridGroups`]
//! - Legacy VTK writers

// Point ids are u32 in VTK files
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod face;
pub mod geometry;
pub mod grid;
pub mod polydata;
pub mod writer;

pub use face::{FaceType, GroupedPoints};
pub use grid::{Face3D, GridGroups, Mesh3D, Sensor, SensorGrid};
pub use polydata::{Association, DataField, PolyData};
pub use writer::{
    write_arrows, write_color_grouped_points, write_grids, write_polydata, write_vectors,
    write_vtk, GRID_POINTS,
};
