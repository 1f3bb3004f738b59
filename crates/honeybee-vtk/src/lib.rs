//! honeybee-vtk-rs: camera views and VTK data for building-energy-model geometry.
//!
//! A [`Model`] holds the radiance [`View`]s of a building model together with
//! the visible geometry as [`Actor`]s. Each view becomes a [`CameraConfig`]
//! and then a toolkit [`RenderCamera`]. Flat parallel views (looking exactly
//! along a world axis) are pulled back so the camera sits just outside the
//! model, at a fixed offset from its outermost point.
//!
//! # Quick Start
//!
//! ```no_run
//! use honeybee_vtk::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let mut grouped = GroupedPoints::new();
//!     grouped.add(
//!         FaceType::Floor,
//!         vec![DVec3::ZERO, DVec3::X * 10.0, DVec3::new(10.0, 5.0, 0.0), DVec3::Y * 5.0],
//!     );
//!
//!     let mut model = Model::new("office");
//!     add_model_geometry(&mut model, &grouped);
//!     model.add_view(
//!         View::new("top", DVec3::new(5.0, 2.5, 50.0), DVec3::NEG_Z)
//!             .with_view_type(Projection::Parallel),
//!     );
//!
//!     for camera in render_cameras(&model)? {
//!         println!("{:?}", camera.position);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - `honeybee-vtk-core`: views, actors, camera configuration, data configs
//! - `honeybee-vtk-render`: the toolkit camera and legend colors
//! - `honeybee-vtk-structures`: polydata, sensor grids and `.vtk` writers

mod init;
mod scene;

pub use init::init;
pub use scene::{
    add_model_geometry, add_sensor_grids, cameras, load_data, render_cameras, write_model,
};

// Re-export core types
pub use honeybee_vtk_core::{
    flat_view, load_config, outermost_point, Actor, Actors, Autocalculate, Bounds, CameraConfig,
    CameraConfigBuilder, ColorSet, DataConfig, DataSetName, FlatView, GridInfo, HbVtkError,
    LegendConfig, Model, Projection, Result, Sign, TextConfig, View, FLAT_VIEW_DIRECTIONS,
};

// Re-export render types
pub use honeybee_vtk_render::{ColorMap, Legend, RenderCamera};

// Re-export structures
pub use honeybee_vtk_structures::{
    write_arrows, write_color_grouped_points, write_grids, write_polydata, write_vectors,
    Association, Face3D, FaceType, GridGroups, GroupedPoints, Mesh3D, PolyData, Sensor,
    SensorGrid,
};

pub use glam::{DMat4, DVec3};
