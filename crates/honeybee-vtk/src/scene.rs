//! Model-level operations: geometry, sensor grids, result data and cameras.

use std::path::Path;

use honeybee_vtk_core::{
    CameraConfig, DataConfig, DataSetName, HbVtkError, Model, Result,
};
use honeybee_vtk_render::{Legend, RenderCamera};
use honeybee_vtk_structures::{
    write_grids, write_polydata, write_vectors, Association, GridGroups, GroupedPoints, PolyData,
    SensorGrid,
};

/// Adds one polydata actor per face type, named after the type.
pub fn add_model_geometry(model: &mut Model, grouped: &GroupedPoints) {
    for face_type in grouped.types() {
        let data = PolyData::from_polygons(face_type.name(), grouped.get(face_type));
        log::debug!("adding {} with {} cells", face_type.name(), data.num_cells());
        model.add_actor(Box::new(data));
    }
}

/// Adds one polydata actor per sensor grid and records its [`GridInfo`].
///
/// Each actor has one cell per result value: mesh faces for mesh grids,
/// sensor points for every other grid. Base geometry is only written to file.
///
/// [`GridInfo`]: honeybee_vtk_core::GridInfo
pub fn add_sensor_grids(model: &mut Model, grids: &[SensorGrid]) -> Result<()> {
    for grid in grids {
        let data = grid.polydata()?;
        model.add_sensor_grid(grid.info());
        model.add_actor(Box::new(data));
    }
    log::info!("added {} sensor grids to '{}'", grids.len(), model.identifier());
    Ok(())
}

/// Attaches the results of a data config to the sensor grid actors.
///
/// Each grid actor gets one cell value per result under the config's
/// identifier. Visible data also becomes the field the grid is colored by.
/// Returns the legend to show, if the data is not hidden.
pub fn load_data(model: &mut Model, config: &DataConfig) -> Result<Option<Legend>> {
    if config.object_type != DataSetName::Grid {
        return Err(HbVtkError::invalid(
            "object_type",
            format!(
                "{} maps onto {:?}, only grid data can be loaded",
                config.identifier, config.object_type
            ),
        ));
    }

    let grids = model.sensor_grids().to_vec();
    config.validate_against(&grids)?;
    let results = config.load_results()?;

    let mut all_values = Vec::new();
    for (grid, values) in grids.iter().zip(results) {
        let data = model
            .actors_mut()
            .get_mut(&grid.identifier)
            .and_then(|a| a.as_any_mut().downcast_mut::<PolyData>())
            .ok_or_else(|| {
                HbVtkError::GridMismatch(format!("no grid actor named {}", grid.identifier))
            })?;

        all_values.extend_from_slice(&values);
        data.add_data_field(config.identifier.as_str(), Association::Cell, values)?;
        if !config.hide {
            data.set_color_by(&config.identifier)?;
        }
    }

    log::info!("loaded {} onto {} grids", config.identifier, grids.len());
    Ok(config
        .active_legend()
        .map(|legend| Legend::from_config(&config.identifier, &config.unit, legend, &all_values)))
}

/// Camera configurations for every view of a model.
pub fn cameras(model: &Model) -> Result<Vec<CameraConfig>> {
    CameraConfig::from_model(model)
}

/// Toolkit cameras for every view of a model.
pub fn render_cameras(model: &Model) -> Result<Vec<RenderCamera>> {
    cameras(model)?
        .iter()
        .map(RenderCamera::from_config)
        .collect()
}

/// Writes the model geometry, sensor grids and, optionally, normals to `dir`.
///
/// Returns the stems of every written file.
pub fn write_model(
    grouped: &GroupedPoints,
    grids: &[SensorGrid],
    include_vectors: bool,
    dir: &Path,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for face_type in grouped.types() {
        let data = PolyData::from_polygons(face_type.name(), grouped.get(face_type));
        write_polydata(&data, dir, face_type.name())?;
        names.push(face_type.name().to_string());
    }

    let groups = GridGroups::classify(grids);
    names.extend(write_grids(&groups, dir)?);

    if include_vectors {
        names.extend(write_vectors(grouped, Some(&groups), true, dir)?);
    }
    Ok(names)
}
