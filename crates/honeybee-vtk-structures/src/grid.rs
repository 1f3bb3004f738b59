//! Sensor grids and their split by available geometry.

use glam::DVec3;
use honeybee_vtk_core::{GridInfo, HbVtkError, Result};
use serde::{Deserialize, Serialize};

use crate::polydata::PolyData;

/// A sensor: a point with a facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub pos: DVec3,
    pub dir: DVec3,
}

/// A planar face given by its boundary loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face3D {
    pub boundary: Vec<DVec3>,
}

/// An indexed mesh with polygon faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh3D {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh3D {
    /// Resolves every face to its point loop.
    pub fn polygons(&self) -> Result<Vec<Vec<DVec3>>> {
        self.faces
            .iter()
            .map(|face| {
                face.iter()
                    .map(|&i| {
                        self.vertices.get(i).copied().ok_or_else(|| {
                            HbVtkError::invalid(
                                "mesh",
                                format!(
                                    "face index {i} out of range for {} vertices",
                                    self.vertices.len()
                                ),
                            )
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

/// A sensor grid as stored in a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorGrid {
    pub identifier: String,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    #[serde(default)]
    pub mesh: Option<Mesh3D>,
    #[serde(default)]
    pub base_geometry: Option<Vec<Face3D>>,
}

impl SensorGrid {
    /// Creates a grid of bare sensors.
    pub fn from_sensors(identifier: impl Into<String>, sensors: Vec<Sensor>) -> Self {
        Self {
            identifier: identifier.into(),
            sensors,
            mesh: None,
            base_geometry: None,
        }
    }

    /// Summary used to check result files against this grid.
    ///
    /// Results line up with mesh faces when the grid has a mesh, otherwise
    /// with sensors.
    pub fn info(&self) -> GridInfo {
        let count = self
            .mesh
            .as_ref()
            .map_or(self.sensors.len(), |m| m.faces.len());
        GridInfo::new(self.identifier.clone(), count)
    }

    /// Polydata that result values are attached to, one cell per result.
    ///
    /// Mesh grids give one polygon per mesh face. All other grids, including
    /// those with base geometry, give one vertex per sensor carrying its
    /// direction. The cell count always equals [`SensorGrid::info`]'s count.
    pub fn polydata(&self) -> Result<PolyData> {
        let name = self.identifier.as_str();
        if let Some(mesh) = &self.mesh {
            return Ok(PolyData::from_polygons(name, &mesh.polygons()?));
        }
        let (points, vectors): (Vec<_>, Vec<_>) =
            self.sensors.iter().map(|s| (s.pos, s.dir)).unzip();
        PolyData::from_points_with_vectors(name, &points, &vectors)
    }
}

/// Sensor grids split by the geometry they can be drawn with.
#[derive(Debug, Clone, Default)]
pub struct GridGroups {
    /// Grids with base geometry.
    pub base: Vec<SensorGrid>,
    /// Grids with a mesh and no base geometry.
    pub mesh: Vec<SensorGrid>,
    /// Grids with neither.
    pub points: Vec<SensorGrid>,
}

impl GridGroups {
    /// Splits grids, keeping their order within each group.
    pub fn classify(grids: &[SensorGrid]) -> Self {
        let mut groups = Self::default();
        for grid in grids {
            let target = if grid.base_geometry.is_some() {
                &mut groups.base
            } else if grid.mesh.is_some() {
                &mut groups.mesh
            } else {
                &mut groups.points
            };
            target.push(grid.clone());
        }
        log::debug!(
            "classified grids: {} base, {} mesh, {} points",
            groups.base.len(),
            groups.mesh.len(),
            groups.points.len()
        );
        groups
    }

    /// Whether no grid was classified.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.mesh.is_empty() && self.points.is_empty()
    }

    /// Boundary loops of every base-geometry face.
    pub fn base_polygons(&self) -> Vec<Vec<DVec3>> {
        self.base
            .iter()
            .flat_map(|g| g.base_geometry.iter().flatten())
            .map(|face| face.boundary.clone())
            .collect()
    }

    /// Face loops of every mesh grid.
    pub fn mesh_polygons(&self) -> Result<Vec<Vec<DVec3>>> {
        let mut polygons = Vec::new();
        for mesh in self.mesh.iter().filter_map(|g| g.mesh.as_ref()) {
            polygons.extend(mesh.polygons()?);
        }
        Ok(polygons)
    }

    /// Positions and directions of every sensor in point-only grids.
    pub fn sensor_points(&self) -> (Vec<DVec3>, Vec<DVec3>) {
        self.points
            .iter()
            .flat_map(|g| &g.sensors)
            .map(|s| (s.pos, s.dir))
            .unzip()
    }
}
