//! Polygonal data: points with vertex, line and polygon cells.

use std::any::Any;

use glam::DVec3;
use honeybee_vtk_core::{Actor, HbVtkError, Result};

use crate::geometry;

/// Whether a data field holds one value per point or one per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Point,
    Cell,
}

/// Named scalar values attached to polydata.
#[derive(Debug, Clone, PartialEq)]
pub struct DataField {
    pub name: String,
    pub association: Association,
    pub values: Vec<f64>,
}

/// Points and the cells built on them.
///
/// This is what gets written to `.vtk` files and shown as an actor.
#[derive(Debug, Clone)]
pub struct PolyData {
    name: String,
    points: Vec<DVec3>,
    vertices: Vec<u32>,
    lines: Vec<[u32; 2]>,
    polygons: Vec<Vec<u32>>,
    vectors: Option<Vec<DVec3>>,
    fields: Vec<DataField>,
    color_by: Option<String>,
    enabled: bool,
}

impl PolyData {
    /// Creates empty polydata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            vertices: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            vectors: None,
            fields: Vec::new(),
            color_by: None,
            enabled: true,
        }
    }

    /// One polygon cell per point loop. Loops with fewer than three points are skipped.
    pub fn from_polygons(name: impl Into<String>, polygons: &[Vec<DVec3>]) -> Self {
        let mut data = Self::new(name);
        for polygon in polygons.iter().filter(|p| p.len() >= 3) {
            let ids = polygon.iter().map(|p| data.push_point(*p)).collect();
            data.polygons.push(ids);
        }
        data
    }

    /// One vertex cell per point with a vector attached to each point.
    pub fn from_points_with_vectors(
        name: impl Into<String>,
        points: &[DVec3],
        vectors: &[DVec3],
    ) -> Result<Self> {
        check_len(points.len(), vectors.len())?;
        let mut data = Self::new(name);
        for point in points {
            let id = data.push_point(*point);
            data.vertices.push(id);
        }
        data.vectors = Some(vectors.to_vec());
        Ok(data)
    }

    /// One line cell from each start to its end, carrying `vectors` on both ends.
    pub fn arrows(
        name: impl Into<String>,
        starts: &[DVec3],
        ends: &[DVec3],
        vectors: &[DVec3],
    ) -> Result<Self> {
        check_len(starts.len(), ends.len())?;
        check_len(starts.len(), vectors.len())?;

        let mut data = Self::new(name);
        let mut point_vectors = Vec::with_capacity(starts.len() * 2);
        for ((start, end), vector) in starts.iter().zip(ends).zip(vectors) {
            let a = data.push_point(*start);
            let b = data.push_point(*end);
            data.lines.push([a, b]);
            point_vectors.extend([*vector, *vector]);
        }
        data.vectors = Some(point_vectors);
        Ok(data)
    }

    fn push_point(&mut self, point: DVec3) -> u32 {
        self.points.push(point);
        (self.points.len() - 1) as u32
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the vertex cells (point ids).
    #[must_use]
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Returns the line cells.
    #[must_use]
    pub fn lines(&self) -> &[[u32; 2]] {
        &self.lines
    }

    /// Returns the polygon cells.
    #[must_use]
    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    /// Total number of cells of every kind.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.vertices.len() + self.lines.len() + self.polygons.len()
    }

    /// Returns the per-point vectors, if any.
    #[must_use]
    pub fn vectors(&self) -> Option<&[DVec3]> {
        self.vectors.as_deref()
    }

    /// Returns the attached data fields.
    #[must_use]
    pub fn fields(&self) -> &[DataField] {
        &self.fields
    }

    /// Gets a data field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&DataField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Attaches a data field, replacing one with the same name.
    ///
    /// The number of values must match the number of points or cells.
    pub fn add_data_field(
        &mut self,
        name: impl Into<String>,
        association: Association,
        values: Vec<f64>,
    ) -> Result<&mut Self> {
        let expected = match association {
            Association::Point => self.num_points(),
            Association::Cell => self.num_cells(),
        };
        check_len(expected, values.len())?;

        let name = name.into();
        self.fields.retain(|f| f.name != name);
        self.fields.push(DataField {
            name,
            association,
            values,
        });
        Ok(self)
    }

    /// Name of the field used for coloring, if any.
    #[must_use]
    pub fn color_by(&self) -> Option<&str> {
        self.color_by.as_deref()
    }

    /// Colors this data by an attached field.
    pub fn set_color_by(&mut self, name: &str) -> Result<&mut Self> {
        if self.field(name).is_none() {
            return Err(HbVtkError::invalid(
                "color_by",
                format!("no data field named '{name}' on {}", self.name),
            ));
        }
        self.color_by = Some(name.to_string());
        Ok(self)
    }
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(HbVtkError::SizeMismatch { expected, actual })
    }
}

impl Actor for PolyData {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "PolyData"
    }

    fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        geometry::bounding_box(&self.points)
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<DVec3> {
        vec![DVec3::ZERO, DVec3::X, DVec3::Y]
    }

    #[test]
    fn test_from_polygons_skips_degenerate_loops() {
        let data = PolyData::from_polygons("walls", &[triangle(), vec![DVec3::ZERO, DVec3::X]]);
        assert_eq!(data.num_points(), 3);
        assert_eq!(data.polygons(), &[vec![0, 1, 2]]);
        assert_eq!(data.num_cells(), 1);
        assert_eq!(data.bounding_box(), Some((DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0))));
    }

    #[test]
    fn test_points_with_vectors() {
        let data =
            PolyData::from_points_with_vectors("grid", &[DVec3::ZERO, DVec3::X], &[DVec3::Z; 2])
                .unwrap();
        assert_eq!(data.vertices(), &[0, 1]);
        assert_eq!(data.vectors().unwrap().len(), 2);

        let err = PolyData::from_points_with_vectors("grid", &[DVec3::ZERO], &[]);
        assert!(matches!(
            err,
            Err(HbVtkError::SizeMismatch { expected: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_arrows() {
        let data = PolyData::arrows(
            "normals",
            &[DVec3::ZERO, DVec3::X],
            &[DVec3::Z, DVec3::new(1.0, 0.0, 1.0)],
            &[DVec3::Z, DVec3::Z],
        )
        .unwrap();
        assert_eq!(data.num_points(), 4);
        assert_eq!(data.lines(), &[[0, 1], [2, 3]]);
        assert_eq!(data.vectors().unwrap().len(), 4);
    }

    #[test]
    fn test_data_fields() {
        let mut data = PolyData::from_polygons("grid", &[triangle(), triangle()]);
        assert!(matches!(
            data.add_data_field("df", Association::Cell, vec![1.0]),
            Err(HbVtkError::SizeMismatch { .. })
        ));
        data.add_data_field("df", Association::Cell, vec![1.0, 2.0])
            .unwrap()
            .add_data_field("df", Association::Point, vec![0.0; 6])
            .unwrap();
        assert_eq!(data.fields().len(), 1);
        assert_eq!(data.field("df").unwrap().association, Association::Point);

        assert!(data.set_color_by("missing").is_err());
        data.set_color_by("df").unwrap();
        assert_eq!(data.color_by(), Some("df"));
    }
}
