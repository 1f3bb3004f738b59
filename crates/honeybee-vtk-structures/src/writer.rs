//! Legacy VTK file output.
//!
//! Everything is written as ASCII `DATASET POLYDATA`, which any VTK based
//! viewer reads without extra setup.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use glam::DVec3;
use honeybee_vtk_core::Result;

use crate::face::{FaceType, GroupedPoints};
use crate::geometry::{end_point, vectors_at_center};
use crate::grid::GridGroups;
use crate::polydata::{Association, DataField, PolyData};

/// Default file stem for point-only sensor grids.
pub const GRID_POINTS: &str = "grid points";
const GRID_BASE: &str = "grid base";
const GRID_MESH: &str = "grid mesh";

/// Writes polydata in the legacy VTK ASCII format.
pub fn write_vtk<W: Write>(out: &mut W, data: &PolyData, title: &str) -> Result<()> {
    writeln!(out, "# vtk DataFile Version 3.0")?;
    writeln!(out, "{}", title.lines().next().unwrap_or_default())?;
    writeln!(out, "ASCII")?;
    writeln!(out, "DATASET POLYDATA")?;

    writeln!(out, "POINTS {} double", data.num_points())?;
    for p in data.points() {
        writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
    }

    let vertices = data.vertices();
    if !vertices.is_empty() {
        writeln!(out, "VERTICES {} {}", vertices.len(), vertices.len() * 2)?;
        for id in vertices {
            writeln!(out, "1 {id}")?;
        }
    }

    let lines = data.lines();
    if !lines.is_empty() {
        writeln!(out, "LINES {} {}", lines.len(), lines.len() * 3)?;
        for [a, b] in lines {
            writeln!(out, "2 {a} {b}")?;
        }
    }

    let polygons = data.polygons();
    if !polygons.is_empty() {
        let size: usize = polygons.iter().map(|p| p.len() + 1).sum();
        writeln!(out, "POLYGONS {} {size}", polygons.len())?;
        for polygon in polygons {
            write!(out, "{}", polygon.len())?;
            for id in polygon {
                write!(out, " {id}")?;
            }
            writeln!(out)?;
        }
    }

    let point_fields = fields_of(data, Association::Point);
    if data.vectors().is_some() || !point_fields.is_empty() {
        writeln!(out, "POINT_DATA {}", data.num_points())?;
        if let Some(vectors) = data.vectors() {
            writeln!(out, "VECTORS vectors double")?;
            for v in vectors {
                writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
            }
        }
        for field in point_fields {
            write_scalars(out, field)?;
        }
    }

    let cell_fields = fields_of(data, Association::Cell);
    if !cell_fields.is_empty() {
        writeln!(out, "CELL_DATA {}", data.num_cells())?;
        for field in cell_fields {
            write_scalars(out, field)?;
        }
    }
    Ok(())
}

fn fields_of(data: &PolyData, association: Association) -> Vec<&DataField> {
    data.fields()
        .iter()
        .filter(|f| f.association == association)
        .collect()
}

fn write_scalars<W: Write>(out: &mut W, field: &DataField) -> Result<()> {
    // Legacy names end at the first whitespace.
    let name: String = field
        .name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    writeln!(out, "SCALARS {name} double 1")?;
    writeln!(out, "LOOKUP_TABLE default")?;
    for v in &field.values {
        writeln!(out, "{v}")?;
    }
    Ok(())
}

/// Writes polydata to `<dir>/<stem>.vtk` and returns the file path.
pub fn write_polydata(data: &PolyData, dir: &Path, stem: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{stem}.vtk"));
    let mut out = BufWriter::new(File::create(&path)?);
    write_vtk(&mut out, data, stem)?;
    out.flush()?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Writes points with a vector per point to `<dir>/<stem>.vtk`.
pub fn write_color_grouped_points(
    points: &[DVec3],
    vectors: &[DVec3],
    dir: &Path,
    stem: &str,
) -> Result<PathBuf> {
    let data = PolyData::from_points_with_vectors(stem, points, vectors)?;
    write_polydata(&data, dir, stem)
}

/// Writes one arrow per start point to `<dir>/<stem> vectors.vtk`.
pub fn write_arrows(
    starts: &[DVec3],
    vectors: &[DVec3],
    dir: &Path,
    stem: &str,
) -> Result<PathBuf> {
    let ends: Vec<DVec3> = starts
        .iter()
        .zip(vectors)
        .map(|(p, v)| end_point(*p, *v))
        .collect();
    let name = format!("{stem} vectors");
    let data = PolyData::arrows(name.as_str(), starts, &ends, vectors)?;
    write_polydata(&data, dir, &name)
}

/// Writes each non-empty grid group and returns the written file stems.
///
/// Groups are written in the order base, mesh, points.
pub fn write_grids(groups: &GridGroups, dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    if !groups.base.is_empty() {
        let data = PolyData::from_polygons(GRID_BASE, &groups.base_polygons());
        write_polydata(&data, dir, GRID_BASE)?;
        names.push(GRID_BASE.to_string());
    }

    if !groups.mesh.is_empty() {
        let data = PolyData::from_polygons(GRID_MESH, &groups.mesh_polygons()?);
        write_polydata(&data, dir, GRID_MESH)?;
        names.push(GRID_MESH.to_string());
    }

    if !groups.points.is_empty() {
        let (points, vectors) = groups.sensor_points();
        write_color_grouped_points(&points, &vectors, dir, GRID_POINTS)?;
        names.push(GRID_POINTS.to_string());
    }

    Ok(names)
}

/// Writes face normals of apertures and, optionally, of grid geometry.
///
/// Returns the written file stems.
pub fn write_vectors(
    grouped: &GroupedPoints,
    grids: Option<&GridGroups>,
    include_grids: bool,
    dir: &Path,
) -> Result<Vec<String>> {
    let mut names = Vec::new();

    if grouped.contains(FaceType::Aperture) {
        let (starts, vectors) = vectors_at_center(grouped.get(FaceType::Aperture));
        write_arrows(&starts, &vectors, dir, FaceType::Aperture.name())?;
        names.push(format!("{} vectors", FaceType::Aperture.name()));
    }

    let Some(groups) = grids.filter(|_| include_grids) else {
        return Ok(names);
    };

    if !groups.base.is_empty() {
        let (starts, vectors) = vectors_at_center(&groups.base_polygons());
        write_arrows(&starts, &vectors, dir, GRID_BASE)?;
        names.push(format!("{GRID_BASE} vectors"));
    }

    if !groups.mesh.is_empty() {
        let (starts, vectors) = vectors_at_center(&groups.mesh_polygons()?);
        write_arrows(&starts, &vectors, dir, GRID_MESH)?;
        names.push(format!("{GRID_MESH} vectors"));
    }

    Ok(names)
}
