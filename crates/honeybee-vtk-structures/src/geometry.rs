//! Geometry helpers for faces given as point loops.

use glam::DVec3;

/// End point of a vector drawn from `point`.
pub fn end_point(point: DVec3, vector: DVec3) -> DVec3 {
    point + vector
}

/// Average of the vertices of a polygon.
///
/// Returns `None` for an empty polygon.
pub fn polygon_center(points: &[DVec3]) -> Option<DVec3> {
    if points.is_empty() {
        return None;
    }
    let sum: DVec3 = points.iter().copied().sum();
    Some(sum / points.len() as f64)
}

/// Unit normal of a polygon using Newell's method.
///
/// Counter-clockwise loops seen from above point up. Degenerate polygons give
/// a zero vector.
pub fn polygon_normal(points: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal.normalize_or_zero()
}

/// Center point and normal of every polygon, skipping empty ones.
pub fn vectors_at_center(polygons: &[Vec<DVec3>]) -> (Vec<DVec3>, Vec<DVec3>) {
    polygons
        .iter()
        .filter_map(|polygon| {
            polygon_center(polygon).map(|center| (center, polygon_normal(polygon)))
        })
        .unzip()
}

/// Axis-aligned bounding box of a set of points.
pub fn bounding_box(points: &[DVec3]) -> Option<(DVec3, DVec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}
