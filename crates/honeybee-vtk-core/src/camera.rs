//! Camera configuration and flat-view positioning.
//!
//! A [`CameraConfig`] describes a camera in model space. When the camera uses a
//! parallel projection and looks exactly along one of the six world axes (a
//! "flat" view), its position is pulled to just outside the bounds of the model
//! so the whole silhouette is framed. See [`CameraConfig::adjusted_position`].

use std::sync::Arc;

use glam::DVec3;

use crate::error::{HbVtkError, Result};
use crate::model::Model;
use crate::view::Projection;

/// Corner points of the visible geometry, shared read-only between cameras.
pub type Bounds = Arc<[DVec3]>;

/// Direction along an axis in which a flat-view camera is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Towards positive coordinates.
    Positive,
    /// Towards negative coordinates.
    Negative,
}

/// Axis index and sign for one flat view direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatView {
    /// Index of the position coordinate that is adjusted (0 = x, 1 = y, 2 = z).
    pub axis: usize,
    /// Direction on that axis.
    pub sign: Sign,
}

impl FlatView {
    const fn new(axis: usize, sign: Sign) -> Self {
        Self { axis, sign }
    }
}

/// The six axis-aligned view directions and the axis each one moves along.
pub const FLAT_VIEW_DIRECTIONS: [(DVec3, FlatView); 6] = [
    (DVec3::NEG_Z, FlatView::new(2, Sign::Negative)),
    (DVec3::Z, FlatView::new(2, Sign::Positive)),
    (DVec3::Y, FlatView::new(1, Sign::Positive)),
    (DVec3::NEG_Y, FlatView::new(1, Sign::Negative)),
    (DVec3::X, FlatView::new(0, Sign::Positive)),
    (DVec3::NEG_X, FlatView::new(0, Sign::Negative)),
];

/// Looks up a direction in [`FLAT_VIEW_DIRECTIONS`].
///
/// Only exact matches count; a direction of `(0, 0, -2)` is not a flat view.
pub fn flat_view(direction: DVec3) -> Option<FlatView> {
    FLAT_VIEW_DIRECTIONS
        .iter()
        .find(|(d, _)| *d == direction)
        .map(|(_, flat)| *flat)
}

/// Finds the point of `bounds` that is outermost for a flat view.
///
/// On the z axis a positive sign picks the largest coordinate. On the x and y
/// axes the comparison is inverted: a positive sign picks the smallest one.
/// When several points share the extreme coordinate any of them is returned.
pub fn outermost_point(bounds: &[DVec3], flat: FlatView) -> Option<DVec3> {
    let axis = flat.axis;
    let pick_max = (axis == 2) == (flat.sign == Sign::Positive);
    let points = bounds.iter().copied();

    if pick_max {
        points.max_by(|a, b| a[axis].total_cmp(&b[axis]))
    } else {
        points.min_by(|a, b| a[axis].total_cmp(&b[axis]))
    }
}

/// A camera in model space.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    identifier: String,
    position: DVec3,
    direction: DVec3,
    up_vector: DVec3,
    h_size: f64,
    v_size: f64,
    projection: Projection,
    bounds: Option<Bounds>,
    offset: u32,
}

impl Default for CameraConfig {
    /// Perspective camera 50 units above the XY plane looking down.
    fn default() -> Self {
        Self {
            identifier: "camera".to_string(),
            position: DVec3::new(0.0, 0.0, 50.0),
            direction: DVec3::NEG_Z,
            up_vector: DVec3::Y,
            h_size: 60.0,
            v_size: 60.0,
            projection: Projection::Perspective,
            bounds: None,
            offset: 1,
        }
    }
}

impl CameraConfig {
    /// Starts building a camera with the given identifier and default settings.
    pub fn builder(identifier: impl Into<String>) -> CameraConfigBuilder {
        CameraConfigBuilder {
            config: Self {
                identifier: identifier.into(),
                ..Self::default()
            },
        }
    }

    /// Creates one camera per view of `model`.
    ///
    /// Bounds are computed once from the model's actors and shared by every
    /// camera. Fails without producing any camera if the model has no views or
    /// if any view cannot be turned into a valid camera.
    pub fn from_model(model: &Model) -> Result<Vec<Self>> {
        if model.views().is_empty() {
            return Err(HbVtkError::MissingViews);
        }

        let bounds = model.actors().bounds();
        log::debug!(
            "deriving {} cameras from model '{}'",
            model.views().len(),
            model.identifier()
        );

        model
            .views()
            .iter()
            .map(|view| {
                Self::builder(view.identifier.clone())
                    .position(view.position)
                    .direction(view.direction)
                    .up_vector(view.up_vector)
                    .h_size(view.h_size)
                    .v_size(view.v_size)
                    .projection(view.view_type)
                    .bounds(Arc::clone(&bounds))
                    .build()
            })
            .collect()
    }

    /// Returns the identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the configured position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Returns the view direction.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Returns the up vector.
    pub fn up_vector(&self) -> DVec3 {
        self.up_vector
    }

    /// Returns the horizontal view angle in degrees.
    pub fn h_size(&self) -> f64 {
        self.h_size
    }

    /// Returns the vertical view angle in degrees.
    pub fn v_size(&self) -> f64 {
        self.v_size
    }

    /// Returns the projection type.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Returns the bounds used for flat views, if any.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Returns the distance kept between the model and a flat-view camera.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the flat view entry for this camera's direction, if it has one.
    pub fn flat_view(&self) -> Option<FlatView> {
        flat_view(self.direction)
    }

    /// Whether this camera is a parallel projection along a world axis.
    pub fn is_flat_parallel(&self) -> bool {
        self.projection == Projection::Parallel && self.flat_view().is_some()
    }

    /// Replaces the bounds. An empty list clears them.
    ///
    /// Fails, leaving the camera unchanged, if the bounds hold a non-finite
    /// coordinate or if clearing them would leave a flat parallel camera with
    /// nothing to frame.
    pub fn set_bounds(&mut self, bounds: Option<Bounds>) -> Result<&mut Self> {
        let bounds = bounds.filter(|b| !b.is_empty());
        validate_bounds(bounds.as_deref())?;
        if bounds.is_none() && self.is_flat_parallel() {
            return Err(HbVtkError::MissingBounds);
        }
        self.bounds = bounds;
        Ok(self)
    }

    /// Sets the flat-view offset. Must be a positive whole number.
    pub fn set_offset(&mut self, offset: u32) -> Result<&mut Self> {
        validate_offset(offset)?;
        self.offset = offset;
        Ok(self)
    }

    /// Position that keeps a flat-view camera just outside the model.
    ///
    /// The coordinate on the view axis becomes the outermost coordinate of the
    /// bounds moved by the offset, away from the origin side it lies on (a
    /// coordinate of zero counts as negative). The other two coordinates stay
    /// as configured.
    pub fn adjusted_position(&self) -> Result<DVec3> {
        let flat = self
            .flat_view()
            .ok_or(HbVtkError::NotAFlatView(self.direction))?;
        let bounds = self.bounds.as_deref().ok_or(HbVtkError::MissingBounds)?;
        let point = outermost_point(bounds, flat).ok_or(HbVtkError::MissingBounds)?;

        let cord = point[flat.axis];
        let offset = f64::from(self.offset);
        let offset = if cord <= 0.0 { -offset } else { offset };

        let mut position = self.position;
        position[flat.axis] = cord + offset;
        log::debug!(
            "camera '{}' adjusted from {} to {position}",
            self.identifier,
            self.position
        );
        Ok(position)
    }

    fn validate(&self) -> Result<()> {
        validate_vector("position", self.position)?;
        validate_vector("direction", self.direction)?;
        validate_vector("up_vector", self.up_vector)?;
        validate_size("h_size", self.h_size)?;
        validate_size("v_size", self.v_size)?;
        validate_offset(self.offset)?;
        validate_bounds(self.bounds.as_deref())?;
        if self.bounds.is_none() && self.is_flat_parallel() {
            return Err(HbVtkError::MissingBounds);
        }
        Ok(())
    }
}

/// Builder for [`CameraConfig`]. Validation happens in [`CameraConfigBuilder::build`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CameraConfigBuilder {
    config: CameraConfig,
}

impl CameraConfigBuilder {
    /// Sets the camera position.
    pub fn position(mut self, position: DVec3) -> Self {
        self.config.position = position;
        self
    }

    /// Sets the view direction.
    pub fn direction(mut self, direction: DVec3) -> Self {
        self.config.direction = direction;
        self
    }

    /// Sets the up vector.
    pub fn up_vector(mut self, up_vector: DVec3) -> Self {
        self.config.up_vector = up_vector;
        self
    }

    /// Sets the horizontal view angle in degrees.
    pub fn h_size(mut self, h_size: f64) -> Self {
        self.config.h_size = h_size;
        self
    }

    /// Sets the vertical view angle in degrees.
    pub fn v_size(mut self, v_size: f64) -> Self {
        self.config.v_size = v_size;
        self
    }

    /// Sets the projection type.
    pub fn projection(mut self, projection: Projection) -> Self {
        self.config.projection = projection;
        self
    }

    /// Sets the bounds. An empty list means no bounds.
    pub fn bounds(mut self, bounds: impl Into<Bounds>) -> Self {
        let bounds: Bounds = bounds.into();
        self.config.bounds = (!bounds.is_empty()).then_some(bounds);
        self
    }

    /// Sets the flat-view offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.config.offset = offset;
        self
    }

    /// Validates and returns the camera.
    pub fn build(self) -> Result<CameraConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn validate_vector(field: &'static str, v: DVec3) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(HbVtkError::invalid(field, format!("{v} is not finite")))
    }
}

fn validate_size(field: &'static str, size: f64) -> Result<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(HbVtkError::invalid(
            field,
            format!("expected a positive number, got {size}"),
        ))
    }
}

fn validate_offset(offset: u32) -> Result<()> {
    if offset == 0 {
        return Err(HbVtkError::invalid(
            "offset",
            "expected a positive whole number, got 0",
        ));
    }
    Ok(())
}

fn validate_bounds(bounds: Option<&[DVec3]>) -> Result<()> {
    match bounds.and_then(|b| b.iter().find(|p| !p.is_finite())) {
        Some(p) => Err(HbVtkError::invalid(
            "bounds",
            format!("expected finite 3D points, got {p}"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::tests::BoxActor;
    use crate::view::View;
    use proptest::prelude::*;

    fn z_bounds() -> Bounds {
        Arc::from(vec![
            DVec3::new(1.0, 2.0, -5.0),
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(5.0, 6.0, 10.0),
        ])
    }

    fn x_bounds() -> Bounds {
        Arc::from(vec![
            DVec3::new(-3.0, 1.0, 1.0),
            DVec3::new(2.0, 1.0, 1.0),
            DVec3::new(7.0, 1.0, 1.0),
        ])
    }

    fn flat(direction: DVec3, bounds: Bounds) -> CameraConfig {
        CameraConfig::builder("flat")
            .position(DVec3::new(10.0, 20.0, 30.0))
            .direction(direction)
            .projection(Projection::Parallel)
            .bounds(bounds)
            .build()
            .unwrap()
    }

    #[test]
    fn test_flat_view_table() {
        assert_eq!(flat_view(DVec3::NEG_Z), Some(FlatView::new(2, Sign::Negative)));
        assert_eq!(flat_view(DVec3::X), Some(FlatView::new(0, Sign::Positive)));
        assert_eq!(flat_view(DVec3::NEG_X), Some(FlatView::new(0, Sign::Negative)));
        assert_eq!(flat_view(DVec3::new(0.0, 0.0, -2.0)), None);
        assert_eq!(flat_view(DVec3::new(1.0, 1.0, 0.0)), None);
    }

    #[test]
    fn test_looking_down_picks_min_z() {
        let camera = flat(DVec3::NEG_Z, z_bounds());
        let point = outermost_point(camera.bounds().unwrap(), camera.flat_view().unwrap());
        assert_eq!(point.unwrap().z, -5.0);
        assert_eq!(
            camera.adjusted_position().unwrap(),
            DVec3::new(10.0, 20.0, -6.0)
        );
    }

    #[test]
    fn test_looking_up_picks_max_z() {
        let camera = flat(DVec3::Z, z_bounds());
        let point = outermost_point(camera.bounds().unwrap(), camera.flat_view().unwrap());
        assert_eq!(point.unwrap().z, 10.0);
        assert_eq!(
            camera.adjusted_position().unwrap(),
            DVec3::new(10.0, 20.0, 11.0)
        );
    }

    #[test]
    fn test_x_axis_comparison_is_inverted() {
        let camera = flat(DVec3::X, x_bounds());
        assert_eq!(
            camera.adjusted_position().unwrap(),
            DVec3::new(-4.0, 20.0, 30.0)
        );

        let camera = flat(DVec3::NEG_X, x_bounds());
        assert_eq!(
            camera.adjusted_position().unwrap(),
            DVec3::new(8.0, 20.0, 30.0)
        );
    }

    #[test]
    fn test_y_axis_comparison_is_inverted() {
        let bounds: Bounds =
            Arc::from(vec![DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 4.0, 0.0)]);
        let camera = flat(DVec3::Y, Arc::clone(&bounds));
        assert_eq!(camera.adjusted_position().unwrap().y, -2.0);

        let camera = flat(DVec3::NEG_Y, bounds);
        assert_eq!(camera.adjusted_position().unwrap().y, 5.0);
    }

    #[test]
    fn test_zero_coordinate_gets_negative_offset() {
        // Looking down picks the lowest z, which is exactly zero.
        let bounds: Bounds = Arc::from(vec![DVec3::ZERO, DVec3::new(1.0, 1.0, 2.0)]);
        let mut camera = flat(DVec3::NEG_Z, bounds);
        camera.set_offset(3).unwrap();
        assert_eq!(
            outermost_point(camera.bounds().unwrap(), camera.flat_view().unwrap()).unwrap().z,
            0.0
        );
        assert_eq!(camera.adjusted_position().unwrap().z, -3.0);

        // Looking up from the same bounds picks z = 2 and steps above it.
        let bounds: Bounds = Arc::from(vec![DVec3::ZERO, DVec3::new(1.0, 1.0, 2.0)]);
        let camera = flat(DVec3::Z, bounds);
        assert_eq!(camera.adjusted_position().unwrap().z, 3.0);
    }

    #[test]
    fn test_flat_parallel_without_bounds_fails() {
        let result = CameraConfig::builder("top")
            .direction(DVec3::NEG_Z)
            .projection(Projection::Parallel)
            .build();
        assert!(matches!(result, Err(HbVtkError::MissingBounds)));

        let result = CameraConfig::builder("top")
            .direction(DVec3::NEG_Z)
            .projection(Projection::Parallel)
            .bounds(Vec::<DVec3>::new())
            .build();
        assert!(matches!(result, Err(HbVtkError::MissingBounds)));
    }

    #[test]
    fn test_non_flat_parallel_needs_no_bounds() {
        let camera = CameraConfig::builder("iso")
            .direction(DVec3::new(1.0, 1.0, -1.0))
            .projection(Projection::Parallel)
            .build()
            .unwrap();
        assert!(!camera.is_flat_parallel());
        assert!(matches!(
            camera.adjusted_position(),
            Err(HbVtkError::NotAFlatView(_))
        ));
    }

    #[test]
    fn test_setters_validate() {
        let mut camera = flat(DVec3::NEG_Z, z_bounds());
        assert!(matches!(
            camera.set_offset(0),
            Err(HbVtkError::InvalidField { field: "offset", .. })
        ));
        assert_eq!(camera.offset(), 1);

        assert!(matches!(
            camera.set_bounds(None),
            Err(HbVtkError::MissingBounds)
        ));
        assert!(camera.bounds().is_some());

        let bad: Bounds = Arc::from(vec![DVec3::new(f64::NAN, 0.0, 0.0)]);
        assert!(matches!(
            camera.set_bounds(Some(bad)),
            Err(HbVtkError::InvalidField { field: "bounds", .. })
        ));

        let mut perspective = CameraConfig::default();
        perspective
            .set_bounds(Some(Arc::from(Vec::<DVec3>::new())))
            .unwrap();
        assert!(perspective.bounds().is_none());
    }

    #[test]
    fn test_invalid_sizes_are_rejected() {
        let result = CameraConfig::builder("c").h_size(0.0).build();
        assert!(matches!(
            result,
            Err(HbVtkError::InvalidField { field: "h_size", .. })
        ));
        let result = CameraConfig::builder("c")
            .position(DVec3::new(f64::INFINITY, 0.0, 0.0))
            .build();
        assert!(matches!(
            result,
            Err(HbVtkError::InvalidField { field: "position", .. })
        ));
    }

    #[test]
    fn test_from_model_without_views_fails() {
        let model = Model::new("empty");
        assert!(matches!(
            CameraConfig::from_model(&model),
            Err(HbVtkError::MissingViews)
        ));
    }

    #[test]
    fn test_from_model_shares_bounds() {
        let mut model = Model::new("office");
        model
            .add_actor(Box::new(BoxActor::new(
                "walls",
                DVec3::ZERO,
                DVec3::new(10.0, 8.0, 3.0),
            )))
            .add_view(View::new("persp", DVec3::new(5.0, -20.0, 10.0), DVec3::Y))
            .add_view(
                View::new("top", DVec3::new(5.0, 4.0, 50.0), DVec3::NEG_Z)
                    .with_view_type(Projection::Parallel),
            )
            .add_view(
                View::new("east", DVec3::new(50.0, 4.0, 1.5), DVec3::NEG_X)
                    .with_view_type(Projection::Parallel)
                    .with_up_vector(DVec3::Z),
            );

        let cameras = CameraConfig::from_model(&model).unwrap();
        assert_eq!(cameras.len(), 3);
        assert_eq!(cameras[1].identifier(), "top");

        let first = cameras[0].bounds().unwrap();
        for camera in &cameras {
            assert!(Arc::ptr_eq(first, camera.bounds().unwrap()));
        }

        assert_eq!(
            cameras[1].adjusted_position().unwrap(),
            DVec3::new(5.0, 4.0, -1.0)
        );
        assert_eq!(
            cameras[2].adjusted_position().unwrap(),
            DVec3::new(11.0, 4.0, 1.5)
        );
    }

    proptest! {
        #[test]
        fn adjusted_position_only_moves_along_view_axis(
            entry in 0usize..6,
            position in prop::array::uniform3(-100.0f64..100.0),
            points in prop::collection::vec(prop::array::uniform3(-50.0f64..50.0), 1..16),
            offset in 1u32..10,
        ) {
            let (direction, flat) = FLAT_VIEW_DIRECTIONS[entry];
            let position = DVec3::from_array(position);
            let bounds: Vec<DVec3> = points.into_iter().map(DVec3::from_array).collect();

            let camera = CameraConfig::builder("prop")
                .position(position)
                .direction(direction)
                .projection(Projection::Parallel)
                .bounds(bounds)
                .offset(offset)
                .build()
                .unwrap();
            let adjusted = camera.adjusted_position().unwrap();

            for axis in 0..3 {
                if axis != flat.axis {
                    prop_assert_eq!(adjusted[axis], position[axis]);
                }
            }
            let cord = outermost_point(camera.bounds().unwrap(), flat).unwrap()[flat.axis];
            prop_assert!(((adjusted[flat.axis] - cord).abs() - f64::from(offset)).abs() < 1e-9);
        }
    }
}
