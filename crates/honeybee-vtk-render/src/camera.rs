//! Toolkit camera and the adapter from [`CameraConfig`].

use glam::{DMat4, DVec3};
use honeybee_vtk_core::{CameraConfig, Projection, Result};

/// Camera object as consumed by the visualization toolkit.
///
/// Field names follow the toolkit's camera: a position, the point it looks at,
/// a view-up vector, and either a view angle (perspective) or a parallel scale
/// (parallel projection).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCamera {
    /// Camera position in world space.
    pub position: DVec3,
    /// Point the camera is looking at.
    pub focal_point: DVec3,
    /// Up vector.
    pub view_up: DVec3,
    /// View angle in degrees.
    pub view_angle: f64,
    /// Whether parallel projection is used.
    pub parallel_projection: bool,
    /// Half-height of the viewport in world units, used with parallel projection.
    pub parallel_scale: f64,
    /// Whether `view_angle` is measured horizontally instead of vertically.
    pub use_horizontal_view_angle: bool,
}

impl Default for RenderCamera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 1.0),
            focal_point: DVec3::ZERO,
            view_up: DVec3::Y,
            view_angle: 30.0,
            parallel_projection: false,
            parallel_scale: 1.0,
            use_horizontal_view_angle: false,
        }
    }
}

impl RenderCamera {
    /// Builds the toolkit camera for a camera configuration.
    ///
    /// Flat parallel views are moved to their adjusted position and look at
    /// `position + direction` so the focal point stays on the view axis. Every
    /// other camera keeps its configured position and uses the configured
    /// direction itself as the focal point. The parallel scale is taken from
    /// the vertical view size as an approximation, not an exact conversion.
    pub fn from_config(config: &CameraConfig) -> Result<Self> {
        let mut camera = Self::default();

        match config.projection() {
            Projection::Parallel if config.is_flat_parallel() => {
                let position = config.adjusted_position()?;
                camera.set_position(position);
                camera.set_focal_point(position + config.direction());
                log::debug!("camera '{}': flat parallel view", config.identifier());
            }
            Projection::Parallel => {
                camera.set_position(config.position());
                camera.set_focal_point(config.direction());
                log::debug!("camera '{}': parallel view", config.identifier());
            }
            Projection::Perspective => {
                camera.set_position(config.position());
                camera.set_focal_point(config.direction());
                log::debug!("camera '{}': perspective view", config.identifier());
            }
        }

        if config.projection() == Projection::Parallel {
            camera.set_parallel_projection(true);
            camera.set_parallel_scale(config.v_size());
        }

        camera.set_view_up(config.up_vector());
        camera.set_view_angle(config.h_size());
        camera.set_use_horizontal_view_angle(true);

        Ok(camera)
    }

    /// Sets the camera position.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Sets the focal point.
    pub fn set_focal_point(&mut self, focal_point: DVec3) {
        self.focal_point = focal_point;
    }

    /// Sets the view-up vector.
    pub fn set_view_up(&mut self, view_up: DVec3) {
        self.view_up = view_up;
    }

    /// Sets the view angle in degrees.
    pub fn set_view_angle(&mut self, degrees: f64) {
        self.view_angle = degrees;
    }

    /// Turns parallel projection on or off.
    pub fn set_parallel_projection(&mut self, on: bool) {
        self.parallel_projection = on;
    }

    /// Sets the parallel scale.
    pub fn set_parallel_scale(&mut self, scale: f64) {
        self.parallel_scale = scale;
    }

    /// Chooses whether the view angle is horizontal.
    pub fn set_use_horizontal_view_angle(&mut self, on: bool) {
        self.use_horizontal_view_angle = on;
    }

    /// Unit vector from position to focal point.
    ///
    /// Zero when both coincide.
    #[must_use]
    pub fn direction_of_projection(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or_zero()
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    /// Vertical view angle in radians for the given aspect ratio (width / height).
    #[must_use]
    pub fn vertical_fov(&self, aspect_ratio: f64) -> f64 {
        let angle = self.view_angle.to_radians();
        if self.use_horizontal_view_angle {
            // tan(v/2) = tan(h/2) / aspect
            2.0 * ((angle / 2.0).tan() / aspect_ratio).atan()
        } else {
            angle
        }
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f64, near: f64, far: f64) -> DMat4 {
        if self.parallel_projection {
            let half_height = self.parallel_scale;
            let half_width = half_height * aspect_ratio;
            DMat4::orthographic_rh(-half_width, half_width, -half_height, half_height, near, far)
        } else {
            DMat4::perspective_rh(self.vertical_fov(aspect_ratio), aspect_ratio, near, far)
        }
    }
}
