//! Actor trait and the actor collection.
//!
//! An [`Actor`] is a piece of visible geometry in the scene, such as the walls
//! of a model or a sensor grid. The [`Actors`] collection owns them and computes
//! the bounds used to frame flat camera views.

use std::any::Any;
use std::sync::Arc;

use glam::DVec3;

use crate::camera::Bounds;

/// A piece of geometry that can be shown by the visualization toolkit.
pub trait Actor: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the unique name of this actor.
    fn name(&self) -> &str;

    /// Returns the type name of this actor (e.g., "`PolyData`").
    fn type_name(&self) -> &'static str;

    /// Returns the axis-aligned bounding box in world coordinates.
    ///
    /// Returns `None` if the actor has no spatial extent.
    fn bounding_box(&self) -> Option<(DVec3, DVec3)>;

    /// Returns whether this actor is currently visible.
    fn is_enabled(&self) -> bool;

    /// Sets the visibility of this actor.
    fn set_enabled(&mut self, enabled: bool);
}

/// Ordered collection of actors.
#[derive(Default)]
pub struct Actors {
    actors: Vec<Box<dyn Actor>>,
}

impl Actors {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor to the collection.
    pub fn add(&mut self, actor: Box<dyn Actor>) -> &mut Self {
        self.actors.push(actor);
        self
    }

    /// Gets an actor by name.
    pub fn get(&self, name: &str) -> Option<&dyn Actor> {
        self.actors
            .iter()
            .find(|a| a.name() == name)
            .map(AsRef::as_ref)
    }

    /// Gets a mutable actor by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn Actor>> {
        self.actors.iter_mut().find(|a| a.name() == name)
    }

    /// Returns an iterator over all actors.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Actor> {
        self.actors.iter().map(AsRef::as_ref)
    }

    /// Returns the number of actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns true if there are no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Union of the bounding boxes of all enabled actors.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);
        let mut has_extent = false;

        for actor in self.iter().filter(|a| a.is_enabled()) {
            if let Some((bb_min, bb_max)) = actor.bounding_box() {
                min = min.min(bb_min);
                max = max.max(bb_max);
                has_extent = true;
            }
        }

        has_extent.then_some((min, max))
    }

    /// Corner points of [`Actors::bounding_box`], shared for camera framing.
    ///
    /// The result is empty when no enabled actor has an extent.
    pub fn bounds(&self) -> Bounds {
        let Some((min, max)) = self.bounding_box() else {
            log::debug!("no enabled actor has an extent, bounds are empty");
            return Arc::from(Vec::<DVec3>::new());
        };

        let corners: Vec<DVec3> = [
            (min.x, min.y, min.z),
            (max.x, min.y, min.z),
            (max.x, max.y, min.z),
            (min.x, max.y, min.z),
            (min.x, min.y, max.z),
            (max.x, min.y, max.z),
            (max.x, max.y, max.z),
            (min.x, max.y, max.z),
        ]
        .into_iter()
        .map(|(x, y, z)| DVec3::new(x, y, z))
        .collect();

        log::debug!("computed bounds from {} actors: {min} .. {max}", self.len());
        Arc::from(corners)
    }
}
