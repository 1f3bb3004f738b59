//! The model: views, visible actors and sensor grid summaries.

use serde::{Deserialize, Serialize};

use crate::actor::{Actor, Actors};
use crate::view::View;

/// Identifier and sensor count of one sensor grid.
///
/// This is also the shape of each entry in a `grids_info.json` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridInfo {
    /// Identifier of the grid.
    pub identifier: String,
    /// Number of sensors (points or mesh faces) on the grid.
    pub count: usize,
}

impl GridInfo {
    /// Creates a new grid summary.
    pub fn new(identifier: impl Into<String>, count: usize) -> Self {
        Self {
            identifier: identifier.into(),
            count,
        }
    }
}

/// A building model prepared for visualization.
#[derive(Default)]
pub struct Model {
    identifier: String,
    views: Vec<View>,
    actors: Actors,
    sensor_grids: Vec<GridInfo>,
}

impl Model {
    /// Creates an empty model.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Returns the model identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the views defined on this model.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Adds a view.
    pub fn add_view(&mut self, view: View) -> &mut Self {
        self.views.push(view);
        self
    }

    /// Returns the visible actors of this model.
    pub fn actors(&self) -> &Actors {
        &self.actors
    }

    /// Returns the visible actors of this model mutably.
    pub fn actors_mut(&mut self) -> &mut Actors {
        &mut self.actors
    }

    /// Adds an actor.
    pub fn add_actor(&mut self, actor: Box<dyn Actor>) -> &mut Self {
        self.actors.add(actor);
        self
    }

    /// Returns the sensor grids loaded on this model.
    pub fn sensor_grids(&self) -> &[GridInfo] {
        &self.sensor_grids
    }

    /// Adds a sensor grid summary.
    pub fn add_sensor_grid(&mut self, grid: GridInfo) -> &mut Self {
        self.sensor_grids.push(grid);
        self
    }
}
