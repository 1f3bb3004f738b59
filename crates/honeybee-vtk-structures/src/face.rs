//! Model faces grouped by type.

use std::collections::BTreeMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Type of a model face or face-like object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FaceType {
    Wall,
    Aperture,
    Door,
    Shade,
    Floor,
    RoofCeiling,
    AirBoundary,
}

impl FaceType {
    /// Name used for files and actors.
    pub fn name(self) -> &'static str {
        match self {
            FaceType::Wall => "Wall",
            FaceType::Aperture => "Aperture",
            FaceType::Door => "Door",
            FaceType::Shade => "Shade",
            FaceType::Floor => "Floor",
            FaceType::RoofCeiling => "RoofCeiling",
            FaceType::AirBoundary => "AirBoundary",
        }
    }
}

/// Point loops of model geometry keyed by face type.
#[derive(Debug, Clone, Default)]
pub struct GroupedPoints {
    groups: BTreeMap<FaceType, Vec<Vec<DVec3>>>,
}

impl GroupedPoints {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one polygon under a face type.
    pub fn add(&mut self, face_type: FaceType, polygon: Vec<DVec3>) -> &mut Self {
        self.groups.entry(face_type).or_default().push(polygon);
        self
    }

    /// Polygons of a face type. Empty when the type is absent.
    pub fn get(&self, face_type: FaceType) -> &[Vec<DVec3>] {
        self.groups.get(&face_type).map_or(&[], Vec::as_slice)
    }

    /// Whether any polygon of this type was added.
    pub fn contains(&self, face_type: FaceType) -> bool {
        self.groups.contains_key(&face_type)
    }

    /// Face types present, in a stable order.
    pub fn types(&self) -> impl Iterator<Item = FaceType> + '_ {
        self.groups.keys().copied()
    }
}
