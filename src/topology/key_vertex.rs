use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Raw data of a key vertex: a point at a single frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KeyVertexData<G: Geometry> {
    /// The frame at which the vertex exists.
    pub frame: G::Frame,
    /// The vertex payload, typically its position.
    pub geometry: G::KeyVertexGeometry,
}

impl<G: Geometry> KeyVertexData<G> {
    /// Creates a new key vertex record.
    #[must_use]
    pub fn new(frame: G::Frame, geometry: G::KeyVertexGeometry) -> Self {
        Self { frame, geometry }
    }
}
