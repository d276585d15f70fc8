use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

use super::cell::CellId;

/// Raw data of an inbetween vertex: the motion of a vertex between two key
/// vertices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct InbetweenVertexData<G: Geometry> {
    /// Key vertex at the start of the motion.
    pub before: Option<CellId>,
    /// Key vertex at the end of the motion.
    pub after: Option<CellId>,
    /// Interpolation parameters.
    pub geometry: G::InbetweenVertexGeometry,
}

impl<G: Geometry> InbetweenVertexData<G> {
    /// Creates an inbetween vertex from `before` to `after`.
    #[must_use]
    pub fn new(before: CellId, after: CellId, geometry: G::InbetweenVertexGeometry) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
            geometry,
        }
    }

    /// Returns `(before, after)` if both key vertices are set.
    #[must_use]
    pub fn key_cells(&self) -> Option<(CellId, CellId)> {
        self.before.zip(self.after)
    }
}
