use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

use super::cell::CellId;

/// Raw data of an inbetween edge, sweeping a key edge into another one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct InbetweenEdgeData<G: Geometry> {
    pub before: Option<CellId>,
    pub after: Option<CellId>,
    pub geometry: G::InbetweenEdgeGeometry,
}

impl<G: Geometry> InbetweenEdgeData<G> {
    /// Creates an inbetween edge from `before` to `after`.
    #[must_use]
    pub fn new(before: CellId, after: CellId, geometry: G::InbetweenEdgeGeometry) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
            geometry,
        }
    }

    /// Returns `(before, after)` if both key edges are set.
    #[must_use]
    pub fn key_cells(&self) -> Option<(CellId, CellId)> {
        self.before.zip(self.after)
    }
}
