use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

use super::cell::CellId;

/// Raw data of an inbetween face, sweeping a key face into another one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct InbetweenFaceData<G: Geometry> {
    pub before: Option<CellId>,
    pub after: Option<CellId>,
    pub geometry: G::InbetweenFaceGeometry,
}

impl<G: Geometry> InbetweenFaceData<G> {
    /// Creates an inbetween face from `before` to `after`.
    #[must_use]
    pub fn new(before: CellId, after: CellId, geometry: G::InbetweenFaceGeometry) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
            geometry,
        }
    }

    /// Returns `(before, after)` if both key faces are set.
    #[must_use]
    pub fn key_cells(&self) -> Option<(CellId, CellId)> {
        self.before.zip(self.after)
    }
}
