use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

use super::cell::CellId;

/// Raw data of a key edge.
///
/// An edge is either open, bounded by a start and an end key vertex at the
/// same frame (which may be the same vertex), or closed, with no vertex at
/// all. Setting only one endpoint is rejected when the record is committed
/// to a complex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KeyEdgeData<G: Geometry> {
    /// The frame at which the edge exists.
    pub frame: G::Frame,
    /// Start vertex of an open edge.
    pub start_vertex: Option<CellId>,
    /// End vertex of an open edge.
    pub end_vertex: Option<CellId>,
    /// The edge payload, typically its curve.
    pub geometry: G::KeyEdgeGeometry,
}

impl<G: Geometry> KeyEdgeData<G> {
    /// Creates an open edge from `start` to `end`.
    #[must_use]
    pub fn open(frame: G::Frame, start: CellId, end: CellId, geometry: G::KeyEdgeGeometry) -> Self {
        Self {
            frame,
            start_vertex: Some(start),
            end_vertex: Some(end),
            geometry,
        }
    }

    /// Creates a closed edge, which has no end vertices.
    #[must_use]
    pub fn closed(frame: G::Frame, geometry: G::KeyEdgeGeometry) -> Self {
        Self {
            frame,
            start_vertex: None,
            end_vertex: None,
            geometry,
        }
    }

    /// Returns `true` if the edge has no end vertices.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start_vertex.is_none() && self.end_vertex.is_none()
    }

    /// Returns `(start, end)` for an open edge.
    #[must_use]
    pub fn end_vertices(&self) -> Option<(CellId, CellId)> {
        self.start_vertex.zip(self.end_vertex)
    }
}
