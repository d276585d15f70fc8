use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

use super::cell::CellId;

/// A key edge with traversal direction within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHalfedge {
    /// The key edge.
    pub edge: CellId,
    /// If `true`, the edge is traversed from its start vertex to its end
    /// vertex, otherwise from end to start.
    pub direction: bool,
}

impl KeyHalfedge {
    /// Creates a new halfedge.
    #[must_use]
    pub fn new(edge: CellId, direction: bool) -> Self {
        Self { edge, direction }
    }
}

/// A closed boundary loop of a key face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCycle {
    /// A single isolated vertex (Steiner cycle).
    Steiner(CellId),
    /// A closed chain of halfedges. Either every halfedge is open and each
    /// ends where the next one starts (wrapping around), or every halfedge
    /// is the same closed edge.
    Edges(Vec<KeyHalfedge>),
}

impl KeyCycle {
    /// Returns the cells referenced by this cycle, in cycle order.
    #[must_use]
    pub fn references(&self) -> Vec<CellId> {
        match self {
            Self::Steiner(v) => vec![*v],
            Self::Edges(halfedges) => halfedges.iter().map(|h| h.edge).collect(),
        }
    }
}

/// Raw data of a key face: a region bounded by a set of cycles at a
/// single frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KeyFaceData<G: Geometry> {
    /// The frame at which the face exists.
    pub frame: G::Frame,
    /// Boundary cycles; the first one is the outer boundary by convention.
    pub cycles: Vec<KeyCycle>,
    /// The face payload, typically fill attributes.
    pub geometry: G::KeyFaceGeometry,
}

impl<G: Geometry> KeyFaceData<G> {
    /// Creates a new key face record.
    #[must_use]
    pub fn new(frame: G::Frame, cycles: Vec<KeyCycle>, geometry: G::KeyFaceGeometry) -> Self {
        Self {
            frame,
            cycles,
            geometry,
        }
    }
}
