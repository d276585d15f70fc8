use crate::error::{CastError, Result};
use crate::geometry::Geometry;

use super::cell::CellKind;
use super::inbetween_edge::InbetweenEdgeData;
use super::inbetween_face::InbetweenFaceData;
use super::inbetween_vertex::InbetweenVertexData;
use super::key_edge::KeyEdgeData;
use super::key_face::KeyFaceData;
use super::key_vertex::KeyVertexData;

/// Read-only per-kind callbacks, driven by [`CellData::accept`](super::CellData::accept).
///
/// Exactly one callback runs per dispatch. Callbacks left at their default
/// report [`CastError::UnhandledKind`], so a visitor only overrides the kinds
/// it supports and callers learn about the others.
pub trait CellDataVisitor<G: Geometry> {
    /// Value produced by a successful visit.
    type Output;

    fn visit_key_vertex(&mut self, data: &KeyVertexData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::KeyVertex)
    }

    fn visit_key_edge(&mut self, data: &KeyEdgeData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::KeyEdge)
    }

    fn visit_key_face(&mut self, data: &KeyFaceData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::KeyFace)
    }

    fn visit_inbetween_vertex(&mut self, data: &InbetweenVertexData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::InbetweenVertex)
    }

    fn visit_inbetween_edge(&mut self, data: &InbetweenEdgeData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::InbetweenEdge)
    }

    fn visit_inbetween_face(&mut self, data: &InbetweenFaceData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::InbetweenFace)
    }
}

/// Mutating per-kind callbacks, driven by
/// [`CellData::accept_mut`](super::CellData::accept_mut).
///
/// Inside a [`Complex`](super::Complex), run mutators through
/// [`Complex::mutate`](super::Complex::mutate) so that the edited record is
/// validated before it replaces the stored one.
pub trait CellDataMutator<G: Geometry> {
    /// Value produced by a successful visit.
    type Output;

    fn visit_key_vertex(&mut self, data: &mut KeyVertexData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::KeyVertex)
    }

    fn visit_key_edge(&mut self, data: &mut KeyEdgeData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::KeyEdge)
    }

    fn visit_key_face(&mut self, data: &mut KeyFaceData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::KeyFace)
    }

    fn visit_inbetween_vertex(
        &mut self,
        data: &mut InbetweenVertexData<G>,
    ) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::InbetweenVertex)
    }

    fn visit_inbetween_edge(&mut self, data: &mut InbetweenEdgeData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::InbetweenEdge)
    }

    fn visit_inbetween_face(&mut self, data: &mut InbetweenFaceData<G>) -> Result<Self::Output> {
        let _ = data;
        unhandled(CellKind::InbetweenFace)
    }
}

fn unhandled<T>(kind: CellKind) -> Result<T> {
    Err(CastError::UnhandledKind(kind).into())
}
