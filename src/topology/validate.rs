use crate::error::{invalid, Result};
use crate::geometry::Geometry;

use super::arena::Arena;
use super::cell::{CellId, CellKind};
use super::data::{CellData, CellRecord};
use super::key_edge::KeyEdgeData;
use super::key_face::{KeyCycle, KeyFaceData, KeyHalfedge};
use super::key_vertex::KeyVertexData;

/// Read access to the cells of a complex, optionally with one record
/// replaced by a pending edit.
pub(super) struct CellView<'a, G: Geometry> {
    cells: &'a Arena<G>,
    pending: Option<(CellId, &'a CellData<G>)>,
}

impl<'a, G: Geometry> CellView<'a, G> {
    pub(super) fn new(cells: &'a Arena<G>) -> Self {
        Self {
            cells,
            pending: None,
        }
    }

    pub(super) fn with_pending(
        cells: &'a Arena<G>,
        id: CellId,
        data: &'a CellData<G>,
    ) -> Self {
        Self {
            cells,
            pending: Some((id, data)),
        }
    }

    pub(super) fn get(&self, id: CellId) -> Option<&'a CellData<G>> {
        match self.pending {
            Some((pending_id, data)) if pending_id == id => Some(data),
            _ => self.cells.get(id),
        }
    }

    /// Looks up `id` as a key record of type `R` at `frame`.
    fn key_cell<R: CellRecord<G>>(
        &self,
        id: CellId,
        frame: G::Frame,
        role: &str,
    ) -> Result<&'a R> {
        let data = self
            .get(id)
            .ok_or_else(|| invalid(format!("{role} {id} does not exist")))?;
        let Some(record) = data.downcast_ref::<R>() else {
            return Err(invalid(format!(
                "{role} {id} is a {}, expected a {}",
                data.kind(),
                R::KIND
            )));
        };
        if data.key_frame() != Some(frame) {
            return Err(invalid(format!("{role} {id} is not at frame {frame:?}")));
        }
        Ok(record)
    }
}

/// Checks the referential invariants of one record against `view`.
pub(super) fn check_record<G: Geometry>(view: &CellView<'_, G>, data: &CellData<G>) -> Result<()> {
    match data {
        CellData::KeyVertex(_) => Ok(()),
        CellData::KeyEdge(edge) => check_key_edge(view, edge),
        CellData::KeyFace(face) => check_key_face(view, face),
        CellData::InbetweenVertex(d) => check_inbetween(view, CellKind::KeyVertex, d.before, d.after),
        CellData::InbetweenEdge(d) => check_inbetween(view, CellKind::KeyEdge, d.before, d.after),
        CellData::InbetweenFace(d) => check_inbetween(view, CellKind::KeyFace, d.before, d.after),
    }
}

fn check_key_edge<G: Geometry>(view: &CellView<'_, G>, edge: &KeyEdgeData<G>) -> Result<()> {
    match (edge.start_vertex, edge.end_vertex) {
        (None, None) => Ok(()),
        (Some(start), Some(end)) => {
            view.key_cell::<KeyVertexData<G>>(start, edge.frame, "start vertex")?;
            view.key_cell::<KeyVertexData<G>>(end, edge.frame, "end vertex")?;
            Ok(())
        }
        _ => Err(invalid("key edge must have both end vertices or none")),
    }
}

fn check_key_face<G: Geometry>(view: &CellView<'_, G>, face: &KeyFaceData<G>) -> Result<()> {
    for cycle in &face.cycles {
        match cycle {
            KeyCycle::Steiner(vertex) => {
                view.key_cell::<KeyVertexData<G>>(*vertex, face.frame, "cycle vertex")?;
            }
            KeyCycle::Edges(halfedges) => check_edge_cycle(view, face.frame, halfedges)?,
        }
    }
    Ok(())
}

fn check_edge_cycle<G: Geometry>(
    view: &CellView<'_, G>,
    frame: G::Frame,
    halfedges: &[KeyHalfedge],
) -> Result<()> {
    let Some(first) = halfedges.first() else {
        return Err(invalid("edge cycle must contain at least one halfedge"));
    };

    let edges = halfedges
        .iter()
        .map(|h| view.key_cell::<KeyEdgeData<G>>(h.edge, frame, "cycle edge"))
        .collect::<Result<Vec<_>>>()?;

    if edges[0].is_closed() {
        // A closed edge may be looped over several times, but alone.
        if halfedges.iter().any(|h| h.edge != first.edge) {
            return Err(invalid("a cycle using a closed edge cannot contain other edges"));
        }
        return Ok(());
    }

    let mut ends = Vec::with_capacity(halfedges.len());
    for (halfedge, edge) in halfedges.iter().zip(&edges) {
        let Some((start, end)) = edge.end_vertices() else {
            return Err(invalid(format!(
                "cycle mixes open edges with closed edge {}",
                halfedge.edge
            )));
        };
        ends.push(if halfedge.direction {
            (start, end)
        } else {
            (end, start)
        });
    }
    for i in 0..ends.len() {
        let (_, end) = ends[i];
        let (next_start, _) = ends[(i + 1) % ends.len()];
        if end != next_start {
            return Err(invalid(format!(
                "edge cycle is broken after halfedge {i}: {end} does not continue at {next_start}"
            )));
        }
    }
    Ok(())
}

fn check_inbetween<G: Geometry>(
    view: &CellView<'_, G>,
    key_kind: CellKind,
    before: Option<CellId>,
    after: Option<CellId>,
) -> Result<()> {
    match (before, after) {
        (None, None) => Ok(()),
        (Some(before), Some(after)) => {
            let before_frame = key_frame_of(view, before, key_kind, "before")?;
            let after_frame = key_frame_of(view, after, key_kind, "after")?;
            if before_frame < after_frame {
                Ok(())
            } else {
                Err(invalid(format!(
                    "before frame {before_frame:?} must precede after frame {after_frame:?}"
                )))
            }
        }
        _ => Err(invalid("inbetween cell must have both key cells or none")),
    }
}

fn key_frame_of<G: Geometry>(
    view: &CellView<'_, G>,
    id: CellId,
    kind: CellKind,
    role: &str,
) -> Result<G::Frame> {
    let data = view
        .get(id)
        .ok_or_else(|| invalid(format!("{role} cell {id} does not exist")))?;
    if data.kind() != kind {
        return Err(invalid(format!(
            "{role} cell {id} is a {}, expected a {kind}",
            data.kind()
        )));
    }
    data.key_frame()
        .ok_or_else(|| invalid(format!("{role} cell {id} has no frame")))
}
