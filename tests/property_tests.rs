//! # Property-Based Tests
//!
//! Random edit sequences against the complex: every committed state must be
//! consistent, every rejected edit must leave the complex as it was, and no
//! id is ever issued twice, across undo included.

#![allow(clippy::unwrap_used)]

use openvac::geometry::{EdgeCurve, InbetweenParams, VertexPoint};
use openvac::topology::{
    InbetweenVertexData, KeyEdgeData, KeyVertexData, Topology,
};
use openvac::{CellId, CellKind, Complex, Frame, StandardGeometry};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

type G = StandardGeometry;

// =============================================================================
// EDIT SCRIPT
// =============================================================================

/// One edit; indices pick among the live cells, modulo their count.
#[derive(Debug, Clone)]
enum Edit {
    Vertex { frame: i32 },
    Edge { start: usize, end: usize },
    Inbetween { before: usize, after: usize },
    Rewire { edge: usize, start: usize, end: usize },
    Remove { cell: usize },
    Cascade { cell: usize },
    Snapshot,
    Restore,
}

impl Edit {
    fn inserts(&self) -> bool {
        matches!(self, Self::Vertex { .. } | Self::Edge { .. } | Self::Inbetween { .. })
    }
}

/// A complex plus the last snapshot taken of it.
#[derive(Default)]
struct Session {
    complex: Complex<G>,
    saved: Option<Complex<G>>,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => (0i32..4).prop_map(|frame| Edit::Vertex { frame }),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(start, end)| Edit::Edge { start, end }),
        1 => (any::<usize>(), any::<usize>())
            .prop_map(|(before, after)| Edit::Inbetween { before, after }),
        1 => (any::<usize>(), any::<usize>(), any::<usize>())
            .prop_map(|(edge, start, end)| Edit::Rewire { edge, start, end }),
        1 => any::<usize>().prop_map(|cell| Edit::Remove { cell }),
        1 => any::<usize>().prop_map(|cell| Edit::Cascade { cell }),
        1 => Just(Edit::Snapshot),
        1 => Just(Edit::Restore),
    ]
}

fn pick(ids: &[CellId], index: usize) -> Option<CellId> {
    (!ids.is_empty()).then(|| ids[index % ids.len()])
}

/// Applies one edit. `Ok(false)` means the edit had no target.
fn apply(session: &mut Session, edit: &Edit) -> openvac::Result<bool> {
    let complex = &mut session.complex;
    let vertices: Vec<CellId> = complex.cells_of_kind(CellKind::KeyVertex).collect();
    let edges: Vec<CellId> = complex.cells_of_kind(CellKind::KeyEdge).collect();
    let all: Vec<CellId> = complex.ids().collect();

    match *edit {
        Edit::Vertex { frame } => {
            complex.insert(KeyVertexData::<G>::new(Frame(frame), VertexPoint::default()))?;
        }
        Edit::Edge { start, end } => {
            let (Some(start), Some(end)) = (pick(&vertices, start), pick(&vertices, end)) else {
                return Ok(false);
            };
            let frame = complex.get_as::<KeyVertexData<G>>(start)?.frame;
            complex.insert(KeyEdgeData::<G>::open(frame, start, end, EdgeCurve::default()))?;
        }
        Edit::Inbetween { before, after } => {
            let (Some(before), Some(after)) = (pick(&vertices, before), pick(&vertices, after))
            else {
                return Ok(false);
            };
            complex.insert(InbetweenVertexData::<G>::new(
                before,
                after,
                InbetweenParams::default(),
            ))?;
        }
        Edit::Rewire { edge, start, end } => {
            let (Some(edge), Some(start), Some(end)) = (
                pick(&edges, edge),
                pick(&vertices, start),
                pick(&vertices, end),
            ) else {
                return Ok(false);
            };
            complex.set_topology(
                edge,
                Topology::KeyEdge {
                    start_vertex: Some(start),
                    end_vertex: Some(end),
                },
            )?;
        }
        Edit::Remove { cell } => {
            let Some(cell) = pick(&all, cell) else {
                return Ok(false);
            };
            complex.remove(cell)?;
        }
        Edit::Cascade { cell } => {
            let Some(cell) = pick(&all, cell) else {
                return Ok(false);
            };
            complex.remove_cascade(cell)?;
        }
        Edit::Snapshot => session.saved = Some(complex.snapshot()),
        Edit::Restore => {
            let Some(saved) = &session.saved else {
                return Ok(false);
            };
            complex.restore(saved.clone());
        }
    }
    Ok(true)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Ids handed out by insert are never equal, even across removals and
    /// across restores that discard the cells holding them.
    #[test]
    fn inserted_ids_are_unique(edits in vec(edit(), 1..80)) {
        let mut session = Session::default();
        let mut issued = BTreeSet::new();
        for edit in &edits {
            let before: BTreeSet<CellId> = session.complex.ids().collect();
            let applied = apply(&mut session, edit);
            if edit.inserts() && matches!(applied, Ok(true)) {
                let new: Vec<CellId> = session
                    .complex
                    .ids()
                    .filter(|id| !before.contains(id))
                    .collect();
                prop_assert_eq!(new.len(), 1);
                prop_assert!(issued.insert(new[0]), "id {} issued twice", new[0]);
            }
            issued.extend(session.complex.ids());
        }
    }

    /// Every edit either commits a consistent state or changes nothing.
    #[test]
    fn edits_are_all_or_nothing(edits in vec(edit(), 1..60)) {
        let mut session = Session::default();
        for edit in &edits {
            let snapshot = session.complex.snapshot();
            match apply(&mut session, edit) {
                Ok(_) => prop_assert!(session.complex.validate().is_ok()),
                Err(_) => prop_assert_eq!(&session.complex, &snapshot),
            }
        }
    }

    /// Cascading removal leaves no cell referencing a removed one.
    #[test]
    fn cascade_leaves_no_dangling_reference(edits in vec(edit(), 1..60), target in any::<usize>()) {
        let mut session = Session::default();
        for edit in &edits {
            let _ = apply(&mut session, edit);
        }
        let complex = &mut session.complex;
        let all: Vec<CellId> = complex.ids().collect();
        if let Some(id) = pick(&all, target) {
            let removed = complex.remove_cascade(id).unwrap();
            prop_assert_eq!(removed.last().copied(), Some(id));
            for gone in &removed {
                prop_assert!(!complex.contains(*gone));
            }
            prop_assert!(complex.validate().is_ok());
        }
    }

    /// Restoring a snapshot undoes any later edits.
    #[test]
    fn restore_undoes_edits(
        setup in vec(edit(), 0..30),
        later in vec(edit(), 1..30),
    ) {
        let mut session = Session::default();
        for edit in &setup {
            let _ = apply(&mut session, edit);
        }
        let snapshot = session.complex.snapshot();
        for edit in &later {
            let _ = apply(&mut session, edit);
        }
        session.complex.restore(snapshot.clone());
        prop_assert_eq!(&session.complex, &snapshot);
        prop_assert!(session.complex.validate().is_ok());
    }

    /// A serialized complex loads back to an equal complex.
    #[test]
    fn json_roundtrip_preserves_cells(edits in vec(edit(), 0..40)) {
        let mut session = Session::default();
        for edit in &edits {
            let _ = apply(&mut session, edit);
        }
        let json = serde_json::to_string(&session.complex).unwrap();
        let loaded: Complex<G> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(loaded, session.complex);
    }
}
