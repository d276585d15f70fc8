use serde::{Deserialize, Serialize};

use crate::error::{invalid, CastError, Result};
use crate::geometry::Geometry;

use super::cell::{CellId, CellKind};
use super::inbetween_edge::InbetweenEdgeData;
use super::inbetween_face::InbetweenFaceData;
use super::inbetween_vertex::InbetweenVertexData;
use super::key_edge::KeyEdgeData;
use super::key_face::{KeyCycle, KeyFaceData};
use super::key_vertex::KeyVertexData;
use super::visitor::{CellDataMutator, CellDataVisitor};

/// Raw data of a cell, one variant per [`CellKind`].
///
/// The variant is the kind: it is fixed when the value is built and a
/// complex never changes the kind stored under a given [`CellId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum CellData<G: Geometry> {
    KeyVertex(KeyVertexData<G>),
    KeyEdge(KeyEdgeData<G>),
    KeyFace(KeyFaceData<G>),
    InbetweenVertex(InbetweenVertexData<G>),
    InbetweenEdge(InbetweenEdgeData<G>),
    InbetweenFace(InbetweenFaceData<G>),
}

/// A concrete cell record that can be viewed through [`CellData`].
///
/// Implemented by the six record types; used for kind-checked downcasts.
pub trait CellRecord<G: Geometry>: Sized + Into<CellData<G>> + 'static {
    /// The kind of every value of this record type.
    const KIND: CellKind;

    /// Returns [`Self::KIND`].
    #[must_use]
    fn static_kind() -> CellKind {
        Self::KIND
    }

    /// Borrows the record if `data` holds this kind.
    fn from_data(data: &CellData<G>) -> Option<&Self>;

    /// Mutably borrows the record if `data` holds this kind.
    fn from_data_mut(data: &mut CellData<G>) -> Option<&mut Self>;

    /// Takes the record out of `data`, handing `data` back on mismatch.
    ///
    /// # Errors
    ///
    /// Returns `data` unchanged if it holds another kind.
    fn from_owned(data: CellData<G>) -> std::result::Result<Self, CellData<G>>;
}

macro_rules! impl_cell_record {
    ($record:ident, $variant:ident) => {
        impl<G: Geometry> CellRecord<G> for $record<G> {
            const KIND: CellKind = CellKind::$variant;

            fn from_data(data: &CellData<G>) -> Option<&Self> {
                match data {
                    CellData::$variant(record) => Some(record),
                    _ => None,
                }
            }

            fn from_data_mut(data: &mut CellData<G>) -> Option<&mut Self> {
                match data {
                    CellData::$variant(record) => Some(record),
                    _ => None,
                }
            }

            fn from_owned(data: CellData<G>) -> std::result::Result<Self, CellData<G>> {
                match data {
                    CellData::$variant(record) => Ok(record),
                    other => Err(other),
                }
            }
        }

        impl<G: Geometry> From<$record<G>> for CellData<G> {
            fn from(record: $record<G>) -> Self {
                CellData::$variant(record)
            }
        }
    };
}

impl_cell_record!(KeyVertexData, KeyVertex);
impl_cell_record!(KeyEdgeData, KeyEdge);
impl_cell_record!(KeyFaceData, KeyFace);
impl_cell_record!(InbetweenVertexData, InbetweenVertex);
impl_cell_record!(InbetweenEdgeData, InbetweenEdge);
impl_cell_record!(InbetweenFaceData, InbetweenFace);

/// The topological fields of a cell record, without its geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    KeyVertex,
    KeyEdge {
        start_vertex: Option<CellId>,
        end_vertex: Option<CellId>,
    },
    KeyFace {
        cycles: Vec<KeyCycle>,
    },
    InbetweenVertex {
        before: Option<CellId>,
        after: Option<CellId>,
    },
    InbetweenEdge {
        before: Option<CellId>,
        after: Option<CellId>,
    },
    InbetweenFace {
        before: Option<CellId>,
        after: Option<CellId>,
    },
}

impl Topology {
    /// Returns the kind of cell these fields belong to.
    #[must_use]
    pub fn kind(&self) -> CellKind {
        match self {
            Self::KeyVertex => CellKind::KeyVertex,
            Self::KeyEdge { .. } => CellKind::KeyEdge,
            Self::KeyFace { .. } => CellKind::KeyFace,
            Self::InbetweenVertex { .. } => CellKind::InbetweenVertex,
            Self::InbetweenEdge { .. } => CellKind::InbetweenEdge,
            Self::InbetweenFace { .. } => CellKind::InbetweenFace,
        }
    }
}

impl<G: Geometry> CellData<G> {
    /// Returns the kind of this cell.
    #[must_use]
    pub fn kind(&self) -> CellKind {
        match self {
            Self::KeyVertex(_) => CellKind::KeyVertex,
            Self::KeyEdge(_) => CellKind::KeyEdge,
            Self::KeyFace(_) => CellKind::KeyFace,
            Self::InbetweenVertex(_) => CellKind::InbetweenVertex,
            Self::InbetweenEdge(_) => CellKind::InbetweenEdge,
            Self::InbetweenFace(_) => CellKind::InbetweenFace,
        }
    }

    /// Dispatches to the visitor callback matching [`Self::kind`].
    ///
    /// # Errors
    ///
    /// Returns whatever the callback returns; callbacks the visitor does not
    /// override report [`CastError::UnhandledKind`].
    pub fn accept<V>(&self, visitor: &mut V) -> Result<V::Output>
    where
        V: CellDataVisitor<G> + ?Sized,
    {
        match self {
            Self::KeyVertex(d) => visitor.visit_key_vertex(d),
            Self::KeyEdge(d) => visitor.visit_key_edge(d),
            Self::KeyFace(d) => visitor.visit_key_face(d),
            Self::InbetweenVertex(d) => visitor.visit_inbetween_vertex(d),
            Self::InbetweenEdge(d) => visitor.visit_inbetween_edge(d),
            Self::InbetweenFace(d) => visitor.visit_inbetween_face(d),
        }
    }

    /// Dispatches to the mutator callback matching [`Self::kind`].
    ///
    /// # Errors
    ///
    /// Returns whatever the callback returns; callbacks the mutator does not
    /// override report [`CastError::UnhandledKind`].
    pub fn accept_mut<M>(&mut self, mutator: &mut M) -> Result<M::Output>
    where
        M: CellDataMutator<G> + ?Sized,
    {
        match self {
            Self::KeyVertex(d) => mutator.visit_key_vertex(d),
            Self::KeyEdge(d) => mutator.visit_key_edge(d),
            Self::KeyFace(d) => mutator.visit_key_face(d),
            Self::InbetweenVertex(d) => mutator.visit_inbetween_vertex(d),
            Self::InbetweenEdge(d) => mutator.visit_inbetween_edge(d),
            Self::InbetweenFace(d) => mutator.visit_inbetween_face(d),
        }
    }

    /// Returns the record if this cell is of kind `R::KIND`.
    #[must_use]
    pub fn downcast_ref<R: CellRecord<G>>(&self) -> Option<&R> {
        R::from_data(self)
    }

    /// Returns the mutable record if this cell is of kind `R::KIND`.
    #[must_use]
    pub fn downcast_mut<R: CellRecord<G>>(&mut self) -> Option<&mut R> {
        R::from_data_mut(self)
    }

    /// Returns the record of kind `R::KIND`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::KindMismatch`] if this cell is of another kind.
    pub fn try_downcast_ref<R: CellRecord<G>>(&self) -> Result<&R> {
        let found = self.kind();
        R::from_data(self).ok_or_else(|| mismatch::<G, R>(found))
    }

    /// Returns the mutable record of kind `R::KIND`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::KindMismatch`] if this cell is of another kind.
    pub fn try_downcast_mut<R: CellRecord<G>>(&mut self) -> Result<&mut R> {
        let found = self.kind();
        R::from_data_mut(self).ok_or_else(|| mismatch::<G, R>(found))
    }

    /// Unwraps the record of kind `R::KIND`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::KindMismatch`] if this cell is of another kind.
    pub fn try_into_record<R: CellRecord<G>>(self) -> Result<R> {
        R::from_owned(self).map_err(|data| mismatch::<G, R>(data.kind()))
    }

    /// Returns the frame of a key cell, or `None` for inbetween cells.
    #[must_use]
    pub fn key_frame(&self) -> Option<G::Frame> {
        match self {
            Self::KeyVertex(d) => Some(d.frame),
            Self::KeyEdge(d) => Some(d.frame),
            Self::KeyFace(d) => Some(d.frame),
            Self::InbetweenVertex(_) | Self::InbetweenEdge(_) | Self::InbetweenFace(_) => None,
        }
    }

    /// Returns every cell this record refers to, in field order.
    ///
    /// A cell may appear more than once, e.g. a loop edge whose start and
    /// end vertex coincide.
    #[must_use]
    pub fn references(&self) -> Vec<CellId> {
        match self {
            Self::KeyVertex(_) => Vec::new(),
            Self::KeyEdge(d) => d.start_vertex.into_iter().chain(d.end_vertex).collect(),
            Self::KeyFace(d) => d.cycles.iter().flat_map(KeyCycle::references).collect(),
            Self::InbetweenVertex(d) => d.before.into_iter().chain(d.after).collect(),
            Self::InbetweenEdge(d) => d.before.into_iter().chain(d.after).collect(),
            Self::InbetweenFace(d) => d.before.into_iter().chain(d.after).collect(),
        }
    }

    /// Rewrites every reference held by this record through `f`.
    pub fn remap_references(&mut self, mut f: impl FnMut(CellId) -> CellId) {
        fn remap(id: &mut Option<CellId>, f: &mut impl FnMut(CellId) -> CellId) {
            if let Some(inner) = id {
                *inner = f(*inner);
            }
        }
        match self {
            Self::KeyVertex(_) => {}
            Self::KeyEdge(d) => {
                remap(&mut d.start_vertex, &mut f);
                remap(&mut d.end_vertex, &mut f);
            }
            Self::KeyFace(d) => {
                for cycle in &mut d.cycles {
                    match cycle {
                        KeyCycle::Steiner(v) => *v = f(*v),
                        KeyCycle::Edges(halfedges) => {
                            for halfedge in halfedges {
                                halfedge.edge = f(halfedge.edge);
                            }
                        }
                    }
                }
            }
            Self::InbetweenVertex(d) => {
                remap(&mut d.before, &mut f);
                remap(&mut d.after, &mut f);
            }
            Self::InbetweenEdge(d) => {
                remap(&mut d.before, &mut f);
                remap(&mut d.after, &mut f);
            }
            Self::InbetweenFace(d) => {
                remap(&mut d.before, &mut f);
                remap(&mut d.after, &mut f);
            }
        }
    }

    /// Returns the topological fields of this record.
    #[must_use]
    pub fn topology(&self) -> Topology {
        match self {
            Self::KeyVertex(_) => Topology::KeyVertex,
            Self::KeyEdge(d) => Topology::KeyEdge {
                start_vertex: d.start_vertex,
                end_vertex: d.end_vertex,
            },
            Self::KeyFace(d) => Topology::KeyFace {
                cycles: d.cycles.clone(),
            },
            Self::InbetweenVertex(d) => Topology::InbetweenVertex {
                before: d.before,
                after: d.after,
            },
            Self::InbetweenEdge(d) => Topology::InbetweenEdge {
                before: d.before,
                after: d.after,
            },
            Self::InbetweenFace(d) => Topology::InbetweenFace {
                before: d.before,
                after: d.after,
            },
        }
    }

    /// Overwrites the topological fields of this record, leaving its
    /// geometry untouched.
    ///
    /// # Errors
    ///
    /// Returns an invalid-topology error, without touching the record, if
    /// `topology` belongs to another kind.
    pub fn set_topology(&mut self, topology: Topology) -> Result<()> {
        match (self, topology) {
            (Self::KeyVertex(_), Topology::KeyVertex) => {}
            (
                Self::KeyEdge(d),
                Topology::KeyEdge {
                    start_vertex,
                    end_vertex,
                },
            ) => {
                d.start_vertex = start_vertex;
                d.end_vertex = end_vertex;
            }
            (Self::KeyFace(d), Topology::KeyFace { cycles }) => d.cycles = cycles,
            (Self::InbetweenVertex(d), Topology::InbetweenVertex { before, after }) => {
                d.before = before;
                d.after = after;
            }
            (Self::InbetweenEdge(d), Topology::InbetweenEdge { before, after }) => {
                d.before = before;
                d.after = after;
            }
            (Self::InbetweenFace(d), Topology::InbetweenFace { before, after }) => {
                d.before = before;
                d.after = after;
            }
            (data, topology) => {
                return Err(invalid(format!(
                    "{} topology cannot be applied to a {} cell",
                    topology.kind(),
                    data.kind()
                )));
            }
        }
        Ok(())
    }
}

fn mismatch<G: Geometry, R: CellRecord<G>>(found: CellKind) -> crate::error::VacError {
    CastError::KindMismatch {
        expected: R::KIND,
        found,
    }
    .into()
}
