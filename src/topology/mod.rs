mod arena;
pub mod cell;
pub mod data;
pub mod inbetween_edge;
pub mod inbetween_face;
pub mod inbetween_vertex;
pub mod key_edge;
pub mod key_face;
pub mod key_vertex;
mod validate;
pub mod visitor;

pub use cell::{CellId, CellKind};
pub use data::{CellData, CellRecord, Topology};
pub use inbetween_edge::InbetweenEdgeData;
pub use inbetween_face::InbetweenFaceData;
pub use inbetween_vertex::InbetweenVertexData;
pub use key_edge::KeyEdgeData;
pub use key_face::{KeyCycle, KeyFaceData, KeyHalfedge};
pub use key_vertex::KeyVertexData;
pub use visitor::{CellDataMutator, CellDataVisitor};

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{invalid, CastError, Result, TopologyError, VacError};
use crate::geometry::{FrameRange, FrameSpan, Geometry};

use arena::Arena;
use validate::{check_record, CellView};

/// Central arena that owns all cells of a vector animation complex.
///
/// Cells reference each other via [`CellId`]s, never via pointers. Ids are
/// issued from a counter that only grows, across removals and across
/// [`Complex::restore`], so an id never names two different cells. The
/// complex keeps a reverse-reference index (the *star* of each cell) so that
/// removals can tell whether a cell is still in use.
///
/// Every mutating method either commits a state in which all referential
/// invariants hold, or returns an error and leaves the complex untouched.
/// Records are handed out read-only; edits go through [`Complex::mutate`],
/// [`Complex::set_topology`] or [`Complex::replace`], which validate first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    bound = "",
    try_from = "CellTable<G>",
    into = "CellTable<G>"
)]
pub struct Complex<G: Geometry> {
    cells: Arena<G>,
    star: BTreeMap<CellId, BTreeSet<CellId>>,
    next_id: u64,
}

/// Serialized form of a [`Complex`]: its cell table, keyed by id, and the
/// next id to issue.
///
/// The reverse-reference index is rebuilt, and every record validated, when
/// a complex is deserialized. `next_id` is raised past the largest stored
/// id if needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CellTable<G: Geometry> {
    pub next_id: u64,
    pub cells: BTreeMap<CellId, CellData<G>>,
}

impl<G: Geometry> From<Complex<G>> for CellTable<G> {
    fn from(complex: Complex<G>) -> Self {
        Self {
            next_id: complex.next_id,
            cells: complex
                .cells
                .iter()
                .map(|(id, data)| (id, data.clone()))
                .collect(),
        }
    }
}

impl<G: Geometry> TryFrom<CellTable<G>> for Complex<G> {
    type Error = VacError;

    fn try_from(table: CellTable<G>) -> Result<Self> {
        let cells: Arena<G> = table.cells.into_iter().collect();
        let next_id = cells
            .last_id()
            .map_or(table.next_id, |last| table.next_id.max(last.raw() + 1));
        let mut complex = Self {
            cells,
            star: BTreeMap::new(),
            next_id,
        };
        complex.rebuild_star();
        if let Err(err) = complex.validate() {
            tracing::warn!(%err, cells = complex.len(), "rejecting inconsistent cell table");
            return Err(err);
        }
        Ok(complex)
    }
}

impl<G: Geometry> PartialEq for Complex<G> {
    /// Two complexes are equal if they hold the same records under the same
    /// ids. The id counter is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.cells.len() == other.cells.len()
            && self
                .cells
                .iter()
                .all(|(id, data)| other.cells.get(id) == Some(data))
    }
}

impl<G: Geometry> Complex<G> {
    /// Creates a new, empty complex.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the complex has no cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `id` refers to a live cell.
    #[must_use]
    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains(id)
    }

    // --- Insertion ---

    /// Inserts a cell and returns a fresh id, one this complex never issued
    /// before.
    ///
    /// Records without references (key vertices, closed edges, inbetween
    /// cells whose key cells are unset, faces without cycles) always
    /// succeed.
    ///
    /// # Errors
    ///
    /// Returns an invalid-topology error if the record references missing
    /// cells, cells of the wrong kind, key cells at another frame, or
    /// inbetween key cells out of order. Nothing is inserted in that case.
    pub fn insert(&mut self, data: impl Into<CellData<G>>) -> Result<CellId> {
        let data = data.into();
        check_record(&CellView::new(&self.cells), &data)?;
        let kind = data.kind();
        let references = data.references();
        let id = CellId::from_raw(self.next_id);
        self.next_id += 1;
        self.cells.insert(id, data);
        self.link(id, &references);
        tracing::debug!(?id, %kind, "inserted cell");
        Ok(id)
    }

    // --- Lookup ---

    /// Returns the record of a cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex.
    pub fn get(&self, id: CellId) -> Result<&CellData<G>> {
        self.cells
            .get(id)
            .ok_or_else(|| TopologyError::UnknownCellId(id).into())
    }

    /// Returns the record of a cell that is expected to be of kind `R::KIND`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex, or if it is of
    /// another kind.
    pub fn get_as<R: CellRecord<G>>(&self, id: CellId) -> Result<&R> {
        self.get(id)?.try_downcast_ref::<R>()
    }

    /// Returns the kind of a cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex.
    pub fn kind(&self, id: CellId) -> Result<CellKind> {
        Ok(self.get(id)?.kind())
    }

    /// Runs `visitor` on the record of a cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex, or whatever the
    /// visitor returns.
    pub fn visit<V>(&self, id: CellId, visitor: &mut V) -> Result<V::Output>
    where
        V: CellDataVisitor<G> + ?Sized,
    {
        self.get(id)?.accept(visitor)
    }

    /// Returns the cells referenced by a cell, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex.
    pub fn boundary(&self, id: CellId) -> Result<BTreeSet<CellId>> {
        Ok(self.get(id)?.references().into_iter().collect())
    }

    /// Returns the cells that reference a cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex.
    pub fn star(&self, id: CellId) -> Result<BTreeSet<CellId>> {
        self.get(id)?;
        Ok(self.star.get(&id).cloned().unwrap_or_default())
    }

    /// Returns the time extent of a cell.
    ///
    /// Inbetween cells span the open interval between the frames of their
    /// key cells, or are [`FrameSpan::Unbounded`] while those are unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is not in the complex.
    pub fn frame_span(&self, id: CellId) -> Result<FrameSpan<G::Frame>> {
        let data = self.get(id)?;
        if let Some(frame) = data.key_frame() {
            return Ok(FrameSpan::Key(frame));
        }
        let keys = match data {
            CellData::InbetweenVertex(d) => d.key_cells(),
            CellData::InbetweenEdge(d) => d.key_cells(),
            CellData::InbetweenFace(d) => d.key_cells(),
            CellData::KeyVertex(_) | CellData::KeyEdge(_) | CellData::KeyFace(_) => None,
        };
        let Some((before, after)) = keys else {
            return Ok(FrameSpan::Unbounded);
        };
        match (self.get(before)?.key_frame(), self.get(after)?.key_frame()) {
            (Some(before), Some(after)) => Ok(FrameSpan::Between { before, after }),
            _ => Err(invalid(format!(
                "inbetween cell {id} does not reference key cells"
            ))),
        }
    }

    // --- Iteration ---

    /// Iterates over all cells, in increasing id order, which is the order
    /// in which they were inserted.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &CellData<G>)> + '_ {
        self.cells.iter()
    }

    /// Iterates over all cell ids, in increasing order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.ids()
    }

    /// Iterates over the ids of cells of one kind.
    pub fn cells_of_kind(&self, kind: CellKind) -> impl Iterator<Item = CellId> + '_ {
        self.cells
            .iter()
            .filter(move |(_, data)| data.kind() == kind)
            .map(|(id, _)| id)
    }

    /// Iterates over the records of one kind.
    pub fn records<'a, R>(&'a self) -> impl Iterator<Item = (CellId, &'a R)> + 'a
    where
        R: CellRecord<G> + 'a,
    {
        self.cells
            .iter()
            .filter_map(|(id, data)| data.downcast_ref::<R>().map(|r| (id, r)))
    }

    /// Returns the cells that exist at `frame`: key cells at that frame and
    /// inbetween cells whose span strictly contains it.
    #[must_use]
    pub fn cells_at_frame(&self, frame: G::Frame) -> Vec<CellId> {
        self.cells
            .ids()
            .filter(|&id| self.frame_span(id).is_ok_and(|span| span.contains(frame)))
            .collect()
    }

    /// Returns the cells that exist at some frame of `range`.
    #[must_use]
    pub fn cells_in_range(&self, range: &FrameRange<G::Frame>) -> Vec<CellId> {
        self.cells
            .ids()
            .filter(|&id| self.frame_span(id).is_ok_and(|span| span.overlaps(range)))
            .collect()
    }

    // --- Edits ---

    /// Replaces the topological fields of a cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown, if `topology` is for another
    /// kind, or if the new references (or cells depending on this one)
    /// would violate an invariant. The record is unchanged on error.
    pub fn set_topology(&mut self, id: CellId, topology: Topology) -> Result<()> {
        let mut working = self.get(id)?.clone();
        working.set_topology(topology)?;
        self.commit(id, working)?;
        tracing::debug!(?id, "updated cell topology");
        Ok(())
    }

    /// Runs `mutator` on a copy of a cell's record and commits the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown, if the mutator fails, or if
    /// the edited record would violate an invariant. The stored record is
    /// unchanged on error.
    pub fn mutate<M>(&mut self, id: CellId, mutator: &mut M) -> Result<M::Output>
    where
        M: CellDataMutator<G> + ?Sized,
    {
        let mut working = self.get(id)?.clone();
        let output = working.accept_mut(mutator)?;
        self.commit(id, working)?;
        Ok(output)
    }

    /// Replaces the whole record of a cell, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown, if `data` is of another
    /// kind, or if it would violate an invariant. The stored record is
    /// unchanged on error.
    pub fn replace(&mut self, id: CellId, data: impl Into<CellData<G>>) -> Result<CellData<G>> {
        let data = data.into();
        let previous = self.get(id)?.clone();
        self.commit(id, data)?;
        Ok(previous)
    }

    /// Validates `data` as the new record of `id` and of every cell that
    /// references `id`, then swaps it in.
    fn commit(&mut self, id: CellId, data: CellData<G>) -> Result<()> {
        let current = self.get(id)?;
        if current.kind() != data.kind() {
            return Err(CastError::KindMismatch {
                expected: current.kind(),
                found: data.kind(),
            }
            .into());
        }
        let old_references = current.references();

        let view = CellView::with_pending(&self.cells, id, &data);
        check_record(&view, &data)?;
        for &user in self.star.get(&id).into_iter().flatten() {
            if let Some(user_data) = view.get(user) {
                check_record(&view, user_data)?;
            }
        }

        self.unlink(id, &old_references);
        self.link(id, &data.references());
        if let Some(slot) = self.cells.get_mut(id) {
            *slot = data;
        }
        Ok(())
    }

    // --- Removal ---

    /// Removes a cell that no other cell references.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown, or if other cells still
    /// reference it.
    pub fn remove(&mut self, id: CellId) -> Result<CellData<G>> {
        self.get(id)?;
        if let Some(users) = self.star.get(&id).filter(|users| !users.is_empty()) {
            return Err(TopologyError::CellInUse {
                cell: id,
                used_by: users.iter().copied().collect(),
            }
            .into());
        }
        let data = self.detach(id)?;
        tracing::debug!(?id, kind = %data.kind(), "removed cell");
        Ok(data)
    }

    /// Removes a cell together with every cell that depends on it,
    /// directly or transitively.
    ///
    /// Returns the removed ids in removal order: each cell comes after all
    /// the cells that referenced it.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown.
    pub fn remove_cascade(&mut self, id: CellId) -> Result<Vec<CellId>> {
        self.get(id)?;
        let order = self.dependents_first(id);
        for &doomed in &order {
            self.detach(doomed)?;
        }
        tracing::debug!(?id, removed = order.len(), "removed cell with dependents");
        Ok(order)
    }

    /// Lists `id` and its transitive star, dependents before dependencies.
    fn dependents_first(&self, id: CellId) -> Vec<CellId> {
        fn visit(
            star: &BTreeMap<CellId, BTreeSet<CellId>>,
            id: CellId,
            seen: &mut BTreeSet<CellId>,
            order: &mut Vec<CellId>,
        ) {
            if !seen.insert(id) {
                return;
            }
            for &user in star.get(&id).into_iter().flatten() {
                visit(star, user, seen, order);
            }
            order.push(id);
        }

        let mut seen = BTreeSet::new();
        let mut order = Vec::new();
        visit(&self.star, id, &mut seen, &mut order);
        order
    }

    /// Removes a cell without checking its star.
    fn detach(&mut self, id: CellId) -> Result<CellData<G>> {
        let data = self
            .cells
            .remove(id)
            .ok_or(TopologyError::UnknownCellId(id))?;
        self.unlink(id, &data.references());
        self.star.remove(&id);
        Ok(data)
    }

    /// Returns the smallest set containing `ids` that is closed under
    /// references.
    ///
    /// # Errors
    ///
    /// Returns an error if one of `ids` is not in the complex.
    pub fn boundary_closure(&self, ids: &[CellId]) -> Result<BTreeSet<CellId>> {
        let mut closure = BTreeSet::new();
        let mut pending: Vec<CellId> = ids.to_vec();
        while let Some(id) = pending.pop() {
            if closure.insert(id) {
                pending.extend(self.get(id)?.references());
            }
        }
        Ok(closure)
    }

    /// Keeps only the cells in `keep`, which must be closed under references.
    pub(crate) fn retain(&mut self, keep: &BTreeSet<CellId>) {
        self.cells.retain(|id| keep.contains(&id));
        self.rebuild_star();
    }

    // --- Undo/redo ---

    /// Returns a deep copy of the complex.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Replaces the whole complex with `snapshot`.
    ///
    /// The id counter keeps its current value when it is ahead of the
    /// snapshot's, so ids issued after the snapshot was taken stay unknown
    /// and are never issued again.
    pub fn restore(&mut self, snapshot: Self) {
        tracing::debug!(from = self.len(), to = snapshot.len(), "restoring snapshot");
        let next_id = self.next_id.max(snapshot.next_id);
        *self = snapshot;
        self.next_id = next_id;
    }

    // --- Consistency ---

    /// Checks every record and the reverse-reference index.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        let view = CellView::new(&self.cells);
        for (_, data) in self.cells.iter() {
            check_record(&view, data)?;
        }

        let mut expected: BTreeMap<CellId, BTreeSet<CellId>> = BTreeMap::new();
        for (id, data) in self.cells.iter() {
            for reference in data.references() {
                expected.entry(reference).or_default().insert(id);
            }
        }
        if expected != self.star {
            return Err(invalid("reverse-reference index is out of date"));
        }
        Ok(())
    }

    fn link(&mut self, id: CellId, references: &[CellId]) {
        for &reference in references {
            self.star.entry(reference).or_default().insert(id);
        }
    }

    fn unlink(&mut self, id: CellId, references: &[CellId]) {
        for reference in references {
            if let Some(users) = self.star.get_mut(reference) {
                users.remove(&id);
                if users.is_empty() {
                    self.star.remove(reference);
                }
            }
        }
    }

    fn rebuild_star(&mut self) {
        let mut star: BTreeMap<CellId, BTreeSet<CellId>> = BTreeMap::new();
        for (id, data) in self.cells.iter() {
            for reference in data.references() {
                star.entry(reference).or_default().insert(id);
            }
        }
        self.star = star;
    }
}
