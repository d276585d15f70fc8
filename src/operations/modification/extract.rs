use crate::error::Result;
use crate::geometry::Geometry;
use crate::topology::{CellId, Complex};

/// Copies a set of cells, plus every cell they reference, into a new
/// complex. Ids are preserved, so the copy can be compared against the
/// source or pasted back with [`Paste`](super::Paste).
pub struct Extract {
    cells: Vec<CellId>,
}

impl Extract {
    /// Creates a new `Extract` operation.
    #[must_use]
    pub fn new(cells: Vec<CellId>) -> Self {
        Self { cells }
    }

    /// Executes the operation, returning the extracted complex.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the cells is not in `complex`.
    pub fn execute<G: Geometry>(&self, complex: &Complex<G>) -> Result<Complex<G>> {
        let closure = complex.boundary_closure(&self.cells)?;
        let mut clip = complex.snapshot();
        clip.retain(&closure);
        tracing::debug!(requested = self.cells.len(), extracted = clip.len(), "extracted cells");
        Ok(clip)
    }
}
