use crate::error::Result;
use crate::geometry::StandardGeometry;
use crate::topology::{CellId, Complex, KeyEdgeData};

/// Computes the length of a key edge's curve.
pub struct Length {
    edge: CellId,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(edge: CellId) -> Self {
        Self { edge }
    }

    /// Executes the query, returning the curve length.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown or is not a key edge.
    pub fn execute(&self, complex: &Complex<StandardGeometry>) -> Result<f64> {
        let edge = complex.get_as::<KeyEdgeData<StandardGeometry>>(self.edge)?;
        Ok(edge.geometry.length())
    }
}
