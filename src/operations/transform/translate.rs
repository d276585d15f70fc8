use crate::error::Result;
use crate::geometry::StandardGeometry;
use crate::math::Vector2;
use crate::topology::{CellDataMutator, CellId, CellKind, Complex, KeyEdgeData, KeyVertexData};

/// Translates key cells, and the cells on their boundary, by a
/// displacement vector.
pub struct Translate {
    cells: Vec<CellId>,
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(cells: Vec<CellId>, displacement: Vector2) -> Self {
        Self {
            cells,
            displacement,
        }
    }

    /// Executes the translation, modifying the cells in place.
    ///
    /// Returns the number of records that were moved.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the cells is not in the complex.
    pub fn execute(&self, complex: &mut Complex<StandardGeometry>) -> Result<usize> {
        let targets = complex.boundary_closure(&self.cells)?;
        let mut mover = Mover(self.displacement);
        let mut moved = 0;
        for id in targets {
            if matches!(complex.kind(id)?, CellKind::KeyVertex | CellKind::KeyEdge) {
                complex.mutate(id, &mut mover)?;
                moved += 1;
            }
        }
        Ok(moved)
    }
}

struct Mover(Vector2);

impl CellDataMutator<StandardGeometry> for Mover {
    type Output = ();

    fn visit_key_vertex(&mut self, data: &mut KeyVertexData<StandardGeometry>) -> Result<()> {
        data.geometry.position += self.0;
        Ok(())
    }

    fn visit_key_edge(&mut self, data: &mut KeyEdgeData<StandardGeometry>) -> Result<()> {
        for sample in &mut data.geometry.samples {
            sample.position += self.0;
        }
        Ok(())
    }
}
