use crate::error::Result;
use crate::geometry::Geometry;
use crate::topology::{CellId, Complex};

use super::Extract;

/// Extracts a set of cells into a clip complex, then removes them from the
/// source together with every cell depending on them.
pub struct Cut {
    cells: Vec<CellId>,
}

impl Cut {
    /// Creates a new `Cut` operation.
    #[must_use]
    pub fn new(cells: Vec<CellId>) -> Self {
        Self { cells }
    }

    /// Executes the cut, returning the clip and the removed ids.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the cells is not in `complex`; nothing is
    /// removed in that case.
    pub fn execute<G: Geometry>(
        &self,
        complex: &mut Complex<G>,
    ) -> Result<(Complex<G>, Vec<CellId>)> {
        let clip = Extract::new(self.cells.clone()).execute(complex)?;
        let mut removed = Vec::new();
        for &id in &self.cells {
            // an earlier cascade may already have taken this one
            if complex.contains(id) {
                removed.extend(complex.remove_cascade(id)?);
            }
        }
        Ok((clip, removed))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Frame, StandardGeometry};
    use crate::math::Point2;
    use crate::operations::creation::{MakePolygon, MakeStroke};
    use crate::operations::modification::Paste;
    use crate::topology::CellKind;

    #[test]
    fn cut_edge_removes_dependent_face_but_keeps_vertices() {
        let mut complex: Complex<StandardGeometry> = Complex::new();
        let face = MakePolygon::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
            Frame(0),
        )
        .execute(&mut complex)
        .unwrap();
        let edge = complex.cells_of_kind(CellKind::KeyEdge).next().unwrap();

        let (clip, removed) = Cut::new(vec![edge]).execute(&mut complex).unwrap();
        assert_eq!(removed, vec![face, edge]);
        assert_eq!(clip.len(), 3);
        assert_eq!(complex.cells_of_kind(CellKind::KeyVertex).count(), 3);
        assert_eq!(complex.cells_of_kind(CellKind::KeyEdge).count(), 2);
    }

    #[test]
    fn cut_then_paste_restores_cell_count() {
        let mut complex: Complex<StandardGeometry> = Complex::new();
        let a = MakeStroke::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], Frame(0))
            .execute(&mut complex)
            .unwrap();
        let b = MakeStroke::new(vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)], Frame(0))
            .execute(&mut complex)
            .unwrap();
        let (start, _) = a.vertices.unwrap();

        let (clip, removed) = Cut::new(vec![start, a.edge, b.edge])
            .execute(&mut complex)
            .unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(complex.len(), 3);

        Paste::new(&clip).execute(&mut complex).unwrap();
        assert_eq!(complex.len(), 3 + clip.len());
    }

    #[test]
    fn unknown_cell_removes_nothing() {
        let mut complex: Complex<StandardGeometry> = Complex::new();
        let a = MakeStroke::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], Frame(0))
            .execute(&mut complex)
            .unwrap();
        let b = MakeStroke::new(vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)], Frame(0))
            .execute(&mut complex)
            .unwrap();
        complex.remove(b.edge).unwrap();

        assert!(Cut::new(vec![a.edge, b.edge]).execute(&mut complex).is_err());
        assert!(complex.contains(a.edge));
    }
}
