use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::geometry::Geometry;
use crate::topology::{CellId, Complex};

/// Inserts every cell of a clip complex into a target complex under fresh
/// ids, rewriting references to point at the new cells.
pub struct Paste<'a, G: Geometry> {
    clip: &'a Complex<G>,
}

impl<'a, G: Geometry> Paste<'a, G> {
    /// Creates a new `Paste` operation.
    #[must_use]
    pub fn new(clip: &'a Complex<G>) -> Self {
        Self { clip }
    }

    /// Executes the paste, returning the map from clip ids to new ids.
    ///
    /// Either every cell is pasted or the target is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if a pasted record is rejected by the target.
    pub fn execute(&self, target: &mut Complex<G>) -> Result<BTreeMap<CellId, CellId>> {
        let order = self.dependencies_first()?;
        let backup = target.snapshot();
        match self.paste_in_order(&order, target) {
            Ok(map) => {
                tracing::debug!(pasted = map.len(), "pasted cells");
                Ok(map)
            }
            Err(err) => {
                target.restore(backup);
                Err(err)
            }
        }
    }

    fn paste_in_order(
        &self,
        order: &[CellId],
        target: &mut Complex<G>,
    ) -> Result<BTreeMap<CellId, CellId>> {
        let mut map = BTreeMap::new();
        for &old in order {
            let mut data = self.clip.get(old)?.clone();
            data.remap_references(|id| map.get(&id).copied().unwrap_or(id));
            let new = target.insert(data)?;
            map.insert(old, new);
        }
        Ok(map)
    }

    /// Orders the clip cells so that every cell comes after the cells it
    /// references.
    fn dependencies_first(&self) -> Result<Vec<CellId>> {
        fn visit<G: Geometry>(
            clip: &Complex<G>,
            id: CellId,
            seen: &mut BTreeSet<CellId>,
            order: &mut Vec<CellId>,
        ) -> Result<()> {
            if !seen.insert(id) {
                return Ok(());
            }
            for reference in clip.get(id)?.references() {
                visit(clip, reference, seen, order)?;
            }
            order.push(id);
            Ok(())
        }

        let mut seen = BTreeSet::new();
        let mut order = Vec::with_capacity(self.clip.len());
        for id in self.clip.ids() {
            visit(self.clip, id, &mut seen, &mut order)?;
        }
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Frame, StandardGeometry};
    use crate::math::Point2;
    use crate::operations::creation::{MakeInbetween, MakePolygon, MakeStroke};
    use crate::operations::modification::Extract;
    use crate::operations::query::IsValid;
    use crate::topology::{CellKind, KeyEdgeData};

    type G = StandardGeometry;

    fn triangle(complex: &mut Complex<G>, frame: i32) -> CellId {
        MakePolygon::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
            Frame(frame),
        )
        .execute(complex)
        .unwrap()
    }

    #[test]
    fn paste_duplicates_with_fresh_ids() {
        let mut complex = Complex::new();
        let face = triangle(&mut complex, 0);
        let clip = Extract::new(vec![face]).execute(&complex).unwrap();

        let map = Paste::new(&clip).execute(&mut complex).unwrap();
        assert_eq!(map.len(), 7);
        assert_eq!(complex.len(), 14);
        assert!(map.iter().all(|(old, new)| old != new));
        assert!(IsValid::new().execute(&complex));

        // the copied face is bounded by the copied edges only
        let new_face = map[&face];
        let boundary = complex.boundary(new_face).unwrap();
        assert!(boundary.iter().all(|id| map.values().any(|v| v == id)));
    }

    #[test]
    fn paste_into_another_complex_preserves_records() {
        let mut source = Complex::new();
        let stroke = MakeStroke::new(vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)], Frame(4))
            .execute(&mut source)
            .unwrap();
        let clip = Extract::new(vec![stroke.edge]).execute(&source).unwrap();

        let mut target: Complex<G> = Complex::new();
        let map = Paste::new(&clip).execute(&mut target).unwrap();
        let pasted = target.get_as::<KeyEdgeData<G>>(map[&stroke.edge]).unwrap();
        let original = source.get_as::<KeyEdgeData<G>>(stroke.edge).unwrap();
        assert_eq!(pasted.geometry, original.geometry);
        assert_eq!(pasted.frame, original.frame);
        let (start, end) = stroke.vertices.unwrap();
        assert_eq!(pasted.end_vertices(), Some((map[&start], map[&end])));
    }

    #[test]
    fn paste_keeps_inbetween_links() {
        let mut complex = Complex::new();
        let a = triangle(&mut complex, 0);
        let b = triangle(&mut complex, 8);
        let tween = MakeInbetween::new(a, b).execute(&mut complex).unwrap();
        let clip = Extract::new(vec![tween]).execute(&complex).unwrap();
        assert_eq!(clip.len(), 15);

        let mut target: Complex<G> = Complex::new();
        let map = Paste::new(&clip).execute(&mut target).unwrap();
        assert_eq!(target.cells_of_kind(CellKind::InbetweenFace).count(), 1);
        assert_eq!(target.boundary(map[&tween]).unwrap().len(), 2);
        assert!(IsValid::new().execute(&target));
    }
}
