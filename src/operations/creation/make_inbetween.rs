use crate::error::{OperationError, Result};
use crate::geometry::Geometry;
use crate::topology::{
    CellData, CellId, CellKind, Complex, InbetweenEdgeData, InbetweenFaceData,
    InbetweenVertexData,
};

/// Creates the inbetween cell that animates one key cell into another of
/// the same dimension.
pub struct MakeInbetween {
    before: CellId,
    after: CellId,
}

impl MakeInbetween {
    /// Creates a new `MakeInbetween` operation.
    #[must_use]
    pub fn new(before: CellId, after: CellId) -> Self {
        Self { before, after }
    }

    /// Executes the operation, inserting the inbetween cell with default
    /// interpolation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `before` is not a key cell, or if the insertion
    /// is rejected (mismatched kinds, or `after` not later than `before`).
    pub fn execute<G: Geometry>(&self, complex: &mut Complex<G>) -> Result<CellId> {
        let kind = complex.kind(self.before)?;
        let data: CellData<G> = match kind {
            CellKind::KeyVertex => InbetweenVertexData::<G>::new(
                self.before,
                self.after,
                Default::default(),
            )
            .into(),
            CellKind::KeyEdge => InbetweenEdgeData::<G>::new(
                self.before,
                self.after,
                Default::default(),
            )
            .into(),
            CellKind::KeyFace => InbetweenFaceData::<G>::new(
                self.before,
                self.after,
                Default::default(),
            )
            .into(),
            CellKind::InbetweenVertex | CellKind::InbetweenEdge | CellKind::InbetweenFace => {
                return Err(OperationError::InvalidInput(format!(
                    "cannot animate from a {kind}, expected a key cell"
                ))
                .into());
            }
        };
        complex.insert(data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Frame, FrameSpan, StandardGeometry, VertexPoint};
    use crate::topology::KeyVertexData;

    type G = StandardGeometry;

    fn vertex(complex: &mut Complex<G>, frame: i32) -> CellId {
        complex
            .insert(KeyVertexData::<G>::new(Frame(frame), VertexPoint::default()))
            .unwrap()
    }

    #[test]
    fn vertices_make_inbetween_vertex() {
        let mut complex = Complex::new();
        let a = vertex(&mut complex, 0);
        let b = vertex(&mut complex, 10);
        let id = MakeInbetween::new(a, b).execute(&mut complex).unwrap();

        assert_eq!(complex.kind(id).unwrap(), CellKind::InbetweenVertex);
        assert_eq!(
            complex.frame_span(id).unwrap(),
            FrameSpan::Between {
                before: Frame(0),
                after: Frame(10),
            }
        );
    }

    #[test]
    fn reversed_keys_are_rejected() {
        let mut complex = Complex::new();
        let a = vertex(&mut complex, 5);
        let b = vertex(&mut complex, 1);
        let err = MakeInbetween::new(a, b).execute(&mut complex).unwrap_err();
        assert!(err.is_invalid_topology());
        assert_eq!(complex.len(), 2);
    }

    #[test]
    fn inbetween_source_is_rejected() {
        let mut complex = Complex::new();
        let a = vertex(&mut complex, 0);
        let b = vertex(&mut complex, 4);
        let c = vertex(&mut complex, 8);
        let ab = MakeInbetween::new(a, b).execute(&mut complex).unwrap();
        assert!(MakeInbetween::new(ab, c).execute(&mut complex).is_err());
    }
}
