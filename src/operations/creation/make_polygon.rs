use crate::error::{OperationError, Result};
use crate::geometry::{EdgeCurve, FaceStyle, Frame, StandardGeometry, VertexPoint};
use crate::math::Point2;
use crate::topology::{
    CellId, Complex, KeyCycle, KeyEdgeData, KeyFaceData, KeyHalfedge, KeyVertexData,
};

use super::StrokeParams;

/// Creates a filled polygon at one frame: a key vertex per corner, a key
/// edge per side, and a key face bounded by the resulting edge cycle.
pub struct MakePolygon {
    points: Vec<Point2>,
    frame: Frame,
    params: StrokeParams,
    style: FaceStyle,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, frame: Frame) -> Self {
        Self {
            points,
            frame,
            params: StrokeParams::default(),
            style: FaceStyle::default(),
        }
    }

    /// Sets the parameters of the side edges.
    #[must_use]
    pub fn with_params(mut self, params: StrokeParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the fill of the face.
    #[must_use]
    pub fn with_style(mut self, style: FaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Executes the operation and returns the id of the face.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three corners are given.
    pub fn execute(&self, complex: &mut Complex<StandardGeometry>) -> Result<CellId> {
        let n = self.points.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "polygon needs at least 3 corners, got {n}"
            ))
            .into());
        }

        let mut corners = Vec::with_capacity(n);
        for &point in &self.points {
            let vertex = KeyVertexData::new(self.frame, VertexPoint { position: point });
            corners.push(complex.insert(vertex)?);
        }

        let mut halfedges = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            let curve = EdgeCurve::from_points(
                &[self.points[i], self.points[j]],
                self.params.width(),
                false,
            );
            let edge = complex.insert(KeyEdgeData::open(self.frame, corners[i], corners[j], curve))?;
            halfedges.push(KeyHalfedge::new(edge, true));
        }

        complex.insert(KeyFaceData::new(
            self.frame,
            vec![KeyCycle::Edges(halfedges)],
            self.style,
        ))
    }
}
