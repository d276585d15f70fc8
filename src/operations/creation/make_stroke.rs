use crate::error::{OperationError, Result};
use crate::geometry::{EdgeCurve, Frame, StandardGeometry, VertexPoint};
use crate::math::Point2;
use crate::topology::{CellId, Complex, KeyEdgeData, KeyVertexData};

use super::StrokeParams;

/// Cells created by [`MakeStroke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// The key edge carrying the stroke curve.
    pub edge: CellId,
    /// Start and end vertices of an open stroke. Both are the same vertex
    /// when the stroke ends where it started.
    pub vertices: Option<(CellId, CellId)>,
}

/// Creates a key edge from a sequence of 2D points at one frame.
///
/// An open stroke gets a key vertex at each end; a closed stroke becomes a
/// closed edge without vertices.
pub struct MakeStroke {
    points: Vec<Point2>,
    frame: Frame,
    closed: bool,
    params: StrokeParams,
}

impl MakeStroke {
    /// Creates a new `MakeStroke` operation for an open stroke.
    #[must_use]
    pub fn new(points: Vec<Point2>, frame: Frame) -> Self {
        Self {
            points,
            frame,
            closed: false,
            params: StrokeParams::default(),
        }
    }

    /// Makes the stroke a closed loop.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Sets the stroke parameters.
    #[must_use]
    pub fn with_params(mut self, params: StrokeParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, creating the cells in the complex.
    ///
    /// # Errors
    ///
    /// Returns an error if an open stroke has fewer than two points, or a
    /// closed stroke fewer than three.
    pub fn execute(&self, complex: &mut Complex<StandardGeometry>) -> Result<Stroke> {
        let min_points = if self.closed { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "stroke needs at least {min_points} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let curve = EdgeCurve::from_points(&self.points, self.params.width(), self.closed);
        if self.closed {
            let edge = complex.insert(KeyEdgeData::closed(self.frame, curve))?;
            return Ok(Stroke {
                edge,
                vertices: None,
            });
        }

        let (Some(first), Some(last)) = (curve.start(), curve.end()) else {
            return Err(OperationError::InvalidInput("stroke has no points".to_owned()).into());
        };
        let start = complex.insert(vertex_at(self.frame, first))?;
        let end = if curve.ends_meet() {
            start
        } else {
            complex.insert(vertex_at(self.frame, last))?
        };
        let edge = complex.insert(KeyEdgeData::open(self.frame, start, end, curve))?;
        Ok(Stroke {
            edge,
            vertices: Some((start, end)),
        })
    }
}

fn vertex_at(frame: Frame, point: Point2) -> KeyVertexData<StandardGeometry> {
    KeyVertexData::new(frame, VertexPoint { position: point })
}
