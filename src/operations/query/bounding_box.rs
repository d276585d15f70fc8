use crate::error::{OperationError, Result};
use crate::geometry::StandardGeometry;
use crate::math::Point2;
use crate::topology::{
    CellDataVisitor, CellId, Complex, KeyCycle, KeyEdgeData, KeyFaceData, KeyVertexData,
};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Creates a box containing a single point.
    #[must_use]
    pub fn from_point(point: Point2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// Computes the 2D bounding box of a key cell.
///
/// Vertices contribute their position, edges their stroke (or their end
/// vertices when the curve has no samples), and faces the union of their
/// boundary cycles. Inbetween cells have no geometry of their own at a
/// frame and are reported as unhandled.
pub struct BoundingBox {
    cell: CellId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(cell: CellId) -> Self {
        Self { cell }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is unknown, is an inbetween cell, or
    /// has no geometry to bound.
    pub fn execute(&self, complex: &Complex<StandardGeometry>) -> Result<Aabb> {
        complex.visit(self.cell, &mut BoundsVisitor { complex })
    }
}

struct BoundsVisitor<'a> {
    complex: &'a Complex<StandardGeometry>,
}

impl BoundsVisitor<'_> {
    fn bounds_of(&mut self, id: CellId) -> Result<Aabb> {
        let complex = self.complex;
        complex.visit(id, self)
    }
}

impl CellDataVisitor<StandardGeometry> for BoundsVisitor<'_> {
    type Output = Aabb;

    fn visit_key_vertex(&mut self, data: &KeyVertexData<StandardGeometry>) -> Result<Aabb> {
        Ok(Aabb::from_point(data.geometry.position))
    }

    fn visit_key_edge(&mut self, data: &KeyEdgeData<StandardGeometry>) -> Result<Aabb> {
        if let Some((min, max)) = data.geometry.bounds() {
            return Ok(Aabb { min, max });
        }
        match data.end_vertices() {
            Some((start, end)) => Ok(self.bounds_of(start)?.union(&self.bounds_of(end)?)),
            None => Err(OperationError::InvalidInput("closed edge has no samples".to_owned()).into()),
        }
    }

    fn visit_key_face(&mut self, data: &KeyFaceData<StandardGeometry>) -> Result<Aabb> {
        let mut result: Option<Aabb> = None;
        for cell in data.cycles.iter().flat_map(KeyCycle::references) {
            let bounds = self.bounds_of(cell)?;
            result = Some(match result {
                Some(acc) => acc.union(&bounds),
                None => bounds,
            });
        }
        result.ok_or_else(|| OperationError::InvalidInput("face has no boundary".to_owned()).into())
    }
}
