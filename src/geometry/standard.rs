use serde::{Deserialize, Serialize};

use crate::math::Point2;

use super::{EdgeCurve, Frame, Geometry};

/// The default geometry bundle: integer frames, 2D positions and sampled
/// edge curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardGeometry;

impl Geometry for StandardGeometry {
    type Frame = Frame;
    type KeyVertexGeometry = VertexPoint;
    type KeyEdgeGeometry = EdgeCurve;
    type KeyFaceGeometry = FaceStyle;
    type InbetweenVertexGeometry = InbetweenParams;
    type InbetweenEdgeGeometry = InbetweenParams;
    type InbetweenFaceGeometry = InbetweenParams;
}

/// Position of a key vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexPoint {
    pub position: Point2,
}

impl VertexPoint {
    /// Creates a vertex position.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }
}

impl Default for VertexPoint {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
        }
    }
}

/// Fill attributes of a key face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceStyle {
    /// RGBA colour, each channel in `[0, 1]`.
    pub color: [f32; 4],
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Interpolation parameters carried by inbetween cells.
///
/// The kernel only stores them; evaluating the motion is left to the
/// animation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InbetweenParams {
    /// Tangent at the `before` key cell, in units per frame.
    pub before_tangent: [f64; 2],
    /// Tangent at the `after` key cell, in units per frame.
    pub after_tangent: [f64; 2],
    /// Easing strength, `0.0` for linear motion.
    pub ease: f64,
}

impl Default for InbetweenParams {
    fn default() -> Self {
        Self {
            before_tangent: [0.0, 0.0],
            after_tangent: [0.0, 0.0],
            ease: 0.0,
        }
    }
}
