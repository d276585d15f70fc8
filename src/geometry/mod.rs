pub mod edge_curve;
pub mod frame;
pub mod standard;

pub use edge_curve::{EdgeCurve, EdgeSample};
pub use frame::{Frame, FrameRange, FrameSpan};
pub use standard::{FaceStyle, InbetweenParams, StandardGeometry, VertexPoint};

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Bound shared by every geometric payload stored in a cell record.
///
/// Payloads are plain values: cloned wholesale for snapshots, compared
/// field by field, and handed to a serializer. They own their data.
pub trait Payload:
    Clone + Debug + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
}

impl<T> Payload for T where
    T: Clone + Debug + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
}

/// The geometry bundle a complex is parameterized over.
///
/// The kernel never inspects these types beyond comparing frames: it only
/// stores them in the cell records. An application picks one bundle (for
/// instance [`StandardGeometry`]) and uses it for every complex.
pub trait Geometry: Clone + Debug + PartialEq + Default + 'static {
    /// Time coordinate of key cells.
    type Frame: Payload + Copy + PartialOrd;
    /// Payload of a key vertex, typically a position.
    type KeyVertexGeometry: Payload;
    /// Payload of a key edge, typically a curve.
    type KeyEdgeGeometry: Payload;
    /// Payload of a key face, typically fill attributes.
    type KeyFaceGeometry: Payload;
    /// Interpolation parameters of an inbetween vertex.
    type InbetweenVertexGeometry: Payload;
    /// Interpolation parameters of an inbetween edge.
    type InbetweenEdgeGeometry: Payload;
    /// Interpolation parameters of an inbetween face.
    type InbetweenFaceGeometry: Payload;
}
