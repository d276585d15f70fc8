pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Result, VacError};
pub use geometry::{Frame, FrameRange, FrameSpan, Geometry, StandardGeometry};
pub use topology::{CellData, CellId, CellKind, CellRecord, Complex};
