mod make_inbetween;
mod make_polygon;
mod make_stroke;

pub use make_inbetween::MakeInbetween;
pub use make_polygon::MakePolygon;
pub use make_stroke::{MakeStroke, Stroke};

use crate::error::{OperationError, Result};

/// Parameters of the strokes created by [`MakeStroke`] and [`MakePolygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    width: f64,
}

impl StrokeParams {
    /// Creates stroke parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if width <= 0.0 || !width.is_finite() {
            return Err(
                OperationError::InvalidInput("stroke width must be positive".to_owned()).into(),
            );
        }
        Ok(Self { width })
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}
