use serde::{Deserialize, Serialize};

use crate::math::{Point2, TOLERANCE};

/// A sample of an edge centerline: a position and a stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSample {
    pub position: Point2,
    pub width: f64,
}

impl EdgeSample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(position: Point2, width: f64) -> Self {
        Self { position, width }
    }
}

/// The sampled centerline of a key edge.
///
/// For a closed edge, the last sample connects back to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeCurve {
    pub samples: Vec<EdgeSample>,
    pub closed: bool,
}

impl EdgeCurve {
    /// Creates a curve from points sharing a single width.
    #[must_use]
    pub fn from_points(points: &[Point2], width: f64, closed: bool) -> Self {
        let samples = points.iter().map(|&p| EdgeSample::new(p, width)).collect();
        Self { samples, closed }
    }

    /// Returns the number of segments in this curve.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.samples.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns the arc length of the centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        let n = self.samples.len();
        (0..self.segment_count())
            .map(|i| {
                let a = self.samples[i].position;
                let b = self.samples[(i + 1) % n].position;
                (b - a).norm()
            })
            .sum()
    }

    /// Returns the first sample position, if any.
    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        self.samples.first().map(|s| s.position)
    }

    /// Returns the last sample position, if any.
    #[must_use]
    pub fn end(&self) -> Option<Point2> {
        self.samples.last().map(|s| s.position)
    }

    /// Returns `true` if the first and last samples coincide.
    #[must_use]
    pub fn ends_meet(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(a), Some(b)) => (b - a).norm() < TOLERANCE,
            _ => false,
        }
    }

    /// Returns the axis-aligned bounds `(min, max)` of the stroke,
    /// including half the width around each sample.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let mut iter = self.samples.iter();
        let first = iter.next()?;
        let half = first.width * 0.5;
        let mut min = Point2::new(first.position.x - half, first.position.y - half);
        let mut max = Point2::new(first.position.x + half, first.position.y + half);
        for s in iter {
            let half = s.width * 0.5;
            min.x = min.x.min(s.position.x - half);
            min.y = min.y.min(s.position.y - half);
            max.x = max.x.max(s.position.x + half);
            max.y = max.y.max(s.position.y + half);
        }
        Some((min, max))
    }

    /// Returns a new curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut samples = self.samples.clone();
        samples.reverse();
        Self {
            samples,
            closed: self.closed,
        }
    }
}
