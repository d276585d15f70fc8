use std::fmt;

use serde::{Deserialize, Serialize};

/// A discrete time coordinate at which key cells exist.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Frame(pub i32);

impl Frame {
    /// Creates a new frame.
    #[must_use]
    pub fn new(frame: i32) -> Self {
        Self(frame)
    }

    /// Returns the integer value of the frame.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Frame {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A closed range of frames `[first, last]`, possibly empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange<F> {
    first: F,
    last: F,
    empty: bool,
}

impl<F: Copy + PartialOrd + Default> FrameRange<F> {
    /// Creates an empty range.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            first: F::default(),
            last: F::default(),
            empty: true,
        }
    }

    /// Creates a range made of a single frame.
    #[must_use]
    pub fn single(frame: F) -> Self {
        Self {
            first: frame,
            last: frame,
            empty: false,
        }
    }

    /// Creates the range `[first, last]`.
    ///
    /// Reversed bounds are swapped.
    #[must_use]
    pub fn new(first: F, last: F) -> Self {
        if first > last {
            Self {
                first: last,
                last: first,
                empty: false,
            }
        } else {
            Self {
                first,
                last,
                empty: false,
            }
        }
    }

    /// Creates the range `[first, last]`, or an empty range if `first > last`.
    #[must_use]
    pub fn new_or_empty(first: F, last: F) -> Self {
        if first > last {
            Self::empty()
        } else {
            Self::new(first, last)
        }
    }

    /// Returns `true` if the range contains no frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns the first frame, or `None` if the range is empty.
    #[must_use]
    pub fn first(&self) -> Option<F> {
        (!self.empty).then_some(self.first)
    }

    /// Returns the last frame, or `None` if the range is empty.
    #[must_use]
    pub fn last(&self) -> Option<F> {
        (!self.empty).then_some(self.last)
    }

    /// Returns `true` if `frame` lies in `[first, last]`.
    #[must_use]
    pub fn contains(&self, frame: F) -> bool {
        !self.empty && self.first <= frame && frame <= self.last
    }

    /// Returns `true` if the two ranges share at least one frame.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.empty && !other.empty && self.first <= other.last && other.first <= self.last
    }
}

impl<F: Copy + PartialOrd + Default> Default for FrameRange<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The time extent of a cell.
///
/// Key cells live at a single frame. Inbetween cells live strictly between
/// the frames of their `before` and `after` key cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSpan<F> {
    /// A single frame.
    Key(F),
    /// The open interval `(before, after)`.
    Between { before: F, after: F },
    /// An inbetween cell whose key cells are not set yet.
    Unbounded,
}

impl<F: Copy + PartialOrd> FrameSpan<F> {
    /// Returns `true` if the cell exists at `frame`.
    #[must_use]
    pub fn contains(&self, frame: F) -> bool {
        match *self {
            Self::Key(f) => f == frame,
            Self::Between { before, after } => before < frame && frame < after,
            Self::Unbounded => false,
        }
    }

    /// Returns `true` if the cell exists at some frame of `range`.
    ///
    /// For an open interval, only the endpoints of `range` and the interval
    /// bounds are compared, so this is exact for continuous frame types.
    #[must_use]
    pub fn overlaps(&self, range: &FrameRange<F>) -> bool
    where
        F: Default,
    {
        let (Some(first), Some(last)) = (range.first(), range.last()) else {
            return false;
        };
        match *self {
            Self::Key(f) => first <= f && f <= last,
            Self::Between { before, after } => first < after && before < last,
            Self::Unbounded => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(v: i32) -> Frame {
        Frame(v)
    }

    #[test]
    fn reversed_range_is_swapped() {
        let range = FrameRange::new(f(5), f(2));
        assert_eq!(range.first(), Some(f(2)));
        assert_eq!(range.last(), Some(f(5)));
        assert!(range.contains(f(3)));
    }

    #[test]
    fn reversed_range_can_be_empty() {
        let range = FrameRange::new_or_empty(f(5), f(2));
        assert!(range.is_empty());
        assert!(!range.contains(f(3)));
        assert_eq!(range.first(), None);
    }

    #[test]
    fn single_frame_range() {
        let range = FrameRange::single(f(4));
        assert!(range.contains(f(4)));
        assert!(!range.contains(f(5)));
    }

    #[test]
    fn ranges_intersect() {
        let a = FrameRange::new(f(0), f(3));
        let b = FrameRange::new(f(3), f(6));
        let c = FrameRange::new(f(4), f(6));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&FrameRange::empty()));
    }

    #[test]
    fn between_span_is_open() {
        let span = FrameSpan::Between {
            before: f(1),
            after: f(4),
        };
        assert!(!span.contains(f(1)));
        assert!(span.contains(f(2)));
        assert!(!span.contains(f(4)));
    }

    #[test]
    fn span_overlaps_range() {
        let span = FrameSpan::Between {
            before: f(1),
            after: f(4),
        };
        assert!(span.overlaps(&FrameRange::new(f(3), f(9))));
        assert!(!span.overlaps(&FrameRange::new(f(4), f(9))));
        assert!(FrameSpan::Key(f(4)).overlaps(&FrameRange::new(f(4), f(9))));
        assert!(!FrameSpan::<Frame>::Unbounded.overlaps(&FrameRange::new(f(0), f(9))));
    }
}
