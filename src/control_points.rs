use core::ops::Deref;

use tinyvec::TinyVec;

use super::point::Point;

/// Typical model outputs stay well below this, longer sequences spill to the heap.
const INLINE_POINTS: usize = 16;

/// Ordered control points of a trajectory. The first point is always the
/// requested start and the last one the requested end; anything in between
/// is model output and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPoints {
    points: TinyVec<[Point; INLINE_POINTS]>,
}

impl ControlPoints {
    /// The two point sequence start -> end.
    pub fn direct(start: Point, end: Point) -> Self {
        Self::with_interior(start, core::iter::empty(), end)
    }

    /// `start`, followed by `interior` in order, followed by `end`.
    pub fn with_interior<I>(start: Point, interior: I, end: Point) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = TinyVec::default();
        points.push(start);
        points.extend(interior);
        points.push(end);
        ControlPoints { points }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Points strictly between start and end.
    pub fn interior(&self) -> &[Point] {
        &self.points[1..self.points.len() - 1]
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl Deref for ControlPoints {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}
