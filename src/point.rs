use core::fmt;

use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};

use super::point2::Point2;

/// Integer pixel coordinate. Inputs, control points and densified samples all
/// use this type, it is serialized as a two element array `[x, y]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// True if `other` lies within `tolerance` of `self` on both axes independently.
    pub fn within(&self, other: Point, tolerance: u32) -> bool {
        self.x.abs_diff(other.x) <= tolerance && self.y.abs_diff(other.y) <= tolerance
    }

    /// Lift into floating point space for spline evaluation.
    pub fn to_point2<T: Float>(self) -> Point2<T> {
        // every i32 is representable by f32/f64 up to rounding
        Point2::new(
            <T as NumCast>::from(self.x).unwrap_or_else(T::zero),
            <T as NumCast>::from(self.y).unwrap_or_else(T::zero),
        )
    }

    /// Round a floating point position to the nearest pixel.
    /// Returns None if a component is not finite or out of `i32` range.
    pub fn round_from<T: Float>(p: Point2<T>) -> Option<Self> {
        let x = <i32 as NumCast>::from(p.x.round())?;
        let y = <i32 as NumCast>::from(p.y.round())?;
        Some(Point { x, y })
    }
}

impl From<[i32; 2]> for Point {
    fn from(xy: [i32; 2]) -> Self {
        Point { x: xy[0], y: xy[1] }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected two integers separated by a comma (e.g. 100,200), got `{0}`")]
pub struct ParsePointError(String);

impl core::str::FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => Ok(Point { x, y }),
                _ => Err(ParsePointError(s.to_owned())),
            },
            _ => Err(ParsePointError(s.to_owned())),
        }
    }
}
