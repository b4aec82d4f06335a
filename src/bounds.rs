//! Axis-aligned bounding box over integer points.

use super::point::Point;
use super::NativeFloat;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min_x: NativeFloat,
    pub min_y: NativeFloat,
    pub max_x: NativeFloat,
    pub max_y: NativeFloat,
}

impl BoundingBox {
    /// Return the bounding box of all `points`. Returns None if there are none.
    pub fn of<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (x, y) = (first.x as NativeFloat, first.y as NativeFloat);
        let mut bounds = BoundingBox {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        };
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    fn include(&mut self, p: Point) {
        let (x, y) = (p.x as NativeFloat, p.y as NativeFloat);
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> NativeFloat {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> NativeFloat {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (NativeFloat, NativeFloat) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_union() {
        let pts = [Point::new(5, -2), Point::new(-1, 7), Point::new(3, 3)];
        let bounds = BoundingBox::of(pts).unwrap();
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 5.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_y, 7.0);
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 9.0);
        assert_eq!(bounds.center(), (2.0, 2.5));
    }

    #[test]
    fn empty_has_no_bounds() {
        assert!(BoundingBox::of(Vec::new()).is_none());
    }
}
