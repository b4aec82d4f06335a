use num_traits::Float;

use super::point2::Point2;
use super::spline::Spline;

/// A single uniform Catmull-Rom segment (tension 0.5) defined by four points.
/// The curve runs from `p1` (t = 0) to `p2` (t = 1); `p0` and `p3` only shape
/// the tangents at the ends.
/// The curve is defined by equation:
/// ```text
/// P(t) = 0.5 * ( 2*p1
///              + (-p0 + p2) * t
///              + (2*p0 - 5*p1 + 4*p2 - p3) * t²
///              + (-p0 + 3*p1 - 3*p2 + p3) * t³ )
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CatmullRom<T> {
    pub(crate) p0: Point2<T>,
    pub(crate) p1: Point2<T>,
    pub(crate) p2: Point2<T>,
    pub(crate) p3: Point2<T>,
}

impl<T> CatmullRom<T>
where
    T: Float,
{
    pub fn new(p0: Point2<T>, p1: Point2<T>, p2: Point2<T>, p3: Point2<T>) -> Self {
        CatmullRom { p0, p1, p2, p3 }
    }

    /// Build the segment between `points[segment]` and `points[segment + 1]`.
    /// Neighbours outside the slice are clamped to the first/last point, so
    /// the curve never extrapolates past the ends.
    /// Returns None if `segment + 1` is out of range.
    pub fn from_window(points: &[Point2<T>], segment: usize) -> Option<Self> {
        let last = points.len().checked_sub(1)?;
        if segment >= last {
            return None;
        }
        Some(CatmullRom {
            p0: points[segment.saturating_sub(1)],
            p1: points[segment],
            p2: points[segment + 1],
            p3: points[(segment + 2).min(last)],
        })
    }

    /// Evaluate the segment at `t` by direct evaluation of the cubic.
    pub fn eval(&self, t: T) -> Point2<T> {
        let two = T::one() + T::one();
        let three = two + T::one();
        let four = two + two;
        let five = four + T::one();
        let half = T::one() / two;

        let t2 = t * t;
        let t3 = t2 * t;
        let (p0, p1, p2, p3) = (self.p0, self.p1, self.p2, self.p3);

        (p1 * two
            + (p2 - p0) * t
            + (p0 * two - p1 * five + p2 * four - p3) * t2
            + (p1 * three - p0 - p2 * three + p3) * t3)
            * half
    }
}

impl<T> Spline<T> for CatmullRom<T>
where
    T: Float,
{
    fn eval(&self, t: T) -> Point2<T> {
        self.eval(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn windows() -> Vec<CatmullRom<f64>> {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(13.0, -7.0),
            Point2::new(40.0, 22.0),
            Point2::new(-3.0, 8.0),
        ];
        (0..pts.len() - 1)
            .map(|i| CatmullRom::from_window(&pts, i).unwrap())
            .collect()
    }

    /// t = 0 reproduces p1 and t = 1 reproduces p2 for every window.
    #[test]
    fn passes_through_inner_points() {
        for seg in windows() {
            assert_eq!(seg.eval(0.0), seg.p1);
            assert_eq!(seg.eval(1.0), seg.p2);
        }
    }

    #[test]
    fn window_clamps_at_ends() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 1.0),
        ];
        let first = CatmullRom::from_window(&pts, 0).unwrap();
        assert_eq!(first.p0, pts[0]);
        assert_eq!(first.p3, pts[2]);

        let last = CatmullRom::from_window(&pts, 1).unwrap();
        assert_eq!(last.p0, pts[0]);
        assert_eq!(last.p3, pts[2]);

        assert!(CatmullRom::from_window(&pts, 2).is_none());
        assert!(CatmullRom::from_window(&pts[..1], 0).is_none());
        assert!(CatmullRom::<f64>::from_window(&[], 0).is_none());
    }

    /// With collinear, evenly spaced points the uniform spline is linear.
    #[test]
    fn evenly_spaced_line_stays_linear() {
        let seg = CatmullRom::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        );
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = seg.eval(t);
            assert_relative_eq!(p.x, 1.0 + t, epsilon = 1e-12);
            assert_relative_eq!(p.y, 1.0 + t, epsilon = 1e-12);
        }
    }

    #[test]
    fn midpoint_matches_basis() {
        // at t = 0.5 the basis weights are (-1, 9, 9, -1) / 16
        let seg = CatmullRom::new(
            Point2::new(0.0f64, 0.0),
            Point2::new(4.0, 8.0),
            Point2::new(12.0, 8.0),
            Point2::new(16.0, 0.0),
        );
        let mid = seg.eval(0.5);
        assert_relative_eq!(mid.x, (9.0 * 4.0 + 9.0 * 12.0 - 16.0) / 16.0);
        assert_relative_eq!(mid.y, (9.0 * 8.0 + 9.0 * 8.0) / 16.0);
    }

    #[test]
    fn samples_skip_start() {
        let seg = windows()[1];
        let samples: Vec<_> = seg.samples(4).collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[3], seg.p2);
        assert_relative_eq!(samples[1].x, seg.eval(0.5).x);
        assert_eq!(seg.samples(0).count(), 0);
    }
}
