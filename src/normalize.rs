//! Scaling between pixel coordinates and the model's normalized space.

use num_traits::NumCast;

use super::error::TrajectoryError;
use super::point::Point;

/// Model input: start and end point, jittered and normalized, laid out as
/// `[start.x, start.y, end.x, end.y]` with conceptual shape `[1, 2, 2]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelInput {
    values: [f32; 4],
}

impl ModelInput {
    /// batch, points, coordinates
    pub const SHAPE: [usize; 3] = [1, 2, 2];

    pub fn new(values: [f32; 4]) -> Self {
        ModelInput { values }
    }

    pub fn values(&self) -> &[f32; 4] {
        &self.values
    }
}

/// Symmetric scaling by `1.5 * max(start.x, start.y, end.x, end.y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normalization {
    largest: f32,
}

impl Normalization {
    /// Fails with `DegenerateNormalization` if every coordinate is zero.
    pub fn for_endpoints(start: Point, end: Point) -> Result<Self, TrajectoryError> {
        let max = start.x.max(start.y).max(end.x).max(end.y) as f32;
        let largest = max + max / 2.0;
        if largest == 0.0 {
            return Err(TrajectoryError::DegenerateNormalization);
        }
        Ok(Normalization { largest })
    }

    pub fn largest(&self) -> f32 {
        self.largest
    }

    /// Scale jittered pixel coordinates `[sx, sy, ex, ey]` into model space.
    pub fn normalize(&self, coords: [f64; 4]) -> ModelInput {
        ModelInput::new(coords.map(|c| c as f32 / self.largest))
    }

    /// Scale one predicted point back to pixels, rounding to the nearest integer.
    /// Returns None if the prediction is not finite or does not fit into `i32`.
    pub fn denormalize(&self, x: f32, y: f32) -> Option<Point> {
        let x = <i32 as NumCast>::from((x * self.largest).round())?;
        let y = <i32 as NumCast>::from((y * self.largest).round())?;
        Some(Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn largest_is_one_and_a_half_max() {
        let n = Normalization::for_endpoints(Point::new(100, 50), Point::new(20, 400)).unwrap();
        assert_eq!(n.largest(), 600.0);
    }

    #[test]
    fn all_zero_is_degenerate() {
        let err = Normalization::for_endpoints(Point::new(0, 0), Point::new(0, 0)).unwrap_err();
        assert!(matches!(err, TrajectoryError::DegenerateNormalization));
    }

    #[test]
    fn scaling_is_symmetric() {
        let n = Normalization::for_endpoints(Point::new(0, 0), Point::new(100, 100)).unwrap();
        let input = n.normalize([0.0, 0.0, 100.0, 100.0]);
        let v = input.values();
        assert_relative_eq!(v[2], 100.0 / 150.0);
        assert_eq!(n.denormalize(v[2], v[3]), Some(Point::new(100, 100)));
        assert_eq!(n.denormalize(0.5, -0.1), Some(Point::new(75, -15)));
    }

    #[test]
    fn non_finite_predictions_are_rejected() {
        let n = Normalization::for_endpoints(Point::new(10, 10), Point::new(20, 20)).unwrap();
        assert_eq!(n.denormalize(f32::NAN, 0.0), None);
        assert_eq!(n.denormalize(0.0, f32::INFINITY), None);
    }
}
