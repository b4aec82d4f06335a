//! Turns a sparse, jittery control point sequence into a smooth, densely
//! sampled path by walking a uniform Catmull-Rom spline through it.

use log::{debug, warn};

use super::catmull_rom::CatmullRom;
use super::dense_path::DensePath;
use super::error::TrajectoryError;
use super::point::Point;
use super::point2::Point2;
use super::spline::Spline;
use super::NativeFloat;

/// Number of points a densified path of `control_points` points will contain.
pub fn dense_len(control_points: usize, points_per_segment: usize) -> usize {
    1 + control_points.saturating_sub(1) * points_per_segment
}

/// Sample a Catmull-Rom spline through `control_points`.
///
/// The output starts with `control_points[0]` verbatim and then holds
/// `points_per_segment` rounded samples at `t = j / points_per_segment`,
/// `j = 1..=points_per_segment`, for each of the `N - 1` segments in order.
/// With `points_per_segment == 1` this reproduces the control points.
///
/// Returns None if there are fewer than two control points,
/// `points_per_segment` is zero or a sample does not fit the pixel range;
/// callers fall back to the raw points. [`try_densify`] reports which.
pub fn densify(control_points: &[Point], points_per_segment: usize) -> Option<DensePath> {
    match try_densify(control_points, points_per_segment) {
        Ok(path) => Some(path),
        Err(err) => {
            warn!("{err}");
            None
        }
    }
}

/// Like [`densify`] but returns the reason the path could not be built.
pub fn try_densify(
    control_points: &[Point],
    points_per_segment: usize,
) -> Result<DensePath, TrajectoryError> {
    if control_points.len() < 2 {
        return Err(TrajectoryError::InsufficientControlPoints(control_points.len()));
    }
    if points_per_segment == 0 {
        return Err(TrajectoryError::NoPointsPerSegment);
    }

    let lifted: Vec<Point2<NativeFloat>> = control_points.iter().map(|p| p.to_point2()).collect();

    let mut path = DensePath::with_capacity(dense_len(control_points.len(), points_per_segment));
    path.push(control_points[0]);

    for segment in 0..control_points.len() - 1 {
        let curve = CatmullRom::from_window(&lifted, segment)
            .ok_or(TrajectoryError::InsufficientControlPoints(lifted.len()))?;
        for (j, sample) in curve.samples(points_per_segment).enumerate() {
            let point = Point::round_from(sample)
                .ok_or(TrajectoryError::SampleOutOfRange { segment, sample: j + 1 })?;
            path.push(point);
        }
    }

    debug!(
        "densified {} control points into {} samples",
        control_points.len(),
        path.len()
    );
    Ok(path)
}
