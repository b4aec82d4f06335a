//! End to end generation: synthesize control points, then densify them.

use log::warn;
use rand::Rng;

use super::config::GeneratorConfig;
use super::control_points::ControlPoints;
use super::dense_path::DensePath;
use super::densify::try_densify;
use super::error::TrajectoryError;
use super::point::Point;
use super::predictor::Predictor;
use super::synthesizer::Synthesizer;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub control_points: ControlPoints,
    pub path: DensePath,
    /// False if the path is the raw control point sequence.
    pub smoothed: bool,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrajectoryGenerator {
    synthesizer: Synthesizer,
    points_per_segment: usize,
}

impl TrajectoryGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, TrajectoryError> {
        config.validate()?;
        Ok(TrajectoryGenerator {
            synthesizer: Synthesizer::new(config.randomness)?.with_tolerance(config.tolerance),
            points_per_segment: config.points_per_segment,
        })
    }

    /// Generate a trajectory from `start` to `end`.
    ///
    /// Predictor failures are returned as errors. If the control points
    /// cannot be densified the raw control points become the path.
    pub fn generate<P, R>(
        &self,
        start: Point,
        end: Point,
        predictor: &mut P,
        rng: &mut R,
    ) -> Result<Trajectory, TrajectoryError>
    where
        P: Predictor + ?Sized,
        R: Rng + ?Sized,
    {
        let control_points = self.synthesizer.synthesize(start, end, predictor, rng)?;

        let (path, smoothed) = match try_densify(&control_points, self.points_per_segment) {
            Ok(path) => (path, true),
            Err(err) => {
                warn!("not smoothing path ({err}), using raw control points");
                (DensePath::from(control_points.to_vec()), false)
            }
        };

        Ok(Trajectory {
            control_points,
            path,
            smoothed,
        })
    }
}
