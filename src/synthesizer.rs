//! Control point synthesis: jitter and normalize the requested endpoints,
//! ask the model for intermediate points, decode them back to pixels and
//! stop once the model has arrived at the destination.

use log::{debug, info};
use rand::Rng;

use super::control_points::ControlPoints;
use super::error::TrajectoryError;
use super::normalize::Normalization;
use super::point::Point;
use super::predictor::Predictor;

/// Per-axis distance to the end point at which a prediction counts as arrived.
pub const DEFAULT_TOLERANCE: u32 = 3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Synthesizer {
    randomness: f64,
    tolerance: u32,
}

impl Synthesizer {
    /// `randomness` is the jitter amplitude added to each input coordinate
    /// and must be finite and non-negative.
    pub fn new(randomness: f64) -> Result<Self, TrajectoryError> {
        if !randomness.is_finite() || randomness < 0.0 {
            return Err(TrajectoryError::InvalidRandomness(randomness));
        }
        Ok(Synthesizer {
            randomness,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Synthesize control points from `start` to `end`.
    ///
    /// The result always begins with `start` and ends with `end` exactly.
    /// If every coordinate is zero the direct two point path is returned
    /// without consulting the predictor or drawing jitter.
    pub fn synthesize<P, R>(
        &self,
        start: Point,
        end: Point,
        predictor: &mut P,
        rng: &mut R,
    ) -> Result<ControlPoints, TrajectoryError>
    where
        P: Predictor + ?Sized,
        R: Rng + ?Sized,
    {
        let normalization = match Normalization::for_endpoints(start, end) {
            Ok(n) => n,
            Err(err @ TrajectoryError::DegenerateNormalization) => {
                info!("{err}, using direct path");
                return Ok(ControlPoints::direct(start, end));
            }
            Err(err) => return Err(err),
        };

        let jittered = [
            start.x as f64 + self.jitter(rng),
            start.y as f64 + self.jitter(rng),
            end.x as f64 + self.jitter(rng),
            end.y as f64 + self.jitter(rng),
        ];
        let input = normalization.normalize(jittered);
        debug!(
            "model input {:?} (scale {})",
            input.values(),
            normalization.largest()
        );

        let predictions = predictor.predict(&input)?;
        let interior = self.decode(&predictions, &normalization, end)?;
        Ok(ControlPoints::with_interior(start, interior, end))
    }

    /// Uniform draw in `[-randomness, randomness)`.
    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * 2.0 * self.randomness - self.randomness
    }

    /// Decode predicted points in order until one lands within `tolerance`
    /// of `end` on both axes; that point and everything after it is dropped.
    fn decode(
        &self,
        predictions: &[f32],
        normalization: &Normalization,
        end: Point,
    ) -> Result<Vec<Point>, TrajectoryError> {
        if predictions.is_empty() {
            return Err(TrajectoryError::prediction_failed("model returned no output"));
        }
        if predictions.len() % 2 != 0 {
            return Err(TrajectoryError::prediction_failed(format!(
                "model returned {} values, expected an even number",
                predictions.len()
            )));
        }

        let mut points = Vec::with_capacity(predictions.len() / 2);
        for (i, pair) in predictions.chunks_exact(2).enumerate() {
            let point = normalization.denormalize(pair[0], pair[1]).ok_or_else(|| {
                TrajectoryError::prediction_failed(format!(
                    "predicted point {i} ({}, {}) is not a valid coordinate",
                    pair[0], pair[1]
                ))
            })?;

            if point.within(end, self.tolerance) {
                debug!("predicted point {i} {point} reached the destination");
                break;
            }
            points.push(point);
        }

        debug!(
            "accepted {} of {} predicted points",
            points.len(),
            predictions.len() / 2
        );
        Ok(points)
    }
}
