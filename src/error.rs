use thiserror::Error;

use super::predictor::PredictorError;

/// Failures of the trajectory pipeline, each naming the stage that failed.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    /// Model or its backing inference resource is missing or failed to load.
    #[error("predictor unavailable: {0}")]
    PredictorUnavailable(String),

    /// Invocation raised or returned no usable output.
    #[error("prediction failed: {reason}")]
    PredictionFailed {
        reason: String,
        #[source]
        source: Option<PredictorError>,
    },

    /// Fewer than two points to densify. Recovered by using the raw points.
    #[error("densification needs at least 2 control points, got {0}")]
    InsufficientControlPoints(usize),

    #[error("densification needs at least 1 point per segment")]
    NoPointsPerSegment,

    /// A spline sample overshoots the `i32` pixel range.
    #[error("densified sample {sample} of segment {segment} is outside the pixel range")]
    SampleOutOfRange { segment: usize, sample: usize },

    /// All input coordinates are zero so the model input cannot be scaled.
    /// Recovered by returning the direct start -> end path.
    #[error("cannot normalize model input: largest coordinate is zero")]
    DegenerateNormalization,

    #[error("randomness must be a finite value >= 0, got {0}")]
    InvalidRandomness(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("rendering failed: {0}")]
    Render(String),
}

impl TrajectoryError {
    pub(crate) fn prediction_failed(reason: impl Into<String>) -> Self {
        TrajectoryError::PredictionFailed {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<PredictorError> for TrajectoryError {
    fn from(err: PredictorError) -> Self {
        match err {
            PredictorError::Unavailable(reason) => TrajectoryError::PredictorUnavailable(reason),
            err @ PredictorError::Inference(_) => TrajectoryError::PredictionFailed {
                reason: "model invocation raised an error".to_owned(),
                source: Some(err),
            },
        }
    }
}
