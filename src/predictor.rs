//! Boundary to the trained model that proposes control points.
//!
//! The model is a black box mapping a [`ModelInput`] (two normalized points)
//! to a flat vector of `2K` floats, i.e. `K` normalized points. Any inference
//! backend can be plugged in by implementing [`Predictor`]; closures of the
//! right shape implement it too, which is what the tests use.

use thiserror::Error;

use super::normalize::ModelInput;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum PredictorError {
    /// The model artifact is missing or could not be loaded.
    #[error("{0}")]
    Unavailable(String),

    /// Invocation of an otherwise available model failed.
    #[error("inference error: {0}")]
    Inference(#[source] BoxError),
}

pub trait Predictor {
    fn predict(&mut self, input: &ModelInput) -> Result<Vec<f32>, PredictorError>;
}

impl<F> Predictor for F
where
    F: FnMut(&ModelInput) -> Result<Vec<f32>, PredictorError>,
{
    fn predict(&mut self, input: &ModelInput) -> Result<Vec<f32>, PredictorError> {
        self(input)
    }
}

/// Placeholder used when no backend is compiled in or configured.
#[derive(Debug, Clone)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Unavailable {
            reason: reason.into(),
        }
    }
}

impl Predictor for Unavailable {
    fn predict(&mut self, _input: &ModelInput) -> Result<Vec<f32>, PredictorError> {
        Err(PredictorError::Unavailable(self.reason.clone()))
    }
}
