//! ONNX model backend for [`Predictor`], enabled with the `onnx` feature.
//!
//! The model is loaded and optimized once; every prediction runs it on a
//! `[1, 2, 2]` f32 tensor and returns the first output flattened.

use std::path::Path;

use log::info;
use tract_onnx::prelude::*;

use super::normalize::ModelInput;
use super::predictor::{Predictor, PredictorError};

pub struct OnnxPredictor {
    model: TypedRunnableModel<TypedModel>,
}

impl OnnxPredictor {
    /// Load the model at `path`. Fails with `PredictorError::Unavailable`
    /// if the file does not exist or cannot be loaded.
    pub fn load(path: &Path) -> Result<Self, PredictorError> {
        if !path.is_file() {
            return Err(PredictorError::Unavailable(format!(
                "ONNX model not found at '{}'",
                path.display()
            )));
        }

        let model = Self::build(path).map_err(|e| {
            PredictorError::Unavailable(format!("failed to load '{}': {e}", path.display()))
        })?;
        info!("loaded model {}", path.display());
        Ok(OnnxPredictor { model })
    }

    fn build(path: &Path) -> TractResult<TypedRunnableModel<TypedModel>> {
        let [batch, points, coords] = ModelInput::SHAPE;
        tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(0, f32::fact([batch, points, coords]).into())?
            .into_optimized()?
            .into_runnable()
    }

    fn run(&self, input: &ModelInput) -> TractResult<Vec<f32>> {
        let [batch, points, coords] = ModelInput::SHAPE;
        let tensor: Tensor = tract_ndarray::Array3::from_shape_vec(
            (batch, points, coords),
            input.values().to_vec(),
        )?
        .into();
        let outputs = self.model.run(tvec!(tensor.into()))?;
        let output = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("model produced no outputs"))?;
        Ok(output.to_array_view::<f32>()?.iter().copied().collect())
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&mut self, input: &ModelInput) -> Result<Vec<f32>, PredictorError> {
        self.run(input)
            .map_err(|e| PredictorError::Inference(e.into()))
    }
}
