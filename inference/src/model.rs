use crate::{InferenceError, Result};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;

/// Name of the model's input tensor: `[batch, input_len]` of i64 ranks.
const INPUT_TENSOR: &str = "sequences";
/// Name of the model's output tensor: `[batch, 1]` of f32 probabilities.
const OUTPUT_TENSOR: &str = "probability";

/// Pre-trained sentiment scoring model behind an ONNX Runtime session.
///
/// Feeds fixed-length rank sequences to the model in one batch and returns
/// one probability in [0, 1] per row. A single inference pass per call;
/// failures are not retried.
pub struct SentimentModel {
    session: Session,
    input_len: usize,
}

impl SentimentModel {
    pub fn load(model_path: &Path, input_len: usize) -> Result<Self> {
        tracing::info!("Loading sentiment model from: {:?}", model_path);

        if !model_path.exists() {
            return Err(InferenceError::ModelLoad(format!(
                "Model file not found: {:?}",
                model_path
            )));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to set optimization level: {}", e)))?
            .with_intra_threads(1)
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to set thread count: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::ModelLoad(format!("Failed to load model: {}", e)))?;

        tracing::info!("Successfully loaded sentiment model");
        Ok(Self { session, input_len })
    }

    /// Score a rectangular batch of padded sequences, one probability per row.
    pub fn score_batch(&mut self, batch: &[Vec<u32>]) -> Result<Vec<f64>> {
        use ort::inputs;

        if batch.is_empty() {
            return Ok(Vec::new());
        }

        for (row, seq) in batch.iter().enumerate() {
            if seq.len() != self.input_len {
                return Err(InferenceError::Inference(format!(
                    "Row {} has length {} but the model expects {}",
                    row,
                    seq.len(),
                    self.input_len
                )));
            }
        }

        let flat: Vec<i64> = batch
            .iter()
            .flat_map(|seq| seq.iter().map(|&rank| rank as i64))
            .collect();
        let input_array = ndarray::Array2::from_shape_vec((batch.len(), self.input_len), flat)
            .map_err(|e| InferenceError::Inference(format!("Failed to create input array: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Inference(format!("Failed to create input tensor: {}", e)))?;

        let scores: Vec<f64> = {
            let outputs = self
                .session
                .run(inputs![INPUT_TENSOR => input_tensor])
                .map_err(|e| InferenceError::Inference(format!("Inference failed: {}", e)))?;

            let (_shape, data) = outputs[OUTPUT_TENSOR]
                .try_extract_tensor::<f32>()
                .map_err(|e| InferenceError::Inference(format!("Failed to extract scores: {}", e)))?;

            data.iter().map(|&p| p as f64).collect()
        };

        if scores.len() != batch.len() {
            return Err(InferenceError::Inference(format!(
                "Model returned {} scores for {} rows",
                scores.len(),
                batch.len()
            )));
        }

        tracing::debug!("Scored batch of {} sequences", batch.len());
        Ok(scores)
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_missing_model_fails() {
        let result = SentimentModel::load(&PathBuf::from("does_not_exist.onnx"), 1500);
        assert!(matches!(result, Err(InferenceError::ModelLoad(_))));
    }

    #[test]
    fn test_score_batch_with_real_model() {
        // Exercises the full session path only when a trained artifact is
        // present next to the crate.
        let model_path = PathBuf::from("sentiment_analysis.onnx");
        if !model_path.exists() {
            println!("Skipping batch scoring test - model file not found");
            return;
        }

        let mut model = SentimentModel::load(&model_path, 1500).unwrap();
        let batch = vec![vec![0u32; 1500], vec![0u32; 1500]];
        let scores = model.score_batch(&batch).unwrap();

        assert_eq!(scores.len(), 2);
        for score in scores {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_ragged_batch_rejected() {
        let model_path = PathBuf::from("sentiment_analysis.onnx");
        if !model_path.exists() {
            println!("Skipping ragged batch test - model file not found");
            return;
        }

        let mut model = SentimentModel::load(&model_path, 1500).unwrap();
        let batch = vec![vec![0u32; 1500], vec![0u32; 10]];
        let result = model.score_batch(&batch);
        assert!(matches!(result, Err(InferenceError::Inference(_))));
    }
}
