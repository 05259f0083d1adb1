use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::info;
use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor as OrtTensor;
use tokenizers::Tokenizer;

use super::error::TransformerError;
use crate::dataset::NUM_CLASSES;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// Sequence length the fine-tuned encoder was exported with; longer inputs
/// are truncated, never rejected.
const MAX_SEQUENCE_LENGTH: usize = 512;

/// A fine-tuned transformer sequence classifier consumed as an opaque ONNX
/// artifact.
///
/// The artifact directory is expected to hold `model.onnx` (a
/// sequence-classification export producing `[batch, 3]` logits over
/// `input_ids`/`attention_mask`) and `tokenizer.json`. Fine-tuning the model
/// happens elsewhere; this type only loads and runs it.
#[derive(Debug)]
pub struct TransformerClassifier {
    pub model_path: String,
    pub tokenizer_path: String,
    tokenizer: Arc<Tokenizer>,
    session: Arc<Session>,
}

impl TransformerClassifier {
    /// Loads the artifact from `dir` with default runtime settings.
    pub fn from_dir(dir: &Path) -> Result<Self, TransformerError> {
        Self::with_runtime(dir, &RuntimeConfig::default())
    }

    /// Loads the artifact from `dir` with explicit runtime settings.
    pub fn with_runtime(dir: &Path, runtime: &RuntimeConfig) -> Result<Self, TransformerError> {
        let model_path = dir.join("model.onnx");
        let tokenizer_path = dir.join("tokenizer.json");

        if !model_path.exists() {
            return Err(TransformerError::Build(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }
        if !tokenizer_path.exists() {
            return Err(TransformerError::Build(format!(
                "tokenizer file not found: {}",
                tokenizer_path.display()
            )));
        }

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| TransformerError::Tokenizer(e.to_string()))?;
        let session = create_session_builder(runtime)?.commit_from_file(&model_path)?;

        info!("transformer classifier loaded from {}", dir.display());
        Ok(Self {
            model_path: model_path.to_string_lossy().to_string(),
            tokenizer_path: tokenizer_path.to_string_lossy().to_string(),
            tokenizer: Arc::new(tokenizer),
            session: Arc::new(session),
        })
    }

    /// Classifies `text`, returning the arg-max class index and its softmax
    /// probability.
    pub fn classify(&self, text: &str) -> Result<(usize, f32), TransformerError> {
        if text.is_empty() {
            return Err(TransformerError::Validation(
                "Input text cannot be empty".into(),
            ));
        }

        let tokens = self.tokenize(text)?;
        let probabilities = self.run(&tokens)?;

        let (class, confidence) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| TransformerError::Model("model produced no logits".into()))?;

        Ok((class, confidence))
    }

    /// Tokenizes `text`, truncating at the model's sequence limit.
    fn tokenize(&self, text: &str) -> Result<Vec<u32>, TransformerError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| TransformerError::Tokenizer(e.to_string()))?;

        let mut token_ids = encoding.get_ids().to_vec();
        token_ids.truncate(MAX_SEQUENCE_LENGTH);
        Ok(token_ids)
    }

    /// Runs the session over the token ids and returns the softmax-normalized
    /// class distribution.
    fn run(&self, tokens: &[u32]) -> Result<Vec<f32>, TransformerError> {
        let input_array = Array2::from_shape_vec(
            (1, tokens.len()),
            tokens.iter().map(|&id| id as i64).collect(),
        )
        .map_err(|e| TransformerError::Model(format!("Failed to create input array: {}", e)))?;
        let input_dyn = input_array.into_dyn();
        let input_ids = input_dyn.as_standard_layout();

        let mask_array = Array2::from_shape_vec(
            (1, tokens.len()),
            tokens.iter().map(|&id| if id == 0 { 0i64 } else { 1i64 }).collect(),
        )
        .map_err(|e| TransformerError::Model(format!("Failed to create mask array: {}", e)))?;
        let mask_dyn = mask_array.into_dyn();
        let attention_mask = mask_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            "input_ids",
            OrtTensor::from_array(&input_ids)
                .map_err(|e| TransformerError::Model(format!("Failed to create input tensor: {}", e)))?,
        );
        input_tensors.insert(
            "attention_mask",
            OrtTensor::from_array(&attention_mask)
                .map_err(|e| TransformerError::Model(format!("Failed to create mask tensor: {}", e)))?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| TransformerError::Model(format!("Failed to run model: {}", e)))?;
        let logits = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| TransformerError::Model(format!("Failed to extract output tensor: {}", e)))?;

        let row: Vec<f32> = logits.iter().copied().take(NUM_CLASSES).collect();
        if row.len() != NUM_CLASSES {
            return Err(TransformerError::Model(format!(
                "expected {} logits, got {}",
                NUM_CLASSES,
                row.len()
            )));
        }
        Ok(softmax(&row))
    }
}

/// Numerically stable softmax over a logit row.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_is_a_simplex() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_softmax_handles_large_logits() {
        let probs = softmax(&[1000.0, 1000.0, 1000.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_artifact_dir_is_a_build_error() {
        let result = TransformerClassifier::from_dir(Path::new("/nonexistent/model-dir"));
        assert!(matches!(result, Err(TransformerError::Build(_))));
    }
}
