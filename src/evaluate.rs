//! Uniform prediction surface over both classifiers plus comparison reports.
//!
//! The evaluator treats each model as an opaque `predict(text)` capability:
//! one delegates to the ONNX transformer session, the other to the recurrent
//! network loaded from an artifact bundle.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor, TensorData};

use crate::dataset::{Example, Label};
use crate::metrics::accuracy;
use crate::rnn::artifact;
use crate::rnn::artifact::ArtifactError;
use crate::rnn::model::RhetoricRnn;
use crate::transformer::TransformerClassifier;
use crate::vocab::{Vocabulary, MAX_SEQ_LEN};

/// A single classification outcome: the arg-max class and its probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    pub confidence: f32,
}

/// The capability both classifiers are consumed through.
pub trait TextClassifier {
    fn name(&self) -> &str;
    fn predict(&self, text: &str) -> Result<Prediction>;
}

/// Recurrent classifier behind the [`TextClassifier`] capability. Holds the
/// model together with the vocabulary it was trained with, so inference can
/// never encode against a mismatched mapping.
pub struct RnnPredictor<B: Backend> {
    model: RhetoricRnn<B>,
    vocab: Vocabulary,
    device: B::Device,
}

impl<B: Backend> RnnPredictor<B> {
    pub fn new(model: RhetoricRnn<B>, vocab: Vocabulary, device: B::Device) -> Self {
        Self { model, vocab, device }
    }

    /// Loads a persisted artifact bundle; configuration mismatches surface
    /// here, before any prediction runs.
    pub fn from_artifact(dir: &Path, device: &B::Device) -> Result<Self, ArtifactError> {
        let (model, vocab, _config) = artifact::load::<B>(dir, device)?;
        Ok(Self::new(model, vocab, device.clone()))
    }
}

impl<B: Backend> TextClassifier for RnnPredictor<B> {
    fn name(&self) -> &str {
        "rnn"
    }

    fn predict(&self, text: &str) -> Result<Prediction> {
        let sequence: Vec<i64> = self
            .vocab
            .encode(text)
            .into_iter()
            .map(i64::from)
            .collect();
        let input = Tensor::<B, 2, Int>::from_data(
            TensorData::new(sequence, [1, MAX_SEQ_LEN]),
            &self.device,
        );

        let row: Vec<f32> = self
            .model
            .probabilities(input)
            .to_data()
            .convert::<f32>()
            .to_vec()
            .map_err(|e| anyhow!("failed to read probability row: {:?}", e))?;
        best_class(&row)
    }
}

impl TextClassifier for TransformerClassifier {
    fn name(&self) -> &str {
        "distilbert"
    }

    fn predict(&self, text: &str) -> Result<Prediction> {
        let (class, confidence) = self.classify(text)?;
        let label = Label::from_index(class)
            .ok_or_else(|| anyhow!("model emitted class {} outside the label set", class))?;
        Ok(Prediction { label, confidence })
    }
}

/// Accuracy per model over a labeled example set.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAccuracy {
    pub name: String,
    pub accuracy: f64,
}

/// Runs `model` over `examples` and reports exact-match accuracy.
pub fn evaluate(model: &dyn TextClassifier, examples: &[Example]) -> Result<ModelAccuracy> {
    let mut predicted = Vec::with_capacity(examples.len());
    let mut expected = Vec::with_capacity(examples.len());
    for example in examples {
        let prediction = model
            .predict(&example.text)
            .with_context(|| format!("{} failed on held-out example", model.name()))?;
        predicted.push(prediction.label.index());
        expected.push(example.label.index());
    }
    Ok(ModelAccuracy {
        name: model.name().to_owned(),
        accuracy: accuracy(&predicted, &expected),
    })
}

/// Side-by-side accuracies and their difference (first minus second).
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: ModelAccuracy,
    pub second: ModelAccuracy,
}

impl Comparison {
    pub fn difference(&self) -> f64 {
        self.first.accuracy - self.second.accuracy
    }
}

pub fn compare(
    first: &dyn TextClassifier,
    second: &dyn TextClassifier,
    examples: &[Example],
) -> Result<Comparison> {
    Ok(Comparison {
        first: evaluate(first, examples)?,
        second: evaluate(second, examples)?,
    })
}

fn best_class(probabilities: &[f32]) -> Result<Prediction> {
    let (class, confidence) = probabilities
        .iter()
        .copied()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or_else(|| anyhow!("empty probability row"))?;
    let label = Label::from_index(class)
        .ok_or_else(|| anyhow!("model emitted class {} outside the label set", class))?;
    Ok(Prediction { label, confidence })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_class_picks_the_max() {
        let prediction = best_class(&[0.1, 0.7, 0.2]).unwrap();
        assert_eq!(prediction.label, Label::Positive);
        assert!((prediction.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_best_class_rejects_empty_row() {
        assert!(best_class(&[]).is_err());
    }
}
