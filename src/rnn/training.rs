//! Training loop with best-checkpoint retention.
//!
//! `Init → {TrainEpoch → ValidateEpoch}×N → Done`. Every epoch trains over
//! shuffled mini-batches and then scores the held-out split in inference
//! mode; the parameter snapshot with the strictly best validation accuracy
//! seen so far is the one a run yields, not the final epoch's. There is no
//! early stopping, no learning-rate schedule, and no gradient clipping; a
//! diverging loss is a fatal condition, not a recoverable one.

use burn::module::AutodiffModule;
use burn::nn::loss::CrossEntropyLossConfig;
use burn::optim::{AdamConfig, GradientsParams, Optimizer};
use burn::tensor::backend::{AutodiffBackend, Backend};
use burn::tensor::{ElementConversion, Int, Tensor, TensorData};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::dataset::Example;
use crate::metrics::{accuracy, ConfusionMatrix};
use crate::rnn::model::{RhetoricRnn, RnnConfig};
use crate::vocab::{Vocabulary, MAX_SEQ_LEN};

/// How often (in epochs) progress and the confusion matrix are logged.
const REPORT_EVERY: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of full passes over the training data. Always runs to
    /// completion.
    pub epochs: usize,
    /// Samples per optimizer step.
    pub batch_size: usize,
    /// Fixed Adam learning rate.
    pub learning_rate: f64,
    /// Seed for parameter initialization, dropout, and mini-batch shuffling.
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 50,
            batch_size: 32,
            learning_rate: 0.1,
            seed: 42,
        }
    }
}

/// Outcome of a training run: the best snapshot and its validation accuracy.
pub struct TrainOutcome<B: AutodiffBackend> {
    pub model: RhetoricRnn<B>,
    pub best_accuracy: f64,
}

struct EncodedExample {
    sequence: Vec<u32>,
    label: usize,
}

/// Trains a fresh model from `model_config` and returns the checkpoint with
/// the best validation accuracy. Ties keep the earlier snapshot.
pub fn train<B: AutodiffBackend>(
    model_config: &RnnConfig,
    training: &TrainingConfig,
    vocab: &Vocabulary,
    train_set: &[Example],
    val_set: &[Example],
    device: &B::Device,
) -> TrainOutcome<B> {
    let train_items = encode_set(vocab, train_set);
    let val_items = encode_set(vocab, val_set);

    // Covers parameter initialization and dropout, so a run is reproducible
    // from its configuration alone.
    B::seed(training.seed);

    let mut model: RhetoricRnn<B> = model_config.init(device);
    let mut optimizer = AdamConfig::new().init::<B, RhetoricRnn<B>>();
    let loss_fn = CrossEntropyLossConfig::new().init(device);
    let mut rng = StdRng::seed_from_u64(training.seed);

    let mut best_model = model.clone();
    // Below any real accuracy, so the first validation always installs a
    // snapshot even when the model gets everything wrong.
    let mut best_accuracy = -1.0f64;

    for epoch in 1..=training.epochs {
        let mut order: Vec<usize> = (0..train_items.len()).collect();
        order.shuffle(&mut rng);

        let mut total_loss = 0.0f64;
        let mut batches = 0usize;
        for chunk in order.chunks(training.batch_size) {
            let (inputs, targets) = batch_tensors::<B>(&train_items, chunk, device);
            let logits = model.forward(inputs);
            let loss = loss_fn.forward(logits, targets);
            total_loss += f64::from(loss.clone().into_scalar().elem::<f32>());

            let grads = GradientsParams::from_grads(loss.backward(), &model);
            model = optimizer.step(training.learning_rate, model, grads);
            batches += 1;
        }

        // Inference mode: inner backend, dropout off, batch order.
        let (val_accuracy, matrix) =
            validate(&model.valid(), &val_items, training.batch_size, device);

        if val_accuracy > best_accuracy {
            best_model = model.clone();
            best_accuracy = val_accuracy;
        }

        if epoch % REPORT_EVERY == 0 {
            let mean_loss = if batches > 0 {
                total_loss / batches as f64
            } else {
                0.0
            };
            info!(
                "epoch {}/{}, loss: {:.4}, val acc: {:.4}",
                epoch, training.epochs, mean_loss, val_accuracy
            );
            info!("confusion matrix:\n{}", matrix);
        }
    }

    TrainOutcome {
        model: best_model,
        best_accuracy: best_accuracy.max(0.0),
    }
}

/// Scores `items` in batch order and returns accuracy with the confusion
/// matrix behind it.
fn validate<B: Backend>(
    model: &RhetoricRnn<B>,
    items: &[EncodedExample],
    batch_size: usize,
    device: &B::Device,
) -> (f64, ConfusionMatrix) {
    let mut predicted: Vec<usize> = Vec::with_capacity(items.len());
    let mut expected: Vec<usize> = Vec::with_capacity(items.len());

    let order: Vec<usize> = (0..items.len()).collect();
    for chunk in order.chunks(batch_size) {
        let (inputs, _) = batch_tensors::<B>(items, chunk, device);
        // Malformed model output is fatal, like a diverging loss.
        let classes = model
            .forward(inputs)
            .argmax(1)
            .to_data()
            .convert::<i64>()
            .to_vec::<i64>()
            .expect("argmax output must read back as an i64 vector");
        predicted.extend(classes.into_iter().map(|class| class as usize));
        expected.extend(chunk.iter().map(|&i| items[i].label));
    }

    let matrix = ConfusionMatrix::from_pairs(expected.iter().copied().zip(predicted.iter().copied()));
    (accuracy(&predicted, &expected), matrix)
}

fn encode_set(vocab: &Vocabulary, examples: &[Example]) -> Vec<EncodedExample> {
    examples
        .iter()
        .map(|example| EncodedExample {
            sequence: vocab.encode(&example.text),
            label: example.label.index(),
        })
        .collect()
}

fn batch_tensors<B: Backend>(
    items: &[EncodedExample],
    chunk: &[usize],
    device: &B::Device,
) -> (Tensor<B, 2, Int>, Tensor<B, 1, Int>) {
    let n = chunk.len();
    let mut ids: Vec<i64> = Vec::with_capacity(n * MAX_SEQ_LEN);
    let mut labels: Vec<i64> = Vec::with_capacity(n);
    for &index in chunk {
        ids.extend(items[index].sequence.iter().map(|&id| i64::from(id)));
        labels.push(items[index].label as i64);
    }

    (
        Tensor::from_data(TensorData::new(ids, [n, MAX_SEQ_LEN]), device),
        Tensor::from_data(TensorData::new(labels, [n]), device),
    )
}
