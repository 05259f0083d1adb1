//! Stacked two-layer LSTM classifier.
//!
//! Architecture: embedding lookup (padding positions masked out) → LSTM over
//! the full sequence → second LSTM over the first layer's output sequence →
//! final time-step hidden state → dropout → linear head over the classes.
//! The model is stateless between calls; no hidden state is carried across
//! batches.

use burn::module::Module;
use burn::nn::{
    Dropout, DropoutConfig, Embedding, EmbeddingConfig, Linear, LinearConfig, Lstm, LstmConfig,
};
use burn::tensor::activation::softmax;
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor};
use serde::{Deserialize, Serialize};

use crate::dataset::NUM_CLASSES;
use crate::vocab::PAD_IDX;

/// Hyperparameters required, verbatim, to reconstruct the model shape before
/// installing saved parameters. Unknown fields in a persisted record are
/// rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RnnConfig {
    pub vocab_size: usize,
    pub embedding_dim: usize,
    pub lstm1_units: usize,
    pub lstm2_units: usize,
    pub dropout_rate: f64,
    pub num_classes: usize,
}

impl RnnConfig {
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            embedding_dim: 100,
            lstm1_units: 64,
            lstm2_units: 32,
            dropout_rate: 0.3,
            num_classes: NUM_CLASSES,
        }
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> RhetoricRnn<B> {
        RhetoricRnn {
            embedding: EmbeddingConfig::new(self.vocab_size, self.embedding_dim).init(device),
            lstm1: LstmConfig::new(self.embedding_dim, self.lstm1_units, true).init(device),
            lstm2: LstmConfig::new(self.lstm1_units, self.lstm2_units, true).init(device),
            dropout: DropoutConfig::new(self.dropout_rate).init(),
            head: LinearConfig::new(self.lstm2_units, self.num_classes).init(device),
        }
    }
}

#[derive(Module, Debug)]
pub struct RhetoricRnn<B: Backend> {
    embedding: Embedding<B>,
    lstm1: Lstm<B>,
    lstm2: Lstm<B>,
    dropout: Dropout,
    head: Linear<B>,
}

impl<B: Backend> RhetoricRnn<B> {
    /// `[batch, seq_len]` token indices → `[batch, num_classes]` logits.
    ///
    /// Dropout is active only on an autodiff backend, so validation and
    /// inference passes run with it disabled.
    pub fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch, seq_len] = tokens.dims();

        // Zero out padding positions so the pad embedding row contributes no
        // activation and receives no gradient.
        let mask = tokens
            .clone()
            .not_equal_elem(PAD_IDX as i64)
            .float()
            .unsqueeze_dim::<3>(2);

        let embedded = self.embedding.forward(tokens) * mask;
        let (sequence1, _) = self.lstm1.forward(embedded, None);
        let (sequence2, _) = self.lstm2.forward(sequence1, None);

        let [_, _, hidden] = sequence2.dims();
        let last = sequence2
            .slice([0..batch, seq_len - 1..seq_len])
            .reshape([batch, hidden]);

        self.head.forward(self.dropout.forward(last))
    }

    /// Softmax-normalized class distribution, one simplex row per example.
    pub fn probabilities(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        softmax(self.forward(tokens), 1)
    }
}
