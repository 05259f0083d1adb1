//! Comparing two text-classification approaches on a synthetic three-class
//! sentiment dataset of congressional speech excerpts: a fine-tuned
//! transformer encoder (consumed as an externally trained ONNX artifact) and
//! a hand-rolled two-layer recurrent network trained in-process.
//!
//! # Pipeline
//!
//! Dataset → stratified split → vocabulary + sequence encoding → training
//! loop with best-checkpoint retention → artifact bundle → evaluation.
//!
//! ```no_run
//! use rhetoric::{dataset, rnn, RnnConfig, TrainingBackend, TrainingConfig, Vocabulary};
//!
//! let examples = dataset::load();
//! let (train_set, test_set) = dataset::stratified_split(&examples, 0.2, dataset::DATASET_SEED);
//!
//! let vocab = Vocabulary::build(train_set.iter().map(|e| e.text.as_str()), 10_000);
//! let config = RnnConfig::new(vocab.len());
//!
//! let device = Default::default();
//! let outcome = rnn::train::<TrainingBackend>(
//!     &config,
//!     &TrainingConfig::default(),
//!     &vocab,
//!     &train_set,
//!     &test_set,
//!     &device,
//! );
//! println!("best validation accuracy: {:.4}", outcome.best_accuracy);
//! ```

pub mod dataset;
pub mod evaluate;
pub mod metrics;
pub mod rnn;
mod runtime;
pub mod transformer;
pub mod vocab;

pub use dataset::{Example, Label, DATASET_SEED, NUM_CLASSES};
pub use evaluate::{ModelAccuracy, Prediction, RnnPredictor, TextClassifier};
pub use rnn::{ArtifactError, RhetoricRnn, RnnConfig, TrainOutcome, TrainingConfig};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use transformer::{TransformerClassifier, TransformerError};
pub use vocab::{Vocabulary, MAX_SEQ_LEN};

/// CPU backend used for inference.
pub type CpuBackend = burn::backend::ndarray::NdArray;
/// Autodiff wrapper over [`CpuBackend`] used for training.
pub type TrainingBackend = burn::backend::Autodiff<CpuBackend>;

pub fn init_logger() {
    env_logger::init();
}
