//! Persisted artifact bundle for the recurrent classifier.
//!
//! A bundle is a directory with three co-located files: `model.bin` (the raw
//! parameter snapshot), `vocab.json` (the frozen vocabulary), and
//! `config.json` (the hyperparameter record). Loading validates the
//! configuration against the vocabulary before any parameters are installed,
//! so a mismatched bundle fails immediately instead of producing garbage
//! predictions.

use std::fs;
use std::io;
use std::path::Path;

use burn::module::Module;
use burn::record::{BinFileRecorder, FullPrecisionSettings, Recorder, RecorderError};
use burn::tensor::backend::Backend;
use log::info;

use crate::dataset::NUM_CLASSES;
use crate::rnn::model::{RhetoricRnn, RnnConfig};
use crate::vocab::Vocabulary;

const MODEL_STEM: &str = "model";
const VOCAB_FILE: &str = "vocab.json";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parameter record error: {0}")]
    Record(#[from] RecorderError),
    #[error("malformed bundle file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("configuration mismatch: {0}")]
    ConfigMismatch(String),
}

/// Writes the parameter snapshot, vocabulary, and configuration to `dir`.
pub fn save<B: Backend>(
    model: &RhetoricRnn<B>,
    vocab: &Vocabulary,
    config: &RnnConfig,
    dir: &Path,
) -> Result<(), ArtifactError> {
    fs::create_dir_all(dir)?;

    let recorder = BinFileRecorder::<FullPrecisionSettings>::new();
    recorder.record(model.clone().into_record(), dir.join(MODEL_STEM))?;
    fs::write(dir.join(VOCAB_FILE), serde_json::to_string_pretty(vocab)?)?;
    fs::write(dir.join(CONFIG_FILE), serde_json::to_string_pretty(config)?)?;

    info!("artifact bundle written to {}", dir.display());
    Ok(())
}

/// Reads a bundle back and reconstructs the model it was saved from.
///
/// The configuration is validated against the vocabulary first; the model
/// shape is rebuilt from the configuration and only then are the saved
/// parameters installed, so the result predicts bit-identically to the model
/// that was saved.
pub fn load<B: Backend>(
    dir: &Path,
    device: &B::Device,
) -> Result<(RhetoricRnn<B>, Vocabulary, RnnConfig), ArtifactError> {
    let config: RnnConfig = serde_json::from_str(&fs::read_to_string(dir.join(CONFIG_FILE))?)?;
    let vocab: Vocabulary = serde_json::from_str(&fs::read_to_string(dir.join(VOCAB_FILE))?)?;
    validate(&config, &vocab)?;

    let recorder = BinFileRecorder::<FullPrecisionSettings>::new();
    let record = recorder.load(dir.join(MODEL_STEM), device)?;
    let model = config.init::<B>(device).load_record(record);

    info!("artifact bundle loaded from {}", dir.display());
    Ok((model, vocab, config))
}

fn validate(config: &RnnConfig, vocab: &Vocabulary) -> Result<(), ArtifactError> {
    if !vocab.is_well_formed() {
        return Err(ArtifactError::ConfigMismatch(
            "vocabulary is missing its reserved special tokens or has an inconsistent index map"
                .into(),
        ));
    }
    if config.vocab_size != vocab.len() {
        return Err(ArtifactError::ConfigMismatch(format!(
            "config vocab_size {} does not match vocabulary of {} entries",
            config.vocab_size,
            vocab.len()
        )));
    }
    if config.num_classes != NUM_CLASSES {
        return Err(ArtifactError::ConfigMismatch(format!(
            "config num_classes {} does not match the {} dataset classes",
            config.num_classes, NUM_CLASSES
        )));
    }
    if config.embedding_dim == 0 || config.lstm1_units == 0 || config.lstm2_units == 0 {
        return Err(ArtifactError::ConfigMismatch(
            "model dimensions must be non-zero".into(),
        ));
    }
    Ok(())
}
