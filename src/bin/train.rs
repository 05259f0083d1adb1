//! Trains the recurrent classifier and writes the artifact bundle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use burn::module::Module;
use clap::Parser;
use log::info;

use rhetoric::rnn::artifact;
use rhetoric::vocab::DEFAULT_MAX_VOCAB;
use rhetoric::{dataset, rnn, RnnConfig, TrainingBackend, TrainingConfig, Vocabulary};

#[derive(Parser, Debug)]
#[command(name = "train", about = "Train the recurrent rhetoric classifier")]
struct Args {
    /// Directory the artifact bundle is written to.
    #[arg(long, default_value = "rnn-model")]
    output: PathBuf,

    /// Number of training epochs.
    #[arg(long, default_value_t = TrainingConfig::default().epochs)]
    epochs: usize,

    /// Samples per optimizer step.
    #[arg(long, default_value_t = TrainingConfig::default().batch_size, value_parser = positive_usize)]
    batch_size: usize,

    /// Adam learning rate.
    #[arg(long, default_value_t = TrainingConfig::default().learning_rate)]
    learning_rate: f64,

    /// Seed for mini-batch shuffling.
    #[arg(long, default_value_t = TrainingConfig::default().seed)]
    seed: u64,

    /// Cap on vocabulary size, special tokens included.
    #[arg(long, default_value_t = DEFAULT_MAX_VOCAB)]
    max_vocab: usize,
}

fn positive_usize(value: &str) -> Result<usize, String> {
    let parsed: usize = value.parse().map_err(|e| format!("{}", e))?;
    if parsed == 0 {
        return Err("must be at least 1".into());
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    rhetoric::init_logger();
    let args = Args::parse();

    let examples = dataset::load();
    let (train_set, test_set) = dataset::stratified_split(&examples, 0.2, dataset::DATASET_SEED);
    info!(
        "dataset loaded: {} training examples, {} held out",
        train_set.len(),
        test_set.len()
    );

    let vocab = Vocabulary::build(train_set.iter().map(|e| e.text.as_str()), args.max_vocab);
    info!("vocabulary built: {} tokens", vocab.len());

    let model_config = RnnConfig::new(vocab.len());
    let training = TrainingConfig {
        epochs: args.epochs,
        batch_size: args.batch_size,
        learning_rate: args.learning_rate,
        seed: args.seed,
    };

    let device = Default::default();
    let outcome = rnn::train::<TrainingBackend>(
        &model_config,
        &training,
        &vocab,
        &train_set,
        &test_set,
        &device,
    );
    println!("model parameters: {}", outcome.model.num_params());
    println!("best validation accuracy: {:.4}", outcome.best_accuracy);

    artifact::save(&outcome.model, &vocab, &model_config, &args.output)
        .with_context(|| format!("failed to write artifact bundle to {}", args.output.display()))?;
    println!("artifact bundle written to {}", args.output.display());

    Ok(())
}
