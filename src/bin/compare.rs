//! Evaluates both classifiers on the held-out split and on a handful of
//! unseen speech excerpts, side by side.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rhetoric::evaluate::{compare, TextClassifier};
use rhetoric::{dataset, CpuBackend, Label, RnnPredictor, TransformerClassifier};

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Compare the transformer and recurrent classifiers")]
struct Args {
    /// Artifact bundle of the trained recurrent classifier.
    #[arg(long, default_value = "rnn-model")]
    rnn_model: PathBuf,

    /// Directory holding the fine-tuned ONNX transformer and its tokenizer.
    #[arg(long, default_value = "distilbert-model")]
    transformer_model: PathBuf,
}

/// Unseen excerpts with hand-assigned labels, exercised after the held-out
/// split to show how each model generalizes.
const PROBES: &[(&str, Label)] = &[
    (
        "This bill will create jobs and strengthen our infrastructure for future generations",
        Label::Positive,
    ),
    (
        "I cannot support this reckless spending that will burden our children with debt",
        Label::Negative,
    ),
    (
        "The committee will review the proposed amendments during the markup session",
        Label::Neutral,
    ),
    (
        "This legislation provides critical support for healthcare access in rural communities",
        Label::Positive,
    ),
    (
        "These cuts to essential services will devastate working families across the country",
        Label::Negative,
    ),
    (
        "The congressional budget office estimates implementation costs over the next decade",
        Label::Neutral,
    ),
];

fn main() -> Result<()> {
    rhetoric::init_logger();
    let args = Args::parse();

    let device = Default::default();
    let rnn = RnnPredictor::<CpuBackend>::from_artifact(&args.rnn_model, &device)
        .with_context(|| format!("failed to load artifact bundle {}", args.rnn_model.display()))?;
    let transformer = TransformerClassifier::from_dir(&args.transformer_model)
        .with_context(|| {
            format!(
                "failed to load transformer artifact {}",
                args.transformer_model.display()
            )
        })?;

    let examples = dataset::load();
    let (_, test_set) = dataset::stratified_split(&examples, 0.2, dataset::DATASET_SEED);
    info!("evaluating both models on {} held-out examples", test_set.len());

    let comparison = compare(&transformer, &rnn, &test_set)?;
    println!(
        "{} accuracy: {:.4}",
        comparison.first.name, comparison.first.accuracy
    );
    println!(
        "{} accuracy: {:.4}",
        comparison.second.name, comparison.second.accuracy
    );
    println!(
        "difference ({} - {}): {:+.4}",
        comparison.first.name,
        comparison.second.name,
        comparison.difference()
    );

    println!("\nUnseen excerpts:");
    for &(text, expected) in PROBES {
        println!("\n  \"{}\"", text);
        println!("  expected: {}", expected.as_str());
        report(&transformer, text);
        report(&rnn, text);
    }

    Ok(())
}

fn report(model: &dyn TextClassifier, text: &str) {
    match model.predict(text) {
        Ok(prediction) => println!(
            "  {:>11}: {} ({:.4})",
            model.name(),
            prediction.label.as_str(),
            prediction.confidence
        ),
        Err(err) => println!("  {:>11}: prediction failed: {:#}", model.name(), err),
    }
}
