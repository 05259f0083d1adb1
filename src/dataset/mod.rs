//! Synthetic congressional rhetoric dataset.
//!
//! Supplies a fixed, deterministically shuffled collection of labeled speech
//! excerpts and the stratified train/test split every consumer is expected to
//! apply. The numeric label mapping defined here is authoritative for the
//! whole crate: artifacts, predictions, and reports all use these indices.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

mod speeches;

/// Seed used for the dataset shuffle and the train/test split.
pub const DATASET_SEED: u64 = 42;

/// Number of sentiment classes.
pub const NUM_CLASSES: usize = 3;

/// Sentiment class of a speech excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Label {
    Neutral = 0,
    Positive = 1,
    Negative = 2,
}

impl Label {
    /// The class index used for model targets and artifact records.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Label::index`]; `None` for indices outside the class set.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Neutral),
            1 => Some(Self::Positive),
            2 => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// A single labeled speech excerpt. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub text: String,
    pub label: Label,
}

/// Assembles the full dataset, shuffled with [`DATASET_SEED`].
///
/// The output is identical on every call, so split membership downstream is
/// reproducible.
pub fn load() -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();
    for &(texts, label) in &[
        (speeches::POSITIVE, Label::Positive),
        (speeches::NEGATIVE, Label::Negative),
        (speeches::NEUTRAL, Label::Neutral),
    ] {
        examples.extend(texts.iter().map(|&text| Example {
            text: text.to_owned(),
            label,
        }));
    }

    let mut rng = StdRng::seed_from_u64(DATASET_SEED);
    examples.shuffle(&mut rng);
    examples
}

/// Splits `examples` into `(train, test)` preserving per-class proportions.
///
/// Within each class the members are shuffled with `seed` before the cut, and
/// both output sets are shuffled again so batches are not grouped by class.
/// The same `(examples, test_fraction, seed)` always yields the same split.
pub fn stratified_split(
    examples: &[Example],
    test_fraction: f64,
    seed: u64,
) -> (Vec<Example>, Vec<Example>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut train: Vec<Example> = Vec::new();
    let mut test: Vec<Example> = Vec::new();

    for class in 0..NUM_CLASSES {
        let mut members: Vec<&Example> = examples
            .iter()
            .filter(|e| e.label.index() == class)
            .collect();
        members.shuffle(&mut rng);

        let n_test = ((members.len() as f64) * test_fraction).round() as usize;
        let n_test = n_test.min(members.len());
        test.extend(members[..n_test].iter().map(|e| (*e).clone()));
        train.extend(members[n_test..].iter().map(|e| (*e).clone()));
    }

    train.shuffle(&mut rng);
    test.shuffle(&mut rng);
    (train, test)
}
