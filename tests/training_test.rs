use rhetoric::vocab::DEFAULT_MAX_VOCAB;
use rhetoric::{
    rnn, Example, Label, RnnConfig, TrainingBackend, TrainingConfig, Vocabulary,
};

fn tiny_corpus() -> Vec<Example> {
    let rows: [(&str, Label); 9] = [
        ("this bill strengthens families and creates jobs", Label::Positive),
        ("proud to support this vital investment", Label::Positive),
        ("this legislation delivers real progress", Label::Positive),
        ("this reckless bill will devastate workers", Label::Negative),
        ("i oppose this disastrous irresponsible measure", Label::Negative),
        ("this proposal will burden families with debt", Label::Negative),
        ("the committee will review the amendment", Label::Neutral),
        ("the hearing is scheduled for next week", Label::Neutral),
        ("the report outlines the implementation timeline", Label::Neutral),
    ];
    rows.iter()
        .map(|&(text, label)| Example {
            text: text.to_owned(),
            label,
        })
        .collect()
}

fn short_run() -> TrainingConfig {
    TrainingConfig {
        epochs: 3,
        batch_size: 4,
        ..TrainingConfig::default()
    }
}

#[test]
fn test_training_runs_to_completion() {
    let corpus = tiny_corpus();
    let vocab = Vocabulary::build(corpus.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    let config = RnnConfig::new(vocab.len());

    let outcome = rnn::train::<TrainingBackend>(
        &config,
        &short_run(),
        &vocab,
        &corpus,
        &corpus,
        &Default::default(),
    );

    assert!(
        (0.0..=1.0).contains(&outcome.best_accuracy),
        "accuracy out of range: {}",
        outcome.best_accuracy
    );
}

#[test]
fn test_best_snapshot_predicts_over_the_label_set() {
    let corpus = tiny_corpus();
    let vocab = Vocabulary::build(corpus.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    let config = RnnConfig::new(vocab.len());

    let outcome = rnn::train::<TrainingBackend>(
        &config,
        &short_run(),
        &vocab,
        &corpus,
        &corpus,
        &Default::default(),
    );

    use burn::module::AutodiffModule;
    use burn::tensor::{Int, Tensor, TensorData};
    use rhetoric::MAX_SEQ_LEN;

    let model = outcome.model.valid();
    let sequence: Vec<i64> = vocab
        .encode("the committee will review the bill")
        .into_iter()
        .map(i64::from)
        .collect();
    let input = Tensor::<rhetoric::CpuBackend, 2, Int>::from_data(
        TensorData::new(sequence, [1, MAX_SEQ_LEN]),
        &Default::default(),
    );
    let row: Vec<f32> = model
        .probabilities(input)
        .to_data()
        .convert::<f32>()
        .to_vec()
        .unwrap();

    assert_eq!(row.len(), rhetoric::NUM_CLASSES);
    let sum: f32 = row.iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
    assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
}

#[test]
fn test_retained_accuracy_is_a_running_maximum() {
    let corpus = tiny_corpus();
    let vocab = Vocabulary::build(corpus.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    let config = RnnConfig::new(vocab.len());

    // Identically seeded runs share their epoch trajectory, so a longer run's
    // retained checkpoint can only match or beat every shorter prefix.
    let mut previous_best = -1.0f64;
    for epochs in 1..=3 {
        let training = TrainingConfig {
            epochs,
            batch_size: 4,
            ..TrainingConfig::default()
        };
        let outcome = rnn::train::<TrainingBackend>(
            &config,
            &training,
            &vocab,
            &corpus,
            &corpus,
            &Default::default(),
        );
        assert!(
            outcome.best_accuracy >= previous_best,
            "checkpoint regressed: {} epochs retained {:.4}, previous {:.4}",
            epochs,
            outcome.best_accuracy,
            previous_best
        );
        previous_best = outcome.best_accuracy;
    }
}

#[test]
fn test_same_seed_trains_identically() {
    let corpus = tiny_corpus();
    let vocab = Vocabulary::build(corpus.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    let config = RnnConfig::new(vocab.len());
    let training = TrainingConfig {
        epochs: 2,
        batch_size: 4,
        ..TrainingConfig::default()
    };

    let first = rnn::train::<TrainingBackend>(
        &config,
        &training,
        &vocab,
        &corpus,
        &corpus,
        &Default::default(),
    );
    let second = rnn::train::<TrainingBackend>(
        &config,
        &training,
        &vocab,
        &corpus,
        &corpus,
        &Default::default(),
    );

    // Batch order is seeded, so the validation trajectory is too.
    assert_eq!(first.best_accuracy, second.best_accuracy);
}
