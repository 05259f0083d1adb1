use rhetoric::vocab::{DEFAULT_MAX_VOCAB, PAD_IDX, UNK_IDX};
use rhetoric::{dataset, Vocabulary, DATASET_SEED, MAX_SEQ_LEN, NUM_CLASSES};

#[test]
fn test_dataset_to_vocabulary_to_encoding() {
    let examples = dataset::load();
    let (train, test) = dataset::stratified_split(&examples, 0.2, DATASET_SEED);
    assert!(!train.is_empty());
    assert!(!test.is_empty());

    let vocab = Vocabulary::build(train.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    assert!(vocab.is_well_formed());
    assert!(vocab.len() > 2, "corpus produced no real tokens");

    for example in train.iter().chain(test.iter()) {
        let sequence = vocab.encode(&example.text);
        assert_eq!(sequence.len(), MAX_SEQ_LEN);
        assert!(sequence.iter().all(|&idx| (idx as usize) < vocab.len()));
    }
}

#[test]
fn test_training_split_has_no_unknown_tokens() {
    // The vocabulary is built from the training split, so every training
    // token must resolve without the <UNK> fallback.
    let examples = dataset::load();
    let (train, _) = dataset::stratified_split(&examples, 0.2, DATASET_SEED);
    let vocab = Vocabulary::build(train.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);

    for example in &train {
        let sequence = vocab.encode(&example.text);
        let real = example.text.split_whitespace().count().min(MAX_SEQ_LEN);
        assert!(sequence[..real].iter().all(|&idx| idx != UNK_IDX && idx != PAD_IDX));
    }
}

#[test]
fn test_split_labels_cover_every_class() {
    let examples = dataset::load();
    let (train, test) = dataset::stratified_split(&examples, 0.2, DATASET_SEED);
    for class in 0..NUM_CLASSES {
        assert!(train.iter().any(|e| e.label.index() == class));
        assert!(test.iter().any(|e| e.label.index() == class));
    }
}

#[test]
fn test_encoding_is_stable_across_runs() {
    let examples = dataset::load();
    let (train, _) = dataset::stratified_split(&examples, 0.2, DATASET_SEED);
    let vocab_a = Vocabulary::build(train.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    let vocab_b = Vocabulary::build(train.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB);
    assert_eq!(vocab_a, vocab_b);
    assert_eq!(
        vocab_a.encode(&train[0].text),
        vocab_b.encode(&train[0].text)
    );
}
