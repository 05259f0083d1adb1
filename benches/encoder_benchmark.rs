use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rhetoric::vocab::DEFAULT_MAX_VOCAB;
use rhetoric::{dataset, Vocabulary, DATASET_SEED};

fn training_vocabulary() -> Vocabulary {
    let examples = dataset::load();
    let (train, _) = dataset::stratified_split(&examples, 0.2, DATASET_SEED);
    Vocabulary::build(train.iter().map(|e| e.text.as_str()), DEFAULT_MAX_VOCAB)
}

fn bench_vocabulary_build(c: &mut Criterion) {
    let examples = dataset::load();
    let mut group = c.benchmark_group("VocabularyBuild");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("full_dataset", |b| {
        b.iter(|| {
            Vocabulary::build(
                black_box(examples.iter().map(|e| e.text.as_str())),
                DEFAULT_MAX_VOCAB,
            )
        })
    });

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let vocab = training_vocabulary();
    let mut group = c.benchmark_group("Encoding");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Typical excerpt, well under the sequence limit
    group.bench_function("short_text", |b| {
        b.iter(|| {
            vocab.encode(black_box(
                "the committee will review the proposed amendments during the markup session",
            ))
        })
    });

    // Forces truncation at the sequence limit
    let long_text = "this legislation provides critical support for working families ".repeat(60);
    group.bench_function("truncated_text", |b| {
        b.iter(|| vocab.encode(black_box(&long_text)))
    });

    // All padding
    group.bench_function("empty_text", |b| b.iter(|| vocab.encode(black_box(""))));

    group.finish();
}

fn bench_batch_encoding(c: &mut Criterion) {
    let vocab = training_vocabulary();
    let examples = dataset::load();
    let mut group = c.benchmark_group("BatchEncoding");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("full_dataset", |b| {
        b.iter(|| {
            examples
                .iter()
                .map(|e| vocab.encode(black_box(&e.text)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_vocabulary_build, bench_encoding, bench_batch_encoding);
criterion_main!(benches);
