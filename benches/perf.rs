use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use soccer_datagen::catalog;
use soccer_datagen::generator::{self, GeneratorConfig};
use soccer_datagen::score::{self, ScoreWeights};
use soccer_datagen::summary;
use soccer_datagen::tier::{self, TierCuts};

fn bench_generate(c: &mut Criterion) {
    let cfg = GeneratorConfig::default();
    c.bench_function("generate_1000", |b| {
        b.iter(|| {
            let records = generator::generate(catalog::default_catalog(), black_box(&cfg)).unwrap();
            black_box(records.len());
        })
    });
}

fn bench_derive_and_classify(c: &mut Criterion) {
    let cfg = GeneratorConfig::default();
    let records = generator::generate(catalog::default_catalog(), &cfg).unwrap();
    let weights = ScoreWeights::default();
    let cuts = TierCuts::default();

    c.bench_function("derive_and_classify_1000", |b| {
        b.iter(|| {
            let scored = score::derive_scores(records.clone(), &weights, &cfg.ranges).unwrap();
            let facts = tier::classify_all(scored, &cuts).unwrap();
            black_box(facts.len());
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let cfg = GeneratorConfig::default();
    let records = generator::generate(catalog::default_catalog(), &cfg).unwrap();
    let scored = score::derive_scores(records, &ScoreWeights::default(), &cfg.ranges).unwrap();
    let facts = tier::classify_all(scored, &TierCuts::default()).unwrap();

    c.bench_function("summarize_1000", |b| {
        b.iter(|| {
            let rows = summary::summarize(black_box(&facts));
            black_box(rows.len());
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_derive_and_classify,
    bench_summarize
);
criterion_main!(benches);
