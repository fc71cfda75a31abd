use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sentok::{clean, fit_and_encode};

fn criterion_config() -> Criterion {
    Criterion::default().sample_size(50)
}

fn corpus() -> Vec<String> {
    (0..10_000)
        .map(|i| format!("Sentence {i}: the quick brown fox, number {}, jumps!", i % 97))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let sentences = corpus();

    c.bench_function("clean", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(clean(black_box(sentence)));
            }
        })
    });
    c.bench_function("fit_and_encode", |b| {
        b.iter(|| fit_and_encode(black_box(&sentences)))
    });
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = criterion_benchmark
}
criterion_main!(benches);
