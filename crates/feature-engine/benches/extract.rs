//! Benchmarks for feature extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::{FeatureExtractor, Sample};

fn create_window(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.02;
            Sample::new(t.sin(), (t * 1.5).cos(), 9.81 + 0.1 * (t * 3.0).sin())
        })
        .collect()
}

fn benchmark_extraction(c: &mut Criterion) {
    let extractor = FeatureExtractor::default();

    let window_128 = create_window(128);
    let window_2048 = create_window(2048);

    c.bench_function("extract_128", |b| {
        b.iter(|| extractor.extract(black_box(&window_128)))
    });

    c.bench_function("extract_2048", |b| {
        b.iter(|| extractor.extract(black_box(&window_2048)))
    });
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
