//! Micro-benchmarks for the hot engine routines

use assay_engine::{histogram, independent_t_test, linear_regression, pearson_correlation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample(n: usize, seed: f64) -> Vec<f64> {
    // Deterministic pseudo-data; enough structure to avoid degenerate paths
    (0..n)
        .map(|i| {
            let x = i as f64;
            (x * seed).sin() * 10.0 + x * 0.01
        })
        .collect()
}

fn bench_t_test(c: &mut Criterion) {
    let a = sample(10_000, 0.37);
    let b = sample(10_000, 0.53);
    c.bench_function("independent_t_test_10k", |bench| {
        bench.iter(|| independent_t_test(black_box(&a), black_box(&b)))
    });
}

fn bench_correlation(c: &mut Criterion) {
    let a = sample(10_000, 0.37);
    let b = sample(10_000, 0.53);
    c.bench_function("pearson_correlation_10k", |bench| {
        bench.iter(|| pearson_correlation(black_box(&a), black_box(&b)))
    });
}

fn bench_regression(c: &mut Criterion) {
    let a = sample(10_000, 0.37);
    let b = sample(10_000, 0.53);
    c.bench_function("linear_regression_10k", |bench| {
        bench.iter(|| linear_regression(black_box(&a), black_box(&b)))
    });
}

fn bench_histogram(c: &mut Criterion) {
    let a = sample(10_000, 0.37);
    c.bench_function("histogram_fd_10k", |bench| {
        bench.iter(|| histogram(black_box(&a), None))
    });
}

criterion_group!(
    benches,
    bench_t_test,
    bench_correlation,
    bench_regression,
    bench_histogram
);
criterion_main!(benches);
