//! Sequential vs row-parallel multiplication.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matmul_rows::threaded::partition::hardware_workers;
use matmul_rows::{multiply, multiply_parallel, multiply_parallel_with};

fn bench_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_square");
    group.sample_size(10);

    for size in [64, 128, 256, 512] {
        let a: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..size * size).map(|i| ((i * 2) % 100) as f64).collect();

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bench, &n| {
            bench.iter(|| black_box(multiply(black_box(&a), black_box(&b), n, n, n, n)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bench, &n| {
            bench.iter(|| black_box(multiply_parallel(black_box(&a), black_box(&b), n, n, n, n)));
        });
    }

    group.finish();
}

fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_workers");
    group.sample_size(10);

    let n = 256;
    let a: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
    let b: Vec<f64> = (0..n * n).map(|i| ((i * 3) % 100) as f64).collect();

    let max = hardware_workers();
    let mut workers = 1;
    while workers <= max {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |bench, &w| {
            bench.iter(|| black_box(multiply_parallel_with(&a, &b, n, n, n, n, w)));
        });
        workers *= 2;
    }

    group.finish();
}

criterion_group!(benches, bench_square, bench_worker_scaling);
criterion_main!(benches);
