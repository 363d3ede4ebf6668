//! Benchmark for fail-fast versus accumulating traversal.
//!
//! The fail-fast traversal stops at the first failure, the accumulating one
//! visits every element; the gap grows with the position of the first failure.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpkit::either::{self, Either};
use std::hint::black_box;

fn check(n: u32) -> Either<Vec<u32>, u32> {
    if n % 97 == 0 { Either::Left(vec![n]) } else { Either::Right(n * 2) }
}

fn benchmark_all_valid(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_all_valid");

    for size in [100_u32, 1_000, 10_000] {
        let input: Vec<u32> = (1..=size).filter(|n| n % 97 != 0).collect();

        group.bench_with_input(BenchmarkId::new("fail_fast", size), &input, |bencher, input| {
            bencher.iter(|| black_box(either::traverse_array(input.iter().copied(), check)));
        });

        group.bench_with_input(BenchmarkId::new("accumulate", size), &input, |bencher, input| {
            bencher.iter(|| black_box(either::traverse_array_v(input.iter().copied(), check)));
        });
    }

    group.finish();
}

fn benchmark_with_failures(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_with_failures");

    for size in [100_u32, 1_000, 10_000] {
        let input: Vec<u32> = (1..=size).collect();

        group.bench_with_input(BenchmarkId::new("fail_fast", size), &input, |bencher, input| {
            bencher.iter(|| black_box(either::traverse_array(input.iter().copied(), check)));
        });

        group.bench_with_input(BenchmarkId::new("accumulate", size), &input, |bencher, input| {
            bencher.iter(|| black_box(either::traverse_array_v(input.iter().copied(), check)));
        });
    }

    group.finish();
}

fn benchmark_map2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map2");
    let good: Either<String, u32> = Either::Right(1);
    let bad: Either<String, u32> = Either::Left("bad".to_string());

    group.bench_function("fail_fast_both_left", |bencher| {
        bencher.iter(|| black_box(bad.clone().map2(black_box(bad.clone()), |a, b| a + b)));
    });

    group.bench_function("accumulate_both_left", |bencher| {
        bencher.iter(|| black_box(bad.clone().map2_v(black_box(bad.clone()), |a, b| a + b)));
    });

    group.bench_function("accumulate_both_right", |bencher| {
        bencher.iter(|| black_box(good.clone().map2_v(black_box(good.clone()), |a, b| a + b)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_all_valid, benchmark_with_failures, benchmark_map2);
criterion_main!(benches);
