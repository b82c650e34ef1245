//! Selection benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Input shapes (random, sorted, reversed, organ-pipe, few distinct values)
//! - Comparison against `select_nth_unstable_by` and a full sort
//! - Validation overhead (checked API vs. unchecked core)
//!
//! Run with `cargo bench -p quickselect-benchmarks`.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quickselect::internals::algorithms::select::quick_select;
use quickselect::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate Gaussian data.
fn generate_normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate ascending data.
fn generate_sorted_data(size: usize) -> Vec<f64> {
    (0..size).map(|i| i as f64).collect()
}

/// Generate descending data.
fn generate_reversed_data(size: usize) -> Vec<f64> {
    (0..size).rev().map(|i| i as f64).collect()
}

/// Generate organ-pipe data (ascending then descending).
fn generate_organ_pipe_data(size: usize) -> Vec<f64> {
    (0..size).map(|i| i.min(size - 1 - i) as f64).collect()
}

/// Generate data with only a handful of distinct values.
fn generate_few_distinct_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0u8, 8).unwrap();
    (0..size).map(|_| dist.sample(&mut rng) as f64).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let data = generate_normal_data(size, 42);

        group.bench_with_input(BenchmarkId::new("select_median", size), &size, |b, _| {
            b.iter_batched(
                || data.clone(),
                |mut buf| select_median(black_box(&mut buf)).unwrap(),
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("select_nth_unstable", size),
            &size,
            |b, _| {
                b.iter_batched(
                    || data.clone(),
                    |mut buf| {
                        let mid = (buf.len() - 1) / 2;
                        *buf.select_nth_unstable_by(mid, f64::total_cmp).1
                    },
                    BatchSize::LargeInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("full_sort", size), &size, |b, _| {
            b.iter_batched(
                || data.clone(),
                |mut buf| {
                    buf.sort_unstable_by(f64::total_cmp);
                    buf[(buf.len() - 1) / 2]
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    group.sample_size(50);

    let size = 100_000;
    let shapes = [
        ("random", generate_normal_data(size, 7)),
        ("sorted", generate_sorted_data(size)),
        ("reversed", generate_reversed_data(size)),
        ("organ_pipe", generate_organ_pipe_data(size)),
        ("few_distinct", generate_few_distinct_data(size, 7)),
    ];

    for (name, data) in shapes.iter() {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(*name, |b| {
            b.iter_batched(
                || data.clone(),
                |mut buf| select_median(black_box(&mut buf)).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_ranks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranks");
    group.sample_size(100);

    let size = 50_000;
    let data = generate_normal_data(size, 11);

    for q in [0.0, 0.01, 0.25, 0.5, 0.9, 0.99] {
        group.bench_with_input(BenchmarkId::new("select_quantile", q), &q, |b, &q| {
            b.iter_batched(
                || data.clone(),
                |mut buf| select_quantile(black_box(&mut buf), q).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_validation_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_overhead");
    group.sample_size(100);

    let size = 100_000;
    let data = generate_normal_data(size, 3);
    let rank = size / 2;
    let propagate = Selector::builder().nan_policy(Propagate).build().unwrap();

    group.bench_function("checked_reject_nan", |b| {
        b.iter_batched(
            || data.clone(),
            |mut buf| select_rank(black_box(&mut buf), rank).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("checked_propagate_nan", |b| {
        b.iter_batched(
            || data.clone(),
            |mut buf| propagate.rank(black_box(&mut buf), rank).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("unchecked_core", |b| {
        b.iter_batched(
            || data.clone(),
            |mut buf| quick_select(black_box(&mut buf), rank),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_shapes,
    bench_ranks,
    bench_validation_overhead
);
criterion_main!(benches);
