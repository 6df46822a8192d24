//! nth prime benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of single lookups (10th to 100,000,000th prime)
//! - Segment width for the segmented sieve
//! - Batch lookups against repeated single lookups
//! - Raw sieve throughput
//!
//! Run a single group with `cargo bench -- lookup_classic`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nthprime::prelude::*;
use nthprime_benchmarks::{WORKLOADS, classic_workloads};
use std::hint::black_box;

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_lookup_classic(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_classic");
    group.sample_size(10);

    let finder = Sieve::new().adapter(Classic).build().unwrap();

    for workload in classic_workloads() {
        group.bench_with_input(
            BenchmarkId::from_parameter(workload.name),
            &workload.ordinal,
            |b, &n| b.iter(|| finder.nth_prime(black_box(n)).unwrap()),
        );
    }
    group.finish();
}

fn bench_lookup_segmented(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_segmented");
    group.sample_size(10);

    let finder = Sieve::new().adapter(Segmented).build().unwrap();

    for workload in WORKLOADS {
        group.bench_with_input(
            BenchmarkId::from_parameter(workload.name),
            &workload.ordinal,
            |b, &n| b.iter(|| finder.nth_prime(black_box(n)).unwrap()),
        );
    }
    group.finish();
}

fn bench_segment_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_size");
    group.sample_size(20);

    let n = 1_000_000;

    for size in [4 * 1024, 16 * 1024, 32 * 1024, 128 * 1024, 1024 * 1024] {
        let finder = Sieve::new()
            .segment_size(size)
            .adapter(Segmented)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("segmented", size), &size, |b, _| {
            b.iter(|| finder.nth_prime(black_box(n)).unwrap())
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let finder = Sieve::new().adapter(Classic).build().unwrap();
    let ordinals: Vec<i64> = (0..100).map(|i| i * 1_000).collect();
    group.throughput(Throughput::Elements(ordinals.len() as u64));

    group.bench_function("nth_primes", |b| {
        b.iter(|| finder.nth_primes(black_box(&ordinals)).unwrap())
    });

    group.bench_function("repeated_nth_prime", |b| {
        b.iter(|| {
            ordinals
                .iter()
                .map(|&n| finder.nth_prime(black_box(n)).unwrap())
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    group.sample_size(20);

    for limit in [10_000usize, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(limit as u64));

        group.bench_with_input(BenchmarkId::new("primes_up_to", limit), &limit, |b, &l| {
            b.iter(|| primes_up_to(black_box(l)))
        });
        group.bench_with_input(BenchmarkId::new("prime_count", limit), &limit, |b, &l| {
            b.iter(|| prime_count(black_box(l)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_lookup_classic,
    bench_lookup_segmented,
    bench_segment_size,
    bench_batch,
    bench_sieve,
);

criterion_main!(benches);
