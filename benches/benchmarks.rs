//! Benchmarks for rollstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use rollstats::rolling::RollingOrderStats;
use rollstats::traits::{OrderStatistics, RollingStatistic};

/// Deterministic pseudo-random values in [0, 1000)
fn noise(i: u64) -> f64 {
    let x = i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 11;
    (x % 1_000_000) as f64 / 1000.0
}

// ============================================================================
// Insertion Benchmarks
// ============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_add");
    group.throughput(Throughput::Elements(1));

    group.bench_function("unbounded", |b| {
        let mut stats = RollingOrderStats::unbounded();
        let mut i = 0u64;
        b.iter(|| {
            stats.add(noise(i)).unwrap();
            i = i.wrapping_add(1);
        });
    });

    for capacity in [16usize, 1_024, 65_536] {
        group.bench_function(format!("bounded_{}", capacity), |b| {
            let mut stats = RollingOrderStats::bounded(capacity).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                stats.add(noise(i)).unwrap();
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Query Benchmarks
// ============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_query");

    let mut stats = RollingOrderStats::bounded(100_000).unwrap();
    stats.add_values((0..100_000u64).map(noise)).unwrap();

    group.bench_function("median", |b| {
        b.iter(|| black_box(stats.median().unwrap()));
    });

    group.bench_function("min_max", |b| {
        b.iter(|| {
            black_box(stats.min().unwrap());
            black_box(stats.max().unwrap());
        });
    });

    for p in [0.5, 0.9, 0.99] {
        group.bench_function(format!("percentile_{}", p), |b| {
            b.iter(|| black_box(stats.percentile(black_box(p)).unwrap()));
        });
    }

    group.bench_function("distribution_20", |b| {
        b.iter(|| black_box(stats.distribution(20)));
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_add, bench_queries);

criterion_main!(benches);
