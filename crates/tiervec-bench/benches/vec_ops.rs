//! Criterion micro-benchmarks: TieredVec vs Vec for push, write, read, and pop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tiervec::TieredVec;
use tiervec_bench::{filled_tiered, filled_vec, shuffled_indices, SCALES};

/// Benchmark: push `n` values into an empty container, no reservation.
fn bench_push_unreserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_unreserved");
    for n in SCALES {
        group.bench_with_input(BenchmarkId::new("tiered", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec = TieredVec::new();
                for i in 0..n as i32 {
                    vec.push(i);
                }
                black_box(vec.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..n as i32 {
                    vec.push(i);
                }
                black_box(vec.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: resize to `n`, then overwrite every element by index.
fn bench_write_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_reserved");
    for n in SCALES {
        group.bench_with_input(BenchmarkId::new("tiered", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec = TieredVec::new();
                vec.resize(n);
                for i in 0..n {
                    vec[i] = i as i32;
                }
                black_box(vec[n - 1]);
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec = vec![0; n];
                for i in 0..n {
                    vec[i] = i as i32;
                }
                black_box(vec[n - 1]);
            });
        });
    }
    group.finish();
}

/// Benchmark: sum every element in index order.
fn bench_read_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_sequential");
    for n in SCALES {
        let tiered = filled_tiered(n);
        let flat = filled_vec(n);
        group.bench_function(BenchmarkId::new("tiered_index", n), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for i in 0..tiered.len() {
                    sum += i64::from(tiered[i]);
                }
                black_box(sum);
            });
        });
        group.bench_function(BenchmarkId::new("tiered_blocks", n), |b| {
            b.iter(|| {
                let sum: i64 = tiered
                    .blocks()
                    .map(|block| block.iter().map(|&v| i64::from(v)).sum::<i64>())
                    .sum();
                black_box(sum);
            });
        });
        group.bench_function(BenchmarkId::new("vec", n), |b| {
            b.iter(|| {
                let sum: i64 = flat.iter().map(|&v| i64::from(v)).sum();
                black_box(sum);
            });
        });
    }
    group.finish();
}

/// Benchmark: sum every element in a shuffled order.
fn bench_read_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_random");
    for n in SCALES {
        let tiered = filled_tiered(n);
        let flat = filled_vec(n);
        let order = shuffled_indices(n, 42);
        group.bench_function(BenchmarkId::new("tiered", n), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &i in &order {
                    sum += i64::from(tiered[i]);
                }
                black_box(sum);
            });
        });
        group.bench_function(BenchmarkId::new("vec", n), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &i in &order {
                    sum += i64::from(flat[i]);
                }
                black_box(sum);
            });
        });
    }
    group.finish();
}

/// Benchmark: pop a full container down to empty.
fn bench_pop_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_drain");
    for n in SCALES {
        group.bench_with_input(BenchmarkId::new("tiered", n), &n, |b, &n| {
            b.iter_batched(
                || filled_tiered(n),
                |mut vec| {
                    while let Some(v) = vec.pop() {
                        black_box(v);
                    }
                    vec
                },
                criterion::BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            b.iter_batched(
                || filled_vec(n),
                |mut vec| {
                    while let Some(v) = vec.pop() {
                        black_box(v);
                    }
                    vec
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// Benchmark: heapsort a reversed container.
fn bench_sort(c: &mut Criterion) {
    let n = 100_000;
    c.bench_function("sort_unstable_100k", |b| {
        b.iter_batched(
            || (0..n).rev().collect::<TieredVec<i32>>(),
            |mut vec| {
                vec.sort_unstable();
                vec
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push_unreserved,
    bench_write_reserved,
    bench_read_sequential,
    bench_read_random,
    bench_pop_drain,
    bench_sort
);
criterion_main!(benches);
