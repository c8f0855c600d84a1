//! Criterion micro-benchmarks for buffer growth, combinators, and statistics.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dynarray_arena::ArrayBuffer;
use dynarray_bench::{buffer_from, repeating_values, uniform_values};
use dynarray_ops::{combinators, stats};

/// Benchmark: 100K appends starting from capacity 1 (17 doublings).
fn bench_append_100k(c: &mut Criterion) {
    let values = uniform_values(100_000);

    c.bench_function("append_100k_from_cap_1", |b| {
        b.iter(|| {
            let mut buf = ArrayBuffer::with_capacity(1).unwrap();
            for &v in &values {
                buf.push(v).unwrap();
            }
            black_box(buf.len());
        });
    });
}

/// Benchmark: median of 100K values (sorted copy per call).
fn bench_median_100k(c: &mut Criterion) {
    let buf = buffer_from(&uniform_values(100_000));

    c.bench_function("median_100k", |b| {
        b.iter(|| black_box(stats::median(&buf).unwrap()));
    });
}

/// Benchmark: unique over 10K values with 100 distinct levels.
fn bench_unique_10k(c: &mut Criterion) {
    let buf = buffer_from(&repeating_values(10_000, 100));

    c.bench_function("unique_10k_100_levels", |b| {
        b.iter(|| black_box(combinators::unique(&buf).unwrap().len()));
    });
}

/// Benchmark: split 100K values into 64 chunks.
fn bench_split_100k(c: &mut Criterion) {
    let buf = buffer_from(&uniform_values(100_000));

    c.bench_function("split_100k_into_64", |b| {
        b.iter(|| black_box(combinators::split(&buf, 64).unwrap().len()));
    });
}

criterion_group!(
    benches,
    bench_append_100k,
    bench_median_100k,
    bench_unique_10k,
    bench_split_100k
);
criterion_main!(benches);
