//! # Double Buffer Benchmark
//!
//! Role swap must cost the same no matter how large the buffered state is.
//!
//! This benchmark measures:
//! 1. `advance` on small and large payloads (index flip)
//! 2. `std::mem::swap` of two values of the same size (naive solution)
//! 3. `advance_clear` with a heap-backed payload

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keystone_core::DoubleBuffer;

/// Benchmark advance against payload size
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_buffer_advance");

    let mut small: DoubleBuffer<u64> = DoubleBuffer::new();
    group.bench_function(BenchmarkId::new("advance", "8B"), |b| {
        b.iter(|| {
            small.advance();
            black_box(small.current());
        });
    });

    let mut large: DoubleBuffer<Vec<[u8; 64]>> =
        DoubleBuffer::from_slots(vec![[0; 64]; 4096], vec![[1; 64]; 4096]);
    group.bench_function(BenchmarkId::new("advance", "256KB"), |b| {
        b.iter(|| {
            large.advance();
            black_box(large.current());
        });
    });

    group.finish();
}

/// Benchmark moving the values instead of flipping roles
fn bench_naive_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_buffer_naive_swap");

    let mut current = [0u8; 4096];
    let mut prev = [1u8; 4096];
    group.bench_function(BenchmarkId::new("mem_swap", "4KB"), |b| {
        b.iter(|| {
            std::mem::swap(&mut current, &mut prev);
            black_box(&current);
        });
    });

    let mut buffered = DoubleBuffer::from_slots([0u8; 4096], [1u8; 4096]);
    group.bench_function(BenchmarkId::new("advance", "4KB"), |b| {
        b.iter(|| {
            buffered.advance();
            black_box(buffered.current());
        });
    });

    group.finish();
}

/// Benchmark advance_clear with a reusable payload
fn bench_advance_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_buffer_advance_clear");

    let mut db: DoubleBuffer<Vec<u32>> = DoubleBuffer::new();
    group.bench_function("advance_clear_push", |b| {
        b.iter(|| {
            db.advance_clear();
            db.current_mut().push(black_box(7));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_naive_swap, bench_advance_clear);
criterion_main!(benches);
