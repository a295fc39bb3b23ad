//! Criterion benchmarks for frontier computation and the parameter store.
//!
//! Compares a full recomputation against the allocation-only path taken
//! while the share slider is dragged.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frontier_core::curve::{allocation_point, compute};
use frontier_core::input::{normalize, FieldKind};
use frontier_core::store::ReactiveParameterStore;
use frontier_core::types::{ParamName, Parameters};

/// Benchmark the pure curve functions.
fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");
    let params = Parameters::default();

    group.bench_function("compute", |b| b.iter(|| compute(black_box(&params))));
    group.bench_function("allocation_point", |b| {
        b.iter(|| allocation_point(black_box(&params)))
    });

    group.finish();
}

/// Benchmark store updates for both recompute scopes.
fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("set_share", |b| {
        let mut store = ReactiveParameterStore::new();
        let mut share = 0.0;
        b.iter(|| {
            share = (share + 0.01) % 1.0;
            store.set(ParamName::ShareA, black_box(share))
        });
    });

    group.bench_function("set_std_dev", |b| {
        let mut store = ReactiveParameterStore::new();
        let mut sd = 0.0;
        b.iter(|| {
            sd = (sd + 0.01) % 0.6;
            store.set(ParamName::StdDevA, black_box(sd))
        });
    });

    group.finish();
}

/// Benchmark input normalisation.
fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(" 150 %"), FieldKind::ExpectedReturnA))
    });
}

criterion_group!(benches, bench_curve, bench_store, bench_normalize);
criterion_main!(benches);
