//! Benchmark for pipeline composition and evaluation.
//!
//! Measures stage queuing, base-container evaluation, and lazy list
//! evaluation at a few sequence sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functorial::prelude::*;
use std::hint::black_box;

fn benchmark_functor_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("functor_pipeline");

    group.bench_function("compose_and_run", |bencher| {
        bencher.iter(|| {
            let pipeline = Functor::wrap(black_box(1_i64))
                >> (|x: i64| x + 1)
                >> (|x: i64| x * 2)
                >> (|x: i64| x - 3);
            black_box(pipeline.run())
        });
    });

    group.bench_function("run_prebuilt", |bencher| {
        let pipeline = Functor::wrap(1_i64) >> (|x: i64| x + 1) >> (|x: i64| x * 2);
        bencher.iter(|| black_box(pipeline.run()));
    });

    group.finish();
}

fn benchmark_list_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_pipeline");

    for size in [16_i64, 256, 4096] {
        let source: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("map_run", size), &source, |bencher, source| {
            let list = ListF::wrap(source.clone()) >> (|x: i64| x * 3) >> (|x: i64| x + 1);
            bencher.iter(|| black_box(list.run()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_functor_pipeline,
    benchmark_list_pipeline
);
criterion_main!(benches);
