//! Benchmarks for simplex noise evaluation.
//!
//! Run with: cargo bench -p cflow-extras --bench noise_bench

use cflow_extras::noise::{FractalParams, PermutationTable, SimplexNoise};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_evaluate(c: &mut Criterion) {
    let noise = SimplexNoise::new(PermutationTable::reference());
    c.bench_function("noise/evaluate_single", |b| {
        b.iter(|| black_box(noise.evaluate(black_box(1.25), black_box(-2.5), black_box(3.75))))
    });
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise/grid");
    let noise = SimplexNoise::with_seed(42);

    for side in [32u32, 128, 256] {
        group.throughput(Throughput::Elements(u64::from(side * side)));
        group.bench_with_input(BenchmarkId::new("evaluate", side), &side, |b, &side| {
            b.iter(|| {
                let mut acc = 0.0;
                for y in 0..side {
                    for x in 0..side {
                        acc += noise.evaluate(f64::from(x) * 0.05, f64::from(y) * 0.05, 0.5);
                    }
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_fractal(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise/fractal");
    let noise = SimplexNoise::with_seed(42);

    for octaves in [1u32, 4, 8] {
        let params = FractalParams {
            octaves,
            ..FractalParams::default()
        };
        group.bench_with_input(BenchmarkId::new("octaves", octaves), &params, |b, params| {
            b.iter(|| black_box(noise.fractal(0.3, 1.7, 4.2, *params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_grid, bench_fractal);
criterion_main!(benches);
