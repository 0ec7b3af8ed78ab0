#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use simplectic::{NoiseFn, OpenSimplexNoise, PermutationTable};
use std::hint::black_box;
use std::sync::Arc;

/// Sample a `side`^N block of points spaced a little under one cell apart.
fn sample_block<const N: usize>(noise: &impl NoiseFn<N>, side: u32) -> f64 {
    let mut total = 0.0;
    for i in 0..side.pow(N as u32) {
        let point: [f64; N] = std::array::from_fn(|axis| {
            let index = (i / side.pow(axis as u32)) % side;
            f64::from(index) * 0.37 - 5.0
        });
        total += noise.sample(black_box(point));
    }
    total
}

// ── Single points ───────────────────────────────────────────────────────────

fn bench_single_point(c: &mut Criterion) {
    let plane = OpenSimplexNoise::<2>::new(0);
    let volume = OpenSimplexNoise::<3>::new(0);
    let hypervolume = OpenSimplexNoise::<4>::new(0);

    c.bench_function("eval_2d", |b| {
        b.iter(|| plane.eval(black_box(1.5), black_box(-2.25)));
    });
    c.bench_function("eval_3d", |b| {
        b.iter(|| volume.eval(black_box(1.5), black_box(-2.25), black_box(0.33)));
    });
    c.bench_function("eval_4d", |b| {
        b.iter(|| {
            hypervolume.eval(
                black_box(1.5),
                black_box(-2.25),
                black_box(0.33),
                black_box(0.75),
            )
        });
    });
}

// ── Blocks ──────────────────────────────────────────────────────────────────

fn bench_blocks(c: &mut Criterion) {
    let table = Arc::new(PermutationTable::from_seed(0));
    let plane = OpenSimplexNoise::<2>::with_table(table.clone());
    let volume = OpenSimplexNoise::<3>::with_table(table.clone());
    let hypervolume = OpenSimplexNoise::<4>::with_table(table);

    let mut group = c.benchmark_group("block");
    for (name, points, side) in [
        ("2d", 64 * 64, 64),
        ("3d", 16 * 16 * 16, 16),
        ("4d", 8 * 8 * 8 * 8, 8),
    ] {
        group.throughput(Throughput::Elements(points));
        group.bench_with_input(BenchmarkId::from_parameter(name), &side, |b, &side| {
            b.iter(|| match name {
                "2d" => sample_block(&plane, side),
                "3d" => sample_block(&volume, side),
                _ => sample_block(&hypervolume, side),
            });
        });
    }
    group.finish();
}

// ── Table construction ──────────────────────────────────────────────────────

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("table_from_seed", |b| {
        b.iter(|| black_box(PermutationTable::from_seed(black_box(1234))));
    });
    c.bench_function("table_from_libc_seed", |b| {
        b.iter(|| black_box(PermutationTable::from_libc_seed(black_box(1234))));
    });
}

criterion_group!(
    benches,
    bench_single_point,
    bench_blocks,
    bench_table_construction,
);
criterion_main!(benches);
