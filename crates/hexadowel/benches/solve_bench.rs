//! Criterion microbenches for the solver hot path.
//!
//! - Hole-configuration derivation across all orientations of a disk.
//! - One simulator step (compatibility check + peg update).
//! - End-to-end solve of a reduced dataset.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexadowel::catalog::{Catalog, DiskId, Orientation, Side, ANGLES};
use hexadowel::layer::{compatible, next_peg_config};
use hexadowel::search::{solve, OrderPolicy, SearchCfg};

fn bench_hole_config(c: &mut Criterion) {
    let catalog = Catalog::canonical();
    let mut group = c.benchmark_group("catalog");
    group.bench_function(BenchmarkId::new("hole_config", "all_orientations"), |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for side in [Side::FaceUp, Side::FaceDown] {
                for angle in ANGLES {
                    let h = catalog.hole_config(Orientation {
                        disk: DiskId(6),
                        side,
                        angle,
                    });
                    acc += u32::from(h[0]);
                }
            }
            acc
        })
    });
    group.finish();
}

fn bench_simulator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer");
    let top = [3u8, 0, 1, 2, 0, 3];
    let holes = [0u8, 1, 1, 1, 0, 1];
    group.bench_function(BenchmarkId::new("step", "check_and_update"), |b| {
        b.iter(|| {
            let ok = compatible(Some(&top), &holes);
            let q = next_peg_config(Some(&top), &holes);
            (ok, q)
        })
    });
    group.finish();
}

fn bench_reduced_solve(c: &mut Criterion) {
    let patterns = [
        [1u8, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0],
    ];
    let catalog = Catalog::from_patterns(&patterns);
    let mut group = c.benchmark_group("search");
    group.bench_function(BenchmarkId::new("solve", "aligned_triple"), |b| {
        b.iter_batched(
            || SearchCfg {
                order: OrderPolicy::Sequential,
                progress_every: 0,
            },
            |cfg| solve(&catalog, cfg),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hole_config,
    bench_simulator_step,
    bench_reduced_solve
);
criterion_main!(benches);
