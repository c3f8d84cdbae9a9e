//! Criterion benchmarks for the label annealer.
//! Focus sizes: n in {5, 10, 20, 50} labels, default schedule (50 sweeps).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use declutter::anneal::{leader_lines_cross, AnnealCfg, Annealer, Label};
use declutter::geom2::intersect;
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn clustered_labels(n: usize, seed: u64) -> Vec<Label<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            // anchors packed into a square that grows slower than n, so most labels overlap
            let side = 20.0 * (n as f64).sqrt();
            let anchor = Vector2::new(rng.gen_range(0.0..side), rng.gen_range(0.0..side));
            Label::new(anchor, 40.0, 14.0, i)
        })
        .collect()
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    for &n in &[5usize, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("default", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || clustered_labels(n, 43),
                |mut labels| {
                    Annealer::new(AnnealCfg::default()).run(&mut labels, &mut rng);
                    labels
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("leader_crossings", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(8);
            b.iter_batched(
                || clustered_labels(n, 44),
                |mut labels| {
                    Annealer::new(AnnealCfg::default())
                        .with_lines_intersect(leader_lines_cross::<usize>)
                        .run(&mut labels, &mut rng);
                    labels
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let segs: Vec<[Vector2<f64>; 4]> = (0..1024)
        .map(|_| {
            let mut p = || Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            [p(), p(), p(), p()]
        })
        .collect();
    c.bench_function("geom2/intersect_1024", |b| {
        b.iter(|| {
            segs.iter()
                .filter(|s| intersect(s[0], s[1], s[2], s[3]))
                .count()
        })
    });
}

criterion_group!(benches, bench_anneal, bench_intersect);
criterion_main!(benches);
