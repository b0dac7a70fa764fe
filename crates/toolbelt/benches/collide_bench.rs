//! Criterion benchmarks for polygon collision.
//! Focus sizes: n in {4, 16, 64, 256} vertices per polygon.
//! Three regimes: far apart (full edge sweep, no hit), overlapping (early vertex
//! hit), and nested rings (containment found only after scanning all vertices).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use toolbelt::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use toolbelt::geom2::Polygon;

fn star(n: usize, radius: f64, seed: u64, index: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        base_radius: radius,
        radial_jitter: 0.1,
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index }).unwrap()
}

fn bench_collide(c: &mut Criterion) {
    let mut group = c.benchmark_group("collide");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("disjoint", n), &n, |b, &n| {
            b.iter_batched(
                || (star(n, 1.0, 43, 0), star(n, 1.0, 43, 1).translated(5.0, 0.0).unwrap()),
                |(pa, pb)| pa.collides(&pb),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("overlapping", n), &n, |b, &n| {
            b.iter_batched(
                || (star(n, 1.0, 44, 0), star(n, 1.0, 44, 1).translated(0.3, 0.0).unwrap()),
                |(pa, pb)| pa.collides(&pb),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("nested", n), &n, |b, &n| {
            b.iter_batched(
                || (star(n, 4.0, 45, 0), star(n, 0.5, 45, 1)),
                |(outer, inner)| outer.collides(&inner),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collide);
criterion_main!(benches);
