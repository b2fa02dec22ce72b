use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sasa_core::{calc, Parameters, PointSet, Radii};

/// A deterministic synthetic cluster of `n` atoms on a loose cubic
/// lattice, close enough to overlap so the neighbor list and both
/// engines do real work.
fn synthetic_cluster(n: usize) -> (PointSet<'static>, Radii) {
    let spacing = 2.2;
    let side = (n as f64).cbrt().ceil() as usize;
    let mut points = Vec::with_capacity(n);
    'outer: for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                if points.len() == n {
                    break 'outer;
                }
                points.push([x as f64 * spacing, y as f64 * spacing, z as f64 * spacing]);
            }
        }
    }
    let radii = vec![1.7; points.len()];
    (PointSet::Owned(points), Radii::new(radii))
}

fn bench_cell_list_and_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_index");
    for &n in &[100usize, 1_000, 5_000] {
        let (points, radii) = synthetic_cluster(n);
        group.bench_with_input(BenchmarkId::new("cell_list_build", n), &n, |b, _| {
            b.iter(|| {
                let cl = sasa_core::spatial::CellList::build(
                    black_box(&points),
                    black_box(&radii),
                    black_box(1.4),
                )
                .unwrap();
                black_box(cl.n_cells());
            });
        });
    }
    group.finish();
}

fn bench_lee_richards(c: &mut Criterion) {
    let mut group = c.benchmark_group("lee_richards");
    for &n in &[100usize, 1_000] {
        let (points, radii) = synthetic_cluster(n);
        let params = Parameters::lee_richards();
        group.bench_with_input(BenchmarkId::new("calc", n), &n, |b, _| {
            b.iter(|| black_box(calc(&points, &radii, black_box(&params)).unwrap()));
        });
    }
    group.finish();
}

fn bench_shrake_rupley(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrake_rupley");
    for &n in &[100usize, 1_000] {
        let (points, radii) = synthetic_cluster(n);
        let params = Parameters::shrake_rupley();
        group.bench_with_input(BenchmarkId::new("calc", n), &n, |b, _| {
            b.iter(|| black_box(calc(&points, &radii, black_box(&params)).unwrap()));
        });
    }
    group.finish();
}

fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_scaling");
    let (points, radii) = synthetic_cluster(2_000);
    for &n_threads in &[1usize, 2, 4, 8] {
        let params = Parameters::lee_richards().with_n_threads(n_threads);
        group.bench_with_input(
            BenchmarkId::new("calc", n_threads),
            &n_threads,
            |b, _| {
                b.iter(|| black_box(calc(&points, &radii, black_box(&params)).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cell_list_and_neighbors,
    bench_lee_richards,
    bench_shrake_rupley,
    bench_thread_scaling
);
criterion_main!(benches);
