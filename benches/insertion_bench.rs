use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use trisubdiv::prelude::*;
use vector_traits::glam::{dvec2, DVec2};

fn random_points(n: usize) -> Vec<DVec2> {
    let mut rng: StdRng = SeedableRng::seed_from_u64(42);
    (0..n)
        .map(|_| dvec2(rng.gen_range(1.0..499.0), rng.gen_range(1.0..499.0)))
        .collect()
}

fn subdivision_random(c: &mut Criterion) {
    let points = random_points(2000);
    let mut g = c.benchmark_group("insertion");
    g.sample_size(10).bench_function("subdivision_random_2000", |b| {
        b.iter(|| {
            black_box({
                let mut tri =
                    TriSubdiv::<DVec2>::new(0.0, 0.0, 500.0, 500.0, InsertionMode::Subdivision);
                let _ = tri.extend_from(points.iter().copied()).unwrap();
                tri.len()
            });
        })
    });
    g.finish();
}

fn nearest_neighbor_random(c: &mut Criterion) {
    let points = random_points(2000);
    let mut g = c.benchmark_group("insertion");
    g.sample_size(10).bench_function("nearest_neighbor_random_2000", |b| {
        b.iter(|| {
            black_box({
                let mut tri = TriSubdiv::<DVec2>::new(
                    0.0,
                    0.0,
                    500.0,
                    500.0,
                    InsertionMode::NearestNeighbor,
                );
                let _ = tri.extend_from(points.iter().copied()).unwrap();
                tri.len()
            });
        })
    });
    g.finish();
}

fn subdivision_sorted_grid(c: &mut Criterion) {
    let center = dvec2(250.0, 250.0);
    let mut points = grid(10.0, 500.0);
    sort_by_center_distance(&mut points, center);
    let mut g = c.benchmark_group("insertion");
    g.sample_size(10).bench_function("subdivision_sorted_grid", |b| {
        b.iter(|| {
            black_box({
                let mut tri =
                    TriSubdiv::<DVec2>::new(0.0, 0.0, 500.0, 500.0, InsertionMode::Subdivision);
                let _ = tri.extend_from(points.iter().copied()).unwrap();
                tri.edges().count()
            });
        })
    });
    g.finish();
}

criterion_group!(
    benches,
    subdivision_random,
    nearest_neighbor_random,
    subdivision_sorted_grid
);
criterion_main!(benches);
