use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use koch_snowflake::{Boundary, Vec2, initial_triangle, refine, refine_parallel_rayon};

fn boundary_at_level(level: usize) -> Boundary {
    let mut boundary = initial_triangle(Vec2::new(400.0, 400.0), 300.0).unwrap();

    for _ in 0..level {
        boundary = refine(&boundary).unwrap();
    }

    boundary
}

fn bench_refine(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine");

    for level in [4, 6, 8] {
        let boundary = boundary_at_level(level);

        group.bench_with_input(BenchmarkId::new("sequential", level), &boundary, |b, boundary| {
            b.iter(|| refine(black_box(boundary)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("rayon", level), &boundary, |b, boundary| {
            b.iter(|| refine_parallel_rayon(black_box(boundary)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_refine);
criterion_main!(benches);
