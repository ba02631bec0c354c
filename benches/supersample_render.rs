use criterion::{Criterion, black_box, criterion_group, criterion_main};
use koch_snowflake::{SupersampleRasterizer, Vec2, initial_triangle, polyline_points, refine};

fn bench_render(c: &mut Criterion) {
    let mut boundary = initial_triangle(Vec2::new(400.0, 400.0), 300.0).unwrap();
    for _ in 0..7 {
        boundary = refine(&boundary).unwrap();
    }

    let mut rasterizer = SupersampleRasterizer::new(800, 4).unwrap();

    c.bench_function("supersample_800x4_level7", |b| {
        b.iter(|| rasterizer.render(black_box(&boundary)))
    });

    c.bench_function("polyline_level7", |b| {
        b.iter(|| polyline_points(black_box(&boundary)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
