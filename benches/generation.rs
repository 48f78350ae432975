/// Benchmark suite for terrain generation
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use embervox::{OpenSimplexNoise, TerrainGenerator};
use glam::Vec3;

fn bench_generate_chunk(c: &mut Criterion) {
    c.bench_function("generate_chunk", |b| {
        let generator = TerrainGenerator::new(OpenSimplexNoise::new(123_456));
        b.iter(|| generator.generate(black_box(Vec3::ZERO)));
    });
}

fn bench_generate_chunk_grid(c: &mut Criterion) {
    c.bench_function("generate_chunk_grid_3x3", |b| {
        let generator = TerrainGenerator::new(OpenSimplexNoise::new(123_456));
        b.iter(|| {
            for x in 0..3u32 {
                for z in 0..3u32 {
                    let origin = Vec3::new((x * 16) as f32, 0.0, (z * 16) as f32);
                    black_box(generator.generate(origin));
                }
            }
        });
    });
}

fn bench_column_height(c: &mut Criterion) {
    c.bench_function("column_height", |b| {
        let generator = TerrainGenerator::new(OpenSimplexNoise::new(123_456));
        b.iter(|| generator.column_height(black_box(7.0), black_box(11.0)));
    });
}

criterion_group!(
    benches,
    bench_generate_chunk,
    bench_generate_chunk_grid,
    bench_column_height
);
criterion_main!(benches);
