/// Benchmark suite for chunk meshing
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use embervox::{mesh_chunk, AtlasTile, BlockType, Chunk, GeometryPool};
use embervox::{OpenSimplexNoise, TerrainGenerator};
use glam::Vec3;

fn filled_chunk(block_type: BlockType) -> Chunk {
    let mut chunk = Chunk::new(Vec3::ZERO);
    for x in 0..chunk.size() {
        for y in 0..chunk.size() {
            for z in 0..chunk.size() {
                chunk.set(x, y, z, block_type);
            }
        }
    }
    chunk
}

fn bench_mesh_uniform_air(c: &mut Criterion) {
    c.bench_function("mesh_uniform_air", |b| {
        let chunk = Chunk::new(Vec3::ZERO);
        let mut pool = GeometryPool::new();
        b.iter(|| {
            mesh_chunk(black_box(&chunk), &mut pool, AtlasTile::default());
            pool.reset();
        });
    });
}

fn bench_mesh_uniform_solid(c: &mut Criterion) {
    c.bench_function("mesh_uniform_solid", |b| {
        let chunk = filled_chunk(BlockType::Dirt);
        let mut pool = GeometryPool::new();
        b.iter(|| {
            mesh_chunk(black_box(&chunk), &mut pool, AtlasTile::default());
            pool.reset();
        });
    });
}

fn bench_mesh_terrain(c: &mut Criterion) {
    c.bench_function("mesh_terrain", |b| {
        let generator = TerrainGenerator::new(OpenSimplexNoise::new(123_456));
        let chunk = generator.generate(Vec3::ZERO);
        let mut pool = GeometryPool::new();
        b.iter(|| {
            mesh_chunk(black_box(&chunk), &mut pool, AtlasTile::default());
            pool.reset();
        });
    });
}

fn bench_mesh_and_export(c: &mut Criterion) {
    c.bench_function("mesh_and_export", |b| {
        let generator = TerrainGenerator::new(OpenSimplexNoise::new(123_456));
        let chunk = generator.generate(Vec3::ZERO);
        let mut pool = GeometryPool::new();
        b.iter(|| {
            mesh_chunk(black_box(&chunk), &mut pool, AtlasTile::default());
            let mesh = pool.to_mesh_data();
            pool.reset();
            mesh
        });
    });
}

criterion_group!(
    benches,
    bench_mesh_uniform_air,
    bench_mesh_uniform_solid,
    bench_mesh_terrain,
    bench_mesh_and_export
);
criterion_main!(benches);
