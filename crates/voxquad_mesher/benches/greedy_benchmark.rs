//! Benchmark for greedy meshing throughput.
//!
//! Run with: cargo bench --package voxquad_mesher --bench greedy_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use voxquad_mesher::{GreedyMesher, GridSize, VoxelBuffer};

/// Deterministic rolling terrain: solid below a height field.
fn terrain(n: usize) -> VoxelBuffer {
    let size = GridSize::cube(n);
    let mut grid = VoxelBuffer::filled(size, false);
    for z in 0..n {
        for x in 0..n {
            let height = (n / 2) + ((x * 7 + z * 13) % (n / 4).max(1));
            for y in 0..height.min(n) {
                let _ = grid.set(x, y, z, true);
            }
        }
    }
    grid
}

/// Worst case: every other voxel solid, nothing merges.
fn checkerboard(n: usize) -> VoxelBuffer {
    let size = GridSize::cube(n);
    let data = (0..size.volume())
        .map(|i| {
            let (x, y, z) = (i % n, (i / n) % n, i / (n * n));
            u8::from((x + y + z) % 2 == 0)
        })
        .collect();
    VoxelBuffer::new(data, size)
}

fn benchmark_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_terrain");
    let mut mesher = GreedyMesher::new();

    for n in [16usize, 32, 64] {
        let grid = terrain(n);
        group.throughput(Throughput::Elements(grid.size().volume() as u64));
        group.bench_function(format!("{n}^3"), |b| {
            b.iter(|| black_box(mesher.mesh(&grid.as_grid(), 0)));
        });
    }

    group.finish();
}

fn benchmark_worst_case(c: &mut Criterion) {
    let grid = checkerboard(32);
    let mut mesher = GreedyMesher::new();

    c.bench_function("greedy_checkerboard_32^3", |b| {
        b.iter(|| black_box(mesher.mesh(&grid.as_grid(), 0)));
    });
}

fn benchmark_solid_lod(c: &mut Criterion) {
    let grid = VoxelBuffer::filled(GridSize::cube(64), true);
    let mut mesher = GreedyMesher::new();

    c.bench_function("greedy_solid_64^3_lod2", |b| {
        b.iter(|| black_box(mesher.mesh(&grid.as_grid(), 2)));
    });
}

criterion_group!(
    benches,
    benchmark_chunk_sizes,
    benchmark_worst_case,
    benchmark_solid_lod
);
criterion_main!(benches);
