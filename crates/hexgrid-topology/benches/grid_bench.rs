//! Benchmarks for hexgrid topology
//!
//! Measures performance of:
//! - Offset/cube conversion
//! - Grid generation per shape
//! - Neighbor and range queries

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexgrid_topology::{
    cube_to_offset, offset_to_cube, CellOrientation, CubeCoordinate, Grid, GridConfig, GridShape,
    OffsetCoordinate,
};

/// Benchmark offset to cube and back for each orientation
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset_round_trip");

    for orientation in CellOrientation::ALL {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(orientation),
            &orientation,
            |b, &k| {
                let o = OffsetCoordinate::new(-37, 1021);
                b.iter(|| cube_to_offset(offset_to_cube(black_box(o), k), k))
            },
        );
    }
    group.finish();
}

/// Benchmark full generation at different sizes
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for shape in GridShape::ALL {
        for &size in &[8u32, 32, 128] {
            let config = GridConfig::new(shape, size, size);
            group.throughput(Throughput::Elements(config.expected_cell_count()));
            group.bench_with_input(
                BenchmarkId::new(shape.to_string(), size),
                &config,
                |b, config| {
                    let mut grid: Grid = Grid::new(config.clone()).unwrap();
                    b.iter(|| {
                        grid.generate();
                        black_box(grid.len())
                    })
                },
            );
        }
    }
    group.finish();
}

/// Benchmark neighbor lookups on a large hexagon
fn bench_neighbors(c: &mut Criterion) {
    let mut grid: Grid = Grid::new(GridConfig::new(GridShape::Hexagon, 64, 64)).unwrap();
    grid.generate();

    let coords = [
        CubeCoordinate::ORIGIN,
        CubeCoordinate::new_xz(20, -5),
        CubeCoordinate::new_xz(64, 0), // rim
    ];

    let mut group = c.benchmark_group("neighbors");
    for coord in coords {
        group.throughput(Throughput::Elements(6));
        group.bench_with_input(
            BenchmarkId::new("ring", coord.length()),
            &coord,
            |b, &c| b.iter(|| grid.neighbors(black_box(c)).len()),
        );
    }
    group.finish();
}

/// Benchmark range queries of growing radius
fn bench_cells_in_range(c: &mut Criterion) {
    let mut grid: Grid = Grid::new(GridConfig::new(GridShape::Hexagon, 64, 64)).unwrap();
    grid.generate();

    let mut group = c.benchmark_group("cells_in_range");
    for &range in &[1u32, 4, 16, 64] {
        let r = range as u64;
        group.throughput(Throughput::Elements(3 * r * r + 3 * r + 1));
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |b, &range| {
            b.iter(|| grid.cells_in_range(black_box(CubeCoordinate::ORIGIN), range).len())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_conversion,
    bench_generate,
    bench_neighbors,
    bench_cells_in_range,
);
criterion_main!(benches);
