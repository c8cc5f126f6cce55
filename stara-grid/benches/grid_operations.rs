//! Benchmark grid map operations performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;
use stara_grid::{GridMap, Length, Polygon, Position};

/// Create a filled elevation map for benchmarking.
fn filled_map(cells: usize, resolution: f64) -> GridMap {
    let side = cells as f64 * resolution;
    let mut map = GridMap::with_geometry(
        ["elevation", "variance"],
        Length::new(side, side),
        resolution,
        Position::ZERO,
    )
    .unwrap();

    let indices: Vec<_> = map.iter().collect();
    for (i, index) in indices.into_iter().enumerate() {
        map.set("elevation", index, (i % 97) as f32 * 0.01).unwrap();
    }
    map
}

/// Regular polygon approximating a circular robot footprint.
fn footprint(center: Position, radius: f64, sides: usize) -> Polygon {
    Polygon::from_vertices(
        (0..sides)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / sides as f64;
                center + Position::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect(),
    )
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_to");

    for shift in [1usize, 10, 100].iter() {
        let mut map = filled_map(400, 0.05);
        let step = *shift as f64 * 0.05;
        let mut forward = true;

        group.bench_with_input(BenchmarkId::from_parameter(shift), shift, |b, _| {
            b.iter(|| {
                let x = if forward { step } else { 0.0 };
                forward = !forward;
                black_box(map.move_to(black_box(Position::new(x, 0.0))))
            })
        });
    }

    group.finish();
}

fn bench_polygon_iteration(c: &mut Criterion) {
    let map = filled_map(400, 0.05);
    let polygon = footprint(Position::new(1.0, -0.5), 2.0, 16);

    c.bench_function("polygon_iterator_16_sides", |b| {
        b.iter(|| {
            let sum: f32 = map
                .iter_polygon(black_box(&polygon))
                .filter_map(|index| map.at("elevation", index).ok())
                .sum();
            black_box(sum)
        })
    });
}

fn bench_get_submap(c: &mut Criterion) {
    let mut map = filled_map(400, 0.05);
    map.move_to(Position::new(3.3, -2.1));

    c.bench_function("get_submap_4m", |b| {
        b.iter(|| {
            let submap = map.get_submap(black_box(Position::new(3.0, -2.0)), Length::new(4.0, 4.0));
            black_box(submap)
        })
    });
}

criterion_group!(benches, bench_move, bench_polygon_iteration, bench_get_submap);
criterion_main!(benches);
