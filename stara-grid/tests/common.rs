//! Test utilities for grid map integration tests.
//!
//! Provides deterministic map fixtures and seeded random inputs so
//! property-style tests are reproducible.

#![allow(dead_code)]

use rand::Rng;
use rand::rngs::StdRng;
use stara_grid::{GridIndex, GridMap, Length, Polygon, Position};

/// Map with layers "a" and "b", resolution 1.0, centered at the origin.
pub fn square_map(cells: usize) -> GridMap {
    GridMap::with_geometry(
        ["a", "b"],
        Length::new(cells as f64, cells as f64),
        1.0,
        Position::ZERO,
    )
    .unwrap()
}

/// Fill every cell of every layer with a distinct value.
pub fn fill_distinct(map: &mut GridMap) {
    let indices: Vec<GridIndex> = map.iter().collect();
    let layers: Vec<String> = map.layers().to_vec();
    for (layer_number, layer) in layers.iter().enumerate() {
        for (i, &index) in indices.iter().enumerate() {
            let value = (layer_number * 10_000 + i) as f32;
            map.set(layer, index, value).unwrap();
        }
    }
}

/// Random polygon with `n` vertices inside the given square.
pub fn random_polygon(rng: &mut StdRng, n: usize, half_extent: f64) -> Polygon {
    Polygon::from_vertices(
        (0..n)
            .map(|_| {
                Position::new(
                    rng.random_range(-half_extent..half_extent),
                    rng.random_range(-half_extent..half_extent),
                )
            })
            .collect(),
    )
}

/// Bitwise equality that treats equal NaN payloads as equal.
pub fn same_bits(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits()
}
