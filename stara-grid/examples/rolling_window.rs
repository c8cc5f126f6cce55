//! Rolling elevation window following a simulated robot.
//!
//! This example demonstrates:
//! - Building a map from a YAML configuration
//! - Writing a robot footprint into the map with a polygon iterator
//! - Re-centering the map as the robot drives (only exposed cells are cleared)
//! - Exporting the final window as an occupancy grid and a YAML message
//!
//! # Usage
//!
//! ```bash
//! cargo run --example rolling_window -- configs/grid_map.yaml [--steps N]
//! ```

use std::f64::consts::PI;
use std::path::Path;

use stara_grid::{GridMapConfig, Polygon, Position, to_message, to_occupancy_grid};

/// Robot footprint radius (meters)
const ROBOT_RADIUS: f64 = 0.17;

/// Distance driven per step (meters)
const STEP_LENGTH: f64 = 0.08;

/// Regular polygon approximating the robot footprint.
fn footprint(center: Position) -> Polygon {
    const SIDES: usize = 12;
    Polygon::from_vertices(
        (0..SIDES)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / SIDES as f64;
                center + Position::new(ROBOT_RADIUS * angle.cos(), ROBOT_RADIUS * angle.sin())
            })
            .collect(),
    )
}

/// Synthetic floor height: a gentle ramp with a bump.
fn floor_height(p: Position) -> f32 {
    let bump = (-(p.distance(&Position::new(3.0, 1.0))).powi(2)).exp();
    (0.02 * p.x + 0.05 * bump) as f32
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse CLI args
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1).filter(|a| !a.starts_with("--")) {
        Some(path) => GridMapConfig::load(Path::new(path))?,
        None => GridMapConfig::load_default()?,
    };
    let steps = args
        .iter()
        .position(|a| a == "--steps")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);

    let mut map = config.build()?;
    let layer = config
        .layers
        .names
        .first()
        .cloned()
        .ok_or("configuration has no layers")?;
    log::info!(
        "Map: {} cells @ {:.3}m, layer '{}'",
        map.size(),
        map.resolution(),
        layer
    );

    // Drive a quarter circle, keeping the map centered on the robot
    let mut moves = 0;
    for step in 0..steps {
        let angle = step as f64 * STEP_LENGTH / 4.0;
        let robot = Position::new(4.0 * angle.sin(), 4.0 * (1.0 - angle.cos()));

        if map.move_to(robot) {
            moves += 1;
        }

        let cells: Vec<_> = map.iter_polygon(&footprint(robot)).collect();
        for index in cells {
            if let Some(center) = map.position_of(index) {
                map.set(&layer, index, floor_height(center))?;
            }
        }
    }

    let valid = map.iter().filter(|&index| map.is_valid(index)).count();
    log::info!(
        "Drove {} steps, map moved {} times, {} of {} cells valid, center {}",
        steps,
        moves,
        valid,
        map.cell_count(),
        map.position()
    );

    let occupancy = to_occupancy_grid(&map, &layer, 0.0, 0.2)?;
    let known = occupancy.data.iter().filter(|&&v| v >= 0).count();
    log::info!(
        "Occupancy grid {}x{} origin {}, {} known cells",
        occupancy.width,
        occupancy.height,
        occupancy.origin,
        known
    );

    std::fs::create_dir_all("output")?;
    std::fs::write("output/rolling_window.yaml", to_message(&map).to_yaml()?)?;
    log::info!("Saved message to output/rolling_window.yaml");

    Ok(())
}
