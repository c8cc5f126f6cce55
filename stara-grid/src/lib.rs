//! # Stara Grid
//!
//! Layered 2D grid maps for mobile robots, backed by a circular buffer.
//!
//! ## Overview
//!
//! A [`GridMap`] stores any number of named `f32` layers over a fixed-size,
//! fixed-resolution rectangle centered on a world position. Missing data is
//! [`NO_DATA`] (`NaN`).
//!
//! ## Features
//!
//! - **Rolling Window**: [`GridMap::move_to`] re-centers the map in time
//!   proportional to the shift, keeping every overlapping cell
//! - **Submaps**: [`GridMap::get_submap`] copies a clipped rectangle out as a
//!   standalone map
//! - **Iterators**: whole map, rectangular submap and polygon regions, all
//!   yielding request-space indices in row-major order
//! - **Adapters**: message snapshots, occupancy grids and point clouds
//! - **Configuration**: YAML-loadable map geometry and layers
//!
//! ## Quick Start
//!
//! ```rust
//! use stara_grid::{GridMap, Length, Polygon, Position};
//!
//! let mut map = GridMap::with_geometry(
//!     ["elevation"],
//!     Length::new(10.0, 10.0),
//!     1.0,
//!     Position::ZERO,
//! )?;
//!
//! let footprint = Polygon::from_rectangle(Position::ZERO, Length::new(2.0, 2.0));
//! let cells: Vec<_> = map.iter_polygon(&footprint).collect();
//! for index in cells {
//!     map.set("elevation", index, 0.0)?;
//! }
//!
//! map.move_to(Position::new(3.0, 0.0));
//! assert_eq!(map.at_position("elevation", Position::new(0.5, 0.5))?, 0.0);
//! # Ok::<(), stara_grid::GridMapError>(())
//! ```
//!
//! ## Coordinate System
//!
//! - Positions are world coordinates in meters (`f64`)
//! - Request index (0, 0) is the cell at the maximum-x, maximum-y corner
//! - `index.x` grows toward -X, `index.y` grows toward -Y

#![warn(missing_docs)]

// Geometry primitives
pub mod core;

// Layered circular-buffer storage
pub mod grid;

// Region iterators
pub mod iterators;

// Exchange formats
pub mod convert;

// YAML configuration
pub mod config;

// Re-export commonly used types
pub use crate::core::{GridIndex, GridSize, Length, Polygon, Position};

pub use grid::{GridMap, GridMapError, NO_DATA, Result, Submap};

pub use iterators::{GridIterator, IterState, PolygonIterator, SubmapIterator};

pub use convert::{
    GridMapMessage, OccupancyGrid, PointCloud, from_message, to_message, to_occupancy_grid,
    to_point_cloud,
};

pub use config::{ConfigLoadError, GridMapConfig};
