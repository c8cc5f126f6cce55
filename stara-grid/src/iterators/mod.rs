//! Read-only cursors over grid map regions.
//!
//! Every iterator yields request-space [`GridIndex`](crate::GridIndex) values
//! in row-major order (outer loop along `x`, inner loop along `y`) and
//! borrows its map for its whole lifetime:
//!
//! - [`GridIterator`]: every cell of the map
//! - [`SubmapIterator`]: a rectangle given by start index and size
//! - [`PolygonIterator`]: cells whose centers lie inside a polygon
//!
//! Besides [`Iterator`], each type exposes the explicit cursor API
//! `current_index` / `advance` / `is_past_end`.

mod grid;
mod polygon;
mod submap;

pub use grid::GridIterator;
pub use polygon::PolygonIterator;
pub use submap::{IterState, SubmapIterator};
