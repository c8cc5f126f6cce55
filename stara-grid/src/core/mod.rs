//! Geometry primitives shared by the grid map and its iterators.
//!
//! All types are plain values with no state:
//!
//! - [`Position`]: world coordinates in meters
//! - [`Length`]: extent of an axis-aligned rectangle in meters
//! - [`GridIndex`]: request-space cell index
//! - [`GridSize`]: number of cells per axis
//! - [`Polygon`]: closed vertex list with a containment test
//!
//! ## Axis Convention
//!
//! `index.x` runs along world X and `index.y` along world Y, both growing
//! as the world coordinate shrinks. Request index (0, 0) is the cell at
//! the maximum-x, maximum-y corner.

mod index;
mod point;
mod polygon;

pub use index::{GridIndex, GridSize};
pub use point::{Length, Position};
pub use polygon::Polygon;

pub(crate) use index::wrap_index;
