//! Grid map implementation.
//!
//! ## Key Types
//!
//! - [`GridMap`]: layered storage with circular-buffer indexing,
//!   position/index conversion, re-centering and submap extraction
//! - [`Submap`]: independent copy of a clipped region

mod core;
mod geometry;
mod submap;

pub use self::core::{GridMap, NO_DATA};
pub use submap::Submap;
