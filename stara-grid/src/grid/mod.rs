//! Layered grid map storage.
//!
//! The map keeps one `f32` matrix per named layer over a fixed-resolution
//! buffer. Re-centering rotates a start index instead of copying data, so a
//! map that follows a moving robot only pays for the cells it uncovers.
//!
//! ## Architecture
//!
//! ```text
//!            world position
//!                  │ index_of / position_of
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │  request-space GridIndex     │◄── iterators (grid, submap, polygon)
//!   └──────────────┬───────────────┘
//!                  │ (index + start_index) mod size
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │  physical storage per layer  │
//!   └──────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stara_grid::{GridIndex, GridMap, Length, Position};
//!
//! let mut map = GridMap::with_geometry(
//!     ["elevation"],
//!     Length::new(4.0, 4.0),
//!     0.5,
//!     Position::ZERO,
//! )?;
//!
//! map.set("elevation", GridIndex::new(2, 3), 0.12)?;
//! assert_eq!(map.at_position("elevation", Position::new(0.75, 0.25))?, 0.12);
//!
//! // Follow the robot one meter forward; only two rows are cleared
//! map.move_to(Position::new(1.0, 0.0));
//! assert_eq!(map.at_position("elevation", Position::new(0.75, 0.25))?, 0.12);
//! # Ok::<(), stara_grid::GridMapError>(())
//! ```

mod error;
mod map;

pub use error::{GridMapError, Result};
pub use map::{GridMap, NO_DATA, Submap};
