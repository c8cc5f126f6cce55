//! Integer cell index and buffer size types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell index in request space.
///
/// `x` runs along world X and `y` along world Y. Index (0, 0) is the cell at
/// the maximum-x, maximum-y corner of the map; indices grow as world
/// coordinates shrink. A request index only addresses storage through the
/// owning map, which applies its circular-buffer offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridIndex {
    /// Index along world X (storage row)
    pub x: usize,
    /// Index along world Y (storage column)
    pub y: usize,
}

impl GridIndex {
    /// Create a new index
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The (0, 0) index
    pub const ZERO: GridIndex = GridIndex { x: 0, y: 0 };
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Number of cells along each axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    /// Cells along world X (storage rows)
    pub x: usize,
    /// Cells along world Y (storage columns)
    pub y: usize,
}

impl GridSize {
    /// Create a new size
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Empty size
    pub const ZERO: GridSize = GridSize { x: 0, y: 0 };

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.x * self.y
    }

    /// True if there are no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0
    }

    /// True if `index` lies in `[0, size)` on both axes
    #[inline]
    pub fn contains(&self, index: GridIndex) -> bool {
        index.x < self.x && index.y < self.y
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Wrap a signed index into `[0, size)`.
///
/// `size` must be non-zero.
#[inline]
pub(crate) fn wrap_index(value: i64, size: usize) -> usize {
    value.rem_euclid(size as i64) as usize
}
