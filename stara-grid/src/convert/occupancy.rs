//! Occupancy grid export.
//!
//! Produces the row-major layout used by ROS `nav_msgs/OccupancyGrid` and
//! map servers: cell `(0, 0)` is the min corner and `x` varies fastest.
//! This is the reverse of the map's own request-space order, where
//! index (0, 0) sits at the max corner.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::grid::{GridMap, GridMapError, Result};

/// Occupancy value of a cell without data
pub const UNKNOWN_OCCUPANCY: i8 = -1;

/// Lowest occupancy value (free)
pub const FREE_OCCUPANCY: i8 = 0;

/// Highest occupancy value (occupied)
pub const OCCUPIED_OCCUPANCY: i8 = 100;

/// Occupancy grid in ROS layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    /// Cell edge length in meters
    pub resolution: f64,
    /// Cells along world x
    pub width: usize,
    /// Cells along world y
    pub height: usize,
    /// World position of the min corner of cell (0, 0)
    pub origin: Position,
    /// Occupancy per cell: `-1` unknown, otherwise `0..=100`
    pub data: Vec<i8>,
}

impl OccupancyGrid {
    /// Occupancy at column `gx`, row `gy`.
    #[inline]
    pub fn get(&self, gx: usize, gy: usize) -> Option<i8> {
        if gx >= self.width || gy >= self.height {
            return None;
        }
        self.data.get(gy * self.width + gx).copied()
    }
}

/// Export one layer as an occupancy grid.
///
/// Values are mapped linearly so that `data_min` becomes 0 and `data_max`
/// becomes 100, then clamped. Missing cells become [`UNKNOWN_OCCUPANCY`].
pub fn to_occupancy_grid(
    map: &GridMap,
    layer: &str,
    data_min: f32,
    data_max: f32,
) -> Result<OccupancyGrid> {
    if !data_min.is_finite() || !data_max.is_finite() || data_max <= data_min {
        return Err(GridMapError::InvalidDataRange {
            min: data_min,
            max: data_max,
        });
    }
    if !map.has_layer(layer) {
        return Err(GridMapError::UnknownLayer(layer.to_string()));
    }

    let size = map.size();
    let (width, height) = (size.x, size.y);
    let mut data = vec![UNKNOWN_OCCUPANCY; size.cell_count()];

    for index in map.iter() {
        let value = map.at(layer, index)?;
        // Flip both axes: request index grows toward the min corner
        let gx = width - 1 - index.x;
        let gy = height - 1 - index.y;
        data[gy * width + gx] = occupancy_value(value, data_min, data_max);
    }

    let (origin, _) = map.bounds();
    Ok(OccupancyGrid {
        resolution: map.resolution(),
        width,
        height,
        origin,
        data,
    })
}

#[inline]
fn occupancy_value(value: f32, data_min: f32, data_max: f32) -> i8 {
    if value.is_nan() {
        return UNKNOWN_OCCUPANCY;
    }
    let scale = f32::from(OCCUPIED_OCCUPANCY - FREE_OCCUPANCY);
    let scaled = (value - data_min) / (data_max - data_min) * scale;
    scaled
        .round()
        .clamp(f32::from(FREE_OCCUPANCY), f32::from(OCCUPIED_OCCUPANCY)) as i8
}
