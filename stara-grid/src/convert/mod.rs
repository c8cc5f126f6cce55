//! Conversions between [`GridMap`](crate::GridMap) and exchange formats.
//!
//! Adapters are free functions taking `&GridMap`. They read cells through
//! request-space indices, so their output is the same whether or not the map
//! has been moved.
//!
//! | Format | Export | Import |
//! |--------|--------|--------|
//! | [`GridMapMessage`] | [`to_message`], [`to_message_layers`] | [`from_message`] |
//! | [`OccupancyGrid`] | [`to_occupancy_grid`] | - |
//! | [`PointCloud`] | [`to_point_cloud`], [`to_point_cloud_all`] | - |

mod message;
mod occupancy;
mod point_cloud;

pub use message::{GridMapInfo, GridMapMessage, from_message, to_message, to_message_layers};
pub use occupancy::{
    FREE_OCCUPANCY, OCCUPIED_OCCUPANCY, OccupancyGrid, UNKNOWN_OCCUPANCY, to_occupancy_grid,
};
pub use point_cloud::{PointCloud, to_point_cloud, to_point_cloud_all};
