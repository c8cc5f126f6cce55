//! Error types for grid map operations

use crate::core::{GridIndex, GridSize, Length, Position};

/// Result type alias
pub type Result<T> = std::result::Result<T, GridMapError>;

/// Grid map error types.
///
/// Every variant is a local, recoverable condition. Out-of-bounds queries are
/// expected during normal operation (e.g. querying ahead of the explored area).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridMapError {
    /// Index outside the current buffer
    #[error("Index {index} out of range for grid of size {size}")]
    IndexOutOfBounds {
        /// Requested index
        index: GridIndex,
        /// Current buffer size
        size: GridSize,
    },

    /// Position outside the current map extent
    #[error("Position {0} is outside the map")]
    PositionOutOfBounds(Position),

    /// Layer name not present in the map
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    /// Layer name already present in the map
    #[error("Duplicate layer: {0}")]
    DuplicateLayer(String),

    /// Resolution not finite or not strictly positive
    #[error("Invalid resolution: {0}")]
    InvalidResolution(f64),

    /// Length not finite or not strictly positive
    #[error("Invalid length: {0}")]
    InvalidLength(Length),

    /// Requested submap has no overlap with the map
    #[error("Submap at {center} with length {length} does not overlap the map")]
    SubmapOutOfRange {
        /// Requested submap center
        center: Position,
        /// Requested submap length
        length: Length,
    },

    /// Layer data does not match the buffer size
    #[error("Layer {layer} has {actual} cells, expected {expected}")]
    LayerShapeMismatch {
        /// Layer name
        layer: String,
        /// Expected cell count
        expected: usize,
        /// Provided cell count
        actual: usize,
    },

    /// Normalization range is empty or not finite
    #[error("Invalid data range: [{min}, {max}]")]
    InvalidDataRange {
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },
}
