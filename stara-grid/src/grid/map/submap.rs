//! Submap extraction.

use log::trace;

use crate::core::{GridIndex, Length, Position};
use crate::grid::error::{GridMapError, Result};

use super::core::{GridMap, storage_offset};

/// Independent copy of a rectangular region of a [`GridMap`].
#[derive(Clone, Debug)]
pub struct Submap {
    /// Extracted map (own buffer, start index zero)
    pub map: GridMap,
    /// Index of the requested center within `map`
    pub index_in_submap: GridIndex,
}

impl GridMap {
    /// Extract the region centered at `center` with extent `length`.
    ///
    /// The requested rectangle is clipped to the map, so the returned submap
    /// may be smaller than requested. Its buffer is re-linearized (start index
    /// zero) and holds copies of every layer. `index_in_submap` addresses the
    /// requested center, or the closest cell to it when the center was
    /// clipped away.
    ///
    /// Fails with [`GridMapError::SubmapOutOfRange`] when the rectangle does
    /// not overlap the map.
    pub fn get_submap(&self, center: Position, length: Length) -> Result<Submap> {
        let (start, size) = self
            .submap_range(center, length)
            .ok_or(GridMapError::SubmapOutOfRange { center, length })?;

        let top_left = self
            .position_of(start)
            .ok_or(GridMapError::IndexOutOfBounds {
                index: start,
                size: self.size,
            })?;

        let mut data = std::collections::HashMap::with_capacity(self.layers.len());
        for layer in &self.layers {
            let values = self.layer_storage(layer)?;
            let copied: Vec<f32> = self
                .iter_submap(start, size)
                .map(|index| values[storage_offset(index, self.start_index, self.size)])
                .collect();
            data.insert(layer.clone(), copied);
        }

        let resolution = self.resolution;
        let map = GridMap {
            layers: self.layers.clone(),
            data,
            basic_layers: self.basic_layers.clone(),
            length: Length::new(size.x as f64 * resolution, size.y as f64 * resolution),
            resolution,
            position: Position::new(
                top_left.x - (size.x as f64 - 1.0) * 0.5 * resolution,
                top_left.y - (size.y as f64 - 1.0) * 0.5 * resolution,
            ),
            size,
            start_index: GridIndex::ZERO,
        };

        let (min, max) = map.bounds();
        let index_in_submap = map
            .index_of(center.clamp(&min, &max))
            .ok_or(GridMapError::PositionOutOfBounds(center))?;

        trace!(
            "[GridMap] Submap at {} -> start {}, size {}, center index {}",
            center, start, size, index_in_submap
        );

        Ok(Submap {
            map,
            index_in_submap,
        })
    }
}
