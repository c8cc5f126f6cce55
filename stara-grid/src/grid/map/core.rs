//! Grid map core: layers, geometry and cell access.

use std::collections::HashMap;

use log::debug;

use crate::core::{GridIndex, GridSize, Length, Polygon, Position};
use crate::grid::error::{GridMapError, Result};
use crate::iterators::{GridIterator, PolygonIterator, SubmapIterator};

/// Sentinel value marking a cell with no data.
pub const NO_DATA: f32 = f32::NAN;

/// Layered 2D grid map backed by a circular buffer.
///
/// Every layer is a row-major `Vec<f32>` of exactly `size.x * size.y` values
/// (row = index along world X). Callers address cells by request-space
/// [`GridIndex`]; the physical slot is `(index + start_index) mod size`, which
/// lets [`GridMap::move_to`] re-center the map by rotating `start_index`
/// instead of copying data.
///
/// ## Circular Indexing
///
/// One axis with `size = 8` and `start_index = 5`:
///
/// ```text
/// request index:  0 1 2 3 4 5 6 7
/// physical slot:  5 6 7 0 1 2 3 4
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridMap {
    // === Layer Data ===
    /// Layer names in insertion order
    pub(super) layers: Vec<String>,
    /// Cell values per layer (physical storage order)
    pub(super) data: HashMap<String, Vec<f32>>,
    /// Layers that decide cell validity
    pub(super) basic_layers: Vec<String>,

    // === Geometry ===
    /// Side lengths in meters (always `size * resolution`)
    pub(super) length: Length,
    /// Cell edge length in meters
    pub(super) resolution: f64,
    /// World position of the map center
    pub(super) position: Position,
    /// Cells per axis
    pub(super) size: GridSize,
    /// Physical slot of request index (0, 0)
    pub(super) start_index: GridIndex,
}

/// Physical storage offset of a request-space index.
///
/// This is the only place where the circular-buffer rotation is applied.
/// `index` must already be within `size`.
#[inline]
pub(super) fn storage_offset(index: GridIndex, start: GridIndex, size: GridSize) -> usize {
    let x = (index.x + start.x) % size.x;
    let y = (index.y + start.y) % size.y;
    x * size.y + y
}

impl GridMap {
    // === Constructors ===

    /// Create an unsized map with the given layers.
    ///
    /// The map has zero cells until [`GridMap::resize`] is called.
    /// Duplicate layer names are rejected.
    pub fn new<I, S>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::default();
        for layer in layers {
            map.add_layer(layer)?;
        }
        Ok(map)
    }

    /// Create a map with layers and geometry in one step.
    pub fn with_geometry<I, S>(
        layers: I,
        length: Length,
        resolution: f64,
        position: Position,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::new(layers)?;
        map.resize(length, resolution)?;
        map.set_position(position);
        Ok(map)
    }

    // === Geometry ===

    /// Set length and resolution.
    ///
    /// Recomputes the buffer size as `round(length / resolution)`, refills
    /// every layer with [`NO_DATA`] and resets the start index. The stored
    /// length becomes `size * resolution`. The center position is kept.
    pub fn resize(&mut self, length: Length, resolution: f64) -> Result<()> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridMapError::InvalidResolution(resolution));
        }
        if !length.is_positive() {
            return Err(GridMapError::InvalidLength(length));
        }

        let size = GridSize::new(
            (length.x / resolution).round() as usize,
            (length.y / resolution).round() as usize,
        );

        self.resolution = resolution;
        self.size = size;
        self.length = Length::new(size.x as f64 * resolution, size.y as f64 * resolution);
        self.start_index = GridIndex::ZERO;

        let cell_count = size.cell_count();
        for values in self.data.values_mut() {
            values.clear();
            values.resize(cell_count, NO_DATA);
        }

        debug!(
            "[GridMap] Resized to {} cells ({:.3}m x {:.3}m @ {:.3}m)",
            size, self.length.x, self.length.y, resolution
        );
        Ok(())
    }

    /// Set the world position of the map center without touching cell data.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Side lengths in meters.
    #[inline]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Cell edge length in meters.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// World position of the map center.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Cells per axis.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Physical slot currently holding request index (0, 0).
    #[inline]
    pub fn start_index(&self) -> GridIndex {
        self.start_index
    }

    /// Total number of cells per layer.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size.cell_count()
    }

    // === Layers ===

    /// Layer names in insertion order.
    #[inline]
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    /// Basic layer names.
    #[inline]
    pub fn basic_layers(&self) -> &[String] {
        &self.basic_layers
    }

    /// True if the layer exists.
    #[inline]
    pub fn has_layer(&self, layer: &str) -> bool {
        self.data.contains_key(layer)
    }

    /// Add a layer filled with [`NO_DATA`].
    pub fn add_layer(&mut self, layer: impl Into<String>) -> Result<()> {
        self.add_layer_with(layer, NO_DATA)
    }

    /// Add a layer with every cell set to `value`.
    pub fn add_layer_with(&mut self, layer: impl Into<String>, value: f32) -> Result<()> {
        let layer = layer.into();
        if self.has_layer(&layer) {
            return Err(GridMapError::DuplicateLayer(layer));
        }

        self.data
            .insert(layer.clone(), vec![value; self.size.cell_count()]);
        self.layers.push(layer);
        Ok(())
    }

    /// Remove a layer. It is also dropped from the basic layers.
    pub fn remove_layer(&mut self, layer: &str) -> Result<()> {
        if self.data.remove(layer).is_none() {
            return Err(GridMapError::UnknownLayer(layer.to_string()));
        }
        self.layers.retain(|name| name != layer);
        self.basic_layers.retain(|name| name != layer);
        Ok(())
    }

    /// Replace the basic layers. Every name must be an existing layer.
    pub fn set_basic_layers<I, S>(&mut self, layers: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let layers: Vec<String> = layers.into_iter().map(Into::into).collect();
        if let Some(missing) = layers.iter().find(|name| !self.has_layer(name)) {
            return Err(GridMapError::UnknownLayer(missing.clone()));
        }
        self.basic_layers = layers;
        Ok(())
    }

    #[inline]
    pub(super) fn layer_storage(&self, layer: &str) -> Result<&Vec<f32>> {
        self.data
            .get(layer)
            .ok_or_else(|| GridMapError::UnknownLayer(layer.to_string()))
    }

    #[inline]
    pub(super) fn layer_storage_mut(&mut self, layer: &str) -> Result<&mut Vec<f32>> {
        self.data
            .get_mut(layer)
            .ok_or_else(|| GridMapError::UnknownLayer(layer.to_string()))
    }

    // === Cell Access ===

    /// Checked physical offset of a request-space index.
    #[inline]
    fn offset_of(&self, index: GridIndex) -> Result<usize> {
        if !self.size.contains(index) {
            return Err(GridMapError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        Ok(storage_offset(index, self.start_index, self.size))
    }

    /// Read a cell value.
    pub fn at(&self, layer: &str, index: GridIndex) -> Result<f32> {
        let values = self.layer_storage(layer)?;
        Ok(values[self.offset_of(index)?])
    }

    /// Mutable reference to a cell value.
    pub fn at_mut(&mut self, layer: &str, index: GridIndex) -> Result<&mut f32> {
        let offset = self.offset_of(index)?;
        let values = self.layer_storage_mut(layer)?;
        Ok(&mut values[offset])
    }

    /// Write a cell value.
    pub fn set(&mut self, layer: &str, index: GridIndex, value: f32) -> Result<()> {
        *self.at_mut(layer, index)? = value;
        Ok(())
    }

    /// Read the cell containing a world position.
    pub fn at_position(&self, layer: &str, position: Position) -> Result<f32> {
        let index = self
            .index_of(position)
            .ok_or(GridMapError::PositionOutOfBounds(position))?;
        self.at(layer, index)
    }

    /// True if all basic layers hold data at `index`.
    ///
    /// Without basic layers every layer is checked. A map without layers has
    /// no valid cells.
    pub fn is_valid(&self, index: GridIndex) -> bool {
        if self.basic_layers.is_empty() {
            self.is_valid_in(index, &self.layers)
        } else {
            self.is_valid_in(index, &self.basic_layers)
        }
    }

    /// True if every listed layer holds data at `index`.
    pub fn is_valid_in<S: AsRef<str>>(&self, index: GridIndex, layers: &[S]) -> bool {
        !layers.is_empty()
            && layers.iter().all(|layer| {
                self.at(layer.as_ref(), index)
                    .is_ok_and(|value| !value.is_nan())
            })
    }

    // === Iterators ===

    /// Iterate over every index of the map in row-major order.
    pub fn iter(&self) -> GridIterator<'_> {
        GridIterator::new(self)
    }

    /// Iterate over a request-space rectangle.
    pub fn iter_submap(&self, start: GridIndex, size: GridSize) -> SubmapIterator<'_> {
        SubmapIterator::new(self, start, size)
    }

    /// Iterate over the cells whose centers lie inside `polygon`.
    pub fn iter_polygon(&self, polygon: &Polygon) -> PolygonIterator<'_> {
        PolygonIterator::new(self, polygon)
    }

    // === Bulk Access ===

    /// Copy of a layer in canonical row-major order from request index (0, 0).
    ///
    /// The circular-buffer rotation is undone, so the result never depends on
    /// how far the map has moved.
    pub fn layer_data(&self, layer: &str) -> Result<Vec<f32>> {
        let values = self.layer_storage(layer)?;
        Ok(self
            .iter()
            .map(|index| values[storage_offset(index, self.start_index, self.size)])
            .collect())
    }

    /// Overwrite a layer from canonical row-major data.
    pub fn set_layer_data(&mut self, layer: &str, canonical: &[f32]) -> Result<()> {
        let (start, size) = (self.start_index, self.size);
        let values = self.layer_storage_mut(layer)?;
        if canonical.len() != values.len() {
            return Err(GridMapError::LayerShapeMismatch {
                layer: layer.to_string(),
                expected: values.len(),
                actual: canonical.len(),
            });
        }

        for (linear, &value) in canonical.iter().enumerate() {
            let index = GridIndex::new(linear / size.y, linear % size.y);
            values[storage_offset(index, start, size)] = value;
        }
        Ok(())
    }

    /// Reset one layer to [`NO_DATA`].
    pub fn clear(&mut self, layer: &str) -> Result<()> {
        self.layer_storage_mut(layer)?.fill(NO_DATA);
        Ok(())
    }

    /// Reset every layer to [`NO_DATA`].
    pub fn clear_all(&mut self) {
        for values in self.data.values_mut() {
            values.fill(NO_DATA);
        }
    }

    /// Reset a request-space rectangle to [`NO_DATA`] in every layer.
    ///
    /// The rectangle must lie within the buffer.
    pub(super) fn clear_region(&mut self, start: GridIndex, extent: GridSize) {
        let (start_index, size) = (self.start_index, self.size);
        for values in self.data.values_mut() {
            for x in start.x..start.x + extent.x {
                for y in start.y..start.y + extent.y {
                    values[storage_offset(GridIndex::new(x, y), start_index, size)] = NO_DATA;
                }
            }
        }
    }
}
