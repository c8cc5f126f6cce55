//! Position/index conversion and re-centering.

use log::{debug, trace};

use crate::core::{GridIndex, GridSize, Length, Position, wrap_index};

use super::core::GridMap;

impl GridMap {
    /// World bounds: (min corner, max corner).
    pub fn bounds(&self) -> (Position, Position) {
        let half = self.length.half();
        (self.position - half, self.position + half)
    }

    /// Continuous index coordinates of a position.
    ///
    /// Cell `i` spans `[i, i + 1)` on each axis; the map's max corner is at 0.
    #[inline]
    fn index_vector(&self, position: Position) -> (f64, f64) {
        let corner = self.position + self.length.half();
        (
            (corner.x - position.x) / self.resolution,
            (corner.y - position.y) / self.resolution,
        )
    }

    /// World position of a cell center.
    ///
    /// Returns `None` if the index is outside the buffer.
    pub fn position_of(&self, index: GridIndex) -> Option<Position> {
        if !self.size.contains(index) {
            return None;
        }
        let corner = self.position + self.length.half();
        Some(Position::new(
            corner.x - (index.x as f64 + 0.5) * self.resolution,
            corner.y - (index.y as f64 + 0.5) * self.resolution,
        ))
    }

    /// Index of the cell whose center is closest to `position`.
    ///
    /// A position on the border between two cells maps to the lower index.
    /// The map extent is closed, so positions on the outer border map to the
    /// border cells. Returns `None` outside the map.
    pub fn index_of(&self, position: Position) -> Option<GridIndex> {
        if self.size.is_empty() {
            return None;
        }

        let (vx, vy) = self.index_vector(position);
        let x = nearest_cell(vx, self.size.x)?;
        let y = nearest_cell(vy, self.size.y)?;
        Some(GridIndex::new(x, y))
    }

    /// True if the position lies within the map extent.
    #[inline]
    pub fn is_inside(&self, position: Position) -> bool {
        self.index_of(position).is_some()
    }

    /// Index rectangle covering a world rectangle, clipped to the map.
    ///
    /// Returns the request-space start index and size of every cell that
    /// overlaps the rectangle centered at `center` with extent `length`, or
    /// `None` if the overlap is empty.
    pub fn submap_range(&self, center: Position, length: Length) -> Option<(GridIndex, GridSize)> {
        if !length.is_positive() {
            return None;
        }
        let half = length.half();
        self.submap_range_between(center - half, center + half)
    }

    /// Index rectangle covering the world rectangle `[min, max]`.
    pub(crate) fn submap_range_between(
        &self,
        min: Position,
        max: Position,
    ) -> Option<(GridIndex, GridSize)> {
        if self.size.is_empty() {
            return None;
        }

        let (map_min, map_max) = self.bounds();
        let min = min.max(&map_min);
        let max = max.min(&map_max);
        // Also rejects NaN corners
        if !(min.x < max.x && min.y < max.y) {
            return None;
        }

        // Max corner maps to the lowest index
        let (top_x, top_y) = self.index_vector(max);
        let (bottom_x, bottom_y) = self.index_vector(min);

        let (start_x, end_x) = cell_span(top_x, bottom_x, self.size.x)?;
        let (start_y, end_y) = cell_span(top_y, bottom_y, self.size.y)?;

        Some((
            GridIndex::new(start_x, start_y),
            GridSize::new(end_x - start_x + 1, end_y - start_y + 1),
        ))
    }

    /// Re-center the map on `position`.
    ///
    /// The shift is rounded to whole cells, so the resulting center stays
    /// aligned with the cell lattice and may differ from `position` by up to
    /// half a cell. Cells that remain inside the map keep their values; only
    /// the newly exposed rows and columns are reset to no data. Cost is
    /// proportional to the shift, not to the map area.
    ///
    /// Returns true if the map moved by at least one cell.
    pub fn move_to(&mut self, position: Position) -> bool {
        if self.size.is_empty() {
            return false;
        }

        let shift_x = cell_shift(position.x - self.position.x, self.resolution);
        let shift_y = cell_shift(position.y - self.position.y, self.resolution);
        if shift_x == 0.0 && shift_y == 0.0 {
            return false;
        }

        // Moving the center by +k cells maps old index i to new index i + k.
        // Only k mod size matters for the rotation, which keeps huge shifts
        // within i64 range.
        self.start_index = GridIndex::new(
            rotate_start(self.start_index.x, shift_x, self.size.x),
            rotate_start(self.start_index.y, shift_y, self.size.y),
        );

        if let Some((start, rows)) = exposed_band(shift_x, self.size.x) {
            trace!("[GridMap] Clearing {} rows from {}", rows, start);
            self.clear_region(GridIndex::new(start, 0), GridSize::new(rows, self.size.y));
        }
        if let Some((start, cols)) = exposed_band(shift_y, self.size.y) {
            trace!("[GridMap] Clearing {} columns from {}", cols, start);
            self.clear_region(GridIndex::new(0, start), GridSize::new(self.size.x, cols));
        }

        self.position = Position::new(
            self.position.x + shift_x * self.resolution,
            self.position.y + shift_y * self.resolution,
        );

        debug!(
            "[GridMap] Moved by ({}, {}) cells to {}, start index {}",
            shift_x, shift_y, self.position, self.start_index
        );
        true
    }
}

/// Whole-cell shift for a displacement, rounded half away from zero.
///
/// Kept as `f64` so shifts beyond the `i64` range stay exact multiples of
/// the resolution. Non-finite displacements do not move the map.
#[inline]
fn cell_shift(delta: f64, resolution: f64) -> f64 {
    let shift = (delta / resolution).round();
    if shift.is_finite() { shift } else { 0.0 }
}

/// Start index after shifting by `shift` cells along an axis of `size` cells.
#[inline]
fn rotate_start(start: usize, shift: f64, size: usize) -> usize {
    let reduced = shift.rem_euclid(size as f64) as i64;
    wrap_index(start as i64 - reduced, size)
}

/// Nearest cell along one axis for continuous coordinate `v`, ties to lower.
#[inline]
fn nearest_cell(v: f64, size: usize) -> Option<usize> {
    if !(0.0..=size as f64).contains(&v) {
        return None;
    }
    let cell = (v.ceil() as i64 - 1).clamp(0, size as i64 - 1);
    Some(cell as usize)
}

/// Inclusive cell range overlapping the open interval `(low, high)`.
#[inline]
fn cell_span(low: f64, high: f64, size: usize) -> Option<(usize, usize)> {
    let last = size as i64 - 1;
    let start = (low.floor() as i64).clamp(0, last);
    let end = (high.ceil() as i64 - 1).clamp(0, last);
    (start <= end).then_some((start as usize, end as usize))
}

/// Rows (or columns) exposed by a shift of `shift` cells: (first, count).
#[inline]
fn exposed_band(shift: f64, size: usize) -> Option<(usize, usize)> {
    if shift == 0.0 {
        return None;
    }
    let count = shift.abs().min(size as f64) as usize;
    if shift > 0.0 {
        Some((0, count))
    } else {
        Some((size - count, count))
    }
}
