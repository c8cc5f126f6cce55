//! Rectangular submap iterator.

use std::iter::FusedIterator;

use crate::core::{GridIndex, GridSize};
use crate::grid::GridMap;

/// Iteration phase.
///
/// Termination is tracked explicitly: a wrapped rectangle can revisit the
/// same index pair in different phases, so comparing against an end index
/// is ambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterState {
    /// `current_index` is valid
    Active,
    /// All cells have been visited
    Exhausted,
}

/// Iterates a request-space rectangle of a [`GridMap`] in row-major order.
///
/// The outer loop runs along `x`, the inner loop along `y`. Offsets wrap
/// modulo the map size. The iterator borrows the map, so the map cannot be
/// moved, resized or edited while iteration is in progress.
#[derive(Clone, Debug)]
pub struct SubmapIterator<'a> {
    map: &'a GridMap,
    start: GridIndex,
    size: GridSize,
    /// Offset of the current cell within the rectangle
    offset: GridIndex,
    visited: usize,
    total: usize,
    state: IterState,
}

impl<'a> SubmapIterator<'a> {
    /// Create an iterator over the rectangle at `start` with extent `size`.
    ///
    /// `size` is clipped to the map size. A start index outside the map or an
    /// empty rectangle yields an iterator that is already past the end.
    pub fn new(map: &'a GridMap, start: GridIndex, size: GridSize) -> Self {
        let map_size = map.size();
        let size = GridSize::new(size.x.min(map_size.x), size.y.min(map_size.y));
        let total = size.cell_count();
        let state = if total == 0 || !map_size.contains(start) {
            IterState::Exhausted
        } else {
            IterState::Active
        };

        Self {
            map,
            start,
            size,
            offset: GridIndex::ZERO,
            visited: 0,
            total,
            state,
        }
    }

    /// An iterator that yields nothing.
    pub fn empty(map: &'a GridMap) -> Self {
        Self::new(map, GridIndex::ZERO, GridSize::ZERO)
    }

    /// The map being iterated.
    #[inline]
    pub fn grid_map(&self) -> &'a GridMap {
        self.map
    }

    /// Rectangle start index.
    #[inline]
    pub fn start(&self) -> GridIndex {
        self.start
    }

    /// Rectangle size (after clipping).
    #[inline]
    pub fn submap_size(&self) -> GridSize {
        self.size
    }

    /// Current phase.
    #[inline]
    pub fn state(&self) -> IterState {
        self.state
    }

    /// Map index of the current cell, `None` once past the end.
    #[inline]
    pub fn current_index(&self) -> Option<GridIndex> {
        if self.is_past_end() {
            return None;
        }
        let map_size = self.map.size();
        Some(GridIndex::new(
            (self.start.x + self.offset.x) % map_size.x,
            (self.start.y + self.offset.y) % map_size.y,
        ))
    }

    /// Offset of the current cell within the rectangle, `None` once past the end.
    #[inline]
    pub fn submap_index(&self) -> Option<GridIndex> {
        (!self.is_past_end()).then_some(self.offset)
    }

    /// Step to the next cell. No-op once past the end.
    pub fn advance(&mut self) {
        if self.is_past_end() {
            return;
        }

        self.visited += 1;
        if self.visited >= self.total {
            self.state = IterState::Exhausted;
            return;
        }

        self.offset.y += 1;
        if self.offset.y == self.size.y {
            self.offset.y = 0;
            self.offset.x += 1;
        }
    }

    /// True once every cell of the rectangle has been visited.
    #[inline]
    pub fn is_past_end(&self) -> bool {
        self.state == IterState::Exhausted
    }

    /// Cells not yet visited, including the current one.
    #[inline]
    pub fn remaining(&self) -> usize {
        match self.state {
            IterState::Active => self.total - self.visited,
            IterState::Exhausted => 0,
        }
    }
}

impl Iterator for SubmapIterator<'_> {
    type Item = GridIndex;

    fn next(&mut self) -> Option<GridIndex> {
        let index = self.current_index()?;
        self.advance();
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubmapIterator<'_> {}

impl FusedIterator for SubmapIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Length, Position};

    fn map(size_x: usize, size_y: usize) -> GridMap {
        GridMap::with_geometry(
            ["layer"],
            Length::new(size_x as f64, size_y as f64),
            1.0,
            Position::ZERO,
        )
        .unwrap()
    }

    #[test]
    fn test_row_major_order() {
        let map = map(5, 4);
        let indices: Vec<GridIndex> =
            SubmapIterator::new(&map, GridIndex::new(1, 1), GridSize::new(2, 3)).collect();

        assert_eq!(
            indices,
            vec![
                GridIndex::new(1, 1),
                GridIndex::new(1, 2),
                GridIndex::new(1, 3),
                GridIndex::new(2, 1),
                GridIndex::new(2, 2),
                GridIndex::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_explicit_cursor_api() {
        let map = map(3, 3);
        let mut it = SubmapIterator::new(&map, GridIndex::new(2, 2), GridSize::new(1, 2));

        assert_eq!(it.state(), IterState::Active);
        assert_eq!(it.grid_map().size(), GridSize::new(3, 3));
        assert_eq!(it.current_index(), Some(GridIndex::new(2, 2)));
        assert_eq!(it.submap_index(), Some(GridIndex::new(0, 0)));
        assert_eq!(it.remaining(), 2);

        it.advance();
        // Wraps around the map edge
        assert_eq!(it.current_index(), Some(GridIndex::new(2, 0)));
        assert_eq!(it.submap_index(), Some(GridIndex::new(0, 1)));

        it.advance();
        assert!(it.is_past_end());
        assert_eq!(it.current_index(), None);

        it.advance();
        assert!(it.is_past_end());
    }

    #[test]
    fn test_wrapped_rectangle_terminates_by_count() {
        // Full-size rectangle starting mid-buffer returns to its start index
        // without terminating early
        let map = map(3, 3);
        let it = SubmapIterator::new(&map, GridIndex::new(1, 1), GridSize::new(3, 3));
        assert_eq!(it.len(), 9);

        let indices: Vec<GridIndex> = it.collect();
        assert_eq!(indices.len(), 9);
        assert_eq!(indices[0], GridIndex::new(1, 1));
        assert_eq!(indices[8], GridIndex::new(0, 0));
    }

    #[test]
    fn test_iterator_adapters_are_reachable() {
        let map = map(3, 2);
        let it = SubmapIterator::new(&map, GridIndex::ZERO, GridSize::new(3, 2));
        assert_eq!(it.grid_map().size(), GridSize::new(3, 2));

        // `map` resolves to the iterator adapter
        let rows: Vec<usize> = it.map(|index| index.x).collect();
        assert_eq!(rows, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_size_clipped_to_map() {
        let map = map(4, 4);
        let it = SubmapIterator::new(&map, GridIndex::ZERO, GridSize::new(10, 2));
        assert_eq!(it.submap_size(), GridSize::new(4, 2));
        assert_eq!(it.count(), 8);
    }

    #[test]
    fn test_degenerate_rectangles_start_exhausted() {
        let map = map(4, 4);
        assert!(SubmapIterator::new(&map, GridIndex::ZERO, GridSize::new(0, 3)).is_past_end());
        assert!(SubmapIterator::new(&map, GridIndex::new(4, 0), GridSize::new(1, 1)).is_past_end());
        assert!(SubmapIterator::empty(&map).is_past_end());
    }
}
