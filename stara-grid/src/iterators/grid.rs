//! Whole-map iterator.

use std::iter::FusedIterator;

use crate::core::{GridIndex, GridSize};
use crate::grid::GridMap;

use super::submap::SubmapIterator;

/// Iterates every index of a [`GridMap`] in row-major order.
///
/// Equivalent to a [`SubmapIterator`] starting at (0, 0) spanning the whole
/// buffer.
#[derive(Clone, Debug)]
pub struct GridIterator<'a> {
    inner: SubmapIterator<'a>,
}

impl<'a> GridIterator<'a> {
    /// Create an iterator over the whole map.
    pub fn new(map: &'a GridMap) -> Self {
        Self {
            inner: SubmapIterator::new(map, GridIndex::ZERO, map.size()),
        }
    }

    /// Current index, `None` once past the end.
    #[inline]
    pub fn current_index(&self) -> Option<GridIndex> {
        self.inner.current_index()
    }

    /// Step to the next cell.
    #[inline]
    pub fn advance(&mut self) {
        self.inner.advance();
    }

    /// True once every cell has been visited.
    #[inline]
    pub fn is_past_end(&self) -> bool {
        self.inner.is_past_end()
    }

    /// Size of the iterated buffer.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.inner.submap_size()
    }
}

impl Iterator for GridIterator<'_> {
    type Item = GridIndex;

    #[inline]
    fn next(&mut self) -> Option<GridIndex> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIterator<'_> {}

impl FusedIterator for GridIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Length, Position};
    use std::collections::HashSet;

    #[test]
    fn test_visits_every_cell_once() {
        let mut map = GridMap::with_geometry(
            ["layer"],
            Length::new(7.0, 5.0),
            1.0,
            Position::ZERO,
        )
        .unwrap();
        map.move_to(Position::new(2.0, -3.0));

        let indices: Vec<GridIndex> = GridIterator::new(&map).collect();
        let unique: HashSet<GridIndex> = indices.iter().copied().collect();

        assert_eq!(indices.len(), 35);
        assert_eq!(unique.len(), 35);
        assert!(indices.iter().all(|&i| map.size().contains(i)));
        // Request space does not depend on the buffer rotation
        assert_eq!(indices[0], GridIndex::ZERO);
        assert_eq!(indices[34], GridIndex::new(6, 4));
    }

    #[test]
    fn test_manual_stepping() {
        let map = GridMap::with_geometry(["layer"], Length::new(2.0, 2.0), 1.0, Position::ZERO)
            .unwrap();
        let mut it = GridIterator::new(&map);

        let mut count = 0;
        while !it.is_past_end() {
            assert!(it.current_index().is_some());
            it.advance();
            count += 1;
        }
        assert_eq!(count, 4);
        assert_eq!(it.current_index(), None);
    }
}
