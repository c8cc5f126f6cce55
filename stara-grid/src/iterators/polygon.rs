//! Polygonal region iterator.
//!
//! ## Algorithm
//!
//! 1. Take the polygon's axis-aligned bounding box.
//! 2. Convert it to a request-space rectangle clipped to the map
//!    (the same computation as [`GridMap::submap_range`]).
//! 3. Walk that rectangle with an owned [`SubmapIterator`].
//! 4. Skip every cell whose center is outside the polygon.
//!
//! Cells whose center lies exactly on an edge are yielded.

use std::iter::FusedIterator;

use log::trace;

use crate::core::{GridIndex, Polygon};
use crate::grid::GridMap;

use super::submap::SubmapIterator;

/// Iterates the cells of a [`GridMap`] whose centers lie inside a polygon.
///
/// Degenerate polygons (fewer than three distinct vertices) and polygons
/// that do not overlap the map yield nothing.
#[derive(Clone, Debug)]
pub struct PolygonIterator<'a> {
    polygon: Polygon,
    inner: SubmapIterator<'a>,
}

impl<'a> PolygonIterator<'a> {
    /// Create an iterator over `polygon`, positioned on the first inside cell.
    pub fn new(map: &'a GridMap, polygon: &Polygon) -> Self {
        let range = if polygon.is_degenerate() {
            None
        } else {
            polygon
                .bounding_box()
                .and_then(|(min, max)| map.submap_range_between(min, max))
        };

        let inner = match range {
            Some((start, size)) => {
                trace!(
                    "[PolygonIterator] {} vertices -> submap start {}, size {}",
                    polygon.len(),
                    start,
                    size
                );
                SubmapIterator::new(map, start, size)
            }
            None => SubmapIterator::empty(map),
        };

        let mut iterator = Self {
            polygon: polygon.clone(),
            inner,
        };
        iterator.skip_outside();
        iterator
    }

    /// The polygon being iterated.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Current index, `None` once past the end.
    #[inline]
    pub fn current_index(&self) -> Option<GridIndex> {
        self.inner.current_index()
    }

    /// Step to the next cell inside the polygon.
    pub fn advance(&mut self) {
        if self.inner.is_past_end() {
            return;
        }
        self.inner.advance();
        self.skip_outside();
    }

    /// True once no further inside cells remain.
    #[inline]
    pub fn is_past_end(&self) -> bool {
        self.inner.is_past_end()
    }

    fn skip_outside(&mut self) {
        while let Some(index) = self.inner.current_index() {
            if self.is_inside(index) {
                break;
            }
            self.inner.advance();
        }
    }

    #[inline]
    fn is_inside(&self, index: GridIndex) -> bool {
        self.inner
            .grid_map()
            .position_of(index)
            .is_some_and(|center| self.polygon.contains_non_degenerate(&center))
    }
}

impl Iterator for PolygonIterator<'_> {
    type Item = GridIndex;

    fn next(&mut self) -> Option<GridIndex> {
        let index = self.current_index()?;
        self.advance();
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.remaining()))
    }
}

impl FusedIterator for PolygonIterator<'_> {}
