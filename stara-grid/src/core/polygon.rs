//! Polygon with point containment test.
//!
//! Vertices are kept in insertion order and the polygon is implicitly closed
//! (the last vertex connects back to the first). Simplicity is not enforced;
//! self-intersecting input follows the even-odd rule of the crossing-number
//! test.
//!
//! ## Boundary Convention
//!
//! A point lying on an edge or a vertex is **inside**. The on-edge check runs
//! before the crossing-number test, so the result does not depend on which
//! side of the ray an edge endpoint falls.

use serde::{Deserialize, Serialize};

use super::point::{Length, Position};

/// Relative tolerance for the on-edge test.
const EDGE_EPSILON: f64 = 1e-9;

/// Closed polygon in world coordinates
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Position>,
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polygon from an ordered vertex list
    pub fn from_vertices(vertices: Vec<Position>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned rectangle polygon, counter-clockwise from the min corner
    pub fn from_rectangle(center: Position, length: Length) -> Self {
        let half = length.half();
        Self::from_vertices(vec![
            Position::new(center.x - half.x, center.y - half.y),
            Position::new(center.x + half.x, center.y - half.y),
            Position::new(center.x + half.x, center.y + half.y),
            Position::new(center.x - half.x, center.y + half.y),
        ])
    }

    /// Append a vertex
    pub fn add_vertex(&mut self, vertex: Position) {
        self.vertices.push(vertex);
    }

    /// Vertices in order
    #[inline]
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if there are no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of pairwise distinct vertices
    pub fn distinct_vertex_count(&self) -> usize {
        let mut sorted = self.vertices.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        sorted.dedup();
        sorted.len()
    }

    /// A polygon with fewer than three distinct vertices encloses nothing
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.distinct_vertex_count() < 3
    }

    /// Edges as (start, end) pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Axis-aligned bounding box as (min corner, max corner)
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let first = *self.vertices.first()?;
        let bounds = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Some(bounds)
    }

    /// Point containment test. Points on the boundary count as inside.
    ///
    /// Degenerate polygons contain nothing.
    pub fn contains(&self, point: &Position) -> bool {
        !self.is_degenerate() && self.contains_non_degenerate(point)
    }

    /// Containment test for a polygon already known not to be degenerate.
    ///
    /// Linear in the vertex count. Callers testing many points check
    /// [`Polygon::is_degenerate`] once up front.
    pub(crate) fn contains_non_degenerate(&self, point: &Position) -> bool {
        if self.edges().any(|(a, b)| on_segment(point, &a, &b)) {
            return true;
        }

        // Crossing number: count edges crossed by a ray towards +X
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// True if `p` lies on the closed segment `a`-`b` within tolerance.
fn on_segment(p: &Position, a: &Position, b: &Position) -> bool {
    let seg_len_sq = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    if seg_len_sq == 0.0 {
        return p == a;
    }

    let tolerance = EDGE_EPSILON * seg_len_sq.max(1.0);
    if a.cross(b, p).abs() > tolerance {
        return false;
    }

    let dot = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
    dot >= -tolerance && dot <= seg_len_sq + tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::from_vertices(vec![
            Position::new(0.0, 0.0),
            Position::new(4.0, 0.0),
            Position::new(0.0, 4.0),
        ])
    }

    #[test]
    fn test_contains_interior_and_exterior() {
        let t = triangle();
        assert!(t.contains(&Position::new(1.0, 1.0)));
        assert!(!t.contains(&Position::new(3.0, 3.0)));
        assert!(!t.contains(&Position::new(-0.1, 1.0)));
    }

    #[test]
    fn test_boundary_is_inside() {
        let t = triangle();
        // Vertices
        assert!(t.contains(&Position::new(0.0, 0.0)));
        assert!(t.contains(&Position::new(4.0, 0.0)));
        // Axis-aligned edges
        assert!(t.contains(&Position::new(2.0, 0.0)));
        assert!(t.contains(&Position::new(0.0, 2.0)));
        // Hypotenuse
        assert!(t.contains(&Position::new(2.0, 2.0)));
    }

    #[test]
    fn test_winding_order_does_not_matter() {
        let mut vertices = triangle().vertices().to_vec();
        vertices.reverse();
        let reversed = Polygon::from_vertices(vertices);
        assert!(reversed.contains(&Position::new(1.0, 1.0)));
        assert!(!reversed.contains(&Position::new(3.0, 3.0)));
    }

    #[test]
    fn test_concave_polygon() {
        // U-shape opening towards +Y
        let u = Polygon::from_vertices(vec![
            Position::new(0.0, 0.0),
            Position::new(3.0, 0.0),
            Position::new(3.0, 3.0),
            Position::new(2.0, 3.0),
            Position::new(2.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(1.0, 3.0),
            Position::new(0.0, 3.0),
        ]);
        assert!(u.contains(&Position::new(0.5, 2.5)));
        assert!(u.contains(&Position::new(2.5, 2.5)));
        assert!(u.contains(&Position::new(1.5, 0.5)));
        assert!(!u.contains(&Position::new(1.5, 2.0)));
    }

    #[test]
    fn test_degenerate_polygons() {
        assert!(Polygon::new().is_degenerate());

        let repeated = Polygon::from_vertices(vec![
            Position::new(1.0, 1.0),
            Position::new(2.0, 2.0),
            Position::new(1.0, 1.0),
        ]);
        assert!(repeated.is_degenerate());
        assert_eq!(repeated.distinct_vertex_count(), 2);
        assert!(!repeated.contains(&Position::new(1.5, 1.5)));
    }

    #[test]
    fn test_distinct_vertex_count_large_polygon() {
        // Circle with every vertex listed twice in a row
        let n = 5000;
        let vertices: Vec<Position> = (0..n)
            .flat_map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                let v = Position::new(angle.cos(), angle.sin());
                [v, v]
            })
            .collect();
        let circle = Polygon::from_vertices(vertices);

        assert_eq!(circle.distinct_vertex_count(), n);
        assert!(circle.contains(&Position::new(0.1, -0.2)));
        assert!(circle.contains_non_degenerate(&Position::new(0.1, -0.2)));
        assert!(!circle.contains(&Position::new(1.1, 0.0)));

        let zeros = Polygon::from_vertices(vec![
            Position::new(0.0, 0.0),
            Position::new(-0.0, 0.0),
            Position::new(1.0, 0.0),
        ]);
        assert_eq!(zeros.distinct_vertex_count(), 2);
    }

    #[test]
    fn test_bounding_box() {
        let t = triangle();
        let (min, max) = t.bounding_box().unwrap();
        assert_eq!(min, Position::new(0.0, 0.0));
        assert_eq!(max, Position::new(4.0, 4.0));
        assert!(Polygon::new().bounding_box().is_none());
    }

    #[test]
    fn test_rectangle() {
        let r = Polygon::from_rectangle(Position::new(1.0, 1.0), Length::new(2.0, 4.0));
        assert_eq!(r.len(), 4);
        assert!(r.contains(&Position::new(1.9, 2.9)));
        assert!(r.contains(&Position::new(2.0, 3.0)));
        assert!(!r.contains(&Position::new(2.1, 1.0)));
    }
}
