//! World-space position and length types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// World coordinates (meters)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero position (world origin)
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    /// Euclidean distance to another position
    #[inline]
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(&self, other: &Position) -> Position {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(&self, other: &Position) -> Position {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamp both components into the rectangle `[min, max]`
    #[inline]
    pub fn clamp(&self, min: &Position, max: &Position) -> Position {
        Position::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    /// Cross product (z-component) of the vectors `a - self` and `b - self`
    #[inline]
    pub fn cross(&self, a: &Position, b: &Position) -> f64 {
        (a.x - self.x) * (b.y - self.y) - (a.y - self.y) * (b.x - self.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Position {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

impl Add<Length> for Position {
    type Output = Self;

    #[inline]
    fn add(self, length: Length) -> Self {
        Position::new(self.x + length.x, self.y + length.y)
    }
}

impl Sub<Length> for Position {
    type Output = Self;

    #[inline]
    fn sub(self, length: Length) -> Self {
        Position::new(self.x - length.x, self.y - length.y)
    }
}

impl Mul<f64> for Position {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Position::new(self.x * scalar, self.y * scalar)
    }
}

/// Extent of an axis-aligned rectangle (meters)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Length {
    /// Extent along world X
    pub x: f64,
    /// Extent along world Y
    pub y: f64,
}

impl Length {
    /// Create a new length
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero extent
    pub const ZERO: Length = Length { x: 0.0, y: 0.0 };

    /// Half of this extent (center-to-edge distance)
    #[inline]
    pub fn half(&self) -> Length {
        Length::new(self.x * 0.5, self.y * 0.5)
    }

    /// True if both components are finite and strictly positive
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }

    /// Area in square meters
    #[inline]
    pub fn area(&self) -> f64 {
        self.x * self.y
    }

    /// Extent spanned between two corners
    #[inline]
    pub fn between(min: &Position, max: &Position) -> Length {
        Length::new(max.x - min.x, max.y - min.y)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Length::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_distance() {
        let a = Position::ZERO;
        let b = Position::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_position_length_arithmetic() {
        let center = Position::new(1.0, -1.0);
        let length = Length::new(4.0, 2.0);

        let max = center + length.half();
        let min = center - length.half();
        assert_eq!(max, Position::new(3.0, 0.0));
        assert_eq!(min, Position::new(-1.0, -2.0));
        assert_eq!(Length::between(&min, &max), length);
    }

    #[test]
    fn test_position_clamp() {
        let min = Position::new(-1.0, -1.0);
        let max = Position::new(1.0, 1.0);
        let p = Position::new(5.0, -0.5).clamp(&min, &max);
        assert_eq!(p, Position::new(1.0, -0.5));
    }

    #[test]
    fn test_length_is_positive() {
        assert!(Length::new(1.0, 0.1).is_positive());
        assert!(!Length::new(0.0, 1.0).is_positive());
        assert!(!Length::new(1.0, -2.0).is_positive());
        assert!(!Length::new(f64::NAN, 1.0).is_positive());
        assert!(!Length::new(f64::INFINITY, 1.0).is_positive());
    }

    #[test]
    fn test_cross_orientation() {
        let o = Position::ZERO;
        // Counter-clockwise turn is positive
        assert!(o.cross(&Position::new(1.0, 0.0), &Position::new(0.0, 1.0)) > 0.0);
        assert!(o.cross(&Position::new(0.0, 1.0), &Position::new(1.0, 0.0)) < 0.0);
        assert_eq!(o.cross(&Position::new(1.0, 1.0), &Position::new(2.0, 2.0)), 0.0);
    }
}
