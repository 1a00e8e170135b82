//! Planar coordinates and Euclidean distance.

use serde::{Deserialize, Serialize};

/// An immutable location in the plane.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::Point;
///
/// let a = Point::origin();
/// let b = Point::new(3.0, 4.0).unwrap();
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    ///
    /// Returns `None` if either coordinate is non-finite.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self { x, y })
    }

    /// The point `(0, 0)`.
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(self, other)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).expect("finite")
    }

    #[test]
    fn test_point_new() {
        let pt = p(1.5, -2.0);
        assert_eq!(pt.x(), 1.5);
        assert_eq!(pt.y(), -2.0);
    }

    #[test]
    fn test_point_non_finite() {
        assert!(Point::new(f64::NAN, 0.0).is_none());
        assert!(Point::new(0.0, f64::INFINITY).is_none());
        assert!(Point::new(f64::NEG_INFINITY, 1.0).is_none());
    }

    #[test]
    fn test_distance_pythagorean() {
        assert!((distance(&p(0.0, 0.0), &p(3.0, 4.0)) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_self() {
        let a = p(7.25, -3.5);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = p(1.0, 2.0);
        let b = p(-4.0, 6.5);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::origin());
    }
}
