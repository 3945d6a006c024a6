//! Planar cities and the Euclidean metric.

use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// Cities are identified by their index in the slice handed to the solver;
/// the coordinates never change during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        euclidean_distance(self, other)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two cities.
///
/// # Examples
///
/// ```
/// use u_hillclimb::tsp::{euclidean_distance, City};
///
/// let d = euclidean_distance(&City::new(0.0, 0.0), &City::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn euclidean_distance(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        let a = City::new(1.0, 1.0);
        let b = City::new(4.0, 5.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = City::new(-2.5, 7.0);
        let b = City::new(3.0, -1.25);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::from((6.0, 6.0));
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
