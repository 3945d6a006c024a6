//! Tour length objective.

use super::city::City;

/// Total length of the closed tour visiting `cities` in `order`.
///
/// Includes the edge from the last city back to the first. Empty and
/// single-city tours have length zero.
///
/// # Panics
/// Panics if `order` contains an index outside `cities`.
///
/// # Examples
///
/// ```
/// use u_hillclimb::tsp::{tour_cost, City};
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// assert!((tour_cost(&[0, 1, 2, 3], &square) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_cost(order: &[usize], cities: &[City]) -> f64 {
    let n = order.len();
    (0..n)
        .map(|i| cities[order[i]].distance_to(&cities[order[(i + 1) % n]]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(tour_cost(&[], &[]), 0.0);
        assert_eq!(tour_cost(&[0], &[City::new(3.0, 4.0)]), 0.0);
    }

    #[test]
    fn test_two_cities_counts_both_directions() {
        let cities = [City::new(0.0, 0.0), City::new(3.0, 4.0)];
        assert!((tour_cost(&[0, 1], &cities) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_perimeter_and_crossing() {
        let cities = square();
        assert!((tour_cost(&[0, 1, 2, 3], &cities) - 4.0).abs() < 1e-12);

        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_cost(&[0, 2, 1, 3], &cities) - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_and_reversal_invariant() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(2.0, 3.0),
            City::new(5.0, 2.0),
            City::new(6.0, 6.0),
            City::new(8.0, 3.0),
        ];
        let base = tour_cost(&[3, 0, 4, 1, 2], &cities);
        assert!((tour_cost(&[0, 4, 1, 2, 3], &cities) - base).abs() < 1e-9);
        assert!((tour_cost(&[2, 1, 4, 0, 3], &cities) - base).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_cities_cost_zero() {
        let cities = vec![City::new(1.5, -2.0); 4];
        assert_eq!(tour_cost(&[0, 1, 2, 3], &cities), 0.0);
    }
}
