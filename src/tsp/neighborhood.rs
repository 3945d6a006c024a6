//! Pairwise swap neighborhood.

use super::route::Route;

/// Number of routes in the swap neighborhood of an `n`-city route.
pub fn neighborhood_size(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// All routes reachable from `route` by exchanging two positions.
///
/// Candidates are ordered by the first swapped position, then the second:
/// `(0, 1), (0, 2), ..., (0, n-1), (1, 2), ...`. Each candidate owns its
/// own order; `route` is left untouched.
///
/// # Examples
///
/// ```
/// use u_hillclimb::tsp::{swap_neighborhood, Route};
///
/// let neighbors = swap_neighborhood(&Route::identity(3));
/// let orders: Vec<&[usize]> = neighbors.iter().map(|r| r.as_slice()).collect();
/// assert_eq!(orders, vec![&[1, 0, 2][..], &[2, 1, 0][..], &[0, 2, 1][..]]);
/// ```
pub fn swap_neighborhood(route: &Route) -> Vec<Route> {
    let n = route.len();
    let mut neighbors = Vec::with_capacity(neighborhood_size(n));
    for i in 0..n {
        for j in (i + 1)..n {
            neighbors.push(route.swapped(i, j));
        }
    }
    neighbors
}
