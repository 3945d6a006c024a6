//! Cyclic visiting orders.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::random::shuffle;

/// Why a caller-supplied order is not a valid [`Route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route has {actual} entries but there are {expected} cities")]
    WrongLength { expected: usize, actual: usize },

    #[error("city index {index} is out of range for {len} cities")]
    OutOfRange { index: usize, len: usize },

    #[error("city index {index} appears more than once")]
    Duplicate { index: usize },
}

/// A permutation of `0..n` read as a closed tour.
///
/// Routes can only be built through permutation-preserving constructors,
/// so every value visits each city exactly once.
///
/// # Examples
///
/// ```
/// use u_hillclimb::tsp::Route;
///
/// let route = Route::try_from_order(vec![2, 0, 1]).unwrap();
/// let swapped = route.swapped(0, 2);
/// assert_eq!(swapped.as_slice(), &[1, 0, 2]);
/// assert_eq!(route.as_slice(), &[2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<usize>);

impl Route {
    /// The order `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        shuffle(&mut order, rng);
        Self(order)
    }

    /// Checks that `order` is a permutation of `0..order.len()`.
    pub fn try_from_order(order: Vec<usize>) -> Result<Self, RouteError> {
        let len = order.len();
        let mut seen = vec![false; len];
        for &index in &order {
            if index >= len {
                return Err(RouteError::OutOfRange { index, len });
            }
            if seen[index] {
                return Err(RouteError::Duplicate { index });
            }
            seen[index] = true;
        }
        Ok(Self(order))
    }

    /// Like [`Route::try_from_order`], also checking the order covers
    /// exactly `city_count` cities.
    pub fn for_cities(order: Vec<usize>, city_count: usize) -> Result<Self, RouteError> {
        if order.len() != city_count {
            return Err(RouteError::WrongLength {
                expected: city_count,
                actual: order.len(),
            });
        }
        Self::try_from_order(order)
    }

    /// A new route with positions `i` and `j` exchanged.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut order = self.0.clone();
        order.swap(i, j);
        Self(order)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the route, returning the raw order.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Consecutive `(from, to)` city pairs, including the closing edge.
    ///
    /// A single-city route yields one self-loop; an empty route yields
    /// nothing.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}
