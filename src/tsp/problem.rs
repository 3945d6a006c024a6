//! Euclidean routing as a hill climbing problem.

use rand::Rng;

use super::city::City;
use super::cost::tour_cost;
use super::neighborhood::swap_neighborhood;
use super::route::{Route, RouteError};
use crate::hc::{HcConfig, HcProblem, HcResult, HcRunner};

/// Single-vehicle routing over planar cities.
///
/// Solutions are [`Route`]s, the cost is the closed tour length and the
/// neighborhood is every pairwise position swap.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Vec<City>,
    start: Option<Route>,
}

impl TspProblem {
    /// Creates a problem that starts from a uniformly random route.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            start: None,
        }
    }

    /// Starts the search from `route` instead of a random one.
    pub fn with_start(mut self, route: Route) -> Result<Self, RouteError> {
        if route.len() != self.cities.len() {
            return Err(RouteError::WrongLength {
                expected: self.cities.len(),
                actual: route.len(),
            });
        }
        self.start = Some(route);
        Ok(self)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

impl HcProblem for TspProblem {
    type Solution = Route;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Route {
        match &self.start {
            Some(route) => route.clone(),
            None => Route::random(self.cities.len(), rng),
        }
    }

    fn cost(&self, route: &Route) -> f64 {
        tour_cost(route.as_slice(), &self.cities)
    }

    fn neighbors(&self, route: &Route) -> Vec<Route> {
        swap_neighborhood(route)
    }
}

/// Runs steepest-descent hill climbing on `cities`.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::HcConfig;
/// use u_hillclimb::tsp::{solve, City};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(2.0, 3.0),
///     City::new(5.0, 2.0),
///     City::new(6.0, 6.0),
///     City::new(8.0, 3.0),
/// ];
/// let result = solve(&cities, &HcConfig::default().with_seed(42));
/// assert_eq!(result.best.len(), 5);
/// assert!(result.best_cost <= result.initial_cost);
/// ```
pub fn solve(cities: &[City], config: &HcConfig) -> HcResult<Route> {
    HcRunner::run(&TspProblem::new(cities.to_vec()), config)
}
