//! Euclidean single-vehicle routing.
//!
//! Cities are points in the plane; a [`Route`] visits each exactly once and
//! returns to its start. The objective is [`tour_cost`] and the search
//! moves through [`swap_neighborhood`]. [`TspProblem`] ties these together
//! for [`crate::hc::HcRunner`].

mod city;
mod cost;
mod neighborhood;
mod problem;
mod route;

pub use city::{euclidean_distance, City};
pub use cost::tour_cost;
pub use neighborhood::{neighborhood_size, swap_neighborhood};
pub use problem::{solve, TspProblem};
pub use route::{Route, RouteError};
