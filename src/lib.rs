//! Steepest-descent hill climbing for Euclidean routing.
//!
//! Provides:
//!
//! - **Hill Climbing (HC)**: a generic best-improvement local search over a
//!   user-defined neighborhood, with an iteration budget, cooperative
//!   cancellation and a time-stamped convergence trace.
//! - **Routing (TSP)**: planar cities, permutation routes, the closed-tour
//!   length objective and the pairwise swap neighborhood.
//! - **I/O**: CSV loading of `name,x,y` city tables and CSV export of
//!   routes and traces.
//! - **Reporting**: text summaries of a run.
//!
//! # Example
//!
//! ```
//! use u_hillclimb::hc::HcConfig;
//! use u_hillclimb::tsp::{solve, City};
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(0.0, 1.0),
//!     City::new(1.0, 1.0),
//!     City::new(1.0, 0.0),
//! ];
//! let result = solve(&cities, &HcConfig::default().with_seed(42));
//! assert!(result.best_cost >= 4.0 - 1e-9);
//! ```
//!
//! Hill climbing stops at the first local optimum. It performs no restarts
//! and never accepts a worsening move.

pub mod hc;
pub mod io;
pub mod random;
pub mod report;
pub mod tsp;
