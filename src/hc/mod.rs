//! Hill Climbing (HC).
//!
//! A single-solution local search that evaluates the entire neighborhood
//! of the current solution and moves to the best candidate only when it is
//! strictly better (steepest descent). It stops at the first local optimum
//! or when the iteration budget runs out. There is no restart or uphill
//! acceptance.
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, ch. 4.1
//! - Aarts & Lenstra (1997), *Local Search in Combinatorial Optimization*

mod config;
mod runner;
mod types;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner, Termination, TracePoint};
pub use types::HcProblem;
