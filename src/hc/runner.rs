//! Hill climbing execution engine.
//!
//! # Algorithm (steepest descent)
//!
//! 1. Generate the initial solution and its cost
//! 2. While the iteration budget is not exhausted:
//!    a. Generate the full neighborhood of the current solution
//!    b. Evaluate every candidate
//!    c. Select the minimum-cost candidate (first one on ties)
//!    d. If it is strictly better than the current solution, move to it
//!    and record `(elapsed, cost)`; otherwise stop at the local optimum
//! 3. Return the final solution and the convergence trace
//!
//! # Complexity
//!
//! One iteration evaluates every neighbor. For the swap neighborhood of an
//! `n`-city tour that is `n(n-1)/2` candidates at `O(n)` each, so `O(n^3)`
//! per iteration and `O(n^3 * max_iterations)` in the worst case. Choose
//! the problem size and budget accordingly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, debug_span, info};

use super::config::HcConfig;
use super::types::HcProblem;
use crate::random::{create_rng, entropy_rng};

/// A single point of the convergence trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracePoint {
    /// Seconds since the run started.
    pub elapsed_secs: f64,
    /// Cost right after the improvement was accepted.
    pub cost: f64,
}

/// Why a hill climbing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// No neighbor improves strictly on the current cost.
    LocalOptimum,
    /// `max_iterations` improvements were accepted.
    IterationLimit,
    /// The cancellation flag was set.
    Cancelled,
}

/// Result of a hill climbing run.
#[derive(Debug, Clone, Serialize)]
pub struct HcResult<S: Clone> {
    /// Final solution.
    pub best: S,
    /// Cost of the final solution.
    pub best_cost: f64,
    /// Cost of the initial solution.
    pub initial_cost: f64,
    /// Number of accepted improvements.
    pub iterations: usize,
    /// Number of candidate cost evaluations.
    pub evaluations: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// One point per accepted improvement, in order.
    pub trace: Vec<TracePoint>,
}

/// Hill climbing runner.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing with the RNG described by `config.seed`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_hillclimb::hc::{HcConfig, HcProblem, HcRunner};
    /// use rand::Rng;
    ///
    /// struct MyProblem;
    /// impl HcProblem for MyProblem {
    ///     type Solution = i32;
    ///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> i32 { rng.random_range(-10..10) }
    ///     fn cost(&self, x: &i32) -> f64 { (*x as f64).abs() }
    ///     fn neighbors(&self, x: &i32) -> Vec<i32> { vec![x - 1, x + 1] }
    /// }
    ///
    /// let result = HcRunner::run(&MyProblem, &HcConfig::default().with_seed(1));
    /// assert_eq!(result.best, 0);
    /// ```
    pub fn run<P: HcProblem>(problem: &P, config: &HcConfig) -> HcResult<P::Solution> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs hill climbing with an optional cancellation token.
    ///
    /// The flag is checked before each iteration; when set, the current
    /// solution is returned with [`Termination::Cancelled`].
    pub fn run_with_cancel<P: HcProblem>(
        problem: &P,
        config: &HcConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HcResult<P::Solution> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs hill climbing drawing randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the generator.
    pub fn run_with_rng<P: HcProblem, R: Rng>(
        problem: &P,
        config: &HcConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HcResult<P::Solution> {
        let _span = debug_span!("hill_climbing", max_iterations = config.max_iterations).entered();

        let start = Instant::now();
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        debug!(cost = initial_cost, "initial solution");

        let mut trace = Vec::new();
        let mut evaluations = 0usize;

        let termination = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }

            if trace.len() >= config.max_iterations {
                break Termination::IterationLimit;
            }

            let mut candidates = problem.neighbors(&current);
            let costs = evaluate(problem, &candidates);
            evaluations += costs.len();

            let Some(index) = select_best(&costs, current_cost) else {
                break Termination::LocalOptimum;
            };

            current = candidates.swap_remove(index);
            current_cost = costs[index];

            let elapsed_secs = start.elapsed().as_secs_f64();
            trace.push(TracePoint {
                elapsed_secs,
                cost: current_cost,
            });
            debug!(
                iteration = trace.len(),
                cost = current_cost,
                elapsed_secs,
                "accepted improving move"
            );
        };

        info!(
            ?termination,
            iterations = trace.len(),
            initial_cost,
            final_cost = current_cost,
            "hill climbing finished"
        );

        HcResult {
            best: current,
            best_cost: current_cost,
            initial_cost,
            iterations: trace.len(),
            evaluations,
            termination,
            trace,
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate<P: HcProblem>(problem: &P, candidates: &[P::Solution]) -> Vec<f64> {
    candidates.iter().map(|c| problem.cost(c)).collect()
}

#[cfg(feature = "parallel")]
fn evaluate<P: HcProblem>(problem: &P, candidates: &[P::Solution]) -> Vec<f64> {
    candidates.par_iter().map(|c| problem.cost(c)).collect()
}

/// Index of the first candidate with the minimum cost, if that cost is
/// strictly below `current_cost`.
fn select_best(costs: &[f64], current_cost: f64) -> Option<usize> {
    let mut best = None;
    let mut best_cost = current_cost;
    for (i, &cost) in costs.iter().enumerate() {
        if cost < best_cost {
            best = Some(i);
            best_cost = cost;
        }
    }
    best
}
