//! Core trait for hill climbing problems.

use rand::Rng;

/// Defines a problem for steepest-descent hill climbing.
///
/// The user implements initial solution construction, cost evaluation and
/// exhaustive neighborhood generation. The runner handles candidate
/// scoring, best-improvement selection, the iteration budget and the
/// convergence trace.
///
/// # Minimization
///
/// Hill climbing minimizes the cost function. For maximization, negate the
/// cost.
///
/// # Examples
///
/// ```ignore
/// struct TspProblem { distances: Vec<Vec<f64>> }
///
/// impl HcProblem for TspProblem {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         let mut tour: Vec<usize> = (0..self.distances.len()).collect();
///         tour.shuffle(rng);
///         tour
///     }
///
///     fn cost(&self, tour: &Vec<usize>) -> f64 {
///         tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum()
///     }
///
///     fn neighbors(&self, tour: &Vec<usize>) -> Vec<Vec<usize>> {
///         let mut out = Vec::new();
///         for i in 0..tour.len() {
///             for j in (i + 1)..tour.len() {
///                 let mut new = tour.clone();
///                 new.swap(i, j);
///                 out.push(new);
///             }
///         }
///         out
///     }
/// }
/// ```
pub trait HcProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send + Sync;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Enumerates the complete neighborhood of `solution`.
    ///
    /// Each candidate must be an independently owned value. The order must
    /// be deterministic: among equal-cost candidates the runner keeps the
    /// first one returned.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;
}
