//! Human-readable run summaries.

use std::fmt;

use crate::hc::{HcResult, Termination};
use crate::tsp::{City, Route};

/// One edge of a closed tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub length: f64,
}

/// Every edge of `route`, including the one back to the start.
pub fn leg_lengths(route: &Route, cities: &[City]) -> Vec<Leg> {
    route
        .legs()
        .map(|(from, to)| Leg {
            from,
            to,
            length: cities[from].distance_to(&cities[to]),
        })
        .collect()
}

/// Text summary of a routing run.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::HcConfig;
/// use u_hillclimb::report::Summary;
/// use u_hillclimb::tsp::{solve, City};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(1.0, 0.0)];
/// let result = solve(&cities, &HcConfig::default().with_seed(1));
/// let text = Summary::new(&result).to_string();
/// assert!(text.contains("Total cost: 2.0000"));
/// ```
pub struct Summary<'a> {
    result: &'a HcResult<Route>,
    names: Option<&'a [String]>,
}

impl<'a> Summary<'a> {
    pub fn new(result: &'a HcResult<Route>) -> Self {
        Self {
            result,
            names: None,
        }
    }

    /// Prints city names instead of indices in the final route.
    pub fn with_names(mut self, names: &'a [String]) -> Self {
        self.names = Some(names);
        self
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "Initial cost: {:.4}", result.initial_cost)?;
        for (i, point) in result.trace.iter().enumerate() {
            writeln!(
                f,
                "Iteration {}: cost {:.4}, time {:.4}s",
                i + 1,
                point.cost,
                point.elapsed_secs
            )?;
        }
        match result.termination {
            Termination::LocalOptimum => writeln!(f, "No improvement found; local optimum reached.")?,
            Termination::IterationLimit => writeln!(f, "Iteration limit reached.")?,
            Termination::Cancelled => writeln!(f, "Search cancelled.")?,
        }

        write!(f, "Best route: [")?;
        for (position, &index) in result.best.as_slice().iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            match self.names.and_then(|names| names.get(index)) {
                Some(name) => write!(f, "{name}")?,
                None => write!(f, "{index}")?,
            }
        }
        writeln!(f, "]")?;
        write!(f, "Total cost: {:.4}", result.best_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hc::TracePoint;

    fn sample_result() -> HcResult<Route> {
        HcResult {
            best: Route::try_from_order(vec![1, 0, 2]).unwrap(),
            best_cost: 7.5,
            initial_cost: 9.0,
            iterations: 1,
            evaluations: 6,
            termination: Termination::LocalOptimum,
            trace: vec![TracePoint {
                elapsed_secs: 0.00126,
                cost: 7.5,
            }],
        }
    }

    #[test]
    fn test_summary_with_indices() {
        let result = sample_result();
        let text = Summary::new(&result).to_string();

        assert_eq!(
            text,
            "Initial cost: 9.0000\n\
             Iteration 1: cost 7.5000, time 0.0013s\n\
             No improvement found; local optimum reached.\n\
             Best route: [1, 0, 2]\n\
             Total cost: 7.5000"
        );
    }

    #[test]
    fn test_summary_with_names() {
        let result = sample_result();
        let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let text = Summary::new(&result).with_names(&names).to_string();

        assert!(text.contains("Best route: [B, A, C]"));
    }

    #[test]
    fn test_summary_iteration_limit() {
        let mut result = sample_result();
        result.termination = Termination::IterationLimit;
        let text = Summary::new(&result).to_string();

        assert!(text.contains("Iteration limit reached."));
    }

    #[test]
    fn test_leg_lengths() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0), City::new(3.0, 0.0)];
        let route = Route::identity(3);
        let legs = leg_lengths(&route, &cities);

        assert_eq!(legs.len(), 3);
        assert_eq!((legs[0].from, legs[0].to), (0, 1));
        assert!((legs[0].length - 5.0).abs() < 1e-12);
        assert!((legs[1].length - 4.0).abs() < 1e-12);
        assert!((legs[2].length - 3.0).abs() < 1e-12);
    }
}
