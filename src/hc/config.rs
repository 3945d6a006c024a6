//! Hill climbing configuration.

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_max_iterations(250)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 250);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct HcConfig {
    /// Maximum number of accepted improvements.
    ///
    /// Zero returns the initial solution without evaluating any neighbor.
    pub max_iterations: usize,

    /// Random seed for the initial solution.
    ///
    /// `None` seeds from OS entropy, so two runs may differ.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the maximum number of accepted improvements.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HcConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builders() {
        let config = HcConfig::default().with_max_iterations(0).with_seed(9);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.seed, Some(9));
    }
}
