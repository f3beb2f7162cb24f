//! Search configuration.

/// Configuration for the Monte-Carlo partition search.
///
/// # Examples
///
/// ```
/// use team_balance::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_iterations(10_000)
///     .with_team_count(3)
///     .with_team_size(6)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of independent random partitions to sample.
    pub iterations: usize,

    /// Number of teams to split the roster into.
    pub team_count: usize,

    /// Number of players per team. The roster length must equal
    /// `team_count * team_size`.
    pub team_size: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Whether to evaluate candidate costs in parallel.
    ///
    /// Requires the `parallel` crate feature; ignored otherwise. Candidate
    /// generation stays on a single sequential RNG stream either way, so
    /// parallel and sequential runs return identical results.
    pub parallel: bool,

    /// Number of candidates drawn per evaluation batch when `parallel` is
    /// set.
    pub batch_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            team_count: 3,
            team_size: 6,
            seed: None,
            parallel: false,
            batch_size: 64,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_team_count(mut self, n: usize) -> Self {
        self.team_count = n;
        self
    }

    pub fn with_team_size(mut self, n: usize) -> Self {
        self.team_size = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be positive".into());
        }
        if self.team_count == 0 {
            return Err("team_count must be positive".into());
        }
        if self.team_size == 0 {
            return Err("team_size must be positive".into());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be positive".into());
        }
        Ok(())
    }
}
