//! Hill Climbing configuration.

/// Configuration for the Hill Climbing solver.
///
/// # Examples
///
/// ```
/// use u_maxsat::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_max_stall_restarts(50)
///     .with_keep_best(true)
///     .with_seed(42);
/// assert_eq!(config.max_stall_restarts, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Consecutive restarts without an improving move before stopping.
    pub max_stall_restarts: usize,

    /// Hard cap on the total number of restarts. `None` = no cap.
    ///
    /// On formulas where random assignments are rarely local optima the
    /// stall counter keeps resetting, so this bounds the run.
    pub max_restarts: Option<usize>,

    /// Return the best assignment seen across all restarts instead of
    /// the one held when the run stopped.
    pub keep_best: bool,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_stall_restarts: 100,
            max_restarts: None,
            keep_best: true,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the consecutive-stall limit.
    pub fn with_max_stall_restarts(mut self, n: usize) -> Self {
        self.max_stall_restarts = n;
        self
    }

    /// Caps the total number of restarts.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = Some(n);
        self
    }

    /// Chooses between best-ever and last-held assignment.
    pub fn with_keep_best(mut self, keep_best: bool) -> Self {
        self.keep_best = keep_best;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_stall_restarts == 0 {
            return Err("max_stall_restarts must be at least 1".into());
        }
        Ok(())
    }
}
