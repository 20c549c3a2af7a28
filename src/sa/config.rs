//! SA configuration and cooling schedules.

/// Temperature schedule over the iteration budget.
///
/// All schedules are keyed on the iteration index `k` in
/// `0..max_iterations` and start at `T_0`.
///
/// # References
///
/// - Linear: fixed-duration cooling
/// - Exponential: Kirkpatrick et al. (1983), geometric decay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Linear cooling: `T_k = T_0 - k * (T_0 - T_f) / (max_iterations - 1)`.
    ///
    /// Reaches `T_f` exactly on the last iteration.
    #[default]
    Linear,

    /// Exponential cooling: `T_k = T_0 * (T_f / T_0)^(k / (max_iterations - 1))`.
    ///
    /// Spends most of the budget at low temperature.
    Exponential,

    /// `T_k = (T_0 - T_f) / cosh(10 / max_iterations) + T_0` for `k > 0`.
    ///
    /// The expression does not depend on `k`, so the temperature jumps to
    /// roughly `2 * T_0` after the first iteration and then stays there.
    /// Kept to reproduce runs of the formulation it comes from.
    Reference,
}

/// Configuration for the Simulated Annealing solver.
///
/// # Examples
///
/// ```
/// use u_maxsat::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_iterations(50_000)
///     .with_initial_temperature(5.0)
///     .with_final_temperature(0.001)
///     .with_cooling(CoolingSchedule::Exponential)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Iteration budget. The run ends early only on convergence or
    /// cancellation.
    pub max_iterations: usize,

    /// Temperature at iteration 0.
    pub initial_temperature: f64,

    /// Temperature the schedule decays toward.
    pub final_temperature: f64,

    /// Per-bit flip probability of the perturbation operator.
    ///
    /// Each bit of the current assignment flips independently, so a
    /// candidate may differ in zero, one or several variables.
    pub flip_probability: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 250_000,
            initial_temperature: 5.0,
            final_temperature: 0.001,
            flip_probability: 0.01,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_flip_probability(mut self, p: f64) -> Self {
        self.flip_probability = p;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err("initial_temperature must be positive and finite".into());
        }
        if !(self.final_temperature > 0.0) {
            return Err("final_temperature must be positive".into());
        }
        if self.final_temperature >= self.initial_temperature {
            return Err("final_temperature must be less than initial_temperature".into());
        }
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(format!(
                "flip_probability must be in [0, 1], got {}",
                self.flip_probability
            ));
        }
        Ok(())
    }

    /// Temperature used at iteration `k`.
    pub fn temperature_at(&self, k: usize) -> f64 {
        let t0 = self.initial_temperature;
        let tf = self.final_temperature;
        let span = self.max_iterations.saturating_sub(1);

        match self.cooling {
            CoolingSchedule::Linear => {
                if span == 0 {
                    t0
                } else {
                    let frac = k.min(span) as f64 / span as f64;
                    t0 - (t0 - tf) * frac
                }
            }
            CoolingSchedule::Exponential => {
                if span == 0 {
                    t0
                } else {
                    let frac = k.min(span) as f64 / span as f64;
                    t0 * (tf / t0).powf(frac)
                }
            }
            CoolingSchedule::Reference => {
                if k == 0 {
                    t0
                } else {
                    (t0 - tf) / (10.0 / self.max_iterations as f64).cosh() + t0
                }
            }
        }
    }
}
