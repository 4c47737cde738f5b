//! ACO configuration.

use crate::error::{AcoError, Result};

/// Configuration for the Ant Colony Optimization loop.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_max_rounds(200)
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation_rate(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants per round.
    pub num_ants: usize,

    /// Number of rounds before the run ends.
    pub max_rounds: usize,

    /// Exponent on the pheromone level. Higher = follow the trail more.
    pub alpha: f64,

    /// Exponent on the heuristic `1 / distance`. Higher = greedier.
    pub beta: f64,

    /// Fraction of pheromone removed each round, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Numerator `Q` of the per-edge deposit `Q / length`.
    pub deposit_constant: f64,

    /// Level every edge starts with.
    pub initial_pheromone: f64,

    /// Emit a progress log every this many rounds. 0 = never.
    pub log_interval: usize,

    /// Construct the ants of a round concurrently.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// to a sequential run with the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            max_rounds: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            deposit_constant: 100.0,
            initial_pheromone: 1.0,
            log_interval: 10,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(invalid("num_ants must be positive"));
        }
        if !(self.alpha >= 0.0 && self.alpha.is_finite()) {
            return Err(invalid(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return Err(invalid(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(invalid(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !(self.deposit_constant > 0.0 && self.deposit_constant.is_finite()) {
            return Err(invalid(format!(
                "deposit_constant must be positive, got {}",
                self.deposit_constant
            )));
        }
        if !(self.initial_pheromone > 0.0 && self.initial_pheromone.is_finite()) {
            return Err(invalid(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AcoError {
    AcoError::InvalidConfig(message.into())
}
