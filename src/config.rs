//! Configuration parameters for the ACO algorithm.

use crate::error::{AcoError, AcoResult};
use serde::{Deserialize, Serialize};

/// Which candidates are handed to the result aggregator at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultScope {
    /// Only the final iteration's candidate pool.
    #[default]
    LastIteration,
    /// Every candidate produced during the run.
    AllIterations,
}

/// Configuration settings for the ACO algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of ants constructing a path in each iteration
    pub n_ants: usize,
    /// Number of elite paths reinforcing the pheromone field per iteration
    pub n_best: usize,
    /// Number of colony iterations
    pub n_iterations: usize,
    /// Pheromone exponent (α)
    pub alpha: f64,
    /// Inverse-distance exponent (β)
    pub beta: f64,
    /// Multiplicative evaporation factor applied after each iteration, in (0, 1]
    pub decay: f64,
    /// Node every ant starts from
    pub start_node: usize,
    /// Seed for the per-ant random streams; `None` draws one per run
    pub seed: Option<u64>,
    /// Construct paths on the rayon thread pool (needs the `parallel` feature)
    pub parallel: bool,
    /// Candidate pool used for the final ranking
    pub result_scope: ResultScope,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            n_ants: 20,
            n_best: 5,
            n_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            decay: 0.9,
            start_node: 0,
            seed: None,
            parallel: false,
            result_scope: ResultScope::LastIteration,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the number of ants per iteration.
    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    /// Set the number of elite paths per iteration.
    pub fn with_n_best(mut self, n: usize) -> Self {
        self.n_best = n;
        self
    }

    /// Set the number of iterations.
    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Set the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the inverse-distance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the evaporation factor.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the start node.
    pub fn with_start_node(mut self, node: usize) -> Self {
        self.start_node = node;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel path construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the candidate pool used for the final ranking.
    pub fn with_result_scope(mut self, scope: ResultScope) -> Self {
        self.result_scope = scope;
        self
    }

    /// Number of elites actually used: `n_best` clamped to `n_ants`.
    pub fn effective_n_best(&self) -> usize {
        self.n_best.min(self.n_ants)
    }

    /// Check every parameter against its legal range for a graph of `n_nodes` nodes.
    pub fn validate(&self, n_nodes: usize) -> AcoResult<()> {
        if self.n_ants < 1 {
            return Err(AcoError::invalid_parameters("n_ants must be at least 1"));
        }
        if self.n_best < 1 {
            return Err(AcoError::invalid_parameters("n_best must be at least 1"));
        }
        if self.n_iterations < 1 {
            return Err(AcoError::invalid_parameters(
                "n_iterations must be at least 1",
            ));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(AcoError::invalid_parameters(format!(
                "decay must lie in (0, 1], got {}",
                self.decay
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::invalid_parameters(format!(
                "alpha must be a non-negative finite number, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::invalid_parameters(format!(
                "beta must be a non-negative finite number, got {}",
                self.beta
            )));
        }
        if self.start_node >= n_nodes {
            return Err(AcoError::invalid_parameters(format!(
                "start node {} is out of range for {} nodes",
                self.start_node, n_nodes
            )));
        }
        Ok(())
    }
}
