//! # ACO Paths
//!
//! Ant Colony Optimization for near-optimal Hamiltonian paths over a weighted,
//! fully-connected graph.
//!
//! Based on the Ant System described in M. Dorigo and T. Stützle,
//! "Ant Colony Optimization", MIT Press, 2004.
//!
//! Each iteration a colony of ants builds paths from a common start node,
//! choosing successors with probability proportional to pheromone and inverse
//! distance. The shortest paths of the iteration reinforce their edges, then
//! the whole pheromone field evaporates. The candidates of the final iteration
//! (or of the whole run) are deduplicated and ranked by distance.
//!
//! ```no_run
//! use aco_paths::config::Config;
//! use aco_paths::graph::DistanceGraph;
//! use aco_paths::AcoAlgorithm;
//!
//! let inf = f64::INFINITY;
//! let graph = DistanceGraph::new(vec![
//!     vec![inf, 1.0, 2.0],
//!     vec![1.0, inf, 1.0],
//!     vec![2.0, 1.0, inf],
//! ])?;
//! let mut algorithm = AcoAlgorithm::new(graph, Config::new().with_seed(7))?;
//! let results = algorithm.run()?;
//! println!("best: {:?}", results.best());
//! # Ok::<(), aco_paths::error::AcoError>(())
//! ```

pub mod ant;
pub mod config;
pub mod error;
pub mod graph;
pub mod pheromone;
pub mod results;
pub mod solution;
pub mod utils;

use crate::ant::{ant_rng, Ant};
use crate::config::{Config, ResultScope};
use crate::error::AcoResult;
use crate::graph::DistanceGraph;
use crate::pheromone::PheromoneField;
use crate::results::{aggregate, RankedResults};
use crate::solution::Candidate;

use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Summary handed to the observer after every iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    /// 1-based index of the completed iteration
    pub iteration: usize,
    /// Total number of iterations in the run
    pub n_iterations: usize,
    /// Shortest distance constructed in this iteration
    pub iteration_best: f64,
    /// Mean distance of this iteration's candidates
    pub iteration_mean: f64,
    /// Shortest distance constructed so far in the run
    pub best_so_far: f64,
    /// Time since the run started
    pub elapsed: Duration,
}

/// The colony: owns the graph, the pheromone field and the run state.
#[derive(Debug)]
pub struct AcoAlgorithm {
    pub graph: DistanceGraph,
    pub pheromone: PheromoneField,
    pub config: Config,
    pub best_candidate: Option<Candidate>,
    pub iterations: usize,
    pub run_time: Duration,
    seed: u64,
}

impl AcoAlgorithm {
    /// Create a colony for `graph`, validating the configuration first.
    pub fn new(graph: DistanceGraph, config: Config) -> AcoResult<Self> {
        config.validate(graph.node_count())?;

        if config.n_best > config.n_ants {
            warn!(
                "n_best ({}) exceeds n_ants ({}); clamping to {}",
                config.n_best,
                config.n_ants,
                config.effective_n_best()
            );
        }
        if config.parallel && !cfg!(feature = "parallel") {
            warn!("parallel construction requested but the `parallel` feature is disabled");
        }

        let seed = config.seed.unwrap_or_else(rand::random);

        Ok(AcoAlgorithm {
            pheromone: PheromoneField::new(graph.node_count()),
            graph,
            config,
            best_candidate: None,
            iterations: 0,
            run_time: Duration::from_secs(0),
            seed,
        })
    }

    /// Seed driving every ant's random stream in this colony.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run all iterations and rank the resulting candidates.
    pub fn run(&mut self) -> AcoResult<RankedResults> {
        self.run_with_observer(|_| {})
    }

    /// Run all iterations, calling `observer` after each one.
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> AcoResult<RankedResults>
    where
        F: FnMut(&IterationReport),
    {
        let start_time = Instant::now();
        self.reset();

        info!(
            "running {} iterations of {} ants over {} nodes (seed {})",
            self.config.n_iterations,
            self.config.n_ants,
            self.graph.node_count(),
            self.seed
        );

        let mut history = Vec::new();
        let mut pool = Vec::new();

        for iteration in 0..self.config.n_iterations {
            let candidates = self.explore(iteration);
            self.update_pheromone(&candidates, iteration)?;
            self.iterations = iteration + 1;

            let report = self.report(&candidates, start_time.elapsed());
            debug!(
                "iteration {}/{}: best {:.4}, mean {:.4}, best so far {:.4}",
                report.iteration,
                report.n_iterations,
                report.iteration_best,
                report.iteration_mean,
                report.best_so_far
            );
            observer(&report);

            if self.config.result_scope == ResultScope::AllIterations {
                history.extend(candidates.iter().cloned());
            }
            pool = candidates;
        }

        let results = match self.config.result_scope {
            ResultScope::LastIteration => aggregate(&pool),
            ResultScope::AllIterations => aggregate(&history),
        };

        self.run_time = start_time.elapsed();
        info!(
            "colony finished in {:?}: {} distinct paths, best distance {:.4}",
            self.run_time,
            results.len(),
            results.best().map_or(f64::INFINITY, |entry| entry.distance)
        );

        Ok(results)
    }

    /// Construct one candidate per ant from the current pheromone field.
    pub fn explore(&self, iteration: usize) -> Vec<Candidate> {
        let ant = Ant::new(
            &self.graph,
            &self.pheromone,
            self.config.alpha,
            self.config.beta,
        );
        let start = self.config.start_node;
        let seed = self.seed;
        let graph = &self.graph;

        let build = move |index: usize| {
            let mut rng = ant_rng(seed, iteration, index);
            Candidate::new(ant.construct(start, &mut rng), graph)
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return (0..self.config.n_ants).into_par_iter().map(build).collect();
            }
        }

        (0..self.config.n_ants).map(build).collect()
    }

    /// Reinforce the elite candidates' edges, then evaporate the field.
    pub fn update_pheromone(&mut self, candidates: &[Candidate], iteration: usize) -> AcoResult<()> {
        for elite in select_elites(candidates, self.config.effective_n_best()) {
            self.pheromone.deposit(&elite.path, &self.graph);
        }
        self.pheromone.evaporate(self.config.decay);
        self.pheromone.ensure_valid(iteration + 1)
    }

    fn reset(&mut self) {
        self.pheromone = PheromoneField::new(self.graph.node_count());
        self.best_candidate = None;
        self.iterations = 0;
    }

    fn report(&mut self, candidates: &[Candidate], elapsed: Duration) -> IterationReport {
        let iteration_best = candidates
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance));

        if let Some(best) = iteration_best {
            let improved = self
                .best_candidate
                .as_ref()
                .map_or(true, |current| best.distance < current.distance);
            if improved {
                self.best_candidate = Some(best.clone());
            }
        }

        let mean = candidates.iter().map(|c| c.distance).sum::<f64>() / candidates.len() as f64;

        IterationReport {
            iteration: self.iterations,
            n_iterations: self.config.n_iterations,
            iteration_best: iteration_best.map_or(f64::INFINITY, |c| c.distance),
            iteration_mean: mean,
            best_so_far: self
                .best_candidate
                .as_ref()
                .map_or(f64::INFINITY, |c| c.distance),
            elapsed,
        }
    }
}

/// The `n_best` shortest candidates; ties keep construction order.
pub fn select_elites(candidates: &[Candidate], n_best: usize) -> Vec<&Candidate> {
    let mut sorted: Vec<&Candidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    sorted.truncate(n_best);
    sorted
}

/// Validate, run a colony over `graph` with `config`, and return the ranking.
pub fn solve(graph: &DistanceGraph, config: &Config) -> AcoResult<RankedResults> {
    AcoAlgorithm::new(graph.clone(), config.clone())?.run()
}
