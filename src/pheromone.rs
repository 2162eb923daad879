//! Pheromone field shared by the ants of a colony.

use crate::error::{AcoError, AcoResult};
use crate::graph::DistanceGraph;
use crate::solution::Path;
use serde::{Deserialize, Serialize};

/// Mutable N×N matrix of learned edge desirability.
///
/// Ants only read the field; it is written between iterations by
/// [`PheromoneField::deposit`] and [`PheromoneField::evaporate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneField {
    trails: Vec<Vec<f64>>,
}

impl PheromoneField {
    /// Create a field for `n` nodes with every entry set to `1 / n`.
    pub fn new(n: usize) -> Self {
        let initial = if n > 0 { 1.0 / n as f64 } else { 0.0 };
        PheromoneField {
            trails: vec![vec![initial; n]; n],
        }
    }

    /// Number of nodes covered by the field.
    pub fn node_count(&self) -> usize {
        self.trails.len()
    }

    /// Pheromone level on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trails[from][to]
    }

    /// Pheromone levels on the outgoing edges of a node.
    pub fn row(&self, node: usize) -> &[f64] {
        &self.trails[node]
    }

    /// Reinforce every edge of `path` by the inverse of its length.
    pub fn deposit(&mut self, path: &Path, graph: &DistanceGraph) {
        for &(from, to) in path.edges() {
            self.trails[from][to] += graph.inverse_distance(from, to);
        }
    }

    /// Multiply every entry by `decay`.
    pub fn evaporate(&mut self, decay: f64) {
        for row in self.trails.iter_mut() {
            for value in row.iter_mut() {
                *value *= decay;
            }
        }
    }

    /// Smallest entry in the field.
    pub fn min_value(&self) -> f64 {
        self.trails
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest entry in the field.
    pub fn max_value(&self) -> f64 {
        self.trails
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// First edge holding a NaN or infinite value, if any.
    pub fn find_non_finite(&self) -> Option<(usize, usize)> {
        for (i, row) in self.trails.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Fail if the field holds a non-finite or negative entry.
    pub fn ensure_valid(&self, iteration: usize) -> AcoResult<()> {
        if let Some((from, to)) = self.find_non_finite() {
            return Err(AcoError::NonFinitePheromone {
                iteration,
                from,
                to,
            });
        }
        debug_assert!(self.min_value() >= 0.0);
        Ok(())
    }
}
