//! Probabilistic path construction.
//!
//! An [`Ant`] walks the graph from a start node, choosing each next node with
//! probability proportional to `Ph[i][j]^α · (1 / D[i][j])^β` over the nodes
//! it has not visited yet.

use crate::graph::DistanceGraph;
use crate::pheromone::PheromoneField;
use crate::solution::Path;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random generator owned by a single ant.
pub type AntRng = ChaCha8Rng;

/// Independent random stream for one ant in one iteration.
///
/// Streams depend only on `(seed, iteration, ant)`, so sequential and parallel
/// runs with the same seed construct the same paths.
pub fn ant_rng(seed: u64, iteration: usize, ant: usize) -> AntRng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(((iteration as u64) << 32) | (ant as u64 & 0xFFFF_FFFF));
    rng
}

/// Read-only view of the colony state used to construct one path.
#[derive(Debug, Clone, Copy)]
pub struct Ant<'a> {
    graph: &'a DistanceGraph,
    pheromone: &'a PheromoneField,
    alpha: f64,
    beta: f64,
}

impl<'a> Ant<'a> {
    pub fn new(
        graph: &'a DistanceGraph,
        pheromone: &'a PheromoneField,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Ant {
            graph,
            pheromone,
            alpha,
            beta,
        }
    }

    /// Build a path from `start` that visits every node exactly once.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a node of the graph. [`crate::AcoAlgorithm`]
    /// validates the start node before any ant runs.
    pub fn construct<R: Rng + ?Sized>(&self, start: usize, rng: &mut R) -> Path {
        let n = self.graph.node_count();
        let mut path = Path::with_capacity(start, n.saturating_sub(1));
        let mut visited = vec![false; n];
        let mut scores = vec![0.0; n];

        visited[start] = true;
        let mut current = start;

        for _ in 1..n {
            self.score_candidates(current, &visited, &mut scores);
            let Some(next) = self.select_next_node(&scores, &visited, rng) else {
                break;
            };

            path.push(next);
            visited[next] = true;
            current = next;
        }

        path
    }

    /// Desirability of every node as the successor of `current`; zero for visited nodes.
    pub fn score_candidates(&self, current: usize, visited: &[bool], scores: &mut [f64]) {
        let trails = self.pheromone.row(current);

        for (j, score) in scores.iter_mut().enumerate() {
            *score = if visited[j] {
                0.0
            } else {
                let s = trails[j].powf(self.alpha)
                    * self.graph.inverse_distance(current, j).powf(self.beta);
                if s.is_nan() {
                    0.0
                } else {
                    s
                }
            };
        }
    }

    /// Weighted random choice over `scores`.
    ///
    /// Falls back to a uniform choice among unvisited nodes when the scores
    /// do not form a usable distribution. Returns `None` once every node has
    /// been visited.
    pub fn select_next_node<R: Rng + ?Sized>(
        &self,
        scores: &[f64],
        visited: &[bool],
        rng: &mut R,
    ) -> Option<usize> {
        let total: f64 = scores.iter().sum();
        if total.is_finite() && total > 0.0 {
            if let Some(next) = roulette(scores, 1.0, rng) {
                return Some(next);
            }
        }

        let max = scores.iter().copied().fold(0.0, f64::max);
        if max == f64::INFINITY {
            let infinite = scores.iter().filter(|s| s.is_infinite()).count();
            let pick = rng.gen_range(0..infinite);
            if let Some(next) = scores
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_infinite())
                .map(|(j, _)| j)
                .nth(pick)
            {
                return Some(next);
            }
        } else if max > 0.0 && !total.is_finite() {
            // Sum overflowed; rescale before sampling.
            if let Some(next) = roulette(scores, max, rng) {
                return Some(next);
            }
        }

        debug!("degenerate selection: all candidate scores are zero, choosing uniformly");
        uniform_unvisited(visited, rng)
    }
}

/// Build one path; see [`Ant::construct`].
pub fn construct_path<R: Rng + ?Sized>(
    graph: &DistanceGraph,
    pheromone: &PheromoneField,
    start: usize,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Path {
    Ant::new(graph, pheromone, alpha, beta).construct(start, rng)
}

fn roulette<R: Rng + ?Sized>(scores: &[f64], scale: f64, rng: &mut R) -> Option<usize> {
    let total: f64 = scores.iter().map(|s| s / scale).sum();
    let mut threshold = rng.gen::<f64>() * total;
    let mut last = None;

    for (j, &s) in scores.iter().enumerate() {
        let weight = s / scale;
        if weight > 0.0 {
            last = Some(j);
            if threshold < weight {
                return Some(j);
            }
            threshold -= weight;
        }
    }

    // Rounding can leave a sliver past the last positive weight.
    last
}

fn uniform_unvisited<R: Rng + ?Sized>(visited: &[bool], rng: &mut R) -> Option<usize> {
    let remaining = visited.iter().filter(|&&v| !v).count();
    if remaining == 0 {
        return None;
    }
    let pick = rng.gen_range(0..remaining);
    visited
        .iter()
        .enumerate()
        .filter(|&(_, &v)| !v)
        .map(|(j, _)| j)
        .nth(pick)
}
