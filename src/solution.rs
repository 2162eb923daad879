//! Path and candidate representation.

use crate::graph::DistanceGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Hamiltonian path stored as its ordered directed edges.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    start: usize,
    edges: Vec<(usize, usize)>,
}

impl Path {
    /// Create an empty path positioned at `start`.
    pub fn new(start: usize) -> Self {
        Path {
            start,
            edges: Vec::new(),
        }
    }

    /// Create an empty path with room for `capacity` edges.
    pub fn with_capacity(start: usize, capacity: usize) -> Self {
        Path {
            start,
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Build a path from a node sequence.
    pub fn from_nodes(nodes: &[usize]) -> Self {
        let start = nodes.first().copied().unwrap_or(0);
        Path {
            start,
            edges: nodes.windows(2).map(|pair| (pair[0], pair[1])).collect(),
        }
    }

    /// Append the edge from the current end of the path to `next`.
    pub fn push(&mut self, next: usize) {
        let current = self.end();
        self.edges.push((current, next));
    }

    /// First node of the path.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last node of the path.
    pub fn end(&self) -> usize {
        self.edges.last().map_or(self.start, |&(_, to)| to)
    }

    /// The ordered edges.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Node sequence: the start node followed by each edge's destination.
    pub fn nodes(&self) -> Vec<usize> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(self.start);
        nodes.extend(self.edges.iter().map(|&(_, to)| to));
        nodes
    }

    /// Sum of the edge distances in `graph`.
    pub fn distance(&self, graph: &DistanceGraph) -> f64 {
        self.edges
            .iter()
            .map(|&(from, to)| graph.distance(from, to))
            .sum()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path{:?}", self.nodes())
    }
}

/// A constructed path together with its total distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub path: Path,
    #[serde(with = "crate::graph::distance_format")]
    pub distance: f64,
}

impl Candidate {
    /// Score `path` against `graph`.
    pub fn new(path: Path, graph: &DistanceGraph) -> Self {
        let distance = path.distance(graph);
        Candidate { path, distance }
    }
}
