//! Distance graph definition and loaders.

use crate::error::{AcoError, AcoResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// Desirability used in place of `1 / 0` for zero-length edges.
pub const ZERO_DISTANCE_DESIRABILITY: f64 = 1e6;

/// Immutable N×N matrix of edge costs with an infinite diagonal.
///
/// Deserialization goes through [`DistanceGraph::new`], so a graph read from
/// JSON satisfies the same invariants as one built in code. Infinite entries
/// are written as the string `"inf"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData", into = "MatrixData")]
pub struct DistanceGraph {
    matrix: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize)]
struct MatrixData {
    matrix: Vec<Vec<Weight>>,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
struct Weight(#[serde(with = "distance_format")] f64);

impl TryFrom<MatrixData> for DistanceGraph {
    type Error = AcoError;

    fn try_from(data: MatrixData) -> AcoResult<Self> {
        let matrix = data
            .matrix
            .into_iter()
            .map(|row| row.into_iter().map(|w| w.0).collect())
            .collect();
        DistanceGraph::new(matrix)
    }
}

impl From<DistanceGraph> for MatrixData {
    fn from(graph: DistanceGraph) -> Self {
        MatrixData {
            matrix: graph
                .matrix
                .into_iter()
                .map(|row| row.into_iter().map(Weight).collect())
                .collect(),
        }
    }
}

impl DistanceGraph {
    /// Create a graph from a distance matrix, rejecting matrices that are not
    /// square, have a finite diagonal, or contain negative or NaN distances.
    pub fn new(matrix: Vec<Vec<f64>>) -> AcoResult<Self> {
        let n = matrix.len();
        if n == 0 {
            return Err(AcoError::invalid_graph("distance matrix is empty"));
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::invalid_graph(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }

            for (j, &d) in row.iter().enumerate() {
                if i == j {
                    if d != f64::INFINITY {
                        return Err(AcoError::invalid_graph(format!(
                            "diagonal entry ({}, {}) must be +inf, got {}",
                            i, j, d
                        )));
                    }
                } else if d.is_nan() || d < 0.0 {
                    return Err(AcoError::invalid_graph(format!(
                        "distance ({}, {}) must be non-negative, got {}",
                        i, j, d
                    )));
                }
            }
        }

        Ok(DistanceGraph { matrix })
    }

    /// Build a Euclidean graph from planar coordinates.
    pub fn from_coordinates(points: &[(f64, f64)]) -> AcoResult<Self> {
        let n = points.len();
        let mut matrix = vec![vec![f64::INFINITY; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let dx = points[i].0 - points[j].0;
                    let dy = points[i].1 - points[j].1;
                    matrix[i][j] = (dx * dx + dy * dy).sqrt();
                }
            }
        }

        Self::new(matrix)
    }

    /// Random symmetric graph: `U(0, max) + U(0, max)ᵀ` with an infinite diagonal.
    pub fn random_symmetric<R: Rng + ?Sized>(n: usize, max: f64, rng: &mut R) -> AcoResult<Self> {
        if !(max > 0.0) || !max.is_finite() {
            return Err(AcoError::invalid_graph(format!(
                "maximum edge weight must be positive and finite, got {}",
                max
            )));
        }

        let raw: Vec<Vec<f64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(0.0..max)).collect())
            .collect();

        let mut matrix = vec![vec![f64::INFINITY; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = raw[i][j] + raw[j][i];
                }
            }
        }

        Self::new(matrix)
    }

    /// Load a graph from a whitespace-separated matrix file.
    ///
    /// Blank lines and lines starting with `#` are skipped; `inf` marks the diagonal.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AcoResult<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut matrix = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let row = trimmed
                .split_whitespace()
                .map(|token| parse_distance(token, index + 1))
                .collect::<AcoResult<Vec<f64>>>()?;
            matrix.push(row);
        }

        Self::new(matrix)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.matrix.len()
    }

    /// Distance of the directed edge `from -> to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.matrix[from][to]
    }

    /// `1 / D[from][to]`, capped at [`ZERO_DISTANCE_DESIRABILITY`] so that
    /// zero and subnormal lengths stay finite.
    pub fn inverse_distance(&self, from: usize, to: usize) -> f64 {
        let d = self.matrix[from][to];
        if d > 0.0 {
            (1.0 / d).min(ZERO_DISTANCE_DESIRABILITY)
        } else {
            ZERO_DISTANCE_DESIRABILITY
        }
    }

    /// Outgoing distances of a node.
    pub fn row(&self, node: usize) -> &[f64] {
        &self.matrix[node]
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Total distance of a node sequence, summed over consecutive pairs.
    pub fn sequence_distance(&self, nodes: &[usize]) -> f64 {
        nodes
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum()
    }
}

fn parse_distance(token: &str, line: usize) -> AcoResult<f64> {
    match token.to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
        other => other.parse::<f64>().map_err(|e| AcoError::Parse {
            line,
            message: format!("cannot parse '{}': {}", token, e),
        }),
    }
}

/// Serde format for distances: finite values as JSON numbers, `+inf` as the
/// string `"inf"` (JSON has no infinity and `serde_json` would write `null`).
///
/// Use with `#[serde(with = "aco_paths::graph::distance_format")]`.
pub mod distance_format {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if *value > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.to_ascii_lowercase().as_str() {
                "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
                "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                _ => Err(D::Error::custom(format!("invalid distance '{}'", text))),
            },
        }
    }
}
