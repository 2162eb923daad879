//! Deduplication and ranking of candidate paths.

use crate::solution::Candidate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One entry of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPath {
    /// Visited nodes in order, starting with the start node
    pub path: Vec<usize>,
    /// Total distance of the path
    #[serde(with = "crate::graph::distance_format")]
    pub distance: f64,
}

/// Distinct paths sorted by ascending distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResults {
    entries: Vec<RankedPath>,
}

impl RankedResults {
    /// The ranked entries.
    pub fn entries(&self) -> &[RankedPath] {
        &self.entries
    }

    /// Shortest path found, if any.
    pub fn best(&self) -> Option<&RankedPath> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedPath> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<RankedPath> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedResults {
    type Item = &'a RankedPath;
    type IntoIter = std::slice::Iter<'a, RankedPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Flatten, deduplicate by node sequence, and sort ascending by distance.
///
/// The first occurrence of each sequence is kept; equal distances keep their
/// input order.
pub fn aggregate<'a, I>(candidates: I) -> RankedResults
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut entries: Vec<RankedPath> = candidates
        .into_iter()
        .map(|candidate| RankedPath {
            path: candidate.path.nodes(),
            distance: candidate.distance,
        })
        .unique_by(|entry| entry.path.clone())
        .collect();

    entries.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    RankedResults { entries }
}
