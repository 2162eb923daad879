//! Utility functions and structures for presenting ACO runs.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::ProgressStyle;
use serde::Serialize;

use crate::error::{AcoError, AcoResult};
use crate::graph::DistanceGraph;
use crate::results::RankedResults;
use crate::{AcoAlgorithm, IterationReport};

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

#[derive(Serialize)]
struct SavedRun<'a> {
    seed: u64,
    iterations: usize,
    config: &'a crate::config::Config,
    results: &'a RankedResults,
}

/// Save the ranked results of a run as JSON.
pub fn save_results<P: AsRef<Path>>(
    results: &RankedResults,
    algorithm: &AcoAlgorithm,
    path: P,
) -> AcoResult<()> {
    let file = File::create(path)?;
    let saved = SavedRun {
        seed: algorithm.seed(),
        iterations: algorithm.iterations,
        config: &algorithm.config,
        results,
    };
    let mut writer = io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &saved)?;
    writer.flush()?;
    Ok(())
}

/// Write up to `limit` ranked paths as `Path: 0 2 4 7, Distance: 12.34` lines.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &RankedResults,
    limit: Option<usize>,
) -> io::Result<()> {
    let limit = limit.unwrap_or(results.len());

    for entry in results.iter().take(limit) {
        let nodes: Vec<String> = entry.path.iter().map(|n| n.to_string()).collect();
        writeln!(
            out,
            "Path: {}, Distance: {:.2}",
            nodes.join(" "),
            entry.distance
        )?;
    }

    Ok(())
}

/// Print up to `limit` ranked paths to stdout.
pub fn print_results(results: &RankedResults, limit: Option<usize>) {
    println!("Best paths:");
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_results(&mut handle, results, limit) {
        log::warn!("failed to print results: {}", e);
    }
}

/// Greedy baseline: always move to the closest unvisited node.
///
/// Ties go to the lowest node index. Returns the node sequence and its distance,
/// or `InvalidParameters` when `start` is not a node of the graph.
pub fn nearest_neighbor_path(
    graph: &DistanceGraph,
    start: usize,
) -> AcoResult<(Vec<usize>, f64)> {
    let n = graph.node_count();
    if start >= n {
        return Err(AcoError::invalid_parameters(format!(
            "start node {} is out of range for {} nodes",
            start, n
        )));
    }
    let mut visited = vec![false; n];
    let mut nodes = Vec::with_capacity(n);

    visited[start] = true;
    nodes.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut next = None;
        let mut best = f64::INFINITY;

        for (j, &d) in graph.row(current).iter().enumerate() {
            if !visited[j] && (next.is_none() || d < best) {
                next = Some(j);
                best = d;
            }
        }

        let Some(next) = next else { break };
        visited[next] = true;
        nodes.push(next);
        current = next;
    }

    let distance = graph.sequence_distance(&nodes);
    Ok((nodes, distance))
}

/// Epoch progress bar usable as a run observer.
pub struct ProgressBar {
    bar: indicatif::ProgressBar,
}

impl ProgressBar {
    /// Progress bar on stderr for a run of `n_iterations` iterations.
    pub fn new(n_iterations: usize) -> Self {
        let bar = indicatif::ProgressBar::new(n_iterations as u64);
        bar.set_style(epoch_style());
        ProgressBar { bar }
    }

    /// Progress bar that tracks position without drawing anything.
    pub fn hidden(n_iterations: usize) -> Self {
        let bar = indicatif::ProgressBar::hidden();
        bar.set_length(n_iterations as u64);
        bar.set_style(epoch_style());
        ProgressBar { bar }
    }

    /// Advance the bar by one completed iteration.
    pub fn observe(&mut self, report: &IterationReport) {
        self.bar.set_length(report.n_iterations as u64);
        self.bar.inc(1);
        if report.iteration == report.n_iterations {
            self.bar.finish();
        }
    }

    /// Number of iterations observed so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

fn epoch_style() -> ProgressStyle {
    ProgressStyle::with_template("  Epoch: [{bar:50}] {pos}/{len}")
        .map(|style| style.progress_chars("##."))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Statistics about a finished run.
pub struct SearchStatistics {
    pub iterations: usize,
    pub runtime: Duration,
    pub seed: u64,
    pub distinct_paths: usize,
    pub best_distance: f64,
    pub best_ever_distance: f64,
    pub min_pheromone: f64,
    pub max_pheromone: f64,
}

impl SearchStatistics {
    /// Collect statistics from a colony after `run` returned `results`.
    pub fn collect(algorithm: &AcoAlgorithm, results: &RankedResults) -> Self {
        SearchStatistics {
            iterations: algorithm.iterations,
            runtime: algorithm.run_time,
            seed: algorithm.seed(),
            distinct_paths: results.len(),
            best_distance: results.best().map_or(f64::INFINITY, |e| e.distance),
            best_ever_distance: algorithm
                .best_candidate
                .as_ref()
                .map_or(f64::INFINITY, |c| c.distance),
            min_pheromone: algorithm.pheromone.min_value(),
            max_pheromone: algorithm.pheromone.max_value(),
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Iterations: {}
- Runtime: {}
- Seed: {}
- Distinct Paths: {}
- Best Ranked Distance: {:.2}
- Best Distance Seen: {:.2}
- Pheromone Range: [{:.4e}, {:.4e}]",
            self.iterations,
            format_duration(self.runtime),
            self.seed,
            self.distinct_paths,
            self.best_distance,
            self.best_ever_distance,
            self.min_pheromone,
            self.max_pheromone
        )
    }
}
