//! Benchmarks for the ACO algorithm.

#[cfg(feature = "bench")]
extern crate criterion;

use aco_paths::ant::{ant_rng, Ant};
use aco_paths::config::Config;
use aco_paths::graph::DistanceGraph;
use aco_paths::pheromone::PheromoneField;
use aco_paths::AcoAlgorithm;
#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Create a benchmark graph with nodes on a square grid.
fn create_benchmark_graph(size: usize) -> DistanceGraph {
    let grid_size = (size as f64).sqrt().ceil() as usize;
    let points: Vec<(f64, f64)> = (0..size)
        .map(|i| ((i % grid_size) as f64 * 10.0, (i / grid_size) as f64 * 10.0))
        .collect();

    DistanceGraph::from_coordinates(&points).expect("grid graph is valid")
}

#[cfg(feature = "bench")]
fn benchmark_path_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_construction");

    for size in [20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graph = create_benchmark_graph(size);
            let pheromone = PheromoneField::new(size);
            let ant = Ant::new(&graph, &pheromone, 1.0, 2.0);
            let mut rng = ant_rng(7, 0, 0);

            b.iter(|| ant.construct(0, &mut rng));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graph = create_benchmark_graph(size);
            let config = Config::new().with_n_ants(20).with_n_best(5).with_seed(7);
            let mut algorithm = AcoAlgorithm::new(graph, config).expect("valid config");

            b.iter(|| {
                let candidates = algorithm.explore(0);
                algorithm
                    .update_pheromone(&candidates, 0)
                    .expect("finite pheromone");
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence");
    group.measurement_time(Duration::from_secs(20));

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graph = create_benchmark_graph(size);
            let config = Config::new()
                .with_n_ants(20)
                .with_n_best(5)
                .with_n_iterations(50)
                .with_seed(7);

            b.iter(|| {
                let mut algorithm =
                    AcoAlgorithm::new(graph.clone(), config.clone()).expect("valid config");
                algorithm.run().expect("run succeeds")
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_path_construction,
    benchmark_iteration,
    benchmark_convergence
);

#[cfg(feature = "bench")]
criterion_main!(benches);
