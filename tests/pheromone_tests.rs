//! Tests for pheromone field updates.

use aco_paths::error::AcoError;
use aco_paths::graph::DistanceGraph;
use aco_paths::pheromone::PheromoneField;
use aco_paths::solution::Path;

const INF: f64 = f64::INFINITY;

fn create_test_graph() -> DistanceGraph {
    DistanceGraph::new(vec![
        vec![INF, 1.0, 2.0, 2.0],
        vec![1.0, INF, 1.0, 3.0],
        vec![2.0, 1.0, INF, 1.0],
        vec![2.0, 3.0, 1.0, INF],
    ])
    .unwrap()
}

#[test]
fn test_initial_field_is_uniform() {
    let field = PheromoneField::new(4);

    assert_eq!(field.node_count(), 4);
    for i in 0..4 {
        for j in 0..4 {
            assert!((field.get(i, j) - 0.25).abs() < 1e-12);
        }
    }
}

#[test]
fn test_deposit_adds_inverse_distance_on_path_edges_only() {
    let graph = create_test_graph();
    let mut field = PheromoneField::new(4);
    let path = Path::from_nodes(&[0, 2, 1, 3]);

    field.deposit(&path, &graph);

    assert!((field.get(0, 2) - (0.25 + 0.5)).abs() < 1e-12);
    assert!((field.get(2, 1) - (0.25 + 1.0)).abs() < 1e-12);
    assert!((field.get(1, 3) - (0.25 + 1.0 / 3.0)).abs() < 1e-12);
    // Edges are directed
    assert!((field.get(2, 0) - 0.25).abs() < 1e-12);
    assert!((field.get(0, 1) - 0.25).abs() < 1e-12);
}

#[test]
fn test_repeated_deposit_accumulates() {
    let graph = create_test_graph();
    let mut field = PheromoneField::new(4);
    let path = Path::from_nodes(&[0, 1, 2, 3]);

    field.deposit(&path, &graph);
    field.deposit(&path, &graph);

    assert!((field.get(0, 1) - 2.25).abs() < 1e-12);
}

#[test]
fn test_evaporate_scales_every_entry() {
    let graph = create_test_graph();
    let mut field = PheromoneField::new(4);
    field.deposit(&Path::from_nodes(&[0, 1, 2, 3]), &graph);

    field.evaporate(0.5);

    assert!((field.get(0, 1) - 0.625).abs() < 1e-12);
    assert!((field.get(3, 0) - 0.125).abs() < 1e-12);
    assert!((field.get(1, 1) - 0.125).abs() < 1e-12);
}

#[test]
fn test_decay_of_one_keeps_field() {
    let mut field = PheromoneField::new(5);
    let before = field.clone();
    field.evaporate(1.0);
    assert_eq!(field, before);
}

#[test]
fn test_min_and_max_values() {
    let graph = create_test_graph();
    let mut field = PheromoneField::new(4);
    field.deposit(&Path::from_nodes(&[0, 1]), &graph);

    assert!((field.min_value() - 0.25).abs() < 1e-12);
    assert!((field.max_value() - 1.25).abs() < 1e-12);
}

#[test]
fn test_zero_length_edge_keeps_field_finite() {
    let graph = DistanceGraph::new(vec![
        vec![INF, 0.0, 1.0],
        vec![0.0, INF, 1.0],
        vec![1.0, 1.0, INF],
    ])
    .unwrap();
    let mut field = PheromoneField::new(3);

    field.deposit(&Path::from_nodes(&[0, 1, 2]), &graph);

    assert!(field.find_non_finite().is_none());
    assert!(field.ensure_valid(1).is_ok());
}

#[test]
fn test_infinite_edge_deposits_nothing() {
    let graph = DistanceGraph::new(vec![
        vec![INF, INF, 1.0],
        vec![INF, INF, 1.0],
        vec![1.0, 1.0, INF],
    ])
    .unwrap();
    let mut field = PheromoneField::new(3);

    field.deposit(&Path::from_nodes(&[0, 1, 2]), &graph);

    assert!((field.get(0, 1) - 1.0 / 3.0).abs() < 1e-12);
    assert!((field.get(1, 2) - (1.0 / 3.0 + 1.0)).abs() < 1e-12);
}

#[test]
fn test_non_finite_entry_is_reported() {
    let graph = create_test_graph();
    let mut field = PheromoneField::new(4);
    field.deposit(&Path::from_nodes(&[0, 1]), &graph);
    field.evaporate(f64::INFINITY);

    assert_eq!(field.find_non_finite(), Some((0, 0)));
    let err = field.ensure_valid(3).unwrap_err();
    match err {
        AcoError::NonFinitePheromone {
            iteration,
            from,
            to,
        } => {
            assert_eq!(iteration, 3);
            assert_eq!((from, to), (0, 0));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
