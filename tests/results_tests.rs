//! Tests for result aggregation and elite selection.

use aco_paths::graph::DistanceGraph;
use aco_paths::results::{aggregate, RankedResults};
use aco_paths::select_elites;
use aco_paths::solution::{Candidate, Path};

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

fn candidate(nodes: &[usize], graph: &DistanceGraph) -> Candidate {
    Candidate::new(Path::from_nodes(nodes), graph)
}

#[test]
fn test_aggregate_deduplicates_and_sorts() {
    let graph = create_test_graph();
    let candidates = vec![
        candidate(&[0, 3, 1, 2], &graph), // 6
        candidate(&[0, 1, 2, 3], &graph), // 3
        candidate(&[0, 3, 1, 2], &graph),
        candidate(&[0, 2, 1, 3], &graph), // 6
        candidate(&[0, 1, 2, 3], &graph),
    ];

    let results = aggregate(&candidates);

    assert_eq!(results.len(), 3);
    let paths: Vec<Vec<usize>> = results.iter().map(|e| e.path.clone()).collect();
    assert_eq!(paths, vec![vec![0, 1, 2, 3], vec![0, 3, 1, 2], vec![0, 2, 1, 3]]);
    assert!((results.best().unwrap().distance - 3.0).abs() < 1e-9);
}

#[test]
fn test_aggregate_is_sorted_and_distances_match_graph() {
    let graph = create_test_graph();
    let orders = [
        [0, 1, 3, 2],
        [0, 2, 3, 1],
        [0, 3, 2, 1],
        [0, 1, 2, 3],
        [0, 2, 1, 3],
        [0, 3, 1, 2],
    ];
    let candidates: Vec<Candidate> = orders.iter().map(|o| candidate(o, &graph)).collect();

    let results = aggregate(&candidates);

    assert_eq!(results.len(), 6);
    for pair in results.entries().windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    for entry in &results {
        assert!((entry.distance - graph.sequence_distance(&entry.path)).abs() < 1e-9);
    }
}

#[test]
fn test_aggregate_of_nothing_is_empty() {
    let results = aggregate(&Vec::<Candidate>::new());
    assert!(results.is_empty());
    assert!(results.best().is_none());
}

#[test]
fn test_select_elites_takes_shortest_in_stable_order() {
    let graph = create_test_graph();
    let candidates = vec![
        candidate(&[0, 3, 1, 2], &graph), // 6
        candidate(&[0, 2, 1, 3], &graph), // 6
        candidate(&[0, 1, 2, 3], &graph), // 3
        candidate(&[0, 3, 2, 1], &graph), // 4
    ];

    let elites = select_elites(&candidates, 3);

    assert_eq!(elites.len(), 3);
    assert_eq!(elites[0].path.nodes(), vec![0, 1, 2, 3]);
    assert_eq!(elites[1].path.nodes(), vec![0, 3, 2, 1]);
    // Tie at 6 keeps construction order
    assert_eq!(elites[2].path.nodes(), vec![0, 3, 1, 2]);
}

#[test]
fn test_select_elites_with_more_than_available() {
    let graph = create_test_graph();
    let candidates = vec![candidate(&[0, 1, 2, 3], &graph)];

    assert_eq!(select_elites(&candidates, 10).len(), 1);
}

#[test]
fn test_results_serialize_to_json() {
    let graph = create_test_graph();
    let results = aggregate(&[candidate(&[0, 1, 2, 3], &graph)]);

    let json = serde_json::to_string(&results).unwrap();

    assert!(json.contains("\"path\":[0,1,2,3]"));
    assert!(json.contains("\"distance\":3.0"));
}

#[test]
fn test_results_with_infinite_distance_round_trip() {
    let graph = DistanceGraph::new(vec![
        vec![INF, INF, 2.0],
        vec![1.0, INF, 1.0],
        vec![2.0, 1.0, INF],
    ])
    .unwrap();
    let results = aggregate(&[
        candidate(&[0, 1, 2], &graph),
        candidate(&[0, 2, 1], &graph),
    ]);
    assert_eq!(results.entries()[1].distance, INF);

    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"distance\":\"inf\""));

    let restored: RankedResults = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, results);
}
