//! Basic example of using the ACO paths library.

use aco_paths::config::Config;
use aco_paths::graph::DistanceGraph;
use aco_paths::utils::{format_duration, nearest_neighbor_path, print_results};
use aco_paths::AcoAlgorithm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a matrix from the command line or generate a random one
    let args: Vec<String> = env::args().collect();
    let graph = if args.len() > 1 {
        println!("Loading distance matrix from: {}", args[1]);
        DistanceGraph::from_file(&args[1])?
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(2023);
        DistanceGraph::random_symmetric(10, 20.0, &mut rng)?
    };

    println!("Distance Matrix:");
    for row in graph.matrix() {
        let cells: Vec<String> = row.iter().map(|d| format!("{:>6.1}", d)).collect();
        println!("{}", cells.join(""));
    }
    println!();

    let config = Config::new()
        .with_n_ants(50)
        .with_n_best(50)
        .with_n_iterations(100)
        .with_alpha(1.0)
        .with_beta(1.6)
        .with_decay(0.9)
        .with_seed(42);

    let mut algorithm = AcoAlgorithm::new(graph, config)?;

    println!("> Ants are colonizing...");
    let start_time = Instant::now();
    let results = algorithm.run()?;
    println!("> Ants found their way in {}", format_duration(start_time.elapsed()));
    println!();

    let (greedy_path, greedy_distance) = nearest_neighbor_path(&algorithm.graph, 0)?;
    println!(
        "Nearest neighbour: {:?} (Distance: {:.2})",
        greedy_path, greedy_distance
    );
    print_results(&results, None);

    Ok(())
}
