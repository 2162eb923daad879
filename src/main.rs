//! Command-line front end for the ACO path solver.

use aco_paths::config::{Config, ResultScope};
use aco_paths::graph::DistanceGraph;
use aco_paths::utils::{
    format_duration, nearest_neighbor_path, print_results, save_results, ProgressBar,
    SearchStatistics,
};
use aco_paths::AcoAlgorithm;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Find short Hamiltonian paths with Ant Colony Optimization.
#[derive(Parser, Debug)]
#[command(name = "aco-paths", version, about)]
struct Args {
    /// Distance matrix file (whitespace separated, `inf` on the diagonal)
    #[arg(short, long, conflicts_with = "nodes")]
    matrix: Option<PathBuf>,

    /// Size of a random symmetric graph to generate instead of loading one
    #[arg(short, long, default_value_t = 10)]
    nodes: usize,

    /// Ants per iteration
    #[arg(long, default_value_t = 50)]
    ants: usize,

    /// Elite paths reinforcing the pheromone field per iteration
    #[arg(long, default_value_t = 50)]
    best: usize,

    /// Number of iterations
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,

    /// Pheromone exponent
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Inverse-distance exponent
    #[arg(long, default_value_t = 1.6)]
    beta: f64,

    /// Evaporation factor in (0, 1]
    #[arg(long, default_value_t = 0.9)]
    decay: f64,

    /// Start node
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Random seed (graph generation and colony)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rank candidates from every iteration instead of only the last
    #[arg(long)]
    all_iterations: bool,

    /// Construct paths in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Number of ranked paths to print
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the ranked results as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let graph = match &args.matrix {
        Some(path) => {
            info!("loading distance matrix from {}", path.display());
            DistanceGraph::from_file(path)?
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            info!("generating random symmetric graph with {} nodes", args.nodes);
            DistanceGraph::random_symmetric(args.nodes, 20.0, &mut rng)?
        }
    };

    let scope = if args.all_iterations {
        ResultScope::AllIterations
    } else {
        ResultScope::LastIteration
    };
    let mut config = Config::new()
        .with_n_ants(args.ants)
        .with_n_best(args.best)
        .with_n_iterations(args.iterations)
        .with_alpha(args.alpha)
        .with_beta(args.beta)
        .with_decay(args.decay)
        .with_start_node(args.start)
        .with_parallel(args.parallel)
        .with_result_scope(scope);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut algorithm = AcoAlgorithm::new(graph, config)?;

    info!("ants are colonizing");
    let results = if args.quiet {
        algorithm.run()?
    } else {
        let mut bar = ProgressBar::new(algorithm.config.n_iterations);
        algorithm.run_with_observer(|report| bar.observe(report))?
    };
    info!("ants found their way in {}", format_duration(algorithm.run_time));

    let (_, greedy) = nearest_neighbor_path(&algorithm.graph, args.start)?;
    println!("Nearest-neighbour baseline: {:.2}", greedy);
    print_results(&results, Some(args.top));
    println!();
    println!("{}", SearchStatistics::collect(&algorithm, &results).format());

    if let Some(path) = &args.output {
        info!("saving results to {}", path.display());
        save_results(&results, &algorithm, path)?;
    }

    Ok(())
}
