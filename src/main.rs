use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_hillclimb::hc::{Direction, HcConfig, HcResult, HillClimbing, StochasticHillClimbing};
use u_hillclimb::neighbor::{BitFlip, Swap};
use u_hillclimb::problems::tsp::{self, TourLength, CITIES};
use u_hillclimb::problems::Knapsack;

#[derive(Parser)]
#[command(version, about = "Hill climbing on binary knapsack and the 13-city TSP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Repeat hill climbing runs on a random 0/1 knapsack instance
    Knapsack(KnapsackArgs),
    /// Validate and measure 13-city tours, then improve one with swaps
    Tsp(TspArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    /// best improving neighbor
    Steepest,
    /// random improving neighbor
    Stochastic,
}

#[derive(clap::Args)]
struct KnapsackArgs {
    /// search strategy
    #[arg(long, value_enum, default_value_t = Algorithm::Steepest)]
    algorithm: Algorithm,

    /// number of items
    #[arg(long, default_value_t = 20)]
    dim: usize,

    /// number of independent runs
    #[arg(long, default_value_t = 30)]
    runs: usize,

    /// iteration cap per run
    #[arg(long, default_value_t = 200)]
    max_iterations: usize,

    /// neighbors sampled per iteration
    #[arg(long, default_value_t = 10)]
    neighbors: usize,

    /// probability that an item starts selected
    #[arg(long, default_value_t = 0.2)]
    density: f64,

    /// seed for the instance (the search is unseeded unless --seed is given)
    #[arg(long, default_value_t = 0)]
    instance_seed: u64,

    /// RNG seed for initial solutions and the search
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::Args)]
struct TspArgs {
    /// neighbors sampled per iteration
    #[arg(long, default_value_t = 20)]
    neighbors: usize,

    /// iteration cap
    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    enable_tracing();

    match Cli::parse().command {
        Command::Knapsack(args) => run_knapsack(&args),
        Command::Tsp(args) => run_tsp(&args),
    }
}

fn run_knapsack(args: &KnapsackArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.density),
        "--density must be in [0, 1], got {}",
        args.density
    );

    let knapsack = Knapsack::generate(args.dim, args.instance_seed)
        .context("failed to build knapsack instance")?;
    info!(
        dim = knapsack.dim(),
        capacity = knapsack.capacity(),
        runs = args.runs,
        max_iterations = args.max_iterations,
        "knapsack configuration"
    );

    let mut config = HcConfig::default()
        .with_max_iterations(args.max_iterations)
        .with_neighbors_per_step(args.neighbors)
        .with_direction(Direction::Maximize);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut steepest = HillClimbing::new(knapsack.clone(), BitFlip, config.clone());
    let mut stochastic = StochasticHillClimbing::new(knapsack.clone(), BitFlip, config);

    let label = match args.algorithm {
        Algorithm::Steepest => "Hill Climbing",
        Algorithm::Stochastic => "Stochastic Hill Climbing",
    };
    println!("--- {label}: {} runs ---", args.runs);

    let mut finals = Vec::with_capacity(args.runs);
    for run in 1..=args.runs {
        let initial = knapsack.random_solution(args.density, &mut rng);
        let result: HcResult<Vec<u8>> = match args.algorithm {
            Algorithm::Steepest => steepest.run(&initial),
            Algorithm::Stochastic => stochastic.run(&initial),
        };

        let packing = knapsack
            .evaluate(&result.solution)
            .context("search returned a malformed solution")?;
        println!(
            "Run {run}: fitness = {} (weight {}/{}, {} iterations)",
            result.fitness,
            packing.weight,
            knapsack.capacity(),
            result.iterations
        );
        finals.push(result.fitness);
    }

    println!();
    println!("Final fitness of {} runs:", args.runs);
    println!("{finals:?}");
    if let Some(best) = finals.iter().copied().reduce(f64::max) {
        let mean = finals.iter().sum::<f64>() / finals.len() as f64;
        println!("best = {best}, mean = {mean:.2}");
    }
    Ok(())
}

fn run_tsp(args: &TspArgs) -> Result<()> {
    let route = tsp::identity_route();
    println!("Route: {route:?}");
    println!("Valid: {}", tsp::is_valid_route(&route));
    let distance = tsp::route_distance(&route)?;
    println!("Total distance: {distance} miles");

    println!("{}", "-".repeat(20));

    let broken = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 1];
    println!("Route: {broken:?}");
    println!("Valid: {}", tsp::is_valid_route(&broken));
    if let Err(err) = tsp::route_distance(&broken) {
        println!("Rejected: {err}");
    }

    println!("{}", "-".repeat(20));

    let mut config = HcConfig::default()
        .with_max_iterations(args.max_iterations)
        .with_neighbors_per_step(args.neighbors)
        .with_direction(Direction::Minimize);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut hc = HillClimbing::new(TourLength, Swap, config);
    let result = hc.run(&route);
    let improved = tsp::route_distance(&result.solution)?;

    let names: Vec<&str> = std::iter::once(tsp::DEPOT)
        .chain(result.solution.iter().copied())
        .chain(std::iter::once(tsp::DEPOT))
        .map(|city| CITIES[city])
        .collect();
    println!("Improved route: {:?}", result.solution);
    println!("  {}", names.join(" -> "));
    println!(
        "Total distance: {improved} miles ({} accepted swaps)",
        result.improvements
    );
    Ok(())
}
