use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use maze_search::config::Config;
use maze_search::maze;
use maze_search::simulation::Simulation;
use maze_search::statistics::{compare_algorithms, optimal_path_length, print_comparison_results};

fn main() -> Result<()> {
    let config = Config::parse();

    let default_level = if config.quiet { "maze_search=warn" } else { "maze_search=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if config.algorithm.single().is_none() {
        // Compare all path-finders on the same maze.
        let grid = match &config.maze {
            Some(path) => maze::load(path)?,
            None => maze::classic()?,
        };
        let results = compare_algorithms(&grid, config.evader_start, config.goal)?;
        let optimal = optimal_path_length(&grid, config.evader_start, config.goal);
        print_comparison_results(&results, optimal);
        return Ok(());
    }

    let mut simulation = Simulation::new(config)?;
    let summary = simulation.run()?;

    println!("\n=== FINAL RESULTS ===");
    println!("Outcome: {}", summary.outcome);
    println!("Evader: {} | Pursuer: {}", summary.evader, summary.pursuer);
    println!("{}", summary.statistics);

    Ok(())
}
