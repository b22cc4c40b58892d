use crate::algorithms::Algorithm;
use crate::error::Result;
use crate::grid::{Grid, Position};
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::warn;

/// Per-game counters collected by the simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub ticks: usize,
    pub evader_moves: usize,
    pub pursuer_moves: usize,
    pub path_requests: usize,
    pub nodes_expanded: usize,
    pub optimal_path_length: Option<usize>,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Evader Moves: {}", self.evader_moves)?;
        writeln!(f, "Pursuer Moves: {}", self.pursuer_moves)?;
        writeln!(f, "Path Requests: {}", self.path_requests)?;
        writeln!(f, "Nodes Expanded: {}", self.nodes_expanded)?;
        match self.optimal_path_length {
            Some(len) => writeln!(f, "Optimal Path Length: {}", len)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        Ok(())
    }
}

/// One row of the algorithm comparison table.
#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub path_length: Option<usize>,
    pub nodes_expanded: usize,
    pub elapsed: Duration,
}

/// Shortest path length computed with the `pathfinding` crate, independent of
/// this crate's own searches. `None` when the goal is unreachable.
pub fn optimal_path_length(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    bfs(&start, |p| grid.get_neighbors(p), |p| *p == goal).map(|path| path.len() - 1)
}

/// Run every path-finder on the same maze and endpoints.
pub fn compare_algorithms(grid: &Grid, start: Position, goal: Position) -> Result<Vec<AlgorithmResult>> {
    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let mut finder = algorithm.create();
        let started = Instant::now();
        let result = finder.find_path(grid, start, goal)?;
        let elapsed = started.elapsed();
        if result.path.is_none() {
            warn!(%algorithm, %start, %goal, "goal unreachable");
        }
        results.push(AlgorithmResult {
            algorithm,
            path_length: result.path_length(),
            nodes_expanded: result.nodes_expanded,
            elapsed,
        });
    }
    Ok(results)
}

/// Print comparison results in a table.
pub fn print_comparison_results(results: &[AlgorithmResult], optimal: Option<usize>) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<10} {:<8} {:<10} {:<10} {:<12}",
        "Algorithm", "Found", "Length", "Expanded", "Time"
    );
    println!("{}", "-".repeat(54));

    for result in results {
        let found = if result.path_length.is_some() { "yes" } else { "no" };
        let length = result
            .path_length
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        println!(
            "{:<10} {:<8} {:<10} {:<10} {:<12}",
            result.algorithm.to_string(),
            found,
            length,
            result.nodes_expanded,
            format!("{:.2?}", result.elapsed)
        );
    }

    println!();
    match optimal {
        Some(len) => println!("Reference shortest path: {} moves", len),
        None => println!("Goal is unreachable from the start position."),
    }

    if let Some(fewest) = results.iter().min_by_key(|r| r.nodes_expanded) {
        println!(
            "Fewest expansions: {} ({} nodes)",
            fewest.algorithm, fewest.nodes_expanded
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_length_matches_open_grid() {
        let grid = Grid::open(5, 5).unwrap();
        assert_eq!(
            optimal_path_length(&grid, Position::new(0, 0), Position::new(4, 4)),
            Some(8)
        );
    }

    #[test]
    fn comparison_runs_every_algorithm() {
        let grid = crate::maze::classic().unwrap();
        let start = crate::maze::CLASSIC_EVADER_START;
        let goal = crate::maze::CLASSIC_GOAL;
        let results = compare_algorithms(&grid, start, goal).unwrap();
        assert_eq!(results.len(), 3);

        let optimal = optimal_path_length(&grid, start, goal);
        for r in &results {
            match r.algorithm {
                Algorithm::Dfs => assert!(r.path_length >= optimal),
                _ => assert_eq!(r.path_length, optimal),
            }
        }
    }
}
