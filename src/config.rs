use crate::adversarial::PursuerStrategy;
use crate::algorithms::Algorithm;
use crate::grid::Position;
use crate::maze;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which path-finder drives the evader, or `all` to compare them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Bfs,
    Dfs,
    AStar,
    All,
}

impl AlgorithmChoice {
    /// `None` for `all`.
    pub fn single(self) -> Option<Algorithm> {
        match self {
            AlgorithmChoice::Bfs => Some(Algorithm::Bfs),
            AlgorithmChoice::Dfs => Some(Algorithm::Dfs),
            AlgorithmChoice::AStar => Some(Algorithm::AStar),
            AlgorithmChoice::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EvaderMode {
    /// Follow the path found by the selected algorithm.
    Path,
    /// Choose each step with minimax.
    Minimax,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, value_enum, default_value = "a-star")]
    pub algorithm: AlgorithmChoice,

    #[arg(long, value_enum, default_value = "minimax")]
    pub pursuer: PursuerStrategy,

    #[arg(long, value_enum, default_value = "path")]
    pub evader: EvaderMode,

    /// Minimax depth for the pursuer.
    #[arg(long, default_value_t = 2)]
    pub depth: u32,

    /// Minimax depth for the evader in `--evader minimax` mode.
    #[arg(long, default_value_t = 3)]
    pub evader_depth: u32,

    #[arg(long, default_value_t = 200)]
    pub max_ticks: usize,

    /// The pursuer moves once every this many ticks.
    #[arg(long, default_value_t = 1)]
    pub pursuer_interval: usize,

    /// Seed for the random pursuer. Drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// ASCII maze file; the built-in classic maze when omitted.
    #[arg(long)]
    pub maze: Option<PathBuf>,

    #[arg(long, default_value_t = maze::CLASSIC_EVADER_START)]
    pub evader_start: Position,

    #[arg(long, default_value_t = maze::CLASSIC_PURSUER_START)]
    pub pursuer_start: Position,

    #[arg(long, default_value_t = maze::CLASSIC_GOAL)]
    pub goal: Position,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
