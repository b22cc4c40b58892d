//! Move selection for the two agents.
//!
//! - [`evaluate`]: static score of a position
//! - [`minimax`]: alpha-beta game-tree search
//! - [`chase`]: greedy and random pursuer policies

pub mod chase;
pub mod evaluate;
pub mod minimax;

use clap::ValueEnum;
use rand::Rng;

use crate::error::Result;
use crate::grid::{Grid, Move, Position};
use chase::{greedy_chase, random_move};
use minimax::{GameState, Minimax, Side};

/// Pursuer move. Minimax searches with the pursuer minimizing at the root;
/// otherwise greedy chase. `Move::Stay` when no move is available.
pub fn pursuer_move(
    grid: &Grid,
    evader: Position,
    pursuer: Position,
    goal: Position,
    use_minimax: bool,
    depth: u32,
) -> Result<Move> {
    let chosen = if use_minimax {
        Minimax::new(grid)
            .search(GameState::new(pursuer, evader, goal), depth, Side::Pursuer)?
            .best_move
    } else {
        grid.ensure_open(pursuer)?;
        greedy_chase(grid, pursuer, evader)
    };
    Ok(chosen.unwrap_or(Move::Stay))
}

/// Evader move from minimax with the evader maximizing at the root.
/// `Move::Stay` when no move is available.
pub fn evader_move(
    grid: &Grid,
    evader: Position,
    pursuer: Position,
    goal: Position,
    depth: u32,
) -> Result<Move> {
    let outcome = Minimax::new(grid).search(GameState::new(pursuer, evader, goal), depth, Side::Evader)?;
    Ok(outcome.best_move.unwrap_or(Move::Stay))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PursuerStrategy {
    /// Alpha-beta search.
    Minimax,
    /// One-step distance minimization.
    Greedy,
    /// Random legal step.
    Random,
}

impl PursuerStrategy {
    pub fn choose<R: Rng + ?Sized>(
        self,
        grid: &Grid,
        evader: Position,
        pursuer: Position,
        goal: Position,
        depth: u32,
        rng: &mut R,
    ) -> Result<Move> {
        match self {
            PursuerStrategy::Minimax => pursuer_move(grid, evader, pursuer, goal, true, depth),
            PursuerStrategy::Greedy => pursuer_move(grid, evader, pursuer, goal, false, depth),
            PursuerStrategy::Random => {
                grid.ensure_open(pursuer)?;
                Ok(random_move(grid, pursuer, rng).unwrap_or(Move::Stay))
            }
        }
    }
}
