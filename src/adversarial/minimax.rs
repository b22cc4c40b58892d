//! Depth-limited minimax with alpha-beta pruning.
//!
//! The evader maximizes the evaluator score and the pursuer minimizes it.
//! Each ply moves one side only; the other side is held in place.

use crate::adversarial::evaluate::Evaluator;
use crate::error::{MazeError, Result};
use crate::grid::{Grid, Move, Position};
use tracing::{debug, trace};

/// Deepest search accepted. Branching is at most 4 per ply.
pub const MAX_SEARCH_DEPTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Maximizing.
    Evader,
    /// Minimizing.
    Pursuer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Evader => Side::Pursuer,
            Side::Pursuer => Side::Evader,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub pursuer: Position,
    pub evader: Position,
    pub goal: Position,
}

impl GameState {
    pub fn new(pursuer: Position, evader: Position, goal: Position) -> Self {
        GameState {
            pursuer,
            evader,
            goal,
        }
    }

    pub fn is_caught(&self) -> bool {
        self.pursuer == self.evader
    }

    pub fn is_won(&self) -> bool {
        self.evader == self.goal
    }

    pub fn position_of(&self, side: Side) -> Position {
        match side {
            Side::Evader => self.evader,
            Side::Pursuer => self.pursuer,
        }
    }

    /// Move `side` one step; the other agent stays put.
    pub fn apply(&self, side: Side, mv: Move) -> GameState {
        let mut next = *self;
        match side {
            Side::Evader => next.evader = self.evader.step(mv),
            Side::Pursuer => next.pursuer = self.pursuer.step(mv),
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: i32,
    /// `None` at a leaf, or when the side to move at the root is boxed in.
    pub best_move: Option<Move>,
}

pub struct Minimax<'a> {
    grid: &'a Grid,
    evaluator: Evaluator,
    pruning: bool,
    nodes_visited: u64,
}

impl<'a> Minimax<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Minimax {
            grid,
            evaluator: Evaluator::default(),
            pruning: true,
            nodes_visited: 0,
        }
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Disabling pruning gives plain exhaustive minimax. The chosen move and
    /// score are the same either way; only `nodes_visited` changes.
    pub fn pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Nodes visited by the last `search` call.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Search `depth` plies from `state` with `side` to move.
    pub fn search(&mut self, state: GameState, depth: u32, side: Side) -> Result<SearchOutcome> {
        if depth > MAX_SEARCH_DEPTH {
            return Err(MazeError::DepthLimitExceeded {
                depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        self.grid.ensure_open(state.pursuer)?;
        self.grid.ensure_open(state.evader)?;
        self.grid.ensure_open(state.goal)?;

        self.nodes_visited = 0;
        let outcome = self.alpha_beta(state, depth, i32::MIN, i32::MAX, side);
        debug!(
            ?side,
            depth,
            score = outcome.score,
            best_move = ?outcome.best_move,
            nodes = self.nodes_visited,
            "minimax search finished"
        );
        Ok(outcome)
    }

    fn leaf(&self, state: &GameState) -> SearchOutcome {
        SearchOutcome {
            score: self
                .evaluator
                .evaluate(state.pursuer, state.evader, state.goal),
            best_move: None,
        }
    }

    fn alpha_beta(
        &mut self,
        state: GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Side,
    ) -> SearchOutcome {
        self.nodes_visited += 1;

        if depth == 0 || state.is_caught() || state.is_won() {
            return self.leaf(&state);
        }

        let moves = self.grid.legal_moves(state.position_of(side));
        if moves.is_empty() {
            return self.leaf(&state);
        }

        // The first child seeds the best score; no `i32` sentinel.
        let mut best: Option<SearchOutcome> = None;

        for mv in moves {
            let child = state.apply(side, mv);
            let score = self
                .alpha_beta(child, depth - 1, alpha, beta, side.opponent())
                .score;
            trace!(?side, depth, ?mv, score, "minimax child");

            // Strict comparison: the first move reaching the extreme wins.
            let improves = match (side, best) {
                (_, None) => true,
                (Side::Evader, Some(b)) => score > b.score,
                (Side::Pursuer, Some(b)) => score < b.score,
            };
            if improves {
                best = Some(SearchOutcome {
                    score,
                    best_move: Some(mv),
                });
            }
            match side {
                Side::Evader => alpha = alpha.max(score),
                Side::Pursuer => beta = beta.min(score),
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        best.unwrap_or_else(|| self.leaf(&state))
    }
}
