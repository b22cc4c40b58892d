use crate::adversarial::evader_move;
use crate::algorithms::Algorithm;
use crate::config::{Config, EvaderMode};
use crate::error::Result;
use crate::grid::{Grid, Move, Position};
use crate::maze;
use crate::statistics::{optimal_path_length, Statistics};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Caught,
    ReachedGoal,
    OutOfTicks,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Caught => f.write_str("evader caught"),
            Outcome::ReachedGoal => f.write_str("evader reached the goal"),
            Outcome::OutOfTicks => f.write_str("tick limit reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub evader: Position,
    pub pursuer: Position,
    pub statistics: Statistics,
}

/// Headless game loop: one evader, one pursuer, one goal on a static maze.
pub struct Simulation {
    grid: Grid,
    config: Config,
    algorithm: Algorithm,
    evader: Position,
    pursuer: Position,
    goal: Position,
    path: Vec<Position>,
    path_index: usize,
    rng: StdRng,
    stats: Statistics,
}

impl Simulation {
    /// Load the maze named by the config, or the classic maze.
    pub fn new(config: Config) -> Result<Self> {
        let grid = match &config.maze {
            Some(path) => maze::load(path)?,
            None => maze::classic()?,
        };
        Self::with_grid(grid, config)
    }

    pub fn with_grid(grid: Grid, config: Config) -> Result<Self> {
        grid.ensure_open(config.evader_start)?;
        grid.ensure_open(config.pursuer_start)?;
        grid.ensure_open(config.goal)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stats = Statistics {
            optimal_path_length: optimal_path_length(&grid, config.evader_start, config.goal),
            ..Statistics::default()
        };

        Ok(Simulation {
            algorithm: config.algorithm.single().unwrap_or(Algorithm::AStar),
            evader: config.evader_start,
            pursuer: config.pursuer_start,
            goal: config.goal,
            path: Vec::new(),
            path_index: 0,
            rng,
            stats,
            grid,
            config,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn evader(&self) -> Position {
        self.evader
    }

    pub fn pursuer(&self) -> Position {
        self.pursuer
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Remaining planned steps for the evader.
    pub fn remaining_path(&self) -> &[Position] {
        self.path.get(self.path_index..).unwrap_or(&[])
    }

    /// Plan a path from the evader to the goal with the selected algorithm.
    /// Returns whether a path was found.
    pub fn find_path(&mut self) -> Result<bool> {
        let mut finder = self.algorithm.create();
        let result = finder.find_path(&self.grid, self.evader, self.goal)?;
        self.stats.path_requests += 1;
        self.stats.nodes_expanded += result.nodes_expanded;

        info!(
            algorithm = finder.name(),
            nodes_expanded = result.nodes_expanded,
            length = ?result.path_length(),
            "planned evader path"
        );
        match result.path {
            Some(path) => {
                self.path = path;
                // path[0] is the current cell.
                self.path_index = 1;
                Ok(true)
            }
            None => {
                warn!(from = %self.evader, goal = %self.goal, "no path to goal");
                self.path.clear();
                self.path_index = 0;
                Ok(false)
            }
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.pursuer == self.evader {
            Some(Outcome::Caught)
        } else if self.evader == self.goal {
            Some(Outcome::ReachedGoal)
        } else {
            None
        }
    }

    /// Advance one tick: the evader steps, then the pursuer steps when its
    /// interval comes up. Returns the outcome once the game is decided.
    pub fn tick(&mut self) -> Result<Option<Outcome>> {
        if let Some(outcome) = self.outcome() {
            return Ok(Some(outcome));
        }

        let next = match self.config.evader {
            EvaderMode::Path => match self.path.get(self.path_index) {
                Some(&next) => {
                    self.path_index += 1;
                    next
                }
                None => self.evader,
            },
            EvaderMode::Minimax => {
                let mv = evader_move(
                    &self.grid,
                    self.evader,
                    self.pursuer,
                    self.goal,
                    self.config.evader_depth,
                )?;
                self.stepped(self.evader, mv)
            }
        };
        if next != self.evader && self.grid.is_open(next) {
            self.evader = next;
            self.stats.evader_moves += 1;
        }

        if self.outcome().is_none() && self.stats.ticks % self.config.pursuer_interval.max(1) == 0 {
            let mv = self.config.pursuer.choose(
                &self.grid,
                self.evader,
                self.pursuer,
                self.goal,
                self.config.depth,
                &mut self.rng,
            )?;
            let next = self.stepped(self.pursuer, mv);
            if next != self.pursuer {
                debug!(?mv, from = %self.pursuer, to = %next, "pursuer moved");
                self.pursuer = next;
                self.stats.pursuer_moves += 1;
            }
        }

        self.stats.ticks += 1;
        Ok(self.outcome())
    }

    /// Play until the game is decided or the tick limit is hit.
    pub fn run(&mut self) -> Result<GameSummary> {
        info!(
            evader = %self.evader,
            pursuer = %self.pursuer,
            goal = %self.goal,
            pursuer_strategy = ?self.config.pursuer,
            evader_mode = ?self.config.evader,
            "starting game"
        );

        if self.config.evader == EvaderMode::Path {
            self.find_path()?;
        }
        self.draw();

        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }
            if self.stats.ticks >= self.config.max_ticks {
                break Outcome::OutOfTicks;
            }
            self.tick()?;
            self.draw();
        };

        info!(%outcome, ticks = self.stats.ticks, "game over");
        Ok(GameSummary {
            outcome,
            evader: self.evader,
            pursuer: self.pursuer,
            statistics: self.stats.clone(),
        })
    }

    /// Apply `mv` from `pos`, staying put if it would leave the open cells.
    fn stepped(&self, pos: Position, mv: Move) -> Position {
        let next = pos.step(mv);
        if self.grid.is_open(next) {
            next
        } else {
            pos
        }
    }

    fn draw(&self) {
        if self.config.no_visualization || self.config.quiet {
            return;
        }
        // Clear the terminal screen.
        print!("\x1B[2J\x1B[1;1H");
        println!("=== MAZE CHASE ===");
        println!(
            "Algorithm: {} | Tick: {} | Pursuer: {:?} | Evader: {:?}",
            self.algorithm, self.stats.ticks, self.config.pursuer, self.config.evader
        );
        println!(
            "Evader {} | Pursuer {} | Goal {}",
            self.evader, self.pursuer, self.goal
        );
        let upcoming = self.remaining_path();
        if !upcoming.is_empty() {
            println!("Next moves: {:?}", &upcoming[..upcoming.len().min(3)]);
        }
        print!(
            "{}",
            self.grid
                .render(&[(self.goal, 'F'), (self.evader, 'P'), (self.pursuer, 'G')])
        );
        thread::sleep(Duration::from_millis(self.config.delay_ms));
    }
}
