//! Search and adversarial move selection on a static 2D maze.
//!
//! - [`algorithms`]: BFS, DFS and A* path-finders
//! - [`adversarial`]: evaluator, alpha-beta minimax, greedy and random chase
//! - [`simulation`]: headless evader/pursuer game loop

pub mod adversarial;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod maze;
pub mod simulation;
pub mod statistics;

pub use error::{MazeError, Result};
pub use grid::{Cell, Grid, Move, Position};
