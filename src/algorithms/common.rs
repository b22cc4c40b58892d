use crate::error::Result;
use crate::grid::{Grid, Position};
use rustc_hash::FxHashMap;

/// Outcome of one path-finding call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the goal is unreachable.
    pub path: Option<Vec<Position>>,
    /// Frontier pops, including the one that reached the goal.
    pub nodes_expanded: usize,
}

impl SearchResult {
    /// Number of moves along the path, if there is one.
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    /// Search from `start` to `goal`. Both must be open cells, otherwise
    /// `MazeError::InvalidPosition` is returned before any work is done.
    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult>;
}

/// Walk parent links back from `goal` and return the path start-first.
pub(crate) fn reconstruct_path(
    parents: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
