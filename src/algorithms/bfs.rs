use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::debug;

/// Breadth-first search. Returns a shortest path in number of moves.
#[derive(Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        grid.ensure_open(start)?;
        grid.ensure_open(goal)?;

        let mut queue = VecDeque::from([start]);
        // Marked on enqueue so no cell is queued twice.
        let mut visited = FxHashSet::from_iter([start]);
        let mut parents = FxHashMap::default();
        let mut nodes_expanded = 0;

        while let Some(current) = queue.pop_front() {
            nodes_expanded += 1;

            if current == goal {
                let path = reconstruct_path(&parents, start, goal);
                debug!(nodes_expanded, length = path.len() - 1, "bfs reached goal");
                return Ok(SearchResult {
                    path: Some(path),
                    nodes_expanded,
                });
            }

            for next in grid.get_neighbors(&current) {
                if visited.insert(next) {
                    parents.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        debug!(nodes_expanded, "bfs exhausted frontier");
        Ok(SearchResult {
            path: None,
            nodes_expanded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn open_five_by_five_corner_to_corner() {
        let grid = Grid::open(5, 5).unwrap();
        let result = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(4, 4))
            .unwrap();
        assert_eq!(result.path_length(), Some(8));
        assert!(result.nodes_expanded <= 25);
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::open(3, 3).unwrap();
        let p = Position::new(1, 1);
        let result = Bfs::new().find_path(&grid, p, p).unwrap();
        assert_eq!(result.path, Some(vec![p]));
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn walled_off_goal_expands_reachable_component() {
        let grid = Grid::from_ascii("..#.\n..#.\n").unwrap();
        let result = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(0, 3))
            .unwrap();
        assert_eq!(result.path, None);
        assert_eq!(result.nodes_expanded, 4);
    }

    #[test]
    fn tie_break_prefers_right_before_down() {
        let grid = Grid::open(2, 2).unwrap();
        let result = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(1, 1))
            .unwrap();
        assert_eq!(
            result.path,
            Some(vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)])
        );
    }

    #[test]
    fn wall_start_is_rejected() {
        let grid = Grid::from_ascii("#.\n..\n").unwrap();
        let err = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, MazeError::InvalidPosition { row: 0, col: 0 }));
    }
}
