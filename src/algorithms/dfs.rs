use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Depth-first search over an explicit stack. Finds some path, not
/// necessarily a shortest one.
#[derive(Default)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self {
        Dfs
    }
}

impl PathfindingAlgorithm for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        grid.ensure_open(start)?;
        grid.ensure_open(goal)?;

        let mut stack = vec![start];
        let mut visited = FxHashSet::from_iter([start]);
        let mut parents = FxHashMap::default();
        let mut nodes_expanded = 0;

        while let Some(current) = stack.pop() {
            nodes_expanded += 1;

            if current == goal {
                let path = reconstruct_path(&parents, start, goal);
                debug!(nodes_expanded, length = path.len() - 1, "dfs reached goal");
                return Ok(SearchResult {
                    path: Some(path),
                    nodes_expanded,
                });
            }

            // Neighbors pushed in order, so the last one (up) is popped first.
            for next in grid.get_neighbors(&current) {
                if visited.insert(next) {
                    parents.insert(next, current);
                    stack.push(next);
                }
            }
        }

        debug!(nodes_expanded, "dfs exhausted frontier");
        Ok(SearchResult {
            path: None,
            nodes_expanded,
        })
    }
}
