use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct OpenEntry {
    f: u32,
    g: u32,
    pos: Position,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest f first, then lowest
        // (row, col), then lowest g.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.g.cmp(&self.g))
    }
}

/// A* with a Manhattan-distance heuristic over unit-cost moves.
///
/// A cell is closed when it is expanded and never reopened, which is sound
/// because every move costs 1 and Manhattan distance is consistent on a
/// 4-connected grid. Weighted terrain would need reopen-on-improvement.
/// Before a cell is closed, a cheaper route to it replaces its frontier
/// entry; stale heap entries are skipped on pop and not counted as
/// expansions.
#[derive(Default)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* path-finder.
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    /// Finds a shortest path from start to goal.
    ///
    /// Frontier ties on `f` are broken by ascending position (row first),
    /// then by ascending `g`.
    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        grid.ensure_open(start)?;
        grid.ensure_open(goal)?;

        let mut open = BinaryHeap::new();
        open.push(OpenEntry {
            f: start.manhattan(&goal),
            g: 0,
            pos: start,
        });
        let mut best_g: FxHashMap<Position, u32> = FxHashMap::from_iter([(start, 0)]);
        let mut closed = FxHashSet::default();
        let mut parents = FxHashMap::default();
        let mut nodes_expanded = 0;

        while let Some(OpenEntry { g, pos: current, .. }) = open.pop() {
            if !closed.insert(current) {
                continue;
            }
            nodes_expanded += 1;

            if current == goal {
                let path = reconstruct_path(&parents, start, goal);
                debug!(nodes_expanded, length = g, "a_star reached goal");
                return Ok(SearchResult {
                    path: Some(path),
                    nodes_expanded,
                });
            }

            for next in grid.get_neighbors(&current) {
                if closed.contains(&next) {
                    continue;
                }
                let next_g = g + 1;
                if best_g.get(&next).map_or(true, |&known| next_g < known) {
                    best_g.insert(next, next_g);
                    parents.insert(next, current);
                    open.push(OpenEntry {
                        f: next_g + next.manhattan(&goal),
                        g: next_g,
                        pos: next,
                    });
                }
            }
        }

        debug!(nodes_expanded, "a_star exhausted frontier");
        Ok(SearchResult {
            path: None,
            nodes_expanded,
        })
    }
}
