pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

use std::fmt;

use a_star::AStar;
use bfs::Bfs;
use common::PathfindingAlgorithm;
use dfs::Dfs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    pub fn create(self) -> Box<dyn PathfindingAlgorithm> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::Dfs => Box::new(Dfs::new()),
            Algorithm::AStar => Box::new(AStar::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::AStar => "A*",
        };
        f.write_str(name)
    }
}
