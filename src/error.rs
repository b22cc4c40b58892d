use thiserror::Error;

/// Structural failures: bad maze data or bad caller input.
///
/// An unreachable goal or a side with no legal move is not an error; those
/// come back as `None` from the searches.
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid position: ({row}, {col}) is out of bounds or a wall")]
    InvalidPosition { row: i32, col: i32 },

    #[error("Maze has no cells")]
    EmptyGrid,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown maze character {ch:?} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("Search depth {depth} exceeds the limit of {max}")]
    DepthLimitExceeded { depth: u32, max: u32 },

    #[error("Cannot parse position {0:?}, expected `row,col`")]
    InvalidPositionSyntax(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
