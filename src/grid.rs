use crate::error::{MazeError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    pub fn manhattan(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The position one step away in the given direction. Not bounds-checked.
    pub fn step(&self, mv: Move) -> Position {
        let (dr, dc) = mv.delta();
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let syntax = || MazeError::InvalidPositionSyntax(s.to_string());
        // Accepts both `row,col` and the `(row, col)` display form.
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(syntax)?;
        let row = row.trim().parse().map_err(|_| syntax())?;
        let col = col.trim().parse().map_err(|_| syntax())?;
        Ok(Position { row, col })
    }
}

/// A unit step on the grid, or standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Right,
    Down,
    Left,
    Up,
    Stay,
}

impl Move {
    /// Neighbor enumeration order. Every search breaks ties by this order.
    pub const DIRECTIONS: [Move; 4] = [Move::Right, Move::Down, Move::Left, Move::Up];

    /// Row/column displacement.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Right => (0, 1),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Up => (-1, 0),
            Move::Stay => (0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

/// Static, rectangular maze. Indexed `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid);
        }
        if let Some((row, found)) = cells
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != cols)
        {
            return Err(MazeError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// A grid with no interior walls.
    pub fn open(rows: usize, cols: usize) -> Result<Self> {
        Self::new(vec![vec![Cell::Open; cols]; rows])
    }

    /// Parse an ASCII maze: `#` is a wall, `.` or space is open. The agent
    /// markers `P`, `G` and `F` are accepted as open cells so rendered frames
    /// read back in. Trailing empty lines are ignored; every other line is a
    /// row, including one made only of spaces.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let used = lines.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);

        let mut cells = Vec::with_capacity(used);
        for (row, line) in lines[..used].iter().enumerate() {
            let parsed = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' => Ok(Cell::Wall),
                    '.' | ' ' | 'P' | 'G' | 'F' => Ok(Cell::Open),
                    _ => Err(MazeError::UnknownCell { row, col, ch }),
                })
                .collect::<Result<Vec<_>>>()?;
            cells.push(parsed);
        }
        Self::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Open)
    }

    pub fn ensure_open(&self, pos: Position) -> Result<()> {
        if self.is_open(pos) {
            Ok(())
        } else {
            Err(MazeError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    pub fn open_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Open)
            .count()
    }

    /// Open cardinal neighbors, right, down, left, up.
    pub fn get_neighbors(&self, pos: &Position) -> Vec<Position> {
        Move::DIRECTIONS
            .iter()
            .map(|&mv| pos.step(mv))
            .filter(|&next| self.is_open(next))
            .collect()
    }

    /// Moves that keep `pos` on an open cell, in neighbor order.
    pub fn legal_moves(&self, pos: Position) -> Vec<Move> {
        Move::DIRECTIONS
            .into_iter()
            .filter(|&mv| self.is_open(pos.step(mv)))
            .collect()
    }

    /// Render the maze with agent glyphs drawn on top. Later marks win.
    pub fn render(&self, marks: &[(Position, char)]) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let here = Position::new(r as i32, c as i32);
                let glyph = marks
                    .iter()
                    .rev()
                    .find(|(p, _)| *p == here)
                    .map(|&(_, g)| g)
                    .unwrap_or(match cell {
                        Cell::Wall => '#',
                        Cell::Open => '.',
                    });
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}
