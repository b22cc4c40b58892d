use crate::error::Result;
use crate::grid::{Grid, Position};

/// The built-in 15x20 layout.
pub const CLASSIC_LAYOUT: &str = "\
####################
#........##........#
#.##.###.##.###.##.#
#..................#
#.##.#.######.#.##.#
#....#...##...#....#
####.###.##.###.####
#..................#
####.###.##.###.####
#....#...##...#....#
#.##.#.######.#.##.#
#..................#
#.##.###.##.###.##.#
#........##........#
####################
";

pub const CLASSIC_EVADER_START: Position = Position::new(1, 1);
pub const CLASSIC_PURSUER_START: Position = Position::new(13, 18);
pub const CLASSIC_GOAL: Position = Position::new(13, 1);

pub fn classic() -> Result<Grid> {
    Grid::from_ascii(CLASSIC_LAYOUT)
}

/// Read a maze from an ASCII file in the format accepted by [`Grid::from_ascii`].
pub fn load(path: &std::path::Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path)?;
    Grid::from_ascii(&text)
}
