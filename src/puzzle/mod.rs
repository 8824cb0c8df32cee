//! Sudoku puzzles

pub use self::error::ParseGridError;
pub use self::grid::Grid;
pub use self::value_set::ValueSet;

pub mod error;
mod generate;
mod geometry;
mod grid;
mod parse;
mod value_set;

/// The width and height of the grid, and the number of values
pub const WIDTH: usize = 9;

/// The number of cells in the grid
pub const CELL_COUNT: usize = WIDTH * WIDTH;

pub type CellId = usize;
pub type Value = u8;
pub type Solution = Grid;
