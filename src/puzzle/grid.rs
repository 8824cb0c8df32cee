use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use crate::puzzle::generate::{generate_puzzle, generate_puzzle_with_solution};
use crate::puzzle::parse::parse_cells;
use crate::puzzle::{geometry, CellId, ParseGridError, Solution, Value, ValueSet, CELL_COUNT, WIDTH};

/// A 9×9 Sudoku grid, possibly partially filled
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Value>; CELL_COUNT],
}

impl Grid {
    /// Creates an empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Parses a grid from its 81-character encoding.
    ///
    /// Digits `1`-`9` are cell values and any other character is an empty
    /// cell. Fails if the input is not exactly 81 characters or if a value
    /// repeats within a row, column, or box.
    pub fn parse(text: &str) -> Result<Self, ParseGridError> {
        parse_cells(text).map(|cells| Self { cells })
    }

    /// Generates a puzzle with 180-degree rotational symmetry and exactly
    /// one solution
    pub fn generate() -> Self {
        generate_puzzle()
    }

    /// Generates a puzzle along with the solution it was carved from
    pub fn generate_with_solution() -> (Self, Solution) {
        generate_puzzle_with_solution()
    }

    /// Replaces this grid with the puzzle encoded in `text`.
    ///
    /// Returns `false` and leaves the grid untouched if the encoding is
    /// invalid.
    pub fn import(&mut self, text: &str) -> bool {
        match Self::parse(text) {
            Ok(grid) => {
                *self = grid;
                true
            }
            Err(_) => false,
        }
    }

    /// The 81-character encoding of this grid, with `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Some(value) => char::from(b'0' + value),
                None => '.',
            })
            .collect()
    }

    /// Clears every cell
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub fn value(&self, index: CellId) -> Option<Value> {
        self.cells[index]
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Sets or clears one cell.
    ///
    /// Clearing (`None`) always succeeds. Setting a value succeeds only if
    /// no other cell in the same row, column, or box holds it; on failure
    /// the grid is unchanged. A legal edit can still leave the puzzle
    /// unsolvable - only the group constraints are checked.
    pub fn edit(&mut self, value: Option<Value>, index: CellId) -> bool {
        if let Some(value) = value {
            if !self.can_place(value, index) {
                return false;
            }
        }
        self.cells[index] = value;
        true
    }

    /// Whether `value` may be placed at `index` without repeating within a
    /// row, column, or box. The cell itself is ignored, so re-affirming a
    /// cell's current value is always legal.
    pub fn can_place(&self, value: Value, index: CellId) -> bool {
        geometry::cell_groups(index).iter().all(|&group| {
            geometry::GROUPS[group]
                .iter()
                .all(|&other| other == index || self.cells[other] != Some(value))
        })
    }

    /// The values that may be placed at `index`: every value not present in
    /// the cell's row, column, or box, or the singleton of the cell's own
    /// value if it is filled. Out-of-range indices yield the empty set.
    pub fn candidates(&self, index: CellId) -> ValueSet {
        if index >= CELL_COUNT {
            return ValueSet::new();
        }
        if let Some(value) = self.cells[index] {
            let mut set = ValueSet::new();
            set.insert(value);
            return set;
        }
        let mut set = ValueSet::with_all();
        for &group in &geometry::cell_groups(index) {
            for &other in &geometry::GROUPS[group] {
                if let Some(value) = self.cells[other] {
                    set.remove(value);
                }
            }
        }
        set
    }

    /// The candidates of every cell, in cell order
    pub fn candidate_snapshot(&self) -> Vec<ValueSet> {
        (0..CELL_COUNT).map(|index| self.candidates(index)).collect()
    }

    pub(crate) fn set(&mut self, index: CellId, value: Option<Value>) {
        self.cells[index] = value;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(WIDTH) {
            for cell in row {
                match cell {
                    Some(value) => write!(f, "{} ", value)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::Grid;

    #[test]
    fn can_place_ignores_the_cell_itself() {
        let mut grid = Grid::new();
        assert!(grid.edit(Some(5), 0));
        assert!(grid.can_place(5, 0));
        assert!(!grid.can_place(5, 1));
        assert!(!grid.can_place(5, 9));
        assert!(!grid.can_place(5, 20));
        assert!(grid.can_place(5, 30));
    }

    #[test]
    fn edit_rejects_conflicts() {
        let mut grid = Grid::new();
        assert!(grid.edit(Some(5), 0));
        assert!(!grid.edit(Some(5), 8));
        assert_eq!(None, grid.value(8));
        assert!(grid.edit(None, 0));
        assert!(grid.edit(Some(5), 8));
    }

    #[test]
    fn candidates_of_filled_cell() {
        let mut grid = Grid::new();
        grid.edit(Some(7), 40);
        assert_eq!(Some(7), grid.candidates(40).single_value());
    }

    #[test]
    fn candidates_out_of_range() {
        assert!(Grid::new().candidates(81).is_empty());
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut grid = Grid::new();
        grid.edit(Some(9), 0);
        grid.edit(Some(1), 80);
        grid.reset();
        assert_eq!(Grid::new(), grid);
    }

    #[test]
    fn encode_round_trip() {
        let mut grid = Grid::new();
        grid.edit(Some(3), 10);
        let text = grid.encode();
        assert_eq!(81, text.len());
        assert_eq!(Ok(grid), Grid::parse(&text));
    }
}
