use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::puzzle::{CellId, Grid, Value, CELL_COUNT};

/// The order in which a cell's candidates are tried
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum CandidateOrder {
    /// Ascending values; the same grid always searches the same way
    Sequential,
    /// Uniformly shuffled per cell, to reach a random solution first
    Shuffled,
}

/// Visits every completed assignment reachable from `grid`, depth-first.
///
/// Pre-filled cells are never revisited. The visitor receives each
/// completed grid; returning `false` abandons the entire search through
/// every outstanding branch, and that `false` is propagated here. The grid
/// is restored to its starting state before this returns.
pub(crate) fn visit_solutions<F>(grid: &mut Grid, order: CandidateOrder, visit: &mut F) -> bool
where
    F: FnMut(&Grid) -> bool,
{
    search_cell(grid, 0, order, visit)
}

fn search_cell<F>(grid: &mut Grid, mut index: CellId, order: CandidateOrder, visit: &mut F) -> bool
where
    F: FnMut(&Grid) -> bool,
{
    while index < CELL_COUNT && grid.value(index).is_some() {
        index += 1;
    }
    if index == CELL_COUNT {
        return visit(grid);
    }
    let mut candidates: Vec<Value> = grid.candidates(index).iter().collect();
    if order == CandidateOrder::Shuffled {
        candidates.shuffle(&mut thread_rng());
    }
    for value in candidates {
        debug!("Guessing with {} at cell {}", value, index);
        let mut placed = Placed::new(grid, index, value);
        if !search_cell(placed.grid(), index + 1, order, visit) {
            return false;
        }
    }
    true
}

/// A tentative placement, retracted on drop so that every exit path
/// backtracks
struct Placed<'a> {
    grid: &'a mut Grid,
    index: CellId,
}

impl<'a> Placed<'a> {
    fn new(grid: &'a mut Grid, index: CellId, value: Value) -> Self {
        grid.set(index, Some(value));
        Self { grid, index }
    }

    fn grid(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.grid.set(self.index, None);
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::Grid;
    use crate::solve::search::{visit_solutions, CandidateOrder};

    #[test]
    fn grid_restored_after_search() {
        let mut grid = Grid::new();
        grid.edit(Some(4), 0);
        let before = grid.clone();
        let mut count = 0;
        visit_solutions(&mut grid, CandidateOrder::Sequential, &mut |_| {
            count += 1;
            count < 3
        });
        assert_eq!(3, count);
        assert_eq!(before, grid);
    }

    #[test]
    fn early_stop_propagates() {
        let mut grid = Grid::new();
        let stopped = !visit_solutions(&mut grid, CandidateOrder::Sequential, &mut |_| false);
        assert!(stopped);
    }

    #[test]
    fn exhausted_search_returns_true() {
        // no value fits the last cell of row 0: 1-8 fill the row and its
        // column supplies the 9
        let mut text = String::from("12345678.");
        text.push_str("........9");
        text.push_str(&".".repeat(63));
        let mut grid = Grid::parse(&text).unwrap();
        let mut count = 0;
        let finished = visit_solutions(&mut grid, CandidateOrder::Sequential, &mut |_| {
            count += 1;
            true
        });
        assert!(finished);
        assert_eq!(0, count);
    }
}
