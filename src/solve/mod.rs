//! Solve Sudoku puzzles

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::puzzle::{CellId, Grid, Solution, Value, CELL_COUNT, WIDTH};

use self::search::CandidateOrder;

pub(crate) mod search;

/// Solves a grid in place
pub struct Solver<'a> {
    grid: &'a mut Grid,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }

    /// Finds the first solution in deterministic order.
    ///
    /// On success the live grid is left holding the solution. On failure
    /// the grid is unchanged and `None` is returned; an unsolvable grid is
    /// an expected outcome, not an error.
    pub fn solve(&mut self) -> Option<Solution> {
        info!("Begin backtracking");
        let solution = first_solution(self.grid, CandidateOrder::Sequential)?;
        *self.grid = solution.clone();
        Some(solution)
    }

    /// Reveals one cell from the solution of the current grid.
    ///
    /// Solves transiently, picks one cell at random among those differing
    /// from the solution, and commits it. Returns `None` if the grid is
    /// unsolvable or already complete.
    pub fn hint(&mut self) -> Option<Hint> {
        let solution = first_solution(self.grid, CandidateOrder::Sequential)?;
        let differing: Vec<CellId> = (0..CELL_COUNT)
            .filter(|&index| self.grid.value(index) != solution.value(index))
            .collect();
        let &index = differing.choose(&mut thread_rng())?;
        let value = solution.value(index).expect("solutions have no empty cells");
        self.grid.set(index, Some(value));
        Some(Hint {
            row: index / WIDTH,
            col: index % WIDTH,
            value,
        })
    }

    /// Visits every solution of the current grid in deterministic order.
    ///
    /// The visitor returns whether to continue; returning `false` stops
    /// the search immediately. The grid is left as found.
    pub fn for_each_solution<F>(&mut self, mut visit: F)
    where
        F: FnMut(&Grid) -> bool,
    {
        search::visit_solutions(self.grid, CandidateOrder::Sequential, &mut visit);
    }

    /// Counts solutions, giving up the instant a second one is found
    pub fn count_solutions(&mut self) -> SolutionCount {
        let mut first = None;
        let mut count = 0;
        search::visit_solutions(self.grid, CandidateOrder::Sequential, &mut |solution| {
            count += 1;
            if count == 1 {
                first = Some(solution.clone());
            }
            count < 2
        });
        match first {
            None => SolutionCount::None,
            Some(solution) if count == 1 => SolutionCount::One(solution),
            Some(_) => SolutionCount::Multiple,
        }
    }
}

fn first_solution(grid: &mut Grid, order: CandidateOrder) -> Option<Solution> {
    let mut solution = None;
    search::visit_solutions(grid, order, &mut |grid| {
        solution = Some(grid.clone());
        false
    });
    solution
}

/// How many solutions a grid has, up to two
#[derive(Debug, PartialEq, Eq)]
pub enum SolutionCount {
    /// The grid cannot be completed - there may be an error in the puzzle
    None,
    /// The grid has exactly one solution, as a proper puzzle should
    One(Solution),
    /// More than one solution exists - this is not a proper puzzle
    Multiple,
}

impl SolutionCount {
    pub fn is_unique(&self) -> bool {
        matches!(self, SolutionCount::One(_))
    }
}

/// One cell revealed from a puzzle's solution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub row: usize,
    pub col: usize,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use crate::puzzle::Grid;
    use crate::solve::{SolutionCount, Solver};

    #[test]
    fn empty_grid_has_many_solutions() {
        let mut grid = Grid::new();
        assert_eq!(SolutionCount::Multiple, Solver::new(&mut grid).count_solutions());
        assert_eq!(Grid::new(), grid);
    }

    #[test]
    fn complete_grid_counts_itself() {
        let mut grid = Grid::new();
        let solution = Solver::new(&mut grid).solve().unwrap();
        assert_eq!(solution, grid);
        match Solver::new(&mut grid).count_solutions() {
            SolutionCount::One(found) => assert_eq!(solution, found),
            other => panic!("expected one solution, got {:?}", other),
        }
    }
}
