use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::puzzle::{CellId, Grid, Solution, CELL_COUNT};
use crate::solve::search::{visit_solutions, CandidateOrder};

pub(crate) fn generate_puzzle() -> Grid {
    let (puzzle, _) = generate_puzzle_with_solution();
    puzzle
}

/// Carves a puzzle out of a random complete solution by clearing
/// symmetric pairs of cells, keeping each pair of holes only if the
/// puzzle still has exactly one solution.
///
/// The grid is uniquely solvable at every step of the carving loop, so
/// the result is guaranteed uniquely solvable, and operating on the pair
/// `(index, 80 - index)` keeps the holes rotationally symmetric.
pub(crate) fn generate_puzzle_with_solution() -> (Grid, Solution) {
    let solution = random_solution();
    debug!("Solution:\n{}", &solution);
    let mut grid = solution.clone();
    let mut order: Vec<CellId> = (0..CELL_COUNT).collect();
    order.shuffle(&mut thread_rng());
    while let Some(index) = order.pop() {
        let partner = CELL_COUNT - 1 - index;
        let snapshot = grid.clone();
        grid.set(index, None);
        grid.set(partner, None);
        if has_unique_solution(&mut grid) {
            debug!("Cleared cells {} and {}", index, partner);
        } else {
            grid = snapshot;
        }
        // the partner was decided together with this cell
        order.retain(|&i| i != partner);
    }
    let clues = (0..CELL_COUNT).filter(|&i| grid.value(i).is_some()).count();
    debug!("{} clues remain", clues);
    (grid, solution)
}

/// Completes the empty grid with the search engine in shuffled order,
/// accepting the first solution found
fn random_solution() -> Solution {
    let mut grid = Grid::new();
    let mut solution = None;
    visit_solutions(&mut grid, CandidateOrder::Shuffled, &mut |grid| {
        solution = Some(grid.clone());
        false
    });
    solution.expect("an empty grid has solutions")
}

fn has_unique_solution(grid: &mut Grid) -> bool {
    let mut count = 0;
    visit_solutions(grid, CandidateOrder::Sequential, &mut |_| {
        count += 1;
        count < 2
    });
    count == 1
}

#[cfg(test)]
mod tests {
    use crate::puzzle::generate::random_solution;

    #[test]
    fn random_solution_is_complete() {
        assert!(random_solution().is_complete());
    }
}
