#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use itertools::Itertools;

use doku::puzzle::Grid;
use doku::solve::{SolutionCount, Solver};

use crate::options::{Options, Source};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    match options.source() {
        Source::Puzzle(text) => start_puzzle(&options, text)?,
        &Source::Generate { count } => start_generate(count, options.solve()),
    }
    Ok(())
}

fn start_puzzle(options: &Options, text: &str) -> Result<()> {
    let mut grid = Grid::parse(text)?;
    print!("{}", grid);
    if options.candidates() {
        print_candidates(&grid);
    }
    if options.count_solutions() {
        let mut scratch = grid.clone();
        let msg = match Solver::new(&mut scratch).count_solutions() {
            SolutionCount::None => "Puzzle is not solvable",
            SolutionCount::One(_) => "Puzzle has exactly one solution",
            SolutionCount::Multiple => "Puzzle has multiple solutions",
        };
        println!("{}", msg);
    }
    if options.hint() {
        match Solver::new(&mut grid).hint() {
            Some(hint) => println!(
                "Hint: place {} at row {}, column {}",
                hint.value,
                hint.row + 1,
                hint.col + 1
            ),
            None => println!("No hint available"),
        }
    }
    if options.solve() {
        match Solver::new(&mut grid).solve() {
            Some(solution) => {
                print!("{}", solution);
                println!("{}", solution.encode());
            }
            None => println!("Puzzle is not solvable"),
        }
    }
    Ok(())
}

fn start_generate(count: u32, solve: bool) {
    for i in 0..count {
        println!("Generating puzzle {}/{}", i + 1, count);
        let (puzzle, solution) = Grid::generate_with_solution();
        print!("{}", puzzle);
        println!("{}", puzzle.encode());
        if solve {
            print!("{}", solution);
        }
    }
}

fn print_candidates(grid: &Grid) {
    for (index, candidates) in grid.candidate_snapshot().iter().enumerate() {
        println!(
            "{:>2}: {}",
            index,
            candidates.iter().map(|value| value.to_string()).join(" ")
        );
    }
}
