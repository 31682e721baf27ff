//! Day 4: paper rolls a forklift can reach.
//!
//! A roll is accessible when fewer than [`ACCESS_THRESHOLD`] of its eight
//! neighbours hold rolls. Part 2 keeps removing every accessible roll at once
//! until a pass finds none.

use crate::utils::grid::Grid;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

/// Neighbouring rolls at or above which a roll is boxed in.
pub const ACCESS_THRESHOLD: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["2025", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Roll,
    Empty,
}

impl Cell {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '@' => Some(Cell::Roll),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }

    fn is_roll(&self) -> bool {
        *self == Cell::Roll
    }
}

pub fn parse_floor(input: &str) -> anyhow::Result<Grid<Cell>> {
    Grid::parse_with(input, Cell::Empty, Cell::from_char)
}

/// Positions of rolls with fewer than `threshold` neighbouring rolls.
pub fn accessible(grid: &Grid<Cell>, threshold: usize) -> Vec<(usize, usize)> {
    grid.positions()
        .filter(|&(r, c)| grid.get(r, c).is_some_and(Cell::is_roll))
        .filter(|&(r, c)| grid.count_neighbours(r, c, Cell::is_roll) < threshold)
        .collect()
}

pub fn accessible_count(grid: &Grid<Cell>, threshold: usize) -> usize {
    accessible(grid, threshold).len()
}

/// Removes accessible rolls pass after pass and returns how many each pass took.
///
/// Every pass decides against the grid as it stood when the pass began.
/// The returned vector never contains a zero; an untouchable grid gives an
/// empty vector.
pub fn remove_accessible(grid: &mut Grid<Cell>, threshold: usize) -> Vec<usize> {
    let mut passes = Vec::new();
    loop {
        let removable = accessible(grid, threshold);
        if removable.is_empty() {
            break;
        }
        for &(r, c) in &removable {
            grid.set(r, c, Cell::Empty);
        }
        debug!(pass = passes.len() + 1, removed = removable.len(), "removal pass");
        passes.push(removable.len());
    }
    passes
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Cell>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_floor(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible_count(shared, ACCESS_THRESHOLD).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // part 2 mutates, work on a copy so part 1 can still run afterwards
        let mut grid = shared.clone();
        let removed: usize = remove_accessible(&mut grid, ACCESS_THRESHOLD).iter().sum();
        Ok(removed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "..@@.@@@@.\n@@@.@.@.@@\n@@@@@.@.@@\n@.@@@@..@.\n@@.@@@@.@@\n\
.@@@@@@@.@\n.@.@.@.@@@\n@.@@@.@@@@\n.@@@@@@@@.\n@.@.@@@.@.\n";

    fn floor(input: &str) -> Grid<Cell> {
        parse_floor(input).unwrap()
    }

    fn rolls(grid: &Grid<Cell>) -> usize {
        grid.positions()
            .filter(|&(r, c)| grid.get(r, c) == Some(&Cell::Roll))
            .count()
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
        // part 2 leaves the parsed grid alone
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn test_plus_shape_keeps_centre() {
        let grid = floor(".@.\n@@@\n.@.");
        let found = accessible(&grid, ACCESS_THRESHOLD);
        assert_eq!(found.len(), 4);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn test_full_block_is_never_accessible_below_zero_threshold() {
        let mut grid = floor("@@\n@@");
        assert_eq!(remove_accessible(&mut grid, 0), Vec::<usize>::new());
        assert_eq!(rolls(&grid), 4);
    }

    #[test]
    fn test_empty_floor_takes_no_passes() {
        let mut grid = floor("...\n...");
        assert!(remove_accessible(&mut grid, ACCESS_THRESHOLD).is_empty());
    }

    #[test]
    fn test_removal_is_simultaneous() {
        // a row of three: ends have 1 neighbour, middle has 2; threshold 2
        // takes only the ends first, then the now isolated middle
        let mut grid = floor("@@@");
        assert_eq!(remove_accessible(&mut grid, 2), vec![2, 1]);
    }

    #[test]
    fn test_unknown_character() {
        let err = Solver::parse("@.\n.#").unwrap_err();
        assert!(err.to_string().contains("unexpected character '#' at row 2, column 2"));
    }

    fn floors() -> impl Strategy<Value = Grid<Cell>> {
        (1usize..8, 1usize..8)
            .prop_flat_map(|(rows, cols)| {
                prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
            })
            .prop_map(|rows| {
                let text: Vec<String> = rows
                    .iter()
                    .map(|row| row.iter().map(|&b| if b { '@' } else { '.' }).collect())
                    .collect();
                floor(&text.join("\n"))
            })
    }

    proptest! {
        #[test]
        fn prop_single_pass_monotone_in_threshold(grid in floors(), threshold in 0usize..9) {
            prop_assert!(
                accessible_count(&grid, threshold) <= accessible_count(&grid, threshold + 1)
            );
        }

        #[test]
        fn prop_passes_account_for_every_removed_roll(grid in floors(), threshold in 0usize..9) {
            let before = rolls(&grid);
            let mut after = grid.clone();
            let passes = remove_accessible(&mut after, threshold);
            prop_assert!(passes.iter().all(|&n| n > 0));
            prop_assert_eq!(passes.iter().sum::<usize>(), before - rolls(&after));
            prop_assert_eq!(accessible_count(&after, threshold), 0);
        }
    }
}
