//! Day 2: gift shop ids made of a repeated digit pattern.

use crate::utils::range::IdRange;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["2025", "ranges"])]
pub struct Solver;

/// How many times the pattern must repeat for an id to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeats {
    Exactly(usize),
    AtLeast(usize),
}

/// Whether `digits` is one block repeated `n` times, for some `n` allowed by `repeats`.
pub fn is_repeated_pattern(digits: &[u8], repeats: Repeats) -> bool {
    let len = digits.len();
    if len == 0 {
        return false;
    }
    let counts = match repeats {
        Repeats::Exactly(n) => n..=n,
        Repeats::AtLeast(n) => n..=len,
    };

    counts
        .filter(|&n| n >= 2 && len % n == 0)
        .any(|n| {
            let block = len / n;
            digits.chunks(block).all(|chunk| chunk == &digits[..block])
        })
}

/// Sum of every id in `ranges` whose decimal form repeats a pattern.
///
/// Negative ids are never invalid. Overflow of the total is a [`SolveError`]
/// naming the range where it happened.
pub fn sum_invalid(ranges: &[IdRange], repeats: Repeats) -> Result<u64, SolveError> {
    ranges.iter().try_fold(0u64, |total, range| {
        range
            .ids()
            .filter(|&id| id >= 0 && is_repeated_pattern(id.to_string().as_bytes(), repeats))
            .try_fold(total, |total, id| total.checked_add(id as u64))
            .ok_or_else(|| {
                SolveError::failed(format!("invalid-id sum overflow in range {}", range))
            })
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ranges = input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .enumerate()
            .map(|(idx, part)| {
                part.parse::<IdRange>()
                    .map_err(|e| anyhow!("(range {}) {:#}", idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if ranges.is_empty() {
            return Err(ParseError::MissingData("no id ranges".to_string()));
        }
        Ok(ranges)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_invalid(shared, Repeats::Exactly(2)).map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_invalid(shared, Repeats::AtLeast(2)).map(|total| total.to_string())
    }
}
