//! Day 3: battery banks and the largest k-digit joltage.
//!
//! The core is [`select_max_digits`], a greedy monotonic stack: keep the
//! selected digits in a buffer and, while a later digit is larger than the
//! buffer's tail and there are still enough digits left to refill it, drop
//! the tail.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Batteries turned on per bank in part 1.
pub const PAIR: usize = 2;
/// Batteries turned on per bank in part 2.
pub const DOZEN: usize = 12;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["2025", "greedy"])]
pub struct Solver;

/// Picks `k` digits from `digits`, keeping their order, so that the number
/// they spell is as large as possible.
///
/// Returns an empty selection when `k == 0` or fewer than `k` digits exist.
/// Equal digits are never swapped for a later copy, so the leftmost
/// occurrence wins ties.
pub fn select_max_digits(digits: &[u8], k: usize) -> Vec<u8> {
    let n = digits.len();
    if k == 0 || n < k {
        return Vec::new();
    }

    let mut stack: Vec<u8> = Vec::with_capacity(k);
    for (i, &digit) in digits.iter().enumerate() {
        // digits from here to the end, this one included
        let remaining = n - i;
        while let Some(&top) = stack.last() {
            if top < digit && stack.len() - 1 + remaining >= k {
                stack.pop();
            } else {
                break;
            }
        }
        if stack.len() < k {
            stack.push(digit);
        }
    }

    stack.truncate(k);
    stack
}

/// Place-value reading of decimal digits, most significant first.
///
/// `None` if the value does not fit in a `u64`.
pub fn digits_value(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u64::from(d))
    })
}

/// Largest `k`-digit joltage of a bank, 0 when `k == 0` or the bank is too short.
pub fn max_joltage(bank: &[u8], k: usize) -> Option<u64> {
    digits_value(&select_max_digits(bank, k))
}

/// Sum of [`max_joltage`] over all banks.
pub fn total_joltage(banks: &[Vec<u8>], k: usize) -> Result<u64, SolveError> {
    banks.iter().enumerate().try_fold(0u64, |total, (idx, bank)| {
        max_joltage(bank, k)
            .and_then(|joltage| total.checked_add(joltage))
            .ok_or_else(|| {
                SolveError::failed(format!("joltage overflow at bank {} with k = {}", idx + 1, k))
            })
    })
}

fn parse_bank(line: &str) -> anyhow::Result<Vec<u8>> {
    line.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| anyhow!("non-digit {:?} in bank '{}'", c, line))
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_bank(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, PAIR).map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, DOZEN).map(|total| total.to_string())
    }
}
