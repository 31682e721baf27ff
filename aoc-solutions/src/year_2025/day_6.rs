//! Day 6: the cephalopod math worksheet.
//!
//! Problems sit side by side, separated by columns that are blank in every
//! row. The last row holds each problem's operator. Part 1 reads operands
//! along the rows, part 2 reads them down the columns, right to left.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["2025", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Product,
}

impl Operator {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Sum),
            '*' => Some(Operator::Product),
            _ => None,
        }
    }

    /// Checked fold of `operands`; `None` on overflow.
    pub fn apply(self, operands: &[u64]) -> Option<u64> {
        match self {
            Operator::Sum => operands.iter().try_fold(0u64, |acc, &n| acc.checked_add(n)),
            Operator::Product => operands.iter().try_fold(1u64, |acc, &n| acc.checked_mul(n)),
        }
    }
}

/// One problem: an inclusive column span and the operator symbol found under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorksheetGroup {
    pub start: usize,
    pub end: usize,
    pub symbol: char,
}

/// How operands are read out of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Digit runs along each row, rows top to bottom
    Horizontal,
    /// One number per column, columns right to left, digits top to bottom
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    /// Operand rows, padded with spaces to a common width
    rows: Vec<Vec<char>>,
    groups: Vec<WorksheetGroup>,
}

/// First `+` or `*` in the slice, else its first non-blank character.
fn find_operator(slice: &[char]) -> Option<char> {
    slice
        .iter()
        .copied()
        .find(|&ch| Operator::from_char(ch).is_some())
        .or_else(|| slice.iter().copied().find(|ch| !ch.is_whitespace()))
}

/// Maximal runs of columns holding something other than a space in some row.
fn column_groups(grid: &[Vec<char>], width: usize) -> Vec<(usize, usize)> {
    (0..width)
        .filter(|&col| grid.iter().any(|row| row[col] != ' '))
        .fold(Vec::new(), |mut spans: Vec<(usize, usize)>, col| {
            match spans.last_mut() {
                Some((_, end)) if *end + 1 == col => *end = col,
                _ => spans.push((col, col)),
            }
            spans
        })
}

fn digits_value(digits: impl IntoIterator<Item = char>) -> Option<u64> {
    digits.into_iter().try_fold(0u64, |acc, ch| {
        acc.checked_mul(10)?
            .checked_add(u64::from(ch.to_digit(10)?))
    })
}

impl Worksheet {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines: Vec<&str> = input.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();

        let groups = match rows.last() {
            Some(operator_row) => column_groups(&rows, width)
                .into_iter()
                .map(|(start, end)| {
                    let symbol = find_operator(&operator_row[start..=end]).ok_or_else(|| {
                        ParseError::InvalidFormat(format!(
                            "no operator found in group columns {}-{}",
                            start, end
                        ))
                    })?;
                    Ok(WorksheetGroup { start, end, symbol })
                })
                .collect::<Result<Vec<_>, ParseError>>()?,
            None => Vec::new(),
        };
        // only operand rows are kept
        rows.pop();

        debug!(groups = groups.len(), rows = rows.len(), width, "parsed worksheet");
        Ok(Self { rows, groups })
    }

    pub fn groups(&self) -> &[WorksheetGroup] {
        &self.groups
    }

    /// Operands of `group` in reading order. `None` if one overflows a `u64`.
    pub fn operands(&self, group: &WorksheetGroup, reading: Reading) -> Option<Vec<u64>> {
        match reading {
            Reading::Horizontal => self
                .rows
                .iter()
                .flat_map(|row| {
                    row[group.start..=group.end]
                        .iter()
                        .chunk_by(|ch| ch.is_ascii_digit())
                        .into_iter()
                        .filter(|(is_digit, _)| *is_digit)
                        .map(|(_, run)| digits_value(run.copied()))
                        .collect::<Vec<_>>()
                })
                .collect(),
            Reading::Vertical => (group.start..=group.end)
                .rev()
                .map(|col| {
                    self.rows
                        .iter()
                        .map(|row| row[col])
                        .filter(char::is_ascii_digit)
                        .collect::<Vec<_>>()
                })
                .filter(|digits| !digits.is_empty())
                .map(digits_value)
                .collect(),
        }
    }

    /// Value of a single problem. A problem without operands is worth 0.
    pub fn evaluate(&self, group: &WorksheetGroup, reading: Reading) -> Result<u64, SolveError> {
        let operands = self.operands(group, reading).ok_or_else(|| {
            SolveError::failed(format!(
                "operand overflow in group columns {}-{}",
                group.start, group.end
            ))
        })?;
        if operands.is_empty() {
            return Ok(0);
        }

        let operator = Operator::from_char(group.symbol).ok_or_else(|| {
            SolveError::failed(format!(
                "unknown operator '{}' in group columns {}-{}",
                group.symbol, group.start, group.end
            ))
        })?;
        operator.apply(&operands).ok_or_else(|| {
            SolveError::failed(format!(
                "arithmetic overflow in group columns {}-{}",
                group.start, group.end
            ))
        })
    }

    /// Sum of every problem's value.
    pub fn grand_total(&self, reading: Reading) -> Result<u64, SolveError> {
        self.groups.iter().try_fold(0u64, |total, group| {
            let value = self.evaluate(group, reading)?;
            total
                .checked_add(value)
                .ok_or_else(|| SolveError::failed("grand total overflow"))
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Worksheet::parse(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .grand_total(Reading::Horizontal)
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .grand_total(Reading::Vertical)
            .map(|total| total.to_string())
    }
}
