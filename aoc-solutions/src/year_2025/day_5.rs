//! Day 5: fresh ingredient ids.

use crate::utils::range::{self, IdRange};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["2025", "ranges"])]
pub struct Solver;

/// Fresh-id ranges and the ids available for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub ranges: Vec<IdRange>,
    pub ids: Vec<i64>,
}

impl Inventory {
    pub fn is_fresh(&self, id: i64) -> bool {
        range::any_contains(&self.ranges, id)
    }

    pub fn fresh_count(&self) -> usize {
        self.ids.iter().filter(|&&id| self.is_fresh(id)).count()
    }

    /// How many distinct ids the ranges call fresh.
    pub fn fresh_coverage(&self) -> u64 {
        range::coverage(&self.ranges)
    }
}

/// Parses non-blank lines of a section, numbering them from `first_line`.
fn parse_section<T>(
    section: &str,
    first_line: usize,
    parse: impl Fn(&str) -> anyhow::Result<T>,
) -> anyhow::Result<Vec<T>> {
    section
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse(line).map_err(|e| anyhow!("(line {}) {:#}", first_line + idx, e)))
        .collect()
}

fn parse_inventory(input: &str) -> Result<Inventory, ParseError> {
    let normalized = input.replace("\r\n", "\n");
    let body = normalized.trim_end_matches('\n');
    let trimmed = body.trim_start_matches('\n');
    let ranges_first_line = body.len() - trimmed.len() + 1;
    let sections: Vec<&str> = trimmed.split("\n\n").collect();
    let (ranges_text, ids_text) = match sections.as_slice() {
        [ranges, ids] => (*ranges, *ids),
        [_] => {
            return Err(ParseError::MissingData(
                "expected a blank line between ranges and ids".to_string(),
            ));
        }
        more => {
            return Err(ParseError::InvalidFormat(format!(
                "expected 2 sections, found {}",
                more.len()
            )));
        }
    };

    let ids_first_line = ranges_first_line + ranges_text.lines().count() + 1;
    let ranges = parse_section(ranges_text, ranges_first_line, str::parse::<IdRange>)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    let ids = parse_section(ids_text, ids_first_line, |line| {
        line.trim()
            .parse::<i64>()
            .with_context(|| format!("invalid id '{}'", line.trim()))
    })
    .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    Ok(Inventory { ranges, ids })
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_inventory(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.fresh_count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.fresh_coverage().to_string())
    }
}
