//! Day 1: safe dial rotations.

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Positions on the dial ring.
pub const DIAL_SIZE: u64 = 100;
/// Where the dial points before the first rotation.
pub const DIAL_START: u64 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["2025", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub distance: u64,
}

impl Rotation {
    /// Parses `L68` / `r14`; the direction letter is case-insensitive.
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let mut chars = line.chars();
        let direction = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('L') => Direction::Left,
            Some('R') => Direction::Right,
            Some(other) => return Err(anyhow!("invalid rotation direction '{}'", other)),
            None => return Err(anyhow!("empty rotation")),
        };
        let distance = chars
            .as_str()
            .parse()
            .with_context(|| format!("invalid rotation distance in '{}'", line))?;

        Ok(Self {
            direction,
            distance,
        })
    }
}

/// A ring of `size` positions with a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: u64,
    size: u64,
}

impl Dial {
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn new(position: u64, size: u64) -> Self {
        assert!(size > 0, "dial size must be positive");
        Self {
            position: position % size,
            size,
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Clicks of `rotation` that leave the dial pointing at 0, counting
    /// intermediate clicks as well as the last one.
    ///
    /// `base` is the first click (1-indexed) that reaches 0; after it, every
    /// `size` further clicks reach 0 again.
    pub fn zero_hits(&self, rotation: Rotation) -> u64 {
        let base = match rotation.direction {
            Direction::Right => (self.size - self.position) % self.size,
            Direction::Left => self.position % self.size,
        };
        let base = if base == 0 { self.size } else { base };

        if rotation.distance >= base {
            1 + (rotation.distance - base) / self.size
        } else {
            0
        }
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        let step = rotation.distance % self.size;
        self.position = match rotation.direction {
            Direction::Right => (self.position + step) % self.size,
            Direction::Left => (self.position + self.size - step) % self.size,
        };
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(DIAL_START, DIAL_SIZE)
    }
}

/// Both zero counters for a sequence of rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZeroCounts {
    /// Rotations that end on 0
    pub landed: u64,
    /// Individual clicks that reach 0
    pub clicked: u64,
}

pub fn count_zeros(mut dial: Dial, rotations: &[Rotation]) -> ZeroCounts {
    rotations
        .iter()
        .fold(ZeroCounts::default(), |mut counts, &rotation| {
            counts.clicked += dial.zero_hits(rotation);
            dial.rotate(rotation);
            if dial.position() == 0 {
                counts.landed += 1;
            }
            counts
        })
}

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<Rotation>,
    counts: Option<ZeroCounts>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                Rotation::parse(line).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|rotations| SharedData {
                rotations,
                counts: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).landed.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).clicked.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> ZeroCounts {
    *shared
        .counts
        .get_or_insert_with(|| count_zeros(Dial::default(), &shared.rotations))
}
