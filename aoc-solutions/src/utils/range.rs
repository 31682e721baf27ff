//! Inclusive integer id ranges: parsing, membership and interval merging.

use anyhow::{Context, anyhow};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// An inclusive `start..=end` range of ids.
///
/// `start <= end` is expected but not enforced; a reversed range simply
/// contains nothing and covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdRange {
    pub start: i64,
    pub end: i64,
}

impl IdRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.start <= id && id <= self.end
    }

    /// Number of ids in the range, 0 when reversed.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            self.end.abs_diff(self.start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parses `start-end`.
///
/// A single leading `-` is dropped before splitting, so `-3-5` reads as
/// `3-5`; the separator is the first `-` after that. A negative end such as
/// `3--5` is rejected.
impl FromStr for IdRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('-').unwrap_or(trimmed);
        let (start, end) = body
            .split_once('-')
            .ok_or_else(|| anyhow!("range '{}' is missing a '-' separator", trimmed))?;
        if end.starts_with('-') {
            return Err(anyhow!("range '{}' has a negative end", trimmed));
        }

        let start = start
            .parse()
            .with_context(|| format!("invalid range start in '{}'", trimmed))?;
        let end = end
            .parse()
            .with_context(|| format!("invalid range end in '{}'", trimmed))?;

        Ok(Self { start, end })
    }
}

/// True when `id` falls in at least one of `ranges`.
///
/// Plain linear scan, so ranges may be unsorted, overlapping or repeated.
pub fn any_contains(ranges: &[IdRange], id: i64) -> bool {
    ranges.iter().any(|r| r.contains(id))
}

/// Coalesces overlapping or adjacent ranges into sorted, disjoint spans.
///
/// Two spans stay separate only if at least one id lies between them.
/// Reversed (empty) ranges are dropped.
pub fn merge(ranges: &[IdRange]) -> Vec<IdRange> {
    ranges
        .iter()
        .filter(|r| !r.is_empty())
        .sorted()
        .fold(Vec::new(), |mut merged: Vec<IdRange>, &range| {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
            merged
        })
}

/// Count of distinct ids covered by any of `ranges`.
pub fn coverage(ranges: &[IdRange]) -> u64 {
    merge(ranges).iter().map(IdRange::len).sum()
}
