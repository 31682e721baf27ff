//! Expected-answer book used for self-checking.
//!
//! ```toml
//! [[expected]]
//! year = 2025
//! day = 1
//! part1 = "3"
//! part2 = "6"
//! ```
//!
//! Either part may be left out; an absent answer leaves that part unchecked.

use crate::error::AnswerBookError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AnswerBook {
    #[serde(default)]
    expected: Vec<ExpectedAnswers>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExpectedAnswers {
    pub year: u16,
    pub day: u8,
    #[serde(default)]
    pub part1: Option<String>,
    #[serde(default)]
    pub part2: Option<String>,
}

/// Result of comparing an answer with the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Matched,
    Mismatch { expected: String },
    /// No book entry for this part
    Unchecked,
}

impl AnswerBook {
    /// Parse a book from TOML text, rejecting duplicate puzzles
    pub fn from_toml(text: &str) -> Result<Self, AnswerBookError> {
        let book: AnswerBook = toml::from_str(text)?;

        let mut seen = BTreeSet::new();
        for entry in &book.expected {
            if !seen.insert((entry.year, entry.day)) {
                return Err(AnswerBookError::Duplicate {
                    year: entry.year,
                    day: entry.day,
                });
            }
        }
        Ok(book)
    }

    pub fn load(path: &Path) -> Result<Self, AnswerBookError> {
        let text = fs::read_to_string(path).map_err(|source| AnswerBookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Expected answer for a part, if the book has one
    pub fn expected(&self, year: u16, day: u8, part: u8) -> Option<&str> {
        let entry = self
            .expected
            .iter()
            .find(|e| e.year == year && e.day == day)?;
        match part {
            1 => entry.part1.as_deref(),
            2 => entry.part2.as_deref(),
            _ => None,
        }
    }

    pub fn check(&self, year: u16, day: u8, part: u8, actual: &str) -> CheckOutcome {
        match self.expected(year, day, part) {
            Some(expected) if expected == actual => CheckOutcome::Matched,
            Some(expected) => CheckOutcome::Mismatch {
                expected: expected.to_string(),
            },
            None => CheckOutcome::Unchecked,
        }
    }
}
