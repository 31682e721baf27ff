//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Answer book could not be loaded
    #[error("Answer book error: {0}")]
    Answers(#[from] AnswerBookError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// A run stopped on its first failure
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors; the first one ends the run
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be read
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Parsing or solving failed
    #[error("{year}/{day:02}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// Answer differs from the answer book
    #[error("{year}/{day:02} Part {part}: expected {expected}, got {actual}")]
    Mismatch {
        year: u16,
        day: u8,
        part: u8,
        expected: String,
        actual: String,
    },
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected path
    #[error("no input for {year}/{day:02} at {}", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// IO error
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Answer book errors
#[derive(Error, Debug)]
pub enum AnswerBookError {
    /// IO error
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or wrong shape
    #[error("invalid answer book: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two entries for the same puzzle
    #[error("duplicate entry for {year}/{day:02}")]
    Duplicate { year: u16, day: u8 },
}
