//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code solver runner
///
/// Without INPUT every selected solver runs against its stored input and is
/// checked against the answer book. With INPUT the single selected solver
/// runs against that file and nothing is checked.
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run and self-check Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as `<year>/dayDD.txt`
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Expected-answer book (TOML)
    #[arg(long, default_value = "answers.toml")]
    pub answers: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run one solver against this file instead of self-checking
    pub input: Option<PathBuf>,
}
