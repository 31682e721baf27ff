//! Configuration resolution from CLI args

use crate::answers::AnswerBook;
use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Where inputs come from and whether answers are checked
pub enum RunMode {
    /// Stored inputs, every answer compared with the book
    SelfCheck {
        input_dir: PathBuf,
        answers: AnswerBook,
    },
    /// One solver against one file, no checking
    AdHoc { input: PathBuf },
}

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    pub mode: RunMode,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, loading the answer book in self-check mode
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = match args.input {
            Some(input) => {
                let input = expand_tilde(&input);
                if !input.is_file() {
                    return Err(CliError::Config(format!(
                        "input file {} does not exist",
                        input.display()
                    )));
                }
                RunMode::AdHoc { input }
            }
            None => RunMode::SelfCheck {
                input_dir: expand_tilde(&args.input_dir),
                answers: AnswerBook::load(&expand_tilde(&args.answers))?,
            },
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            mode,
            quiet: args.quiet,
        })
    }

    pub fn is_ad_hoc(&self) -> bool {
        matches!(self.mode, RunMode::AdHoc { .. })
    }
}

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
