//! Puzzle inputs stored on disk

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-based store for puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the stored input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.exists() {
            return Err(InputError::Missing { year, day, path });
        }
        read_input(&path)
    }
}

/// Read a whole input file
pub fn read_input(path: &Path) -> Result<String, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}
