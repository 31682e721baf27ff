//! Helpers shared by several puzzles.

pub mod grid;
pub mod range;
