//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution derives `AocSolver` (part dispatch) and `AutoRegisterSolver`
//! (plugin registration), so linking this crate is enough for a
//! `RegistryBuilder::register_all_plugins` call to find every puzzle.

pub mod utils;
pub mod year_2025;
