//! Advent of Code Solver Library
//!
//! A small framework for daily puzzle solvers. Each solver parses its input
//! once into shared data, then answers one or more parts against it.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] ties the parts together (usually via `#[derive(AocSolver)]`)
//! - [`SolverInstance`] / [`DynSolver`] hold parsed input behind a uniform,
//!   timed interface
//! - [`RegistryBuilder`] / [`SolverRegistry`] map (year, day) to solvers,
//!   either registered by hand or discovered from `#[derive(AutoRegisterSolver)]`
//!   plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {line}")))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver(&Calories, 2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive `&mut SharedData`, so an expensive pass can be stored by
//! part 1 and reused by part 2 (memoise with `Option::get_or_insert_with`).

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code generated from `#[derive(AutoRegisterSolver)]`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
