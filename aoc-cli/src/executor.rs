//! Sequential executor for running and checking solvers

use crate::answers::{AnswerBook, CheckOutcome};
use crate::config::{Config, RunMode};
use crate::error::{CliError, ExecutorError};
use crate::inputs::{self, InputStore};
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Result from a single part
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    /// Set on the first part run for a day; parsing happens once per day
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
    /// `None` when nothing is checked (ad hoc input)
    pub check: Option<CheckOutcome>,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

enum InputSource {
    Store {
        store: InputStore,
        answers: AnswerBook,
    },
    File(PathBuf),
}

/// Runs work items in (year, day, part) order and stops at the first failure
pub struct Executor {
    registry: SolverRegistry,
    source: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    ///
    /// An ad hoc input requires the filters to select exactly one solver.
    pub fn new(registry: SolverRegistry, config: Config) -> Result<Self, CliError> {
        let source = match config.mode {
            RunMode::SelfCheck { input_dir, answers } => InputSource::Store {
                store: InputStore::new(input_dir),
                answers,
            },
            RunMode::AdHoc { input } => InputSource::File(input),
        };

        let executor = Self {
            registry,
            source,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        };

        if let InputSource::File(path) = &executor.source {
            let selected = executor.collect_work_items().len();
            if selected != 1 {
                return Err(CliError::Config(format!(
                    "input {} needs filters selecting exactly one solver, {} selected",
                    path.display(),
                    selected
                )));
            }
        }
        Ok(executor)
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Stored inputs that are not on disk, empty for ad hoc runs
    pub fn missing_inputs(&self) -> Vec<PathBuf> {
        match &self.source {
            InputSource::Store { store, .. } => self
                .collect_work_items()
                .iter()
                .filter(|w| !store.contains(w.year, w.day))
                .map(|w| store.input_path(w.year, w.day))
                .collect(),
            InputSource::File(_) => Vec::new(),
        }
    }

    /// Execute all work items, handing each result to `on_result` as it is produced
    ///
    /// A check mismatch is reported to `on_result` before the run stops with
    /// [`ExecutorError::Mismatch`].
    pub fn execute<F>(&self, mut on_result: F) -> Result<Vec<SolverResult>, ExecutorError>
    where
        F: FnMut(&SolverResult),
    {
        let mut results = Vec::new();
        for work in self.collect_work_items() {
            let input = self.read_input(&work)?;
            let mut solver = self
                .registry
                .create_solver(work.year, work.day, &input)
                .map_err(|source| ExecutorError::Solver {
                    year: work.year,
                    day: work.day,
                    source,
                })?;
            debug!(year = work.year, day = work.day, "parsed input");

            let mut parse_duration = Some(solver.parse_duration());
            for part in work.parts.clone() {
                let mut result = solve_part(&mut *solver, part).map_err(|source| {
                    ExecutorError::Solver {
                        year: work.year,
                        day: work.day,
                        source,
                    }
                })?;
                result.parse_duration = parse_duration.take();
                result.check = self.check(&result);

                on_result(&result);
                if let Some(CheckOutcome::Mismatch { expected }) = &result.check {
                    return Err(ExecutorError::Mismatch {
                        year: result.year,
                        day: result.day,
                        part: result.part,
                        expected: expected.clone(),
                        actual: result.answer.clone(),
                    });
                }
                results.push(result);
            }
        }
        Ok(results)
    }

    fn read_input(&self, work: &WorkItem) -> Result<String, ExecutorError> {
        let input = match &self.source {
            InputSource::Store { store, .. } => store.get(work.year, work.day)?,
            InputSource::File(path) => inputs::read_input(path)?,
        };
        Ok(input)
    }

    fn check(&self, result: &SolverResult) -> Option<CheckOutcome> {
        let InputSource::Store { answers, .. } = &self.source else {
            return None;
        };
        let outcome = answers.check(result.year, result.day, result.part, &result.answer);
        match &outcome {
            CheckOutcome::Matched => {
                info!(year = result.year, day = result.day, part = result.part, "answer matches")
            }
            CheckOutcome::Unchecked => warn!(
                year = result.year,
                day = result.day,
                part = result.part,
                "no expected answer, result unchecked"
            ),
            CheckOutcome::Mismatch { .. } => {}
        }
        Some(outcome)
    }
}

/// Solve a single part
fn solve_part(
    solver: &mut dyn DynSolver,
    part: u8,
) -> Result<SolverResult, aoc_solver::SolverError> {
    let solved = solver.solve(part)?;
    Ok(SolverResult {
        year: solver.year(),
        day: solver.day(),
        part,
        solve_duration: solved.duration(),
        answer: solved.answer,
        parse_duration: None,
        check: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::RegistryBuilder;
    use std::fs;
    use tempfile::TempDir;

    const DAY1: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";
    const DAY5: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2025)
            .unwrap()
            .build()
    }

    fn write_input(dir: &TempDir, day: u8, content: &str) {
        let store = InputStore::new(dir.path().to_path_buf());
        fs::create_dir_all(dir.path().join("2025")).unwrap();
        fs::write(store.input_path(2025, day), content).unwrap();
    }

    fn self_check(dir: &TempDir, book: &str, day: Option<u8>, part: Option<u8>) -> Config {
        Config {
            year_filter: Some(2025),
            day_filter: day,
            part_filter: part,
            tags: Vec::new(),
            mode: RunMode::SelfCheck {
                input_dir: dir.path().to_path_buf(),
                answers: AnswerBook::from_toml(book).unwrap(),
            },
            quiet: false,
        }
    }

    #[test]
    fn test_work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let executor = Executor::new(registry(), self_check(&temp, "", None, Some(2))).unwrap();
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|w| w.parts == (2..=2)));
        assert_eq!(items.iter().map(|w| w.day).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);

        let executor = Executor::new(registry(), self_check(&temp, "", Some(4), None)).unwrap();
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2025,
                day: 4,
                parts: 1..=2
            }]
        );
    }

    #[test]
    fn test_matched_and_unchecked_results() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, DAY1);
        let book = "[[expected]]\nyear = 2025\nday = 1\npart1 = \"3\"\n";
        let executor = Executor::new(registry(), self_check(&temp, book, Some(1), None)).unwrap();

        let mut seen = 0;
        let results = executor.execute(|_| seen += 1).unwrap();
        assert_eq!(seen, 2);
        assert_eq!(results[0].answer, "3");
        assert_eq!(results[0].check, Some(CheckOutcome::Matched));
        assert!(results[0].parse_duration.is_some());
        assert_eq!(results[1].answer, "6");
        assert_eq!(results[1].check, Some(CheckOutcome::Unchecked));
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_mismatch_stops_the_run() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, DAY1);
        write_input(&temp, 5, DAY5);
        let book = "[[expected]]\nyear = 2025\nday = 1\npart1 = \"4\"\n";
        let config = self_check(&temp, book, None, None);
        let executor = Executor::new(registry(), config).unwrap();

        let mut reported = Vec::new();
        let err = executor.execute(|r| reported.push((r.day, r.part))).unwrap_err();
        assert_eq!(reported, vec![(1, 1)]);
        match err {
            ExecutorError::Mismatch {
                day,
                part,
                expected,
                actual,
                ..
            } => {
                assert_eq!((day, part), (1, 1));
                assert_eq!(expected, "4");
                assert_eq!(actual, "3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_input_fails_fast() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, DAY1);
        let executor = Executor::new(registry(), self_check(&temp, "", None, None)).unwrap();

        assert_eq!(executor.missing_inputs().len(), 5);
        let mut reported = 0;
        let err = executor.execute(|_| reported += 1).unwrap_err();
        assert_eq!(reported, 2);
        assert!(matches!(err, ExecutorError::Input(_)));
    }

    #[test]
    fn test_parse_error_names_the_puzzle() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, "L68\nQ30\n");
        let executor = Executor::new(registry(), self_check(&temp, "", Some(1), None)).unwrap();

        let err = executor.execute(|_| {}).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("2025/01: "), "{message}");
        assert!(message.contains("(line 2)"), "{message}");
    }

    #[test]
    fn test_ad_hoc_needs_exactly_one_solver() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("mine.txt");
        fs::write(&input, DAY5).unwrap();
        let ad_hoc = |day| Config {
            year_filter: None,
            day_filter: day,
            part_filter: None,
            tags: Vec::new(),
            mode: RunMode::AdHoc {
                input: input.clone(),
            },
            quiet: true,
        };

        assert!(matches!(
            Executor::new(registry(), ad_hoc(None)),
            Err(CliError::Config(_))
        ));

        let executor = Executor::new(registry(), ad_hoc(Some(5))).unwrap();
        assert!(executor.missing_inputs().is_empty());
        let results = executor.execute(|_| {}).unwrap();
        let answers: Vec<_> = results.iter().map(|r| r.answer.as_str()).collect();
        assert_eq!(answers, vec!["3", "14"]);
        assert!(results.iter().all(|r| r.check.is_none()));
    }
}
