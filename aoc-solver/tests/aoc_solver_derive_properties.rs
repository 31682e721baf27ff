//! Property-based tests for the AocSolver derive macro and solver instances

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverInstance,
};
use proptest::prelude::*;

fn parse_ints(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad int: {l}")))
        })
        .collect()
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_ints(input)
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 1 memoises a pass that part 2 reuses
#[derive(Debug)]
struct Memo {
    numbers: Vec<i64>,
    sorted: Option<Vec<i64>>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Median;

impl AocParser for Median {
    type SharedData<'a> = Memo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Memo {
            numbers: parse_ints(input)?,
            sorted: None,
        })
    }
}

fn sorted(shared: &mut Memo) -> &[i64] {
    shared.sorted.get_or_insert_with(|| {
        let mut v = shared.numbers.clone();
        v.sort_unstable();
        v
    })
}

impl PartSolver<1> for Median {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let v = sorted(shared);
        v.get(v.len() / 2)
            .map(i64::to_string)
            .ok_or_else(|| SolveError::failed("empty input"))
    }
}

impl PartSolver<2> for Median {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sorted(shared).iter().rev().take(1).map(i64::to_string).collect())
    }
}

fn join(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Solver::solve_part(N) is PartSolver<N>::solve
    #[test]
    fn solve_part_dispatches_to_part_solver(
        numbers in prop::collection::vec(-9i64..10, 1..6),
        part in 1u8..=2
    ) {
        let input = join(&numbers);
        let mut shared1 = SumProduct::parse(&input).unwrap();
        let mut shared2 = SumProduct::parse(&input).unwrap();

        let dispatched = <SumProduct as Solver>::solve_part(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut shared2),
            _ => <SumProduct as PartSolver<2>>::solve(&mut shared2),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }

    /// Parts outside 1..=max_parts are reported as not implemented
    #[test]
    fn invalid_part_returns_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2").unwrap();
        match <SumProduct as Solver>::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Memoised data from part 1 is visible to part 2 through the instance
    #[test]
    fn instance_shares_memoised_data(numbers in prop::collection::vec(-50i64..50, 1..10)) {
        let input = join(&numbers);
        let mut instance = SolverInstance::<Median>::new(2025, 1, &input).unwrap();

        let mut expected = numbers.clone();
        expected.sort_unstable();

        prop_assert_eq!(instance.solve(1).unwrap().answer, expected[expected.len() / 2].to_string());
        prop_assert_eq!(instance.solve(2).unwrap().answer, expected[expected.len() - 1].to_string());
    }
}

#[test]
fn instance_reports_metadata_and_range_errors() {
    let mut instance = SolverInstance::<SumProduct>::new(2025, 6, "2\n3").unwrap();
    assert_eq!(instance.year(), 2025);
    assert_eq!(instance.day(), 6);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_duration() >= chrono::TimeDelta::zero());

    let result = instance.solve(2).unwrap();
    assert_eq!(result.part, 2);
    assert_eq!(result.answer, "6");
    assert!(result.duration() >= chrono::TimeDelta::zero());

    assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn instance_propagates_parse_errors() {
    let err = SolverInstance::<SumProduct>::new(2025, 6, "2\nx")
        .err()
        .expect("parse should fail");
    assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("x")));
}
