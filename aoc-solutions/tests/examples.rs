//! Every 2025 solver against its puzzle example, resolved through plugin discovery.

use aoc_solver::{RegistryBuilder, SolverRegistry};
use aoc_solutions as _;

struct Example {
    day: u8,
    input: &'static str,
    part1: &'static str,
    part2: &'static str,
}

const EXAMPLES: &[Example] = &[
    Example {
        day: 1,
        input: include_str!("../../inputs/2025/day01.txt"),
        part1: "3",
        part2: "6",
    },
    Example {
        day: 2,
        input: include_str!("../../inputs/2025/day02.txt"),
        part1: "1227775554",
        part2: "4174379265",
    },
    Example {
        day: 3,
        input: include_str!("../../inputs/2025/day03.txt"),
        part1: "357",
        part2: "3121910778619",
    },
    Example {
        day: 4,
        input: include_str!("../../inputs/2025/day04.txt"),
        part1: "13",
        part2: "43",
    },
    Example {
        day: 5,
        input: include_str!("../../inputs/2025/day05.txt"),
        part1: "3",
        part2: "14",
    },
    Example {
        day: 6,
        input: include_str!("../../inputs/2025/day06.txt"),
        part1: "4277556",
        part2: "3263827",
    },
];

fn registry_2025() -> SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2025)
        .expect("2025 solvers register without duplicates")
        .build()
}

#[test]
fn every_day_is_registered_with_two_parts() {
    let registry = registry_2025();
    let days: Vec<(u8, u8)> = registry.iter_info().map(|info| (info.day, info.parts)).collect();
    assert_eq!(days, (1..=6).map(|day| (day, 2)).collect::<Vec<_>>());
}

#[test]
fn examples_produce_expected_answers() {
    let registry = registry_2025();

    for example in EXAMPLES {
        let mut solver = registry
            .create_solver(2025, example.day, example.input)
            .unwrap_or_else(|e| panic!("day {} failed to parse: {}", example.day, e));

        for (part, expected) in [(1, example.part1), (2, example.part2)] {
            let result = solver
                .solve(part)
                .unwrap_or_else(|e| panic!("day {} part {} failed: {}", example.day, part, e));
            assert_eq!(
                result.answer, expected,
                "day {} part {}",
                example.day, part
            );
        }
    }
}

#[test]
fn parts_can_run_in_either_order() {
    let registry = registry_2025();

    for example in EXAMPLES {
        let mut solver = registry.create_solver(2025, example.day, example.input).unwrap();
        assert_eq!(solver.solve(2).unwrap().answer, example.part2, "day {}", example.day);
        assert_eq!(solver.solve(1).unwrap().answer, example.part1, "day {}", example.day);
    }
}

#[test]
fn part_three_is_out_of_range() {
    let registry = registry_2025();
    let mut solver = registry.create_solver(2025, 1, EXAMPLES[0].input).unwrap();
    assert!(solver.solve(3).is_err());
}

#[test]
fn tag_filter_selects_range_puzzles() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"ranges"))
        .unwrap()
        .build();
    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![2, 5]);
}
