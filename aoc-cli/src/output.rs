//! Output formatting for solver results

use crate::answers::CheckOutcome;
use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            println!("{}", result.answer);
        } else {
            println!("{}", format_result(result));
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let count = |wanted: fn(&Option<CheckOutcome>) -> bool| {
            results.iter().filter(|r| wanted(&r.check)).count()
        };
        let matched = count(|c| matches!(c, Some(CheckOutcome::Matched)));
        let unchecked = count(|c| matches!(c, Some(CheckOutcome::Unchecked)));

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} run, {} matched, {} unchecked",
            results.len(),
            matched,
            unchecked
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// `2025/01 Part 1: 3 (parse: 12µs, solve: 3µs) ✓`
pub fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    let check = result
        .check
        .as_ref()
        .map(|outcome| format!(" {}", format_check(outcome)))
        .unwrap_or_default();

    format!(
        "{}: {} ({}solve: {}){}",
        prefix,
        result.answer,
        parse_timing,
        format_duration(result.solve_duration),
        check
    )
}

fn format_check(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Matched => "✓".to_string(),
        CheckOutcome::Mismatch { expected } => format!("✗ (expected {})", expected),
        CheckOutcome::Unchecked => "? (unchecked)".to_string(),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
