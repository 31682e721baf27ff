//! AOC CLI - Command-line interface for running and self-checking Advent of Code solvers

mod answers;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;
use tracing::info;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let quiet = config.quiet;
    let ad_hoc = config.is_ad_hoc();

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Fail before running anything when stored inputs are absent
    let missing = executor.missing_inputs();
    if !missing.is_empty() {
        return Err(error::CliError::Config(format!(
            "missing {} input file(s): {}",
            missing.len(),
            missing.iter().map(|p| p.display()).join(", ")
        )));
    }

    if !quiet {
        let mode = if ad_hoc { "ad hoc" } else { "self-check" };
        println!("Running {} solver(s) ({})...", work_items.len(), mode);
    }
    info!(solvers = work_items.len(), ad_hoc, "starting run");

    let formatter = OutputFormatter::new(quiet);
    let results = executor.execute(|result| formatter.print_result(result))?;
    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
