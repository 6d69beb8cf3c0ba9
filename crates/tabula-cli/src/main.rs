mod logging;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tabula_model::Model;
use tabula_simplex::{BranchStats, Solver};
use tabula_solver::{Solution, SolverConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dense simplex LP/MILP solver for JSON models")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a JSON model and print the solution
    Solve(SolveArgs),
    /// Parse and validate a JSON model, then print a summary
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("mode").args(["milp", "lp"])))]
struct SolveArgs {
    /// Path to the JSON model
    #[arg(long)]
    model: PathBuf,

    /// Force branch-and-bound even without integer variables
    #[arg(long)]
    milp: bool,

    /// Solve the LP relaxation, ignoring integer designations
    #[arg(long)]
    lp: bool,

    /// Tolerance band for every comparison against zero
    #[arg(long)]
    tolerance: Option<f64>,

    /// Pivot cap per simplex phase
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Branch-and-bound node cap
    #[arg(long)]
    max_nodes: Option<u32>,

    /// Round reported values to this many decimal places
    #[arg(long)]
    precision: Option<u32>,

    /// Report non-basic variables as 0
    #[arg(long)]
    full: bool,

    /// Output format for stdout
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Path to the JSON model
    #[arg(long)]
    model: PathBuf,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Mode {
    Auto,
    Lp,
    Milp,
}

#[derive(Debug, Clone, Serialize)]
struct StatsRow {
    branched: u64,
    solved: u64,
    pruned: u64,
    incumbent_updates: u64,
    duplicates_skipped: u64,
}

impl From<BranchStats> for StatsRow {
    fn from(stats: BranchStats) -> Self {
        Self {
            branched: stats.branched,
            solved: stats.solved,
            pruned: stats.pruned,
            incumbent_updates: stats.incumbent_updates,
            duplicates_skipped: stats.duplicates_skipped,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct SolveReport {
    #[serde(flatten)]
    solution: Solution,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_and_bound: Option<StatsRow>,
}

#[derive(Debug, Clone)]
struct ModelSummary {
    objective: String,
    op_type: &'static str,
    variables: usize,
    constraints: usize,
    rows: usize,
    integers: usize,
    binaries: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_from_env().map_err(|message| boxed_input_error(&message))?;
    let cli = Cli::parse();
    match cli.command {
        Command::Solve(args) => solve_command(args),
        Command::Check(args) => check_command(args),
    }
}

fn solve_command(args: SolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model(&args.model)?;
    let config = build_config(&args);
    let solver = Solver::with_config(model, config)?;

    let report = match resolve_mode(&args) {
        Mode::Lp => SolveReport {
            solution: solver.solve_lp(),
            branch_and_bound: None,
        },
        Mode::Milp => {
            let outcome = solver.solve_milp();
            SolveReport {
                solution: outcome.solution,
                branch_and_bound: Some(outcome.stats.into()),
            }
        }
        Mode::Auto if solver.model().has_integers() => {
            let outcome = solver.solve_milp();
            SolveReport {
                solution: outcome.solution,
                branch_and_bound: Some(outcome.stats.into()),
            }
        }
        Mode::Auto => SolveReport {
            solution: solver.solve_lp(),
            branch_and_bound: None,
        },
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_solution_table(&report),
    }
    Ok(())
}

fn check_command(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model(&args.model)?;
    model.validate()?;
    let summary = summarize_model(&model);
    println!(
        "{:<10} {:<6} {:>9} {:>11} {:>6} {:>8} {:>8}",
        "objective", "sense", "variables", "constraints", "rows", "integers", "binaries"
    );
    println!(
        "{:<10} {:<6} {:>9} {:>11} {:>6} {:>8} {:>8}",
        summary.objective,
        summary.op_type,
        summary.variables,
        summary.constraints,
        summary.rows,
        summary.integers,
        summary.binaries,
    );
    Ok(())
}

fn load_model(path: &Path) -> Result<Model, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path).map_err(|err| {
        boxed_input_error(&format!("Failed to read {}: {err}", path.display()))
    })?;
    let model = serde_json::from_str(&text).map_err(|err| {
        boxed_input_error(&format!("Failed to parse {}: {err}", path.display()))
    })?;
    Ok(model)
}

fn build_config(args: &SolveArgs) -> SolverConfig {
    SolverConfig {
        tolerance: args.tolerance,
        max_iterations: args.max_iterations,
        max_nodes: args.max_nodes,
        precision: args.precision,
        include_zero_values: args.full.then_some(true),
    }
}

fn resolve_mode(args: &SolveArgs) -> Mode {
    if args.lp {
        Mode::Lp
    } else if args.milp {
        Mode::Milp
    } else {
        Mode::Auto
    }
}

fn summarize_model(model: &Model) -> ModelSummary {
    let rows = model
        .effective_constraints()
        .values()
        .map(|bounds| usize::from(bounds.min.is_some()) + usize::from(bounds.max.is_some()))
        .sum();
    ModelSummary {
        objective: model.optimize.clone(),
        op_type: model.op_type.as_str(),
        variables: model.num_variables(),
        constraints: model.num_constraints(),
        rows,
        integers: model.ints.len(),
        binaries: model.binaries.len(),
    }
}

fn format_result(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "-".to_string()
    }
}

fn print_solution_table(report: &SolveReport) {
    let solution = &report.solution;
    println!(
        "{:<16} {:<9} {:>16} {:>10} {:>8}",
        "status", "feasible", "result", "iterations", "nodes"
    );
    println!(
        "{:<16} {:<9} {:>16} {:>10} {:>8}",
        solution.status_string(),
        solution.feasible,
        format_result(solution.result),
        solution.iterations,
        solution.nodes,
    );

    if !solution.values.is_empty() {
        println!();
        println!("{:<24} {:>16}", "variable", "value");
        for (name, value) in &solution.values {
            println!("{:<24} {:>16}", name, value);
        }
    }

    if let Some(stats) = &report.branch_and_bound {
        println!();
        println!(
            "{:>9} {:>7} {:>7} {:>10} {:>11}",
            "branched", "solved", "pruned", "incumbents", "duplicates"
        );
        println!(
            "{:>9} {:>7} {:>7} {:>10} {:>11}",
            stats.branched,
            stats.solved,
            stats.pruned,
            stats.incumbent_updates,
            stats.duplicates_skipped,
        );
    }
}

fn boxed_input_error(message: &str) -> Box<dyn std::error::Error> {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        message.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, Mode, build_config, format_result, resolve_mode, summarize_model};
    use clap::Parser;
    use tabula_model::{ConstraintBounds, Model, Variable};

    fn parse_solve(args: &[&str]) -> super::SolveArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Solve(args) => args,
            Command::Check(_) => panic!("expected solve"),
        }
    }

    #[test]
    fn solve_flags_map_onto_config() {
        let args = parse_solve(&[
            "tabula",
            "solve",
            "--model",
            "m.json",
            "--tolerance",
            "0.0001",
            "--max-nodes",
            "50",
            "--precision",
            "3",
            "--full",
        ]);
        let config = build_config(&args);
        assert_eq!(config.tolerance, Some(0.0001));
        assert_eq!(config.max_nodes, Some(50));
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.precision, Some(3));
        assert!(config.include_zero_values());
        assert_eq!(resolve_mode(&args), Mode::Auto);
    }

    #[test]
    fn mode_flags_conflict() {
        let args = parse_solve(&["tabula", "solve", "--model", "m.json", "--lp"]);
        assert_eq!(resolve_mode(&args), Mode::Lp);
        assert!(!build_config(&args).include_zero_values());
        assert!(
            Cli::try_parse_from(["tabula", "solve", "--model", "m.json", "--lp", "--milp"])
                .is_err()
        );
    }

    #[test]
    fn summary_counts_promoted_rows() {
        let mut model = Model::maximize("profit");
        model
            .add_variable(
                "x",
                Variable::new()
                    .with_coefficient("profit", 1.0)
                    .with_max(3.0),
            )
            .unwrap();
        model
            .add_variable("y", Variable::new().with_coefficient("profit", 1.0))
            .unwrap();
        model
            .add_constraint("mix", ConstraintBounds::between(1.0, 4.0))
            .unwrap();
        model.mark_binary("y").unwrap();

        let summary = summarize_model(&model);
        assert_eq!(summary.op_type, "max");
        assert_eq!(summary.variables, 2);
        assert_eq!(summary.constraints, 1);
        // mix (2 sides) + x <= 3 + y <= 1
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.binaries, 1);
    }

    #[test]
    fn non_finite_results_render_as_dash() {
        assert_eq!(format_result(f64::NEG_INFINITY), "-");
        assert_eq!(format_result(7.5), "7.5");
    }
}
