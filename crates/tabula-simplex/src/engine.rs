//! Two-phase simplex engine.

use std::collections::BTreeMap;
use std::time::Instant;

use tabula_model::{Model, OpType};
use tabula_solver::{Solution, SolverConfig, SolverStatus};
use tracing::{debug, trace, warn};

use crate::phase::{Step, select_phase_one, select_phase_two};
use crate::tableau::Tableau;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseOutcome {
    Converged,
    Unbounded,
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
struct PhaseReport {
    outcome: PhaseOutcome,
    iterations: u32,
}

fn run_phase(
    tableau: &mut Tableau,
    phase: &'static str,
    max_iterations: u32,
    select: impl Fn(&Tableau) -> Step,
) -> PhaseReport {
    let mut iterations = 0;
    while iterations < max_iterations {
        match select(tableau) {
            Step::Done => {
                return PhaseReport {
                    outcome: PhaseOutcome::Converged,
                    iterations,
                };
            }
            Step::Unbounded => {
                return PhaseReport {
                    outcome: PhaseOutcome::Unbounded,
                    iterations,
                };
            }
            Step::Pivot { row, col } => {
                tableau.pivot(row, col);
                iterations += 1;
                trace!(
                    component = "simplex",
                    operation = "pivot",
                    phase,
                    row,
                    col,
                    iteration = iterations,
                    "Pivoted tableau"
                );
            }
        }
    }

    // The cap may land exactly on a terminal state.
    let outcome = match select(tableau) {
        Step::Done => PhaseOutcome::Converged,
        Step::Unbounded => PhaseOutcome::Unbounded,
        Step::Pivot { .. } => {
            warn!(
                component = "simplex",
                operation = phase,
                status = "iteration_limit",
                max_iterations,
                "Phase stopped at its iteration cap; returning best-effort state"
            );
            PhaseOutcome::Exhausted
        }
    };
    PhaseReport {
        outcome,
        iterations,
    }
}

/// Solve the LP relaxation of `model` with default settings.
///
/// Integer designations are ignored.
pub fn solve(model: &Model) -> Solution {
    solve_with_config(model, &SolverConfig::default())
}

/// Solve the LP relaxation of `model`.
///
/// Runs Phase 1 then Phase 2, each capped at `max_iterations` pivots. A
/// capped phase is not an error: the state reached is reported with status
/// [`SolverStatus::IterationLimit`], and `feasible` is computed as usual.
pub fn solve_with_config(model: &Model, config: &SolverConfig) -> Solution {
    let started = Instant::now();
    let tolerance = config.tolerance();
    let max_iterations = config.max_iterations();
    let mut tableau = Tableau::from_model(model);

    let phase_one = run_phase(&mut tableau, "phase_one", max_iterations, |t| {
        select_phase_one(t, tolerance)
    });
    let phase_two = run_phase(&mut tableau, "phase_two", max_iterations, |t| {
        select_phase_two(t, tolerance)
    });
    let iterations = u64::from(phase_one.iterations) + u64::from(phase_two.iterations);

    let objective = tableau.rhs(tableau.objective_index());
    let result = match model.op_type {
        OpType::Max => objective,
        OpType::Min => -objective,
    };

    let mut solution = if phase_two.outcome == PhaseOutcome::Unbounded {
        Solution::new(SolverStatus::Unbounded, false, config.round(result))
    } else {
        let (values, feasible) = extract_values(&tableau, config);
        let exhausted = phase_one.outcome == PhaseOutcome::Exhausted
            || phase_two.outcome == PhaseOutcome::Exhausted;
        let status = if exhausted {
            SolverStatus::IterationLimit
        } else if feasible {
            SolverStatus::Optimal
        } else {
            SolverStatus::Infeasible
        };
        let mut solution = Solution::new(status, feasible, config.round(result));
        solution.values = values;
        solution
    };
    solution.iterations = iterations;

    debug!(
        component = "simplex",
        operation = "solve",
        status = solution.status.as_str(),
        feasible = solution.feasible,
        result = solution.result,
        iterations,
        rows = tableau.rows(),
        cols = tableau.cols(),
        duration_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Solved LP relaxation"
    );

    solution
}

/// Read basic decision variables off the RHS column and recheck feasibility.
fn extract_values(tableau: &Tableau, config: &SolverConfig) -> (BTreeMap<String, f64>, bool) {
    let tolerance = config.tolerance();
    let mut feasible = tableau.min_constraint_rhs() > -tolerance;

    let mut values = BTreeMap::new();
    if config.include_zero_values() {
        for name in tableau.variable_names() {
            values.insert(name.clone(), 0.0);
        }
    }

    for (row, &col) in tableau.basis().iter().enumerate() {
        let Some(name) = tableau.variable_at(col) else {
            continue;
        };
        let value = tableau.rhs(row);
        if value < -tolerance {
            feasible = false;
        }
        values.insert(name.to_string(), config.round(value));
    }

    (values, feasible)
}
