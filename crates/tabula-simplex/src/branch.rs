//! Depth-first branch-and-bound over LP relaxations.

use std::collections::HashSet;
use std::time::Instant;

use tabula_model::Model;
use tabula_solver::{Solution, SolverConfig, SolverStatus};
use tracing::{debug, trace, warn};

use crate::engine::solve_with_config;

/// Counters collected during one branch-and-bound run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchStats {
    /// Nodes split into two children.
    pub branched: u64,
    /// LP relaxations solved.
    pub solved: u64,
    /// Nodes discarded as infeasible or not better than the incumbent.
    pub pruned: u64,
    /// Times a strictly better integral solution replaced the incumbent.
    pub incumbent_updates: u64,
    /// Children dropped because an identical model was already queued.
    pub duplicates_skipped: u64,
}

/// Incumbent solution plus the statistics of the run that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpOutcome {
    pub solution: Solution,
    pub stats: BranchStats,
}

/// LIFO queue of pending nodes with a record of every model ever queued.
#[derive(Debug, Default)]
pub struct SearchFrontier {
    queue: Vec<Model>,
    visited: HashSet<String>,
}

impl SearchFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frontier holding only `root`. The root is not recorded as visited.
    pub fn with_root(root: Model) -> Self {
        Self {
            queue: vec![root],
            visited: HashSet::new(),
        }
    }

    /// Queue `model` unless an identical model has been queued before.
    ///
    /// Returns `false` when the model was a duplicate and was dropped.
    pub fn push(&mut self, model: Model) -> bool {
        if !self.visited.insert(model.canonical_key()) {
            return false;
        }
        self.queue.push(model);
        true
    }

    pub fn pop(&mut self) -> Option<Model> {
        self.queue.pop()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// A fractional integer variable chosen for splitting.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub variable: String,
    pub value: f64,
}

impl Branch {
    /// The two children of `model`: `[up, down]`.
    ///
    /// The up child raises the variable's lower self-bound to `ceil(value)`,
    /// using `1` when that ceiling is `0`. The down child caps its upper
    /// self-bound at `floor(value)`. Pushing in this order explores the down
    /// child first.
    pub fn children(&self, model: &Model) -> [Model; 2] {
        let mut ceiling = self.value.ceil();
        if ceiling == 0.0 {
            ceiling = 1.0;
        }
        // `+ 0.0` turns a floor of -0.0 into 0.0.
        let floor = self.value.floor() + 0.0;

        let mut up = model.clone();
        if let Some(variable) = up.variables.get_mut(&self.variable) {
            variable.min = Some(ceiling);
        }
        let mut down = model.clone();
        if let Some(variable) = down.variables.get_mut(&self.variable) {
            variable.max = Some(floor);
        }
        [up, down]
    }
}

fn is_integral(value: f64, tolerance: f64) -> bool {
    (value - value.round()).abs() <= tolerance
}

/// Pick the non-integral integer variable whose fractional part is closest
/// to one half. Ties go to the first variable in column order.
pub fn select_branch(model: &Model, solution: &Solution, tolerance: f64) -> Option<Branch> {
    let mut best: Option<(Branch, f64)> = None;
    for name in model.integer_variables() {
        let value = solution.value(name);
        if is_integral(value, tolerance) {
            continue;
        }
        let distance = (value - value.floor() - 0.5).abs();
        if best.as_ref().is_none_or(|(_, closest)| distance < *closest) {
            best = Some((
                Branch {
                    variable: name.to_string(),
                    value,
                },
                distance,
            ));
        }
    }
    best.map(|(branch, _)| branch)
}

/// Branch-and-bound driver. Every run starts from a fresh frontier.
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound {
    config: SolverConfig,
}

impl BranchAndBound {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for the best integral solution of `model`.
    ///
    /// Node relaxations are solved unrounded; `precision` only applies to the
    /// returned incumbent.
    pub fn run(&self, model: &Model) -> MilpOutcome {
        let started = Instant::now();
        let tolerance = self.config.tolerance();
        let max_nodes = u64::from(self.config.max_nodes());
        let direction = model.op_type.direction();
        let node_config = SolverConfig {
            precision: None,
            ..self.config.clone()
        };

        let mut stats = BranchStats::default();
        let mut iterations = 0;
        let mut incumbent = Solution::new(
            SolverStatus::Infeasible,
            false,
            f64::NEG_INFINITY * direction,
        );

        let mut frontier = SearchFrontier::with_root(model.clone());

        while stats.branched < max_nodes {
            let Some(node) = frontier.pop() else {
                break;
            };
            let relaxation = solve_with_config(&node, &node_config);
            stats.solved += 1;
            iterations += relaxation.iterations;

            let improves = relaxation.result * direction > incumbent.result * direction;
            if !relaxation.feasible || !improves {
                stats.pruned += 1;
                trace!(
                    component = "branch",
                    operation = "prune",
                    feasible = relaxation.feasible,
                    result = relaxation.result,
                    "Pruned node"
                );
                continue;
            }

            let Some(branch) = select_branch(&node, &relaxation, tolerance) else {
                stats.incumbent_updates += 1;
                trace!(
                    component = "branch",
                    operation = "incumbent",
                    result = relaxation.result,
                    "Found better integral solution"
                );
                incumbent = relaxation;
                continue;
            };

            stats.branched += 1;
            trace!(
                component = "branch",
                operation = "branch",
                variable = %branch.variable,
                value = branch.value,
                depth = frontier.len(),
                "Branching on fractional variable"
            );
            for child in branch.children(&node) {
                if !frontier.push(child) {
                    stats.duplicates_skipped += 1;
                }
            }
        }

        if !frontier.is_empty() {
            warn!(
                component = "branch",
                operation = "solve_milp",
                status = "node_limit",
                max_nodes,
                pending = frontier.len(),
                "Node cap reached; returning best incumbent"
            );
            incumbent.status = SolverStatus::NodeLimit;
        }

        incumbent.result = self.config.round(incumbent.result);
        for value in incumbent.values.values_mut() {
            *value = self.config.round(*value);
        }
        incumbent.iterations = iterations;
        incumbent.nodes = stats.branched;

        debug!(
            component = "branch",
            operation = "solve_milp",
            status = incumbent.status.as_str(),
            feasible = incumbent.feasible,
            result = incumbent.result,
            branched = stats.branched,
            solved = stats.solved,
            pruned = stats.pruned,
            incumbent_updates = stats.incumbent_updates,
            duplicates_skipped = stats.duplicates_skipped,
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Branch-and-bound finished"
        );

        MilpOutcome {
            solution: incumbent,
            stats,
        }
    }
}

/// Solve `model` as a mixed-integer program with default settings.
pub fn solve_milp(model: &Model) -> Solution {
    solve_milp_with_config(model, &SolverConfig::default())
}

pub fn solve_milp_with_config(model: &Model, config: &SolverConfig) -> Solution {
    BranchAndBound::new(config.clone()).run(model).solution
}
