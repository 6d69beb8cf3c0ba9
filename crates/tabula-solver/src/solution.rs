//! Solution type shared by the LP and MILP paths.

use crate::SolverStatus;
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of a solve.
///
/// `values` only lists variables that ended up basic unless zero values were
/// requested; absent variables are `0`.
///
/// Serialize-only: a non-finite `result` is written as `null`, which loses
/// its sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Whether the reported assignment satisfies every constraint.
    pub feasible: bool,
    /// Objective value, in the model's own direction.
    pub result: f64,
    /// How the solve terminated.
    pub status: SolverStatus,
    /// Variable values by name.
    pub values: BTreeMap<String, f64>,
    /// Simplex pivots performed (summed over every node for MILP).
    pub iterations: u64,
    /// Branch-and-bound nodes branched; `0` for a pure LP solve.
    pub nodes: u64,
}

impl Solution {
    /// Create a solution with no variable values.
    pub fn new(status: SolverStatus, feasible: bool, result: f64) -> Self {
        Self {
            feasible,
            result,
            status,
            values: BTreeMap::new(),
            iterations: 0,
            nodes: 0,
        }
    }

    /// Value of a variable, `0` when it was not reported.
    pub fn value(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    /// Value of a variable if it was reported.
    pub fn get_value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Check if the solution is optimal.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }

    /// Check if the solution is infeasible.
    pub fn is_infeasible(&self) -> bool {
        self.status.is_infeasible()
    }

    /// Check if the solution is unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.status.is_unbounded()
    }

    /// Get a human-readable status string.
    pub fn status_string(&self) -> &'static str {
        self.status.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn solution_accessors() {
        let mut solution = Solution::new(SolverStatus::Optimal, true, 7.0);
        solution.values.insert("x".to_string(), 4.0);
        solution.values.insert("y".to_string(), 3.0);

        assert_eq!(solution.value("x"), 4.0);
        assert_eq!(solution.value("z"), 0.0);
        assert_eq!(solution.get_value("z"), None);
        assert_eq!(solution.get_value("y"), Some(3.0));
        assert!(solution.is_optimal());
        assert!(!solution.is_infeasible());
        assert!(!solution.is_unbounded());
        assert_eq!(solution.status_string(), "optimal");
    }

    #[test]
    fn solution_json_shape() {
        let mut solution = Solution::new(SolverStatus::Unbounded, false, 0.0);
        solution.iterations = 3;
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["feasible"], serde_json::json!(false));
        assert_eq!(json["status"], serde_json::json!("unbounded"));
        assert_eq!(json["iterations"], serde_json::json!(3));
        assert_eq!(json["values"], serde_json::json!({}));
    }

    #[test]
    fn solution_json_without_incumbent() {
        let mut solution = Solution::new(SolverStatus::Infeasible, false, f64::NEG_INFINITY);
        solution.nodes = 2;
        let json = serde_json::to_value(&solution).unwrap();
        assert!(json["result"].is_null());
        assert_eq!(json["status"], serde_json::json!("infeasible"));
        assert_eq!(json["nodes"], serde_json::json!(2));

        let min_model = Solution::new(SolverStatus::Infeasible, false, f64::INFINITY);
        assert!(serde_json::to_value(&min_model).unwrap()["result"].is_null());
    }
}
