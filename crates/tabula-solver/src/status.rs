//! Solver status types.

use serde::{Deserialize, Serialize};

/// How a solve terminated.
///
/// This refines the `feasible` flag of a [`crate::Solution`]; it never
/// changes how that flag is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    /// Both simplex phases converged (or the search tree was exhausted).
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// A simplex phase hit its pivot cap; the reported state is best-effort.
    IterationLimit,
    /// Branch-and-bound hit its node cap; the incumbent is best-effort.
    NodeLimit,
}

impl SolverStatus {
    /// Check if the status indicates an optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }

    /// Check if a cap cut the solve short.
    pub fn is_limit(self) -> bool {
        matches!(self, SolverStatus::IterationLimit | SolverStatus::NodeLimit)
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, SolverStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, SolverStatus::Unbounded)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "optimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::IterationLimit => "iteration_limit",
            SolverStatus::NodeLimit => "node_limit",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(SolverStatus::Optimal.is_optimal());
        assert!(!SolverStatus::NodeLimit.is_optimal());
        assert!(SolverStatus::IterationLimit.is_limit());
        assert!(SolverStatus::NodeLimit.is_limit());
        assert!(!SolverStatus::Unbounded.is_limit());
        assert!(SolverStatus::Infeasible.is_infeasible());
        assert!(SolverStatus::Unbounded.is_unbounded());
        assert!(!SolverStatus::Optimal.is_unbounded());
    }

    #[test]
    fn test_status_as_str_matches_serde() {
        for status in [
            SolverStatus::Optimal,
            SolverStatus::Infeasible,
            SolverStatus::Unbounded,
            SolverStatus::IterationLimit,
            SolverStatus::NodeLimit,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(format!("{status}"), status.as_str());
        }
    }
}
