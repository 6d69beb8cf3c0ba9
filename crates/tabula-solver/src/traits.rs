//! Solver trait for abstraction over the LP and MILP paths.

use crate::{Solution, SolverConfig};

/// Trait for solver implementations.
pub trait Solve {
    /// Solve with the given configuration.
    ///
    /// Never fails: infeasibility, unboundedness and exhausted caps are
    /// reported through the returned [`Solution`].
    fn solve(&mut self, config: &SolverConfig) -> Solution;
}
