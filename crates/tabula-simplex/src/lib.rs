//! Dense two-phase simplex and depth-first branch-and-bound.
//!
//! A [`Model`](tabula_model::Model) is compiled into a [`Tableau`], driven to
//! feasibility by Phase 1 and to optimality by Phase 2. Integer variables are
//! handled by [`BranchAndBound`], which re-solves modified copies of the model.
//!
//! # Example
//!
//! ```
//! use tabula_model::{Model, Variable};
//!
//! let mut model = Model::maximize("profit");
//! model
//!     .add_variable("x", Variable::new().with_coefficient("profit", 1.0).with_max(4.0))
//!     .unwrap();
//! let solution = tabula_simplex::solve(&model);
//! assert!(solution.feasible);
//! assert!((solution.result - 4.0).abs() < 1e-9);
//! ```

pub mod branch;
pub mod engine;
pub mod phase;
mod pivot;
pub mod solver;
pub mod tableau;

pub use branch::{
    Branch, BranchAndBound, BranchStats, MilpOutcome, SearchFrontier, select_branch, solve_milp,
    solve_milp_with_config,
};
pub use engine::{solve, solve_with_config};
pub use phase::{Step, select_phase_one, select_phase_two};
pub use solver::Solver;
pub use tableau::Tableau;
