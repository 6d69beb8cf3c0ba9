//! Shared solver abstractions for Tabula.
//!
//! This crate provides the types the simplex engine and the branch-and-bound
//! driver report through, and the configuration they read.
//!
//! # Overview
//!
//! - [`SolverConfig`]: Tolerances, iteration and node caps, output options
//! - [`SolverStatus`]: How a solve terminated
//! - [`SolverError`]: Error types for solver construction
//! - [`Solution`]: Variable values, objective value and feasibility flag
//! - [`Solve`]: Trait for solver implementations

mod config;
mod error;
mod solution;
mod status;
mod traits;

pub use config::{MAX_ITERATIONS, MAX_NODES, SolverConfig, TOLERANCE, UNBOUNDED_RATIO};
pub use error::SolverError;
pub use solution::Solution;
pub use status::SolverStatus;
pub use traits::Solve;
