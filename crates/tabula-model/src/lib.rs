//! Declarative model records for the Tabula LP/MILP solver.
//!
//! A [`Model`] names its variables, its constraints and the objective row
//! key. Coefficients are looked up by name with an implicit default of `0`,
//! so a variable only lists the rows it actually participates in.

pub mod model;
pub mod types;

pub use model::{Model, ModelError};
pub use types::{ConstraintBounds, OpType, Variable};
