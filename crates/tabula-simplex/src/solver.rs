//! Owning solver front end over the simplex engine and branch-and-bound.

use tabula_model::Model;
use tabula_solver::{Solution, Solve, SolverConfig, SolverError};
use tracing::debug;

use crate::branch::{BranchAndBound, MilpOutcome};
use crate::engine::solve_with_config;

/// A validated model paired with the configuration it will be solved with.
#[derive(Debug, Clone)]
pub struct Solver {
    model: Model,
    config: SolverConfig,
}

impl Solver {
    /// Create a solver, rejecting models that fail validation.
    pub fn new(model: Model) -> Result<Self, SolverError> {
        Self::with_config(model, SolverConfig::new())
    }

    pub fn with_config(model: Model, config: SolverConfig) -> Result<Self, SolverError> {
        model.validate()?;
        config.validate()?;

        debug!(
            component = "solver",
            operation = "init",
            status = "success",
            variables = model.num_variables() as u64,
            constraints = model.num_constraints() as u64,
            integers = model.integer_variables().count() as u64,
            "Creating solver from model"
        );

        Ok(Self { model, config })
    }

    fn update_config(
        &mut self,
        update: impl FnOnce(SolverConfig) -> SolverConfig,
    ) -> Result<(), SolverError> {
        let config = update(self.config.clone());
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), SolverError> {
        self.update_config(|config| config.with_tolerance(tolerance))
    }

    pub fn set_max_iterations(&mut self, iterations: u32) -> Result<(), SolverError> {
        self.update_config(|config| config.with_max_iterations(iterations))
    }

    pub fn set_max_nodes(&mut self, nodes: u32) -> Result<(), SolverError> {
        self.update_config(|config| config.with_max_nodes(nodes))
    }

    pub fn set_precision(&mut self, digits: u32) -> Result<(), SolverError> {
        self.update_config(|config| config.with_precision(digits))
    }

    pub fn set_include_zero_values(&mut self, enabled: bool) -> Result<(), SolverError> {
        self.update_config(|config| config.with_include_zero_values(enabled))
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: SolverConfig) -> Result<(), SolverError> {
        self.update_config(|_| config)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Solve with branch-and-bound when the model has integer variables,
    /// otherwise as a plain LP.
    pub fn solve(&self) -> Solution {
        self.solve_with_config(&self.config)
    }

    pub fn solve_with_config(&self, config: &SolverConfig) -> Solution {
        if self.model.has_integers() {
            BranchAndBound::new(config.clone()).run(&self.model).solution
        } else {
            solve_with_config(&self.model, config)
        }
    }

    /// Solve the LP relaxation, ignoring integer designations.
    pub fn solve_lp(&self) -> Solution {
        solve_with_config(&self.model, &self.config)
    }

    /// Run branch-and-bound and keep its statistics.
    pub fn solve_milp(&self) -> MilpOutcome {
        BranchAndBound::new(self.config.clone()).run(&self.model)
    }
}

impl Solve for Solver {
    fn solve(&mut self, config: &SolverConfig) -> Solution {
        self.solve_with_config(config)
    }
}
