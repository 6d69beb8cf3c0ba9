//! Whole-model consistency checks.

use super::Model;
use super::builder::{RESERVED_KEYS, check_bound, check_coefficient};
use super::error::ModelError;

impl Model {
    /// Check that the model is internally consistent.
    ///
    /// Models assembled through the builder methods are already checked
    /// piecewise; this covers models deserialized or mutated field by field.
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.optimize.is_empty() {
            return Err(ModelError::MissingObjective);
        }
        if RESERVED_KEYS.contains(&self.optimize.as_str()) {
            return Err(ModelError::ReservedKey(self.optimize.clone()));
        }

        for (name, bounds) in &self.constraints {
            if RESERVED_KEYS.contains(&name.as_str()) {
                return Err(ModelError::ReservedKey(name.clone()));
            }
            check_bound(name, bounds.min)?;
            check_bound(name, bounds.max)?;
        }

        for (name, variable) in &self.variables {
            check_bound(name, variable.min)?;
            check_bound(name, variable.max)?;
            for (key, value) in &variable.coefficients {
                check_coefficient(name, key, *value)?;
            }
        }

        for name in self.ints.iter().chain(self.binaries.iter()) {
            self.ensure_variable_exists(name)?;
        }

        tracing::debug!(
            component = "model",
            operation = "validate",
            status = "success",
            variables = self.num_variables(),
            constraints = self.num_constraints(),
            integers = self.integer_variables().count(),
            "Validated model"
        );
        Ok(())
    }
}
