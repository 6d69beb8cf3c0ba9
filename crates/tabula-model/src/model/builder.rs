//! Model builder methods for adding variables, constraints and integer designations.

use crate::types::{ConstraintBounds, Variable};

use crate::model::Model;
use crate::model::error::ModelError;

pub(crate) const RESERVED_KEYS: [&str; 2] = ["min", "max"];

pub(crate) fn check_bound(name: &str, value: Option<f64>) -> Result<(), ModelError> {
    match value {
        Some(value) if !value.is_finite() => Err(ModelError::InvalidBound {
            name: name.to_string(),
            value,
        }),
        _ => Ok(()),
    }
}

pub(crate) fn check_coefficient(variable: &str, key: &str, value: f64) -> Result<(), ModelError> {
    if RESERVED_KEYS.contains(&key) {
        return Err(ModelError::ReservedKey(key.to_string()));
    }
    if !value.is_finite() {
        return Err(ModelError::InvalidCoefficient {
            variable: variable.to_string(),
            key: key.to_string(),
            value,
        });
    }
    Ok(())
}

impl Model {
    /// Add a variable to the model.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        variable: Variable,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if self.variables.contains_key(&name) {
            return Err(ModelError::DuplicateVariable(name));
        }
        check_bound(&name, variable.min)?;
        check_bound(&name, variable.max)?;
        for (key, value) in &variable.coefficients {
            check_coefficient(&name, key, *value)?;
        }

        tracing::trace!(
            component = "model",
            operation = "add_variable",
            status = "success",
            variable = name.as_str(),
            coefficients = variable.coefficients.len(),
            "Added variable"
        );
        self.variables.insert(name, variable);
        Ok(())
    }

    /// Add or replace a constraint.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        bounds: ConstraintBounds,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if RESERVED_KEYS.contains(&name.as_str()) {
            return Err(ModelError::ReservedKey(name));
        }
        check_bound(&name, bounds.min)?;
        check_bound(&name, bounds.max)?;
        self.constraints.insert(name, bounds);
        Ok(())
    }

    /// Set the coefficient of `variable` in row `key`.
    pub fn set_coefficient(
        &mut self,
        variable: &str,
        key: impl Into<String>,
        value: f64,
    ) -> Result<(), ModelError> {
        let key = key.into();
        check_coefficient(variable, &key, value)?;
        let entry = self
            .variables
            .get_mut(variable)
            .ok_or_else(|| ModelError::UnknownVariable(variable.to_string()))?;
        entry.coefficients.insert(key, value);
        Ok(())
    }

    /// Require `name` to take an integer value.
    pub fn mark_integer(&mut self, name: &str) -> Result<(), ModelError> {
        self.ensure_variable_exists(name)?;
        self.ints.insert(name.to_string());
        Ok(())
    }

    /// Require `name` to take the value 0 or 1.
    pub fn mark_binary(&mut self, name: &str) -> Result<(), ModelError> {
        self.ensure_variable_exists(name)?;
        self.binaries.insert(name.to_string());
        Ok(())
    }

    /// Set the lower self-bound of a variable, replacing any previous one.
    pub fn set_variable_min(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        check_bound(name, Some(value))?;
        let variable = self
            .variables
            .get_mut(name)
            .ok_or_else(|| ModelError::UnknownVariable(name.to_string()))?;
        variable.min = Some(value);
        Ok(())
    }

    /// Set the upper self-bound of a variable, replacing any previous one.
    pub fn set_variable_max(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        check_bound(name, Some(value))?;
        let variable = self
            .variables
            .get_mut(name)
            .ok_or_else(|| ModelError::UnknownVariable(name.to_string()))?;
        variable.max = Some(value);
        Ok(())
    }
}
