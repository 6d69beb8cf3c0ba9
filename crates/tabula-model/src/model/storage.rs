//! Lookup methods, bound promotion and canonical keys.

use std::collections::BTreeMap;

use crate::types::{ConstraintBounds, Variable};

use super::Model;

impl Model {
    /// Get the number of variables
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Get the number of declared constraints (before bound promotion)
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Get a variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Get a constraint by name.
    pub fn constraint(&self, name: &str) -> Option<&ConstraintBounds> {
        self.constraints.get(name)
    }

    /// Variable names in column order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Declared coefficient of `variable` in row `key`, `0` when either is absent.
    pub fn coefficient(&self, variable: &str, key: &str) -> f64 {
        self.variables
            .get(variable)
            .map(|var| var.coefficient(key))
            .unwrap_or(0.0)
    }

    /// Coefficient as seen by the tableau: a variable's own row always reads `1`.
    pub fn row_coefficient(&self, variable: &str, key: &str) -> f64 {
        if variable == key {
            return 1.0;
        }
        self.coefficient(variable, key)
    }

    /// Check whether a variable must be integral.
    pub fn is_integer(&self, name: &str) -> bool {
        self.ints.contains(name) || self.binaries.contains(name)
    }

    /// Check whether any variable is integer-designated.
    pub fn has_integers(&self) -> bool {
        self.variables.keys().any(|name| self.is_integer(name))
    }

    /// Integer-designated variables in column order.
    pub fn integer_variables(&self) -> impl Iterator<Item = &str> {
        self.variables
            .keys()
            .filter(|name| self.is_integer(name))
            .map(String::as_str)
    }

    /// Constraints with every variable self-bound promoted into a row of the
    /// same name.
    ///
    /// When a declared constraint and a self-bound share a name and a bound
    /// direction, the tighter bound is kept. Binary variables contribute an
    /// upper bound of `1`.
    pub fn effective_constraints(&self) -> BTreeMap<String, ConstraintBounds> {
        let mut constraints = self.constraints.clone();
        for (name, variable) in &self.variables {
            let mut bounds = variable.self_bounds();
            if self.binaries.contains(name) {
                bounds.tighten(ConstraintBounds::at_most(1.0));
            }
            if bounds.is_empty() {
                continue;
            }
            constraints.entry(name.clone()).or_default().tighten(bounds);
        }
        constraints
    }

    /// Canonical serialization used to recognise identical models.
    ///
    /// All maps are ordered, so two models with the same content always
    /// produce the same key.
    pub fn canonical_key(&self) -> String {
        match serde_json::to_string(self) {
            Ok(key) => key,
            Err(_) => format!("{self:?}"),
        }
    }
}
