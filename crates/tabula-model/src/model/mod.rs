//! Model module for declaring optimization models.
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - `builder`: Methods for adding variables, constraints and integer designations
//! - `storage`: Lookups, bound promotion and canonical keys
//! - `validate`: Whole-model consistency checks

mod builder;
mod error;
mod storage;
mod validate;

use crate::types::{ConstraintBounds, OpType, Variable};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use error::ModelError;

/// A declarative linear or mixed-integer program.
///
/// Variables carry their coefficients by row name; rows are either named
/// constraints or the objective key `optimize`. Maps are ordered so column
/// order and canonical serialization are stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    /// Objective row key.
    pub optimize: String,
    #[serde(rename = "opType", default)]
    pub op_type: OpType,
    #[serde(default)]
    pub constraints: BTreeMap<String, ConstraintBounds>,
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
    /// Variables that must take integer values.
    #[serde(
        default,
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "deserialize_name_set"
    )]
    pub ints: BTreeSet<String>,
    /// Integer variables with an implicit `0..=1` range.
    #[serde(
        default,
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "deserialize_name_set"
    )]
    pub binaries: BTreeSet<String>,
}

impl Model {
    /// Create an empty model optimizing the row `optimize`.
    pub fn new(optimize: impl Into<String>, op_type: OpType) -> Self {
        Self {
            optimize: optimize.into(),
            op_type,
            ..Self::default()
        }
    }

    /// Shorthand for a maximization model.
    pub fn maximize(optimize: impl Into<String>) -> Self {
        Self::new(optimize, OpType::Max)
    }

    /// Shorthand for a minimization model.
    pub fn minimize(optimize: impl Into<String>) -> Self {
        Self::new(optimize, OpType::Min)
    }

    pub(crate) fn ensure_variable_exists(&self, name: &str) -> Result<(), ModelError> {
        if self.variables.contains_key(name) {
            Ok(())
        } else {
            Err(ModelError::UnknownVariable(name.to_string()))
        }
    }
}

/// Integer designations are accepted either as a list of names or as an
/// object of flags (`{"x": true}` / `{"x": 1}`).
#[derive(Deserialize)]
#[serde(untagged)]
enum NameSet {
    List(Vec<String>),
    Flags(BTreeMap<String, serde_json::Value>),
}

fn deserialize_name_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = match NameSet::deserialize(deserializer)? {
        NameSet::List(names) => names.into_iter().collect(),
        NameSet::Flags(flags) => flags
            .into_iter()
            .filter(|(_, flag)| match flag {
                serde_json::Value::Bool(enabled) => *enabled,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
                _ => false,
            })
            .map(|(name, _)| name)
            .collect(),
    };
    Ok(names)
}
