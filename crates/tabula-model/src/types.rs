use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpType {
    #[default]
    #[serde(alias = "minimize")]
    Min,
    #[serde(alias = "maximize")]
    Max,
}

impl OpType {
    pub fn as_str(self) -> &'static str {
        match self {
            OpType::Min => "min",
            OpType::Max => "max",
        }
    }

    /// Sign used to compare objective values: `1` for max, `-1` for min.
    pub fn direction(self) -> f64 {
        match self {
            OpType::Min => -1.0,
            OpType::Max => 1.0,
        }
    }
}

impl std::fmt::Display for OpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lower/upper bound pair for a constraint row. Either side may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstraintBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ConstraintBounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Bound of the form `row >= value`.
    pub fn at_least(value: f64) -> Self {
        Self {
            min: Some(value),
            max: None,
        }
    }

    /// Bound of the form `row <= value`.
    pub fn at_most(value: f64) -> Self {
        Self {
            min: None,
            max: Some(value),
        }
    }

    /// Bound of the form `min <= row <= max`.
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Bound of the form `row == value`.
    pub fn equal_to(value: f64) -> Self {
        Self::between(value, value)
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Merge another bound pair into this one, keeping the tighter side of each.
    pub fn tighten(&mut self, other: ConstraintBounds) {
        self.min = match (self.min, other.min) {
            (Some(current), Some(incoming)) => Some(current.max(incoming)),
            (current, incoming) => current.or(incoming),
        };
        self.max = match (self.max, other.max) {
            (Some(current), Some(incoming)) => Some(current.min(incoming)),
            (current, incoming) => current.or(incoming),
        };
    }
}

/// A decision variable: its coefficient in every row it appears in, plus
/// optional self-bounds.
///
/// Serialized flat, so `{"capacity": 2.0, "profit": 5.0, "max": 10.0}` is a
/// variable with two coefficients and an upper bound. The keys `min` and
/// `max` are therefore reserved and cannot name a row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(flatten)]
    pub coefficients: BTreeMap<String, f64>,
}

impl Variable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coefficient under a constraint or objective key.
    pub fn with_coefficient(mut self, key: impl Into<String>, value: f64) -> Self {
        self.coefficients.insert(key.into(), value);
        self
    }

    pub fn with_min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn with_max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    /// Coefficient under `key`, `0` when absent.
    pub fn coefficient(&self, key: &str) -> f64 {
        self.coefficients.get(key).copied().unwrap_or(0.0)
    }

    /// Self-bounds as a constraint bound pair.
    pub fn self_bounds(&self) -> ConstraintBounds {
        ConstraintBounds::new(self.min, self.max)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_op_type_direction() {
        assert_eq!(OpType::Max.direction(), 1.0);
        assert_eq!(OpType::Min.direction(), -1.0);
        assert_eq!(OpType::default(), OpType::Min);
        assert_eq!(format!("{}", OpType::Max), "max");
    }

    #[test]
    fn test_op_type_accepts_long_names() {
        let op: OpType = serde_json::from_str("\"maximize\"").unwrap();
        assert_eq!(op, OpType::Max);
        let op: OpType = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(op, OpType::Min);
    }

    #[test]
    fn test_tighten_keeps_stricter_side() {
        let mut bounds = ConstraintBounds::between(1.0, 10.0);
        bounds.tighten(ConstraintBounds::between(3.0, 20.0));
        assert_eq!(bounds, ConstraintBounds::between(3.0, 10.0));

        let mut open = ConstraintBounds::default();
        open.tighten(ConstraintBounds::at_most(4.0));
        assert_eq!(open, ConstraintBounds::at_most(4.0));
        assert!(!open.is_empty());
    }

    #[test]
    fn test_variable_coefficient_defaults_to_zero() {
        let var = Variable::new().with_coefficient("profit", 3.0);
        assert_eq!(var.coefficient("profit"), 3.0);
        assert_eq!(var.coefficient("weight"), 0.0);
    }

    #[test]
    fn test_variable_serializes_flat() {
        let var = Variable::new()
            .with_coefficient("profit", 5.0)
            .with_max(10.0);
        let json = serde_json::to_value(&var).unwrap();
        assert_eq!(json, serde_json::json!({"max": 10.0, "profit": 5.0}));

        let back: Variable = serde_json::from_value(json).unwrap();
        assert_eq!(back, var);
    }
}
