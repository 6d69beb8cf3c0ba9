//! Model error types.

/// Errors that can occur while building or validating a model
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Objective key is empty
    MissingObjective,
    /// Variable name referenced but never declared
    UnknownVariable(String),
    /// Variable declared twice
    DuplicateVariable(String),
    /// Coefficient is NaN or infinite
    InvalidCoefficient {
        variable: String,
        key: String,
        value: f64,
    },
    /// Bound is NaN or infinite
    InvalidBound { name: String, value: f64 },
    /// Constraint or objective key collides with a reserved bound key
    ReservedKey(String),
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::MissingObjective => "OBJECTIVE_MISSING",
            ModelError::UnknownVariable(_) => "VARIABLE_UNKNOWN",
            ModelError::DuplicateVariable(_) => "VARIABLE_DUPLICATE",
            ModelError::InvalidCoefficient { .. } => "COEFFICIENT_INVALID",
            ModelError::InvalidBound { .. } => "BOUND_INVALID",
            ModelError::ReservedKey(_) => "KEY_RESERVED",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::MissingObjective => {
                write!(f, "[{}] Model has no objective key", self.code())
            }
            ModelError::UnknownVariable(name) => {
                write!(f, "[{}] Variable '{}' is not declared", self.code(), name)
            }
            ModelError::DuplicateVariable(name) => {
                write!(f, "[{}] Variable '{}' already exists", self.code(), name)
            }
            ModelError::InvalidCoefficient {
                variable,
                key,
                value,
            } => write!(
                f,
                "[{}] Coefficient of '{}' under '{}' must be finite (got {})",
                self.code(),
                variable,
                key,
                value
            ),
            ModelError::InvalidBound { name, value } => write!(
                f,
                "[{}] Bound on '{}' must be finite (got {})",
                self.code(),
                name,
                value
            ),
            ModelError::ReservedKey(key) => write!(
                f,
                "[{}] '{}' is reserved for variable bounds and cannot name a row",
                self.code(),
                key
            ),
        }
    }
}

impl std::error::Error for ModelError {}
