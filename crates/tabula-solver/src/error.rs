//! Solver error types.

use tabula_model::ModelError;

/// Error type for solver construction.
///
/// Solving itself never fails: infeasible, unbounded and capped runs are
/// reported through [`crate::Solution`].
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Model failed validation.
    InvalidModel(ModelError),
    /// Configuration cannot be used.
    InvalidConfig(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidModel(err) => err.code(),
            SolverError::InvalidConfig(_) => "SOLVER_INVALID_CONFIG",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidModel(err) => write!(f, "{err}"),
            SolverError::InvalidConfig(msg) => {
                write!(f, "[{}] Invalid solver configuration: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::InvalidModel(err) => Some(err),
            SolverError::InvalidConfig(_) => None,
        }
    }
}

impl From<ModelError> for SolverError {
    fn from(err: ModelError) -> Self {
        SolverError::InvalidModel(err)
    }
}
