//! Solver configuration types.

use crate::SolverError;

/// Tolerance band used for every comparison against zero.
pub const TOLERANCE: f64 = 0.001;
/// Ratio assigned to rows that cannot bound the entering column.
pub const UNBOUNDED_RATIO: f64 = 1e99;
/// Pivot cap for each simplex phase.
pub const MAX_ITERATIONS: u32 = 1000;
/// Cap on branched branch-and-bound nodes.
pub const MAX_NODES: u32 = 1200;

/// Configuration options for solver behavior.
///
/// Every field is optional; `None` means the documented default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverConfig {
    /// Feasibility, optimality, ratio-test and integrality tolerance.
    pub tolerance: Option<f64>,
    /// Pivot cap per simplex phase.
    pub max_iterations: Option<u32>,
    /// Cap on branched nodes during branch-and-bound.
    pub max_nodes: Option<u32>,
    /// Round reported values to this many decimal places.
    pub precision: Option<u32>,
    /// Report non-basic variables explicitly as `0`.
    pub include_zero_values: Option<bool>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance band.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = Some(tol);
        self
    }

    /// Set the pivot cap per phase.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Set the branch-and-bound node cap.
    pub fn with_max_nodes(mut self, nodes: u32) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Set the number of decimal places reported values are rounded to.
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Enable or disable reporting of non-basic variables.
    pub fn with_include_zero_values(mut self, enabled: bool) -> Self {
        self.include_zero_values = Some(enabled);
        self
    }

    /// Effective tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(TOLERANCE)
    }

    /// Effective pivot cap per phase.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations.unwrap_or(MAX_ITERATIONS)
    }

    /// Effective node cap.
    pub fn max_nodes(&self) -> u32 {
        self.max_nodes.unwrap_or(MAX_NODES)
    }

    /// Whether non-basic variables are reported.
    pub fn include_zero_values(&self) -> bool {
        self.include_zero_values.unwrap_or(false)
    }

    /// Round a reported value according to `precision`.
    pub fn round(&self, value: f64) -> f64 {
        match self.precision {
            Some(digits) => {
                let scale = 10f64.powi(digits.min(15) as i32);
                (value * scale).round() / scale
            }
            None => value,
        }
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.tolerance.is_none()
            && self.max_iterations.is_none()
            && self.max_nodes.is_none()
            && self.precision.is_none()
            && self.include_zero_values.is_none()
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), SolverError> {
        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(SolverError::InvalidConfig(format!(
                    "tolerance must be finite and positive (got {tol})"
                )));
            }
        }
        if self.max_iterations == Some(0) {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.max_nodes == Some(0) {
            return Err(SolverError::InvalidConfig(
                "max_nodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
