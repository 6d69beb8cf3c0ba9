//! Dense canonical tableau built from a declarative model.
//!
//! Layout, with `n` decision variables and `m` constraint rows:
//!
//! ```text
//!            indicator | x_0 .. x_{n-1} | s_0 .. s_{m-1} | rhs
//! row 0          0     |   a_0j         |  1  0 ..  0    | b_0
//! ...
//! row m-1        0     |   a_{m-1}j     |  0 ..  0  1    | b_{m-1}
//! objective      1     |   c_j          |  0 ..      0   | 0
//! ```
//!
//! Rows `0..m` are `<=` rows; a `>=` bound is stored negated. The objective
//! row holds minimization costs, so a `max` model stores `-c`.

use std::time::Instant;

use tabula_model::{Model, OpType};
use tracing::debug;

/// Dense row-major tableau with a fixed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub(crate) data: Vec<f64>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    /// Basic column of each constraint row.
    pub(crate) basis: Vec<usize>,
    variables: Vec<String>,
}

impl Tableau {
    /// Compile a model into its canonical tableau.
    ///
    /// Self-bounds are promoted to rows named after their variable. A
    /// constraint with both bounds contributes its `max` row first. Models
    /// with no rows still produce a valid one-row tableau.
    pub fn from_model(model: &Model) -> Self {
        let started = Instant::now();
        let variables: Vec<String> = model.variable_names().map(str::to_string).collect();
        let constraints = model.effective_constraints();

        let constraint_rows: usize = constraints
            .values()
            .map(|bounds| usize::from(bounds.max.is_some()) + usize::from(bounds.min.is_some()))
            .sum();
        let rows = constraint_rows + 1;
        let cols = 1 + variables.len() + constraint_rows + 1;
        let rhs_col = cols - 1;

        let mut data = vec![0.0; rows * cols];
        let mut row = 0;
        for (key, bounds) in &constraints {
            let sides = [(bounds.max, 1.0), (bounds.min, -1.0)];
            for (bound, sign) in sides {
                let Some(bound) = bound else {
                    continue;
                };
                let offset = row * cols;
                for (j, name) in variables.iter().enumerate() {
                    data[offset + 1 + j] = sign * model.row_coefficient(name, key);
                }
                data[offset + 1 + variables.len() + row] = 1.0;
                data[offset + rhs_col] = sign * bound;
                row += 1;
            }
        }

        let objective = constraint_rows * cols;
        let sign = match model.op_type {
            OpType::Min => 1.0,
            OpType::Max => -1.0,
        };
        data[objective] = 1.0;
        for (j, name) in variables.iter().enumerate() {
            data[objective + 1 + j] = sign * model.row_coefficient(name, &model.optimize);
        }

        let basis = (0..constraint_rows)
            .map(|row| 1 + variables.len() + row)
            .collect();

        debug!(
            component = "tableau",
            operation = "build",
            status = "success",
            variables = variables.len(),
            constraint_rows,
            cols,
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Built tableau from model"
        );

        Self {
            data,
            rows,
            cols,
            basis,
            variables,
        }
    }

    /// Total number of rows, objective included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of columns, indicator and RHS included.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of constraint rows.
    pub fn constraint_rows(&self) -> usize {
        self.rows - 1
    }

    /// Index of the objective row.
    pub fn objective_index(&self) -> usize {
        self.rows - 1
    }

    /// Index of the right-hand-side column.
    pub fn rhs_col(&self) -> usize {
        self.cols - 1
    }

    /// Column of the `index`-th decision variable.
    pub fn variable_col(&self, index: usize) -> usize {
        1 + index
    }

    /// Slack column owned by constraint row `row`.
    pub fn slack_col(&self, row: usize) -> usize {
        1 + self.variables.len() + row
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Right-hand side of `row`.
    pub fn rhs(&self, row: usize) -> f64 {
        self.get(row, self.rhs_col())
    }

    pub fn objective_row(&self) -> &[f64] {
        self.row(self.objective_index())
    }

    /// Smallest right-hand side over the constraint rows, `+inf` without rows.
    pub fn min_constraint_rhs(&self) -> f64 {
        (0..self.constraint_rows())
            .map(|row| self.rhs(row))
            .fold(f64::INFINITY, f64::min)
    }

    /// Basic column of every constraint row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Decision variable names in column order.
    pub fn variable_names(&self) -> &[String] {
        &self.variables
    }

    /// Name of the decision variable stored in `col`, if any.
    pub fn variable_at(&self, col: usize) -> Option<&str> {
        col.checked_sub(1)
            .and_then(|index| self.variables.get(index))
            .map(String::as_str)
    }
}
