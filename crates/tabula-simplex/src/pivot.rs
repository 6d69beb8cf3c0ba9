//! Gauss-Jordan pivot, the only mutation a tableau undergoes after construction.

use crate::tableau::Tableau;

impl Tableau {
    /// Make `col` the unit basis vector of constraint row `row`.
    ///
    /// The pivot row is scaled by its entry in `col`, then eliminated from
    /// every other row (objective included). Row `row` records `col` as its
    /// basic column. The pivot element must be non-zero.
    pub fn pivot(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.constraint_rows(), "pivot row must be a constraint row");
        let cols = self.cols;
        let start = row * cols;
        let element = self.data[start + col];
        debug_assert!(element != 0.0, "pivot element must be non-zero");

        for value in &mut self.data[start..start + cols] {
            *value /= element;
        }

        for other in 0..self.rows {
            if other == row {
                continue;
            }
            let offset = other * cols;
            let factor = self.data[offset + col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..cols {
                let pivot_value = self.data[start + j];
                self.data[offset + j] -= factor * pivot_value;
            }
        }

        self.basis[row] = col;
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use tabula_model::{ConstraintBounds, Model, Variable};

    fn bounded_pair() -> Tableau {
        let mut model = Model::maximize("profit");
        model
            .add_variable(
                "x",
                Variable::new()
                    .with_coefficient("profit", 1.0)
                    .with_coefficient("mix", 2.0),
            )
            .unwrap();
        model
            .add_variable(
                "y",
                Variable::new()
                    .with_coefficient("profit", 1.0)
                    .with_coefficient("mix", 1.0),
            )
            .unwrap();
        model
            .add_constraint("mix", ConstraintBounds::at_most(8.0))
            .unwrap();
        model
            .add_constraint("other", ConstraintBounds::at_most(3.0))
            .unwrap();
        Tableau::from_model(&model)
    }

    #[test]
    fn test_pivot_creates_unit_column() {
        let mut tableau = bounded_pair();
        let col = tableau.variable_col(0);
        tableau.pivot(0, col);

        assert_eq!(tableau.get(0, col), 1.0);
        for row in 1..tableau.rows() {
            assert_eq!(tableau.get(row, col), 0.0);
        }
        assert_eq!(tableau.rhs(0), 4.0);
        assert_eq!(tableau.basis()[0], col);
        // Objective picked up profit of x = 4.
        assert_eq!(tableau.rhs(tableau.objective_index()), 4.0);
    }

    #[test]
    fn test_repivot_is_noop() {
        let mut tableau = bounded_pair();
        let col = tableau.variable_col(1);
        tableau.pivot(0, col);
        let once = tableau.clone();
        tableau.pivot(0, col);
        assert_eq!(tableau, once);
    }

    #[test]
    fn test_pivot_leaves_indicator_column_untouched() {
        let mut tableau = bounded_pair();
        tableau.pivot(0, tableau.variable_col(0));
        tableau.pivot(0, tableau.variable_col(1));
        for row in 0..tableau.constraint_rows() {
            assert_eq!(tableau.get(row, 0), 0.0);
        }
        assert_eq!(tableau.get(tableau.objective_index(), 0), 1.0);
    }
}
