//! Pivot selection rules for the two simplex phases.
//!
//! Both selectors break ties on the lowest index and treat anything inside
//! `[-tolerance, tolerance]` as zero.

use tabula_solver::UNBOUNDED_RATIO;

use crate::tableau::Tableau;

/// Next action for a simplex phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pivot on this constraint row and column.
    Pivot { row: usize, col: usize },
    /// The phase has nothing left to do.
    Done,
    /// The entering column has no bounding row.
    Unbounded,
}

/// Index of the most negative entry below `-tolerance`, first occurrence on ties.
fn most_negative(values: &[f64], tolerance: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        if value < -tolerance && best.is_none_or(|(_, lowest)| value < lowest) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}

/// Phase 1: drive negative right-hand sides out of the constraint rows.
///
/// Picks the row with the most negative RHS and, in it, the most negative
/// coefficient. A row that has no negative coefficient cannot be repaired;
/// the phase reports `Done` and the final feasibility check catches it.
pub fn select_phase_one(tableau: &Tableau, tolerance: f64) -> Step {
    let rhs_col = tableau.rhs_col();
    let mut worst: Option<(usize, f64)> = None;
    for row in 0..tableau.constraint_rows() {
        let rhs = tableau.rhs(row);
        if rhs < -tolerance && worst.is_none_or(|(_, lowest)| rhs < lowest) {
            worst = Some((row, rhs));
        }
    }

    let Some((row, _)) = worst else {
        return Step::Done;
    };
    match most_negative(&tableau.row(row)[..rhs_col], tolerance) {
        Some(col) => Step::Pivot { row, col },
        None => Step::Done,
    }
}

/// Phase 2: improve the objective until no reduced cost is negative.
///
/// The entering column is the most negative objective entry; the leaving
/// row wins the minimum-ratio test over rows whose entry exceeds
/// `tolerance`. Rows that do not qualify carry [`UNBOUNDED_RATIO`].
pub fn select_phase_two(tableau: &Tableau, tolerance: f64) -> Step {
    let rhs_col = tableau.rhs_col();
    let Some(col) = most_negative(&tableau.objective_row()[..rhs_col], tolerance) else {
        return Step::Done;
    };

    let mut leaving = None;
    let mut best_ratio = UNBOUNDED_RATIO;
    for row in 0..tableau.constraint_rows() {
        let entry = tableau.get(row, col);
        let ratio = if entry > tolerance {
            tableau.rhs(row) / entry
        } else {
            UNBOUNDED_RATIO
        };
        if ratio < best_ratio {
            best_ratio = ratio;
            leaving = Some(row);
        }
    }

    match leaving {
        Some(row) => Step::Pivot { row, col },
        None => Step::Unbounded,
    }
}
