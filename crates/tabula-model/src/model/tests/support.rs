use crate::types::{ConstraintBounds, OpType, Variable};

use super::Model;

/// `max x + y` with `x <= 4` and `y <= 3` declared as self-bounds.
pub(super) fn two_variable_model() -> Model {
    let mut model = Model::new("profit", OpType::Max);
    model
        .add_variable(
            "x",
            Variable::new().with_coefficient("profit", 1.0).with_max(4.0),
        )
        .unwrap();
    model
        .add_variable(
            "y",
            Variable::new().with_coefficient("profit", 1.0).with_max(3.0),
        )
        .unwrap();
    model
}

pub(super) fn capacity_row(max: f64) -> ConstraintBounds {
    ConstraintBounds::at_most(max)
}
