use super::support::{capacity_row, two_variable_model};
use super::*;

#[test]
fn test_self_bounds_are_promoted() {
    let model = two_variable_model();
    let constraints = model.effective_constraints();
    assert_eq!(constraints.get("x"), Some(&ConstraintBounds::at_most(4.0)));
    assert_eq!(constraints.get("y"), Some(&ConstraintBounds::at_most(3.0)));
    // Declared constraints are untouched.
    assert_eq!(model.num_constraints(), 0);
}

#[test]
fn test_promotion_keeps_tighter_bound() {
    let mut model = two_variable_model();
    model.add_constraint("x", capacity_row(2.5)).unwrap();
    model.set_variable_min("x", 1.0).unwrap();

    let constraints = model.effective_constraints();
    assert_eq!(
        constraints.get("x"),
        Some(&ConstraintBounds::between(1.0, 2.5))
    );
}

#[test]
fn test_binary_adds_unit_upper_bound() {
    let mut model = two_variable_model();
    model.add_variable("pick", Variable::new()).unwrap();
    model.mark_binary("pick").unwrap();

    let constraints = model.effective_constraints();
    assert_eq!(constraints.get("pick"), Some(&ConstraintBounds::at_most(1.0)));
}

#[test]
fn test_row_coefficient_of_own_row_is_one() {
    let mut model = two_variable_model();
    model.set_coefficient("x", "x", 7.0).unwrap();
    assert_eq!(model.row_coefficient("x", "x"), 1.0);
    assert_eq!(model.row_coefficient("x", "profit"), 1.0);
    assert_eq!(model.row_coefficient("x", "y"), 0.0);
}

#[test]
fn test_set_variable_bounds_replace_previous() {
    let mut model = two_variable_model();
    model.set_variable_max("x", 2.0).unwrap();
    assert_eq!(model.variable("x").and_then(|v| v.max), Some(2.0));

    assert!(matches!(
        model.set_variable_min("x", f64::NAN),
        Err(ModelError::InvalidBound { .. })
    ));
    assert_eq!(
        model.set_variable_min("ghost", 1.0),
        Err(ModelError::UnknownVariable("ghost".to_string()))
    );
}

#[test]
fn test_canonical_key_ignores_construction_order() {
    let mut first = two_variable_model();
    first.set_variable_min("x", 3.0).unwrap();
    first.set_variable_max("y", 2.0).unwrap();

    let mut second = two_variable_model();
    second.set_variable_max("y", 2.0).unwrap();
    second.set_variable_min("x", 3.0).unwrap();

    assert_eq!(first.canonical_key(), second.canonical_key());

    second.set_variable_max("y", 1.0).unwrap();
    assert_ne!(first.canonical_key(), second.canonical_key());
}

#[test]
fn test_validate_accepts_well_formed_model() {
    let mut model = two_variable_model();
    model.mark_integer("x").unwrap();
    assert_eq!(model.validate(), Ok(()));
}

#[test]
fn test_validate_reports_first_violation() {
    let mut model = two_variable_model();
    model.optimize.clear();
    assert_eq!(model.validate(), Err(ModelError::MissingObjective));

    let mut model = two_variable_model();
    model.ints.insert("ghost".to_string());
    assert_eq!(
        model.validate(),
        Err(ModelError::UnknownVariable("ghost".to_string()))
    );

    let mut model = two_variable_model();
    model
        .constraints
        .insert("limit".to_string(), ConstraintBounds::at_most(f64::INFINITY));
    assert!(matches!(
        model.validate(),
        Err(ModelError::InvalidBound { .. })
    ));
}
