//! Property-based tests for the truth table builder
//!
//! Uses proptest to generate random partial rows and verify the expansion
//! and idempotence laws.

use condtab::{Conditions, Declaration, Value};
use proptest::prelude::*;

const PARAMS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// A partial assignment over the five parameters.
fn any_partial_row() -> impl Strategy<Value = Vec<Option<bool>>> {
    prop::collection::vec(prop::option::of(any::<bool>()), PARAMS.len())
}

fn declare(assignment: &[Option<bool>], output: impl Into<Value>) -> Declaration {
    let mut decl = Declaration::new();
    for (param, value) in PARAMS.iter().zip(assignment) {
        if let Some(value) = *value {
            decl = decl.set(*param, value);
        }
    }
    decl.output(output)
}

proptest! {
    #[test]
    fn test_expansion_is_two_to_the_undetermined(assignment in any_partial_row()) {
        // A row with at least one binding contributes exactly 2^k tuples,
        // where k is the number of omitted parameters.
        prop_assume!(assignment.iter().any(Option::is_some));

        let cond = Conditions::from_declaration(declare(&assignment, 7));
        let tables = cond.truth_tables(&PARAMS);

        let omitted = assignment.iter().filter(|v| v.is_none()).count();
        let bucket = tables.get(&Value::Int(7)).unwrap();
        prop_assert_eq!(bucket.len(), 1usize << omitted);
    }

    #[test]
    fn test_tuples_are_positionally_aligned(assignment in any_partial_row()) {
        prop_assume!(assignment.iter().any(Option::is_some));

        let cond = Conditions::from_declaration(declare(&assignment, 7));
        let tables = cond.truth_tables(&PARAMS);

        for tuple in tables.get(&Value::Int(7)).unwrap().iter() {
            prop_assert_eq!(tuple.len(), PARAMS.len());
            // Defined variables keep their declared value at their position.
            for (i, defined) in assignment.iter().enumerate() {
                if let Some(value) = *defined {
                    prop_assert_eq!(&tuple[i], &Value::Bool(value));
                }
            }
        }
    }

    #[test]
    fn test_readding_a_row_never_changes_the_table(assignment in any_partial_row()) {
        prop_assume!(assignment.iter().any(Option::is_some));

        let mut cond = Conditions::from_declaration(declare(&assignment, 7));
        let once = cond.truth_tables(&PARAMS);
        cond.add(declare(&assignment, 7)).unwrap();
        let twice = cond.truth_tables(&PARAMS);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_false_output_rows_are_dead(assignment in any_partial_row()) {
        prop_assume!(assignment.iter().any(Option::is_some));

        let cond = Conditions::from_declaration(declare(&assignment, false));
        let tables = cond.truth_tables(&PARAMS);
        prop_assert!(tables.is_empty());
    }
}
