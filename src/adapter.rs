//! Raw-table adapter and source validation
//!
//! Callers who already hold a fully enumerated table can hand over a plain
//! set of tuples instead of a structured `Conditions` collection. A member is
//! *explicit* when it is a pair whose first element is itself a tuple,
//! interpreted as `(inputs, output)`; any other tuple is *implicit* and
//! asserts output `true`.
//!
//! [`truth_tables`] is the single entry point dispatching between the two
//! shapes; validation happens eagerly, before any table is built.

use crate::conditions::Conditions;
use crate::error::{Error, Result};
use crate::ordered::LastUpdateSet;
use crate::tables::TruthTable;
use crate::value::Value;

/// A caller-supplied condition source, prior to validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A structured collection of condition rows.
    Rows(Conditions),
    /// A raw set of tuples (explicit or implicit rows).
    Raw(LastUpdateSet<Value>),
    /// Anything else; rejected with a type error carrying the value.
    Other(Value),
}

impl From<Conditions> for Source {
    fn from(conditions: Conditions) -> Self {
        Source::Rows(conditions)
    }
}

impl From<LastUpdateSet<Value>> for Source {
    fn from(rows: LastUpdateSet<Value>) -> Self {
        Source::Raw(rows)
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Other(value)
    }
}

/// Validate a condition source without building anything.
///
/// - Anything that is neither a collection nor a raw set fails with a type
///   error naming the runtime kind of the value.
/// - A raw member that is not a tuple fails with a row error carrying it.
/// - A raw pair-shaped row whose first element is a tuple must have exactly
///   two elements, or it fails with an explicit-row error.
pub fn validate(source: &Source) -> Result<()> {
    match source {
        Source::Rows(_) => Ok(()),
        Source::Other(value) => Err(Error::SourceType { kind: value.kind() }),
        Source::Raw(rows) => {
            for row in rows.iter() {
                let Value::Tuple(items) = row else {
                    return Err(Error::MalformedRow { row: row.clone() });
                };
                if matches!(items.first(), Some(Value::Tuple(_))) && items.len() != 2 {
                    return Err(Error::MalformedExplicitRow { row: row.clone() });
                }
            }
            Ok(())
        }
    }
}

/// Resolve any condition source into truth tables.
///
/// Dispatches to [`Conditions::truth_tables`] for structured collections and
/// to the raw-set conversion otherwise. Fails eagerly on an invalid source;
/// no partial table is returned.
pub fn truth_tables(source: &Source, params: &[&str]) -> Result<TruthTable> {
    validate(source)?;
    match source {
        Source::Rows(conditions) => Ok(conditions.truth_tables(params)),
        Source::Raw(rows) => Ok(from_raw(rows)),
        Source::Other(value) => Err(Error::SourceType { kind: value.kind() }),
    }
}

/// Convert a validated raw set into the general table format.
///
/// Explicit rows land in the bucket of their declared output; implicit rows
/// land under `true`. A `false` output never creates a bucket, mirroring the
/// structured builder's falsy-output contract.
fn from_raw(rows: &LastUpdateSet<Value>) -> TruthTable {
    let mut table = TruthTable::new();
    for row in rows.iter() {
        let Value::Tuple(items) = row else {
            continue;
        };
        match items.as_slice() {
            [Value::Tuple(inputs), output] => {
                if output.is_false() {
                    continue;
                }
                table.merge(output.clone(), single(inputs.clone()));
            }
            _ => {
                table.merge(Value::Bool(true), single(items.clone()));
            }
        }
    }
    table.normalize();
    table
}

fn single(tuple: Vec<Value>) -> LastUpdateSet<Vec<Value>> {
    let mut set = LastUpdateSet::new();
    set.insert(tuple);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Declaration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn raw(rows: &[Value]) -> Source {
        Source::Raw(rows.iter().cloned().collect())
    }

    fn tuple(items: &[Value]) -> Value {
        Value::Tuple(items.to_vec())
    }

    #[test]
    fn test_raw_set_with_explicit_and_implicit_rows() {
        // {((1, 2), 9), (3, 4)} → {9: {(1, 2)}, true: {(3, 4)}}
        let source = raw(&[
            tuple(&[tuple(&[Value::Int(1), Value::Int(2)]), Value::Int(9)]),
            tuple(&[Value::Int(3), Value::Int(4)]),
        ]);
        let tables = truth_tables(&source, &[]).unwrap();

        let nine: Vec<_> = tables.get(&Value::Int(9)).unwrap().iter().cloned().collect();
        assert_eq!(nine, vec![vec![Value::Int(1), Value::Int(2)]]);
        let implicit: Vec<_> = tables
            .get(&Value::Bool(true))
            .unwrap()
            .iter()
            .cloned()
            .collect();
        assert_eq!(implicit, vec![vec![Value::Int(3), Value::Int(4)]]);
    }

    #[test]
    fn test_raw_false_output_is_ignored() {
        let source = raw(&[tuple(&[
            tuple(&[Value::Int(1)]),
            Value::Bool(false),
        ])]);
        let tables = truth_tables(&source, &[]).unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_raw_rows_with_same_output_share_a_bucket() {
        let source = raw(&[
            tuple(&[tuple(&[Value::Int(1)]), Value::Int(9)]),
            tuple(&[tuple(&[Value::Int(2)]), Value::Int(9)]),
        ]);
        let tables = truth_tables(&source, &[]).unwrap();
        assert_eq!(tables.get(&Value::Int(9)).unwrap().len(), 2);
    }

    #[test]
    fn test_raw_bool_and_int_keys_collapse() {
        let source = raw(&[
            tuple(&[tuple(&[Value::Int(7)]), Value::Int(1)]),
            tuple(&[Value::Int(8)]),
        ]);
        let tables = truth_tables(&source, &[]).unwrap();
        assert_eq!(tables.len(), 1);
        assert!(!tables.contains(&Value::Bool(true)));
        assert_eq!(tables.get(&Value::Int(1)).unwrap().len(), 2);
    }

    #[test]
    fn test_structured_source_dispatches_to_builder() {
        let cond = Conditions::from_declaration(
            Declaration::new().set("a", true).output(5),
        );
        let tables = truth_tables(&Source::from(cond), &["a"]).unwrap();
        assert!(tables.contains(&Value::Int(5)));
    }

    #[rstest]
    #[case(Value::Int(3))]
    #[case(Value::Str("conditions".into()))]
    #[case(Value::Bool(true))]
    fn test_non_source_value_fails_with_type_error(#[case] value: Value) {
        let kind = value.kind();
        let err = truth_tables(&Source::from(value), &[]).unwrap_err();
        assert_eq!(err, Error::SourceType { kind });
    }

    #[test]
    fn test_raw_member_that_is_not_a_tuple_fails() {
        let source = raw(&[Value::Int(1)]);
        let err = validate(&source).unwrap_err();
        assert_eq!(err, Error::MalformedRow { row: Value::Int(1) });
    }

    #[test]
    fn test_plain_tuple_with_non_tuple_head_passes_validation() {
        // (1, 2, 3) is an implicit row, not a malformed explicit one.
        let source = raw(&[tuple(&[Value::Int(1), Value::Int(2), Value::Int(3)])]);
        assert!(validate(&source).is_ok());
    }

    #[test]
    fn test_explicit_row_with_wrong_arity_fails() {
        // ((1, 2), 3, 4): first element is a tuple, so it must be a pair.
        let bad = tuple(&[
            tuple(&[Value::Int(1), Value::Int(2)]),
            Value::Int(3),
            Value::Int(4),
        ]);
        let err = validate(&raw(&[bad.clone()])).unwrap_err();
        assert_eq!(err, Error::MalformedExplicitRow { row: bad });
    }

    #[test]
    fn test_no_partial_table_on_error() {
        let source = raw(&[
            tuple(&[tuple(&[Value::Int(1)]), Value::Int(9)]),
            Value::Int(2),
        ]);
        assert!(truth_tables(&source, &[]).is_err());
    }
}
