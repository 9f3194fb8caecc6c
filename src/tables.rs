//! Truth table construction
//!
//! Expands each condition row into the complete set of fully-specified input
//! tuples it covers, merged per output value. An omitted boolean variable is
//! "don't care": the working tuple set is branched once with `true` appended
//! and once with `false`, doubling per undetermined variable.
//!
//! Tables are recomputed on demand from the full row sequence; nothing is
//! cached or invalidated.

use crate::conditions::Conditions;
use crate::ordered::{LastUpdateMap, LastUpdateSet};
use crate::row::Row;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A mapping from output value to the set of input tuples producing it.
///
/// Tuple position `i` corresponds to the `i`-th resolved variable key for
/// that output; set semantics deduplicate tuples automatically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TruthTable {
    entries: LastUpdateMap<Value, LastUpdateSet<Vec<Value>>>,
}

impl TruthTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tuple set for one output, if any row produced it.
    pub fn get(&self, output: &Value) -> Option<&LastUpdateSet<Vec<Value>>> {
        self.entries.get(output)
    }

    pub fn contains(&self, output: &Value) -> bool {
        self.entries.contains_key(output)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &LastUpdateSet<Vec<Value>>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union a tuple set into the bucket for `output`, creating it if absent.
    pub(crate) fn merge(&mut self, output: Value, rows: LastUpdateSet<Vec<Value>>) {
        let merged = match self.entries.remove(&output) {
            Some(existing) => existing.union(&rows),
            None => rows,
        };
        self.entries.insert(output, merged);
    }

    /// Collapse boolean output keys into their integer counterparts.
    ///
    /// `true`/`1` and `false`/`0` must not coexist as separate buckets: when
    /// both are present, the boolean-keyed set is merged into the
    /// integer-keyed one and the boolean key removed.
    pub(crate) fn normalize(&mut self) {
        self.collapse(Value::Bool(true), Value::Int(1));
        self.collapse(Value::Bool(false), Value::Int(0));
    }

    fn collapse(&mut self, bool_key: Value, int_key: Value) {
        if !self.entries.contains_key(&int_key) {
            return;
        }
        if let Some(moved) = self.entries.remove(&bool_key) {
            if let Some(bucket) = self.entries.get_mut(&int_key) {
                bucket.extend(moved);
            }
        }
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = (&'a Value, &'a LastUpdateSet<Vec<Value>>);
    type IntoIter = indexmap::map::Iter<'a, Value, LastUpdateSet<Vec<Value>>>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.entries).into_iter()
    }
}

impl Conditions {
    /// Compile the collection into truth tables, factored by output.
    ///
    /// Rows without variable keys are skipped, as are rows asserting a false
    /// output — a row cannot assert an output of "false"; such a row is dead
    /// and contributes nothing to any bucket.
    pub fn truth_tables(&self, params: &[&str]) -> TruthTable {
        let mut tables = TruthTable::new();
        for row in self.rows() {
            if !row.has_variables() {
                continue;
            }
            let output = row.output_value();
            if output.is_false() {
                continue;
            }
            let keys = self.input_keys(params, &output);
            let tuples = expand_row(row, &keys);
            tables.merge(output, tuples);
            tables.normalize();
        }
        tables
    }
}

/// Enumerate every completion of a partial row over the resolved keys.
///
/// Starts from one empty tuple; a key the row defines appends its value to
/// every tuple, an undetermined key branches the working set into `true` and
/// `false` completions.
fn expand_row(row: &Row, keys: &LastUpdateSet<String>) -> LastUpdateSet<Vec<Value>> {
    let mut tuples = LastUpdateSet::new();
    tuples.insert(Vec::new());

    for key in keys.iter() {
        tuples = match row.get(key) {
            Some(value) => append_to_each(&tuples, value),
            None => {
                let trues = append_to_each(&tuples, &Value::Bool(true));
                let falses = append_to_each(&tuples, &Value::Bool(false));
                trues.union(&falses)
            }
        };
    }

    tuples
}

fn append_to_each(
    tuples: &LastUpdateSet<Vec<Value>>,
    value: &Value,
) -> LastUpdateSet<Vec<Value>> {
    tuples
        .iter()
        .map(|tuple| {
            let mut extended = tuple.clone();
            extended.push(value.clone());
            extended
        })
        .collect()
}
