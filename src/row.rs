//! Condition rows and the reserved-keyword configuration
//!
//! A row is one declarative condition entry: variable bindings plus optional
//! reserved fields (output, output arguments, default). Reserved fields are
//! kept apart from the variables map, so "all keys minus reserved keywords"
//! is structural rather than stringly-typed.

use crate::ordered::LastUpdateMap;
use crate::value::{Call, Value};
use serde::{Deserialize, Serialize};

/// The reserved names recognized uniformly across the pipeline.
///
/// Injectable rather than process-global: the owning `Conditions` collection
/// carries one of these, and the resolver and builder close over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keywords {
    /// Names the value a row asserts.
    pub output: String,
    /// Names the argument tuple of a computed (function-call) output.
    pub arguments: String,
    /// Marks the default branch value.
    pub default: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            output: "output".to_string(),
            arguments: "arguments".to_string(),
            default: "default".to_string(),
        }
    }
}

impl Keywords {
    pub fn is_reserved(&self, name: &str) -> bool {
        name == self.output || name == self.arguments || name == self.default
    }
}

/// One caller-supplied entry of a declaration: positional or named.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Entry {
    Positional(Value),
    Named(String, Value),
}

/// The call-shaped input of a declaration: positional values followed by
/// named values, in call order.
///
/// Names matching the collection's reserved keywords are routed to the row's
/// reserved fields when the declaration is appended; everything else becomes
/// a variable binding. The convenience methods (`output`, `output_args`,
/// `default_to`) use the default keyword names — collections with custom
/// keywords should use [`Declaration::set`] directly.
///
/// ```
/// use condtab::Declaration;
///
/// let decl = Declaration::new()
///     .set("a", true)
///     .set("b", false)
///     .output(5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declaration {
    entries: Vec<Entry>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value. It will be bound to a synthetic `arg<n>`
    /// key, or to an existing key holding an equal value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.entries.push(Entry::Positional(value.into()));
        self
    }

    /// Append a named value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push(Entry::Named(name.into(), value.into()));
        self
    }

    /// Set the row's output.
    pub fn output(self, value: impl Into<Value>) -> Self {
        self.set(Keywords::default().output, value)
    }

    /// Set the argument tuple of a computed output.
    pub fn output_args(self, arguments: Vec<Value>) -> Self {
        self.set(Keywords::default().arguments, Value::Tuple(arguments))
    }

    /// Set the default branch value.
    pub fn default_to(self, value: impl Into<Value>) -> Self {
        self.set(Keywords::default().default, value)
    }

    /// A declaration with no named values never produces a row.
    pub fn has_named(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, Entry::Named(_, _)))
    }

    pub(crate) fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// One finished condition row.
///
/// Immutable once the owning collection has appended it; the only mutation
/// ever performed is the synthetic-key assignment at insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    output: Option<Value>,
    arguments: Option<Vec<Value>>,
    default: Option<Value>,
    variables: LastUpdateMap<String, Value>,
}

impl Row {
    pub(crate) fn new() -> Self {
        Self {
            output: None,
            arguments: None,
            default: None,
            variables: LastUpdateMap::new(),
        }
    }

    /// The value this row asserts.
    ///
    /// A row with both an output and an argument tuple asserts a computed
    /// output, keyed as a composite `Call`. A row without an output asserts
    /// `true`.
    pub fn output_value(&self) -> Value {
        match (&self.output, &self.arguments) {
            (Some(function), Some(arguments)) => {
                Value::Call(Call::new(function.clone(), arguments.clone()))
            }
            (Some(value), None) => value.clone(),
            _ => Value::Bool(true),
        }
    }

    /// Whether the row binds at least one variable. Rows without variables
    /// never become truth-table entries.
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &String> {
        self.variables.keys()
    }

    pub fn variables(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.variables.iter()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub(crate) fn bind(&mut self, name: String, value: Value) {
        self.variables.insert(name, value);
    }

    pub(crate) fn set_output(&mut self, value: Value) {
        self.output = Some(value);
    }

    /// Store a computed output's argument tuple. A non-tuple value is treated
    /// as a single-argument tuple.
    pub(crate) fn set_arguments(&mut self, value: Value) {
        self.arguments = Some(match value {
            Value::Tuple(items) => items,
            other => vec![other],
        });
    }

    pub(crate) fn set_default(&mut self, value: Value) {
        self.default = Some(value);
    }
}
