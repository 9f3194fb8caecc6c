//! Ordered condition collection
//!
//! A `Conditions` value is the declarative description of a function: an
//! ordered sequence of condition rows. It owns the two naming rules that make
//! sparse declarations compose:
//!
//! - **Positional naming**: unnamed values get synthetic `arg<n>` keys with a
//!   collection-global, monotonic index.
//! - **Identity reuse**: before minting a new synthetic key, the collection
//!   searches every existing row for an equal value and reuses its key, so a
//!   repeated symbolic expression is always the same boolean variable.
//!
//! It also hosts the variable-key resolver: for a given output, the ordered
//! set of variable names relevant to it (declared parameters first, then ad
//! hoc row variables in first-introduced order).

use crate::error::Warning;
use crate::ordered::LastUpdateSet;
use crate::row::{Declaration, Entry, Keywords, Row};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Prefix of synthetic keys assigned to positional values.
const POSITIONAL_PREFIX: &str = "arg";

/// An ordered sequence of condition rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conditions {
    keywords: Keywords,
    rows: Vec<Row>,
}

impl Conditions {
    /// An empty collection with the default reserved keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty collection recognizing custom reserved keywords.
    pub fn with_keywords(keywords: Keywords) -> Self {
        Self {
            keywords,
            rows: Vec::new(),
        }
    }

    /// Build a collection from an initial declaration.
    ///
    /// A declaration without named values is legal and produces an empty
    /// collection.
    pub fn from_declaration(declaration: Declaration) -> Self {
        let mut conditions = Self::new();
        if declaration.has_named() {
            let row = conditions.build_row(declaration);
            conditions.rows.push(row);
        }
        conditions
    }

    /// Append one more condition row.
    ///
    /// A declaration with zero named values is rejected with the recoverable
    /// [`Warning::EmptyRow`]; nothing is appended and later calls proceed.
    pub fn add(&mut self, declaration: Declaration) -> Result<(), Warning> {
        if !declaration.has_named() {
            return Err(Warning::EmptyRow);
        }
        let row = self.build_row(declaration);
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// The most recently declared default-branch value, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.rows.iter().rev().find_map(Row::default_value)
    }

    /// Resolve the ordered variable keys relevant to `output`.
    ///
    /// Declared parameters come first, in their left-to-right declaration
    /// order, followed by ad hoc variables in the order they are first
    /// introduced scanning matching rows top to bottom. Rows lacking an
    /// output are treated as asserting `true` and match only when the queried
    /// output is `true`. Reserved keywords never appear in the result.
    pub fn input_keys(&self, params: &[&str], output: &Value) -> LastUpdateSet<String> {
        let mut keys = LastUpdateSet::new();
        for param in params {
            if !self.keywords.is_reserved(param) {
                keys.insert((*param).to_string());
            }
        }
        for row in &self.rows {
            if &row.output_value() != output {
                continue;
            }
            for name in row.variable_names() {
                if !keys.contains(name.as_str()) {
                    keys.insert(name.clone());
                }
            }
        }
        keys
    }

    /// The flattened helper view for the code synthesizer: parameter names
    /// (as string values) followed by the values of ad hoc variables bound by
    /// rows matching `output`, in row order.
    pub fn input_values(&self, params: &[&str], output: &Value) -> Vec<Value> {
        let mut values: Vec<Value> = params
            .iter()
            .map(|p| Value::Str((*p).to_string()))
            .collect();
        for row in &self.rows {
            if &row.output_value() != output {
                continue;
            }
            for (name, value) in row.variables() {
                if !params.contains(&name.as_str()) {
                    values.push(value.clone());
                }
            }
        }
        values
    }

    /// One greater than the maximum positional index used anywhere in the
    /// collection, or 0 when no positional key exists. Monotonic: indices are
    /// never reused.
    fn next_positional_index(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.variable_names())
            .filter_map(|name| positional_index(name))
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Search all existing rows for a variable bound to an equal value,
    /// returning its key. Reserved fields are never variable declarations and
    /// are excluded structurally.
    fn find_declared_variable(&self, value: &Value) -> Option<String> {
        for row in &self.rows {
            for (name, bound) in row.variables() {
                if bound == value {
                    return Some(name.clone());
                }
            }
        }
        None
    }

    /// Build one row from a declaration: positional values first (identity
    /// reuse, then synthetic `arg<n>` keys), then named values in call order.
    /// Named values never trigger the identity search and may overwrite a
    /// just-assigned positional key within the same row.
    fn build_row(&self, declaration: Declaration) -> Row {
        let start = self.next_positional_index();
        let mut row = Row::new();

        let mut named = Vec::new();
        let mut position = 0;
        for entry in declaration.into_entries() {
            match entry {
                Entry::Positional(value) => {
                    let key = self
                        .find_declared_variable(&value)
                        .unwrap_or_else(|| format!("{}{}", POSITIONAL_PREFIX, start + position));
                    row.bind(key, value);
                    position += 1;
                }
                Entry::Named(name, value) => named.push((name, value)),
            }
        }

        for (name, value) in named {
            if name == self.keywords.output {
                row.set_output(value);
            } else if name == self.keywords.arguments {
                row.set_arguments(value);
            } else if name == self.keywords.default {
                row.set_default(value);
            } else {
                row.bind(name, value);
            }
        }

        row
    }
}

/// Parse the index of a synthetic positional key (`arg<n>`).
fn positional_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix(POSITIONAL_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
