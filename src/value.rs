//! Opaque comparable values — the data carried by condition rows
//!
//! The core never computes with these values; it only compares, hashes and
//! moves them around. Symbolic expressions (`Expr`) and computed outputs
//! (`Call`) are deliberately opaque: two expressions are the same variable
//! exactly when they compare equal.

use serde::{Deserialize, Serialize};

/// Any value a condition row can bind or assert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    /// An opaque symbolic expression over free variables.
    Expr(Expr),
    /// A computed output: a function reference paired with its arguments.
    Call(Call),
    /// A fixed-length tuple, used for raw truth-table rows and input tuples.
    Tuple(Vec<Value>),
}

impl Value {
    /// Runtime kind name, used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Expr(_) => "expression",
            Value::Call(_) => "call",
            Value::Tuple(_) => "tuple",
        }
    }

    /// A row asserting a false output is dead: it contributes no tuples.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Value::Int(1))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Int(0))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Expr(e) => write!(f, "{}", e),
            Value::Call(c) => write!(f, "{}", c),
            Value::Tuple(items) => {
                let strs: Vec<_> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "({})", strs.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Expr> for Value {
    fn from(e: Expr) -> Self {
        Value::Expr(e)
    }
}

impl From<Call> for Value {
    fn from(c: Call) -> Self {
        Value::Call(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Tuple(items)
    }
}

/// An opaque symbolic expression.
///
/// Identity is its source text: the same text, however introduced, is the
/// same boolean variable to the downstream minimizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expr {
    source: String,
}

impl Expr {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// A computed output: function reference plus ordered argument tuple.
///
/// Treated as a single composite value for keying and equality; the core
/// never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Call {
    pub function: Box<Value>,
    pub arguments: Vec<Value>,
}

impl Call {
    pub fn new(function: impl Into<Value>, arguments: Vec<Value>) -> Self {
        Self {
            function: Box::new(function.into()),
            arguments,
        }
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args: Vec<_> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}
