// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # condtab — declarative condition rows, canonical truth tables
//!
//! A caller describes a function's behavior as an ordered list of *condition
//! rows* — partial input assignments plus an output — and condtab compiles
//! that declaration into a canonical **truth table**: a mapping from each
//! distinct output value to the complete set of input combinations producing
//! it. The table is the contract handed to a boolean-expression minimizer and
//! a source-code synthesizer; both are out of scope here.
//!
//! ## Quick Start
//!
//! ```
//! use condtab::{Conditions, Declaration, Value};
//!
//! let mut cond = Conditions::from_declaration(
//!     Declaration::new().set("a", true).set("b", false).output(true),
//! );
//! // An omitted variable is "don't care": it expands into both branches.
//! cond.add(Declaration::new().set("a", false).output(5)).unwrap();
//!
//! let tables = cond.truth_tables(&["a", "b"]);
//! let asserted = tables.get(&Value::Bool(true)).unwrap();
//! assert!(asserted.contains(&vec![Value::Bool(true), Value::Bool(false)]));
//!
//! let five = tables.get(&Value::Int(5)).unwrap();
//! assert_eq!(five.len(), 2); // b branched into true and false
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! rows ──► resolved variable keys ──► expanded tuples ──► truth table
//!                                                              │
//!                                        (external) minimizer ◄┘
//! ```
//!
//! - Positional values receive synthetic `arg<n>` keys; an equal value seen
//!   in any earlier row reuses that row's key, so a repeated symbolic
//!   expression is one boolean variable, not several.
//! - All containers use **last-update ordering**: re-inserting a key moves it
//!   to the most-recent position.
//! - Callers who already hold a fully enumerated table can hand a raw set of
//!   tuples to [`truth_tables`] instead of building a collection.

// Foundation
pub mod error;
pub mod ordered;
pub mod value;

// Data model
pub mod conditions;
pub mod row;

// Table construction
pub mod adapter;
pub mod tables;

// Re-exports
pub use adapter::{truth_tables, validate, Source};
pub use conditions::Conditions;
pub use error::{Error, Result, Warning};
pub use ordered::{LastUpdateMap, LastUpdateSet};
pub use row::{Declaration, Keywords, Row};
pub use tables::TruthTable;
pub use value::{Call, Expr, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
