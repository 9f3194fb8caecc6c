//! Error types for condtab

use crate::value::Value;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while validating or resolving a condition source.
///
/// All of these are detected eagerly, before any truth table is built; no
/// partial table is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied source is neither a `Conditions` collection nor a set of
    /// tuples. Carries the runtime kind of the offending value.
    #[error("conditions source is neither a set of tuples nor a Conditions collection, but rather {kind}")]
    SourceType { kind: &'static str },

    /// A member of a raw truth table is not a tuple.
    #[error("row {row} in raw truth table is not a tuple")]
    MalformedRow { row: Value },

    /// A raw row whose first element is a tuple (an explicit row) does not
    /// have exactly two elements.
    #[error("row {row} with explicit output in raw truth table has wrong format")]
    MalformedExplicitRow { row: Value },
}

/// Recoverable conditions reported to the caller without aborting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// `Conditions::add` was called with zero named values. No row was
    /// appended; subsequent calls proceed normally.
    #[error("adding a condition row requires at least one named value; the row was ignored")]
    EmptyRow,
}
