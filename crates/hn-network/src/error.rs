//! Network-specific error types.

use hn_core::{CompId, HnError};
use thiserror::Error;

/// Errors raised by network lookups, edits and invariant checks.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// No component carries the given name.
    #[error("Component '{name}' not found")]
    NotFound { name: String },

    /// No live component carries the given id.
    #[error("Component id {id} not found")]
    UnknownId { id: CompId },

    /// A branch component has more than one connected output and cannot be
    /// removed without choosing which branch survives.
    #[error("Cannot delete '{name}': {live} outputs are connected")]
    MultipleLiveOutputs { name: String, live: usize },

    /// A variant-specific setter was called on the wrong variant.
    #[error("'{name}' is a {actual}, operation requires {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Proportion vector length does not match the number of outputs.
    #[error("'{name}' has {expected} outputs but {got} proportions were given")]
    ProportionCount {
        name: String,
        expected: usize,
        got: usize,
    },

    /// An output slot refers to a component that no longer exists.
    #[error("'{from}' refers to missing component {to}")]
    DanglingRef { from: String, to: CompId },

    /// Input back-reference disagrees with the predecessor's output slots.
    #[error("Back-reference of '{name}' disagrees with its predecessor")]
    BackRefMismatch { name: String },

    /// A component is fed by more than one output slot.
    #[error("'{name}' is fed by {count} output slots")]
    SharedDescendant { name: String, count: usize },

    /// A Source has a predecessor.
    #[error("Source '{name}' has an input connection")]
    SourceHasInput { name: String },

    /// The input chain above a component loops back on itself.
    #[error("Cycle through '{name}'")]
    Cycle { name: String },

    #[error(transparent)]
    Core(#[from] HnError),
}

pub type NetResult<T> = Result<T, NetworkError>;

impl From<NetworkError> for HnError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Core(e) => e,
            NetworkError::NotFound { name } => HnError::NotFound { what: name },
            other => HnError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
