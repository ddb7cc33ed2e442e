//! Graph-specific error types.

use dg_core::{DgError, EdgeId, Id};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Validation failures raised by graph edits.
///
/// Every variant is local to the rejected call: the store is left exactly as
/// it was before the call. `Display` output is meant to be shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex label was empty or whitespace only.
    #[error("Vertex name must not be empty")]
    EmptyLabel,

    /// A vertex with this label already exists.
    #[error("A vertex named '{label}' already exists")]
    DuplicateLabel { label: String },

    /// An edge endpoint (or a removal target) names no existing vertex.
    #[error("There is no vertex named '{label}'")]
    UnknownVertex { label: String },

    /// No edge with this id exists (never did, or was already removed).
    #[error("There is no edge with id {id}")]
    UnknownEdge { id: EdgeId },

    /// The weight text is not a non-negative whole number.
    #[error("Invalid weight '{input}': {reason}")]
    InvalidWeight { input: String, reason: &'static str },

    /// A snapshot edge points past the end of the label list.
    #[error("Index out of range: {what} (index={index}, len={len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// ID not found in index map.
    #[error("{what} {id} not found in index map")]
    IdNotFound { what: &'static str, id: Id },

    /// The monotonic id space for vertices or edges is used up.
    #[error("No more {what} ids available")]
    CapacityExceeded { what: &'static str },

    #[error(transparent)]
    Core(DgError),
}

impl From<DgError> for GraphError {
    fn from(err: DgError) -> Self {
        match err {
            DgError::InvalidWeight { input, reason } => GraphError::InvalidWeight { input, reason },
            other => GraphError::Core(other),
        }
    }
}
