use thiserror::Error;

pub type DgResult<T> = Result<T, DgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DgError {
    #[error("Invalid weight '{input}': {reason}")]
    InvalidWeight { input: String, reason: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Shape mismatch: {what} (expected={expected}, actual={actual})")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
