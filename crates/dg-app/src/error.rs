//! Error types for the dg-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front-ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Graph(#[from] dg_graph::GraphError),

    #[error("Failed to write table file: {path}")]
    TableFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read script file: {path}")]
    ScriptFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dg-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<dg_core::DgError> for AppError {
    fn from(err: dg_core::DgError) -> Self {
        AppError::Graph(err.into())
    }
}
