//! Shared application service layer for distgraph.
//!
//! Front-ends (the CLI, or any GUI) drive a [`GraphSession`] with edits and
//! distance queries, render the resulting [`DistanceTable`], and report
//! [`AppError`]s to the user. The text command language in [`command`] maps
//! one line of input to one session operation.

pub mod command;
pub mod error;
pub mod repl;
pub mod session;
pub mod table;

// Re-export key types for convenience
pub use command::{Command, EdgeLine, HELP, Outcome, execute, execute_line, parse_line, run_script};
pub use error::{AppError, AppResult};
pub use repl::run_repl;
pub use session::{GraphSession, SharedSession};
pub use table::DistanceTable;
