//! Line-oriented command language for driving a session from text.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! ignored. Tokens are separated by whitespace; wrap a token in double
//! quotes to keep spaces in it (`add-vertex "New York"`).

use std::fmt;
use std::path::PathBuf;

use dg_core::{EdgeId, VertexId, Weight};

use crate::error::{AppError, AppResult};
use crate::session::GraphSession;
use crate::table::DistanceTable;

pub const HELP: &str = "\
Commands:
  add-vertex <name>               add a vertex
  add-edge <from> <to> <weight>   add an undirected edge (weight: whole number >= 0)
  remove-edge <id>                remove an edge by the id shown in 'edges'
  remove-vertex <name>            remove a vertex and all of its edges
  clear                           remove everything
  vertices                        list vertices
  edges                           list edges with their ids
  solve                           print the shortest-distance table
  export <path> [--header]        save the distance table as tab-separated text
  help                            show this message
  quit                            leave
Wrap names containing spaces in double quotes.";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddVertex { label: String },
    AddEdge { from: String, to: String, weight: String },
    RemoveEdge { id: EdgeId },
    RemoveVertex { label: String },
    Clear,
    Vertices,
    Edges,
    Solve,
    Export { path: PathBuf, header: bool },
    Help,
    Quit,
}

/// One line of an edge listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine {
    pub id: EdgeId,
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl fmt::Display for EdgeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} -> {} ({})", self.id, self.from, self.to, self.weight)
    }
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    VertexAdded { id: VertexId, label: String },
    EdgeAdded { id: EdgeId },
    EdgeRemoved { id: EdgeId },
    VertexRemoved { label: String, edges: usize },
    Cleared,
    Vertices(Vec<String>),
    Edges(Vec<EdgeLine>),
    Table(DistanceTable),
    Exported { path: PathBuf, rows: usize },
    Help,
    Quit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::VertexAdded { id, label } => write!(f, "added vertex '{label}' ({id})"),
            Outcome::EdgeAdded { id } => write!(f, "added edge {id}"),
            Outcome::EdgeRemoved { id } => write!(f, "removed edge {id}"),
            Outcome::VertexRemoved { label, edges } => {
                write!(f, "removed vertex '{label}' and {edges} edge(s)")
            }
            Outcome::Cleared => f.write_str("cleared"),
            Outcome::Vertices(labels) if labels.is_empty() => f.write_str("no vertices"),
            Outcome::Vertices(labels) => f.write_str(&labels.join("\n")),
            Outcome::Edges(lines) if lines.is_empty() => f.write_str("the graph has no edges"),
            Outcome::Edges(lines) => {
                let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
                f.write_str(&text.join("\n"))
            }
            Outcome::Table(table) if table.is_empty() => f.write_str("the graph is empty"),
            Outcome::Table(table) => f.write_str(table.render_text().trim_end_matches('\n')),
            Outcome::Exported { path, rows } => {
                write!(f, "exported {rows} row(s) to {}", path.display())
            }
            Outcome::Help => f.write_str(HELP),
            Outcome::Quit => f.write_str("bye"),
        }
    }
}

/// Split a line into tokens, honouring double quotes.
pub fn tokenize(line: &str) -> AppResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_quotes {
        return Err(AppError::InvalidInput("unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parse one line. Returns `None` for blank lines and comments.
pub fn parse_line(line: &str) -> AppResult<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (name.as_str(), args) {
        ("add-vertex", [label]) => Command::AddVertex {
            label: label.clone(),
        },
        ("add-edge", [from, to, weight]) => Command::AddEdge {
            from: from.clone(),
            to: to.clone(),
            weight: weight.clone(),
        },
        ("remove-edge", [id]) => Command::RemoveEdge {
            id: id.parse().map_err(|_| {
                AppError::InvalidInput(format!("'{id}' is not an edge id"))
            })?,
        },
        ("remove-vertex", [label]) => Command::RemoveVertex {
            label: label.clone(),
        },
        ("clear", []) => Command::Clear,
        ("vertices", []) => Command::Vertices,
        ("edges", []) => Command::Edges,
        ("solve", []) => Command::Solve,
        ("export", [path]) => Command::Export {
            path: PathBuf::from(path),
            header: false,
        },
        ("export", [path, flag]) if flag == "--header" => Command::Export {
            path: PathBuf::from(path),
            header: true,
        },
        ("help", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        (
            "add-vertex" | "add-edge" | "remove-edge" | "remove-vertex" | "clear" | "vertices"
            | "edges" | "solve" | "export" | "help" | "quit" | "exit",
            _,
        ) => {
            return Err(AppError::InvalidInput(format!(
                "wrong arguments for '{name}' (type 'help' for usage)"
            )));
        }
        _ => return Err(AppError::UnknownCommand(name.clone())),
    };
    Ok(Some(command))
}

/// Apply a command to a session.
pub fn execute(session: &mut GraphSession, command: Command) -> AppResult<Outcome> {
    let outcome = match command {
        Command::AddVertex { label } => {
            let id = session.add_vertex(&label)?;
            Outcome::VertexAdded {
                id,
                label: label.trim().to_string(),
            }
        }
        Command::AddEdge { from, to, weight } => Outcome::EdgeAdded {
            id: session.add_edge(&from, &to, &weight)?,
        },
        Command::RemoveEdge { id } => {
            session.remove_edge(id)?;
            Outcome::EdgeRemoved { id }
        }
        Command::RemoveVertex { label } => {
            let edges = session.remove_vertex(&label)?;
            Outcome::VertexRemoved {
                label: label.trim().to_string(),
                edges,
            }
        }
        Command::Clear => {
            session.clear();
            Outcome::Cleared
        }
        Command::Vertices => {
            Outcome::Vertices(session.vertices().into_iter().map(String::from).collect())
        }
        Command::Edges => Outcome::Edges(
            session
                .edges()
                .into_iter()
                .map(|e| EdgeLine {
                    id: e.id,
                    from: e.from.to_string(),
                    to: e.to.to_string(),
                    weight: e.weight,
                })
                .collect(),
        ),
        Command::Solve => Outcome::Table(session.compute()),
        Command::Export { path, header } => {
            let rows = session.compute().write_tsv(&path, header)?;
            Outcome::Exported { path, rows }
        }
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Parse and apply one line. Blank lines and comments yield `None`.
pub fn execute_line(session: &mut GraphSession, line: &str) -> AppResult<Option<Outcome>> {
    match parse_line(line)? {
        Some(command) => execute(session, command).map(Some),
        None => Ok(None),
    }
}

/// Run a whole script, stopping at the first failing line or at `quit`.
///
/// Errors carry the 1-based line number.
pub fn run_script(session: &mut GraphSession, source: &str) -> AppResult<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for (n, line) in source.lines().enumerate() {
        let outcome = execute_line(session, line).map_err(|e| AppError::Script {
            line: n + 1,
            source: Box::new(e),
        })?;
        match outcome {
            Some(Outcome::Quit) => break,
            Some(outcome) => outcomes.push(outcome),
            None => {}
        }
    }
    Ok(outcomes)
}
