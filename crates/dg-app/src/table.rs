//! Labeled distance tables and their text exports.
//!
//! Finite distances render as plain integers; unreachable pairs render as an
//! empty cell. Exporters never need to know how distances were computed.

use std::path::Path;

use dg_solver::{Distance, DistanceMatrix};
use serde::Serialize;
use tracing::info;

use crate::error::{AppError, AppResult};

/// A distance matrix prepared for display and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    matrix: DistanceMatrix,
}

#[derive(Serialize)]
struct TableJson<'a> {
    labels: &'a [String],
    rows: Vec<&'a [Distance]>,
}

impl DistanceTable {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> DistanceMatrix {
        self.matrix
    }

    pub fn labels(&self) -> &[String] {
        self.matrix.labels()
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Cell text at `(i, j)`: the distance, or `""` when unreachable.
    pub fn cell(&self, i: usize, j: usize) -> Option<String> {
        self.matrix.get(i, j).map(cell_text)
    }

    /// Rows of cell text.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.matrix
            .rows()
            .map(|row| row.iter().copied().map(cell_text).collect())
            .collect()
    }

    /// Tab-separated rows, one line per vertex, no header.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for row in self.cells() {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }

    /// Tab-separated rows with a label header and a label column.
    ///
    /// The first header cell is empty so columns line up with the rows.
    pub fn to_tsv_with_header(&self) -> String {
        let mut out = String::new();
        out.push('\t');
        out.push_str(&self.labels().join("\t"));
        out.push('\n');
        for (label, row) in self.labels().iter().zip(self.cells()) {
            out.push_str(label);
            for cell in row {
                out.push('\t');
                out.push_str(&cell);
            }
            out.push('\n');
        }
        out
    }

    /// `{"labels": [...], "rows": [[n | null, ...], ...]}`.
    pub fn to_json(&self) -> AppResult<String> {
        let doc = TableJson {
            labels: self.labels(),
            rows: self.matrix.rows().collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Column-aligned table for terminals.
    pub fn render_text(&self) -> String {
        let cells = self.cells();
        let width = self
            .labels()
            .iter()
            .map(|l| l.chars().count())
            .chain(cells.iter().flatten().map(|c| c.chars().count()))
            .max()
            .unwrap_or(0);

        let mut out = format!("{:width$}", "");
        for label in self.labels() {
            out.push_str(&format!("  {label:>width$}"));
        }
        out.push('\n');
        for (label, row) in self.labels().iter().zip(&cells) {
            out.push_str(&format!("{label:<width$}"));
            for cell in row {
                out.push_str(&format!("  {cell:>width$}"));
            }
            out.push('\n');
        }
        out
    }

    /// Write the table as TSV and return the number of rows written.
    pub fn write_tsv(&self, path: &Path, with_header: bool) -> AppResult<usize> {
        let content = if with_header {
            self.to_tsv_with_header()
        } else {
            self.to_tsv()
        };
        std::fs::write(path, content).map_err(|e| AppError::TableFileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), rows = self.len(), "exported distance table");
        Ok(self.len())
    }
}

fn cell_text(d: Distance) -> String {
    match d {
        Distance::Finite(v) => v.to_string(),
        Distance::Unreachable => String::new(),
    }
}
