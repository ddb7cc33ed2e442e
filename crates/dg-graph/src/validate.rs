//! Input validation shared by the store and hand-built snapshots.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::snapshot::IndexedEdge;

/// Normalize a user-entered label: surrounding whitespace is dropped and the
/// remainder must be non-empty.
pub(crate) fn normalize_label(raw: &str) -> GraphResult<&str> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(GraphError::EmptyLabel);
    }
    Ok(label)
}

/// Validate a label list for a snapshot with the same rule the store applies
/// on insert: labels compare after trimming and must be non-empty and unique.
pub(crate) fn validate_labels(labels: &[String]) -> GraphResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(labels.len());
    for raw in labels {
        let label = normalize_label(raw)?;
        if !seen.insert(label) {
            return Err(GraphError::DuplicateLabel {
                label: label.to_string(),
            });
        }
    }
    Ok(())
}

/// Validate that every edge endpoint indexes into a list of `len` vertices.
pub(crate) fn validate_edge_indices(edges: &[IndexedEdge], len: usize) -> GraphResult<()> {
    for edge in edges {
        for index in [edge.i, edge.j] {
            if index >= len {
                return Err(GraphError::IndexOutOfRange {
                    what: "edge endpoint",
                    index,
                    len,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::Weight;

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_label("  A ").unwrap(), "A");
        assert_eq!(normalize_label("New York").unwrap(), "New York");
        assert_eq!(normalize_label(""), Err(GraphError::EmptyLabel));
        assert_eq!(normalize_label(" \t\n"), Err(GraphError::EmptyLabel));
    }

    #[test]
    fn validate_empty_label_list() {
        assert!(validate_labels(&[]).is_ok());
        assert!(validate_edge_indices(&[], 0).is_ok());
    }

    #[test]
    fn validate_duplicate_labels() {
        let labels = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        assert_eq!(
            validate_labels(&labels),
            Err(GraphError::DuplicateLabel {
                label: "A".to_string()
            })
        );
    }

    #[test]
    fn validate_labels_compares_trimmed() {
        let labels = vec![" A".to_string(), "A".to_string()];
        assert_eq!(
            validate_labels(&labels),
            Err(GraphError::DuplicateLabel {
                label: "A".to_string()
            })
        );
        let labels = vec!["A ".to_string(), "B".to_string()];
        assert!(validate_labels(&labels).is_ok());
    }

    #[test]
    fn validate_edge_out_of_range() {
        let edges = vec![IndexedEdge {
            i: 0,
            j: 2,
            weight: Weight::new(1),
        }];
        assert_eq!(
            validate_edge_indices(&edges, 2),
            Err(GraphError::IndexOutOfRange {
                what: "edge endpoint",
                index: 2,
                len: 2,
            })
        );
        assert!(validate_edge_indices(&edges, 3).is_ok());
    }
}
