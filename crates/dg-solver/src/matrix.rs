//! Dense, labeled all-pairs distance matrix.

use dg_core::{DgError, DgResult};

use crate::distance::Distance;

/// N×N distances stored row-major, together with the vertex labels that
/// index its rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMatrix {
    labels: Vec<String>,
    data: Vec<Distance>,
}

impl DistanceMatrix {
    /// Matrix with zero on the diagonal and `Unreachable` everywhere else.
    pub fn unconnected(labels: Vec<String>) -> Self {
        let n = labels.len();
        let mut data = vec![Distance::Unreachable; n * n];
        for i in 0..n {
            data[i * n + i] = Distance::ZERO;
        }
        Self { labels, data }
    }

    /// Build a matrix from labels and row-major cells.
    ///
    /// `data` must hold exactly `labels.len()²` cells.
    pub fn from_parts(labels: Vec<String>, data: Vec<Distance>) -> DgResult<Self> {
        let expected = labels.len() * labels.len();
        if data.len() != expected {
            return Err(DgError::ShapeMismatch {
                what: "distance matrix cells",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { labels, data })
    }

    /// Number of vertices (rows).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row/column labels, in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Position of `label`, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Distance from vertex `i` to vertex `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<Distance> {
        let n = self.len();
        if i >= n || j >= n {
            return None;
        }
        Some(self.data[i * n + j])
    }

    /// Distance between two vertices named by label.
    pub fn get_by_label(&self, from: &str, to: &str) -> Option<Distance> {
        self.get(self.index_of(from)?, self.index_of(to)?)
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[Distance]> {
        let n = self.len();
        (i < n).then(|| &self.data[i * n..(i + 1) * n])
    }

    /// All rows, in index order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Distance]> + '_ {
        let n = self.len();
        (0..n).map(move |i| &self.data[i * n..(i + 1) * n])
    }

    /// Whether `dist[i][j] == dist[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.data[i * n + j] == self.data[j * n + i]))
    }

    /// Lower `dist[i][j]` and `dist[j][i]` to `d` if it is smaller.
    pub(crate) fn lower_symmetric(&mut self, i: usize, j: usize, d: Distance) {
        let n = self.len();
        for idx in [i * n + j, j * n + i] {
            if d < self.data[idx] {
                self.data[idx] = d;
            }
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Distance] {
        &mut self.data
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DistanceMatrix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            labels: Vec<String>,
            data: Vec<Distance>,
        }

        let raw = Raw::deserialize(deserializer)?;
        DistanceMatrix::from_parts(raw.labels, raw.data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unconnected_layout() {
        let m = DistanceMatrix::unconnected(labels(&["A", "B", "C"]));
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j {
                    Distance::ZERO
                } else {
                    Distance::Unreachable
                };
                assert_eq!(m.get(i, j), Some(expected));
            }
        }
        assert_eq!(m.get(3, 0), None);
        assert!(m.is_symmetric());
    }

    #[test]
    fn from_parts_checks_cell_count() {
        let m = DistanceMatrix::from_parts(
            labels(&["A", "B"]),
            vec![
                Distance::ZERO,
                Distance::Finite(3),
                Distance::Finite(3),
                Distance::ZERO,
            ],
        )
        .unwrap();
        assert_eq!(m.get(1, 0), Some(Distance::Finite(3)));

        assert_eq!(
            DistanceMatrix::from_parts(labels(&["A", "B"]), vec![Distance::ZERO]),
            Err(DgError::ShapeMismatch {
                what: "distance matrix cells",
                expected: 4,
                actual: 1,
            })
        );
        assert!(DistanceMatrix::from_parts(Vec::new(), Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn empty_matrix() {
        let m = DistanceMatrix::unconnected(Vec::new());
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.row(0), None);
    }

    #[test]
    fn lower_keeps_minimum() {
        let mut m = DistanceMatrix::unconnected(labels(&["A", "B"]));
        m.lower_symmetric(0, 1, Distance::Finite(5));
        m.lower_symmetric(1, 0, Distance::Finite(2));
        m.lower_symmetric(0, 1, Distance::Finite(9));
        assert_eq!(m.get_by_label("A", "B"), Some(Distance::Finite(2)));
        assert_eq!(m.get_by_label("B", "A"), Some(Distance::Finite(2)));
        assert_eq!(m.get_by_label("A", "Z"), None);

        // self-loops never lower the diagonal
        m.lower_symmetric(0, 0, Distance::Finite(4));
        assert_eq!(m.get(0, 0), Some(Distance::ZERO));
    }

    #[test]
    fn rows_are_slices() {
        let mut m = DistanceMatrix::unconnected(labels(&["A", "B"]));
        m.lower_symmetric(0, 1, Distance::Finite(1));
        let rows: Vec<Vec<Distance>> = m.rows().map(|r| r.to_vec()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Distance::ZERO, Distance::Finite(1)],
                vec![Distance::Finite(1), Distance::ZERO],
            ]
        );
        assert_eq!(m.row(1), Some(rows[1].as_slice()));
    }
}
