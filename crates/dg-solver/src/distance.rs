//! Shortest-path distances with an explicit unreachable marker.

use core::fmt;

use dg_core::Weight;

/// Distance between two vertices.
///
/// `Unreachable` is a separate variant rather than a magic number, so no
/// finite distance can ever be mistaken for it. Ordering puts every finite
/// distance below `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Option<u64>", from = "Option<u64>")
)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub const fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, or `None` when unreachable.
    pub const fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    /// Path concatenation: unreachable absorbs, finite sums saturate.
    pub const fn saturating_add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Unreachable,
        }
    }
}

impl From<Weight> for Distance {
    fn from(w: Weight) -> Self {
        Distance::Finite(u64::from(w))
    }
}

impl From<Option<u64>> for Distance {
    fn from(d: Option<u64>) -> Self {
        d.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl From<Distance> for Option<u64> {
    fn from(d: Distance) -> Self {
        d.finite()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("∞"),
        }
    }
}
