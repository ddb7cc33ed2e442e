use core::fmt;
use core::num::NonZeroU32;

use crate::DgError;

/// Compact, stable identifier for graph items.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Like [`Id::from_index`], but returns `None` when `index + 1` overflows.
    pub fn try_from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl core::str::FromStr for Id {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(Id::try_from_index)
            .ok_or(DgError::InvalidArg {
                what: "id must be an integer between 0 and 4294967294",
            })
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type VertexId = Id;
pub type EdgeId = Id;

/// Monotonic allocator handing out ids that are never reused.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the id the next call to [`IdAllocator::allocate`] would return.
    pub fn peek(&self) -> Option<Id> {
        Id::try_from_index(self.next)
    }

    /// Allocate a fresh id, or `None` once the id space is exhausted.
    pub fn allocate(&mut self) -> Option<Id> {
        let id = self.peek()?;
        self.next += 1;
        Some(id)
    }
}
