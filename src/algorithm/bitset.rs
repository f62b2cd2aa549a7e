use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of catalog positions that satisfy a query
///
/// Indices are 0-based positions in the catalog. Iteration follows catalog
/// order, which is the tie-break order before random selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no candidates over a catalog of `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set containing every catalog position
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Insert a catalog position; positions past the capacity are ignored
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Test if no candidates are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count candidates in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th candidate in catalog order
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Iterate over candidates in catalog order
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.bits.iter_ones()
    }

    /// Extract all candidate positions as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
