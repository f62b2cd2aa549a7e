//! In-memory tile catalog and its query operations
//!
//! Every query returns entries in catalog order and leaves the catalog
//! untouched.

use crate::algorithm::bitset::CandidateSet;
use crate::algorithm::codec::{ALL_SIDES, expand_pairs};
use crate::algorithm::matching::is_matching;
use crate::catalog::entry::{TileCatalogEntry, TileDescriptor};
use crate::catalog::rotation::derive_rotations;
use crate::io::error::Result;

/// Ordered collection of tile entries
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileCatalog {
    entries: Vec<TileCatalogEntry>,
}

impl TileCatalog {
    /// Create a catalog from already-validated entries
    pub const fn new(entries: Vec<TileCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Validate raw descriptors and build a catalog
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::MalformedCatalogEntry`] for the first
    /// descriptor with an invalid bit string; no catalog is built in that case
    pub fn from_descriptors(descriptors: &[TileDescriptor]) -> Result<Self> {
        let entries = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| descriptor.parse(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(entries))
    }

    /// Catalog extended with clockwise, counter-clockwise and half-turn
    /// variants of every tile that has at least one land edge
    #[must_use]
    pub fn with_rotations(&self) -> Self {
        Self::new(derive_rotations(&self.entries))
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a catalog position
    pub fn get(&self, index: usize) -> Option<&TileCatalogEntry> {
        self.entries.get(index)
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[TileCatalogEntry] {
        &self.entries
    }

    /// Positions of entries matching `query` on the sides in `select_mask`
    pub fn matching_indices(&self, query: &TileCatalogEntry, select_mask: u8) -> CandidateSet {
        let mut candidates = CandidateSet::new(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            if is_matching(query, entry, select_mask) {
                candidates.insert(index);
            }
        }
        candidates
    }

    /// Every entry compatible with `query` on all four sides
    pub fn find_exact_match(&self, query: &TileCatalogEntry) -> Vec<&TileCatalogEntry> {
        self.matching_indices(query, ALL_SIDES)
            .iter()
            .filter_map(|index| self.entries.get(index))
            .collect()
    }

    /// Entries whose edge mask equals `mask` on the bits in `select_mask`
    pub fn find_by_edge_mask(&self, mask: u8, select_mask: u8) -> Vec<&TileCatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| (entry.edge_mask() ^ mask) & select_mask & ALL_SIDES == 0)
            .collect()
    }

    /// Entries whose border mask equals `mask` on the selected sides
    ///
    /// A side the candidate itself ignores is dropped from the selection, so
    /// such a tile cannot be excluded by its border pattern on that side.
    pub fn find_by_border_mask(&self, mask: u8, select_mask: u8) -> Vec<&TileCatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                let selected = select_mask & !entry.ignore_mask() & ALL_SIDES;
                (entry.border_mask() ^ mask) & expand_pairs(selected) == 0
            })
            .collect()
    }
}

impl FromIterator<TileCatalogEntry> for TileCatalog {
    fn from_iter<I: IntoIterator<Item = TileCatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
