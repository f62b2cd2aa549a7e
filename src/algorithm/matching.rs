//! Tile compatibility predicate
//!
//! Edges are hard constraints on every selected side. Border patterns are
//! only compared on sides that neither tile marks as ignored.

use crate::algorithm::codec::{ALL_SIDES, shrink_pairs};
use crate::catalog::entry::TileCatalogEntry;

/// Sides on which both tiles require border agreement
pub fn border_checked_sides(a: &TileCatalogEntry, b: &TileCatalogEntry) -> u8 {
    (!a.ignore_mask() & ALL_SIDES) & (!b.ignore_mask() & ALL_SIDES)
}

/// Sides on which two tiles disagree, before applying a select mask
pub fn mismatched_sides(query: &TileCatalogEntry, candidate: &TileCatalogEntry) -> u8 {
    let border_mismatch = shrink_pairs(query.border_mask() ^ candidate.border_mask())
        & border_checked_sides(query, candidate);
    let edge_mismatch = query.edge_mask() ^ candidate.edge_mask();
    (border_mismatch | edge_mismatch) & ALL_SIDES
}

/// Whether `candidate` satisfies `query` on every side in `select_mask`
///
/// Symmetric in its two tile arguments.
pub fn is_matching(query: &TileCatalogEntry, candidate: &TileCatalogEntry, select_mask: u8) -> bool {
    mismatched_sides(query, candidate) & select_mask == 0
}
