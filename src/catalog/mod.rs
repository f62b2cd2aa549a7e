//! Tile descriptors and the catalog they are matched against
//!
//! This module contains:
//! - Descriptor parsing and the immutable catalog entry
//! - Catalog queries by edge mask, border mask and full match
//! - Quarter-turn variants of entries

/// Tile descriptors and their bit-string encoding
pub mod entry;
/// Quarter-turn variants of catalog entries
pub mod rotation;
/// In-memory tile catalog and its queries
pub mod tiles;

pub use entry::TileCatalogEntry;
pub use tiles::TileCatalog;
