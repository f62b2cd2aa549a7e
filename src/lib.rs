//! Greedy Wang-tile map assembly for tile-based board game maps
//!
//! A land/ocean lattice is drawn over the map corners, every pair of adjacent
//! corners becomes an edge, and the cells are then resolved one at a time in
//! row-major order by picking a catalog tile whose edges and border patterns
//! agree with the neighbours already placed.

#![forbid(unsafe_code)]

/// Matching, selection and the greedy assembly algorithm
pub mod algorithm;
/// Tile descriptors and catalog queries
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Vertex lattice, edge graph and map grid
pub mod spatial;

pub use io::error::{MapError, Result};
