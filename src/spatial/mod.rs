//! Spatial data structures for the map lattice
//!
//! This module contains spatial-related functionality including:
//! - Land/ocean vertex lattices and their generation strategies
//! - Edges between adjacent vertices and their shared border state
//! - The grid of resolved map cells

/// Edges between adjacent vertices
pub mod edges;
/// Grid of map cells
pub mod grid;
/// Land/ocean vertex lattice
pub mod vertex;

pub use grid::MapGrid;
