//! Row-major greedy map assembly
//!
//! Cells are resolved strictly left to right, top to bottom. When a cell is
//! reached its top and left edges already carry the constraints of the cells
//! above and to the left, while its bottom and right edges are still open.
//! The chosen tile then fixes the open edges for the cells that follow. There
//! is no backtracking: a cell without candidates ends the attempt.

use crate::algorithm::codec::{ALL_SIDES, PerSide, Side, swap_border_direction};
use crate::algorithm::selection::RandomSelector;
use crate::catalog::entry::TileCatalogEntry;
use crate::catalog::tiles::TileCatalog;
use crate::io::error::{MapError, Result};
use crate::spatial::edges::{Edge, EdgeGraph, EdgeState, cell_edge_endpoints};
use crate::spatial::grid::MapGrid;
use crate::spatial::vertex::VertexField;

/// A fully resolved map together with the lattice it was built on
#[derive(Clone, Debug)]
pub struct GeneratedMap {
    /// Chosen catalog position for every cell
    pub grid: MapGrid,
    /// Land/ocean tags the edges were derived from
    pub vertices: VertexField,
    /// Final edge state after every cell was resolved
    pub edges: EdgeGraph,
}

/// Per-side contribution of one edge to a cell's query
///
/// Open edges impose no border constraint; resolved top and left edges were
/// written from the other cell's side and need their border code reversed.
fn side_constraint(edge: &Edge, side: Side) -> (bool, u8, bool) {
    match edge.state() {
        Some(state) => {
            let border = if matches!(side, Side::Top | Side::Left) {
                swap_border_direction(state.border_code)
            } else {
                state.border_code
            };
            (edge.is_land(), border, state.ignore_border)
        }
        None => (edge.is_land(), 0, true),
    }
}

/// Greedy assembler for one generation attempt
///
/// Owns the edge graph for the duration of the attempt; nothing else may
/// observe it until [`MapAssembler::into_map`] hands it over.
pub struct MapAssembler<'a> {
    catalog: &'a TileCatalog,
    vertices: VertexField,
    edges: EdgeGraph,
    grid: MapGrid,
    next_cell: usize,
}

impl<'a> MapAssembler<'a> {
    /// Derive the edge graph for `vertices` and prepare an unresolved grid
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IdentityLookup`] if the lattice is inconsistent
    pub fn new(catalog: &'a TileCatalog, vertices: VertexField) -> Result<Self> {
        let edges = EdgeGraph::from_vertices(&vertices)?;
        let grid = MapGrid::new(vertices.map_width(), vertices.map_height());
        Ok(Self {
            catalog,
            vertices,
            edges,
            grid,
            next_cell: 0,
        })
    }

    /// Number of cells resolved so far
    pub const fn resolved_cells(&self) -> usize {
        self.next_cell
    }

    /// Total number of cells
    pub fn total_cells(&self) -> usize {
        self.grid.cell_count()
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &MapGrid {
        &self.grid
    }

    /// Edge graph in its current state
    pub const fn edges(&self) -> &EdgeGraph {
        &self.edges
    }

    /// Cell resolved by the next call to [`Self::resolve_next`]
    pub fn next_cell(&self) -> Option<[usize; 2]> {
        let width = self.grid.width();
        (self.next_cell < self.grid.cell_count())
            .then(|| [self.next_cell % width, self.next_cell / width])
    }

    /// Query descriptor assembled from the current state of a cell's edges
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IdentityLookup`] if the cell lies outside the map
    pub fn query_for_cell(&self, cell: [usize; 2]) -> Result<TileCatalogEntry> {
        let edges = self.edges.cell_edges(cell)?;
        let constraints = PerSide::from_fn(|side| side_constraint(edges[side], side));
        Ok(TileCatalogEntry::new(
            PerSide::from_fn(|side| constraints[side].0),
            PerSide::from_fn(|side| constraints[side].1),
            PerSide::from_fn(|side| constraints[side].2),
        ))
    }

    /// Resolve the next cell in row-major order
    ///
    /// Returns `false` once every cell has been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CatalogExhausted`] if no catalog entry matches the
    /// cell; the assembler must then be discarded
    pub fn resolve_next(&mut self, selector: &mut RandomSelector) -> Result<bool> {
        let Some(cell) = self.next_cell() else {
            return Ok(false);
        };

        let query = self.query_for_cell(cell)?;
        let candidates = self.catalog.matching_indices(&query, ALL_SIDES);
        let catalog = self.catalog;
        let chosen = selector
            .choose(&candidates)
            .and_then(|index| catalog.get(index).map(|entry| (index, entry)));
        let Some((index, entry)) = chosen else {
            return Err(MapError::CatalogExhausted {
                cell,
                attempt: 1,
                edge_mask: query.edge_mask(),
                border_mask: query.border_mask(),
                ignore_mask: query.ignore_mask(),
            });
        };

        // Only open edges take the new constraint
        for (side, &(a, b)) in cell_edge_endpoints(cell).iter() {
            let state = EdgeState {
                border_code: entry.border(side),
                ignore_border: entry.ignores_border(side),
            };
            self.edges.resolve(a, b, state)?;
        }
        self.grid.assign(cell, index);
        self.next_cell += 1;

        tracing::trace!(
            target: "wangmap::assembler",
            col = cell[0],
            row = cell[1],
            tile = index,
            candidates = candidates.count(),
            "cell.resolved"
        );
        Ok(true)
    }

    /// Resolve every remaining cell
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CatalogExhausted`] at the first cell without
    /// candidates
    pub fn run(mut self, selector: &mut RandomSelector) -> Result<GeneratedMap> {
        while self.resolve_next(selector)? {}
        Ok(self.into_map())
    }

    /// Hand over the grid, vertices and edges
    pub fn into_map(self) -> GeneratedMap {
        GeneratedMap {
            grid: self.grid,
            vertices: self.vertices,
            edges: self.edges,
        }
    }
}
