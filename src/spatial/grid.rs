//! Grid of map cells and the catalog entry chosen for each

use crate::catalog::entry::TileCatalogEntry;
use crate::catalog::tiles::TileCatalog;
use ndarray::Array2;

/// A map cell and its resolved catalog position, if any
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Cell coordinate `[col, row]`
    pub coord: [usize; 2],
    /// Catalog position of the chosen tile
    pub tile: Option<usize>,
}

/// `width` x `height` cells, each resolved at most once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    /// Catalog positions indexed by `[row, col]`
    tiles: Array2<Option<usize>>,
}

impl MapGrid {
    /// Create a grid with every cell unresolved
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Array2::from_elem((height, width), None),
        }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Catalog position chosen for the cell at `[col, row]`
    pub fn tile(&self, coord: [usize; 2]) -> Option<usize> {
        self.tiles.get([coord[1], coord[0]]).copied().flatten()
    }

    /// Catalog entry chosen for the cell at `[col, row]`
    pub fn entry<'a>(
        &self,
        coord: [usize; 2],
        catalog: &'a TileCatalog,
    ) -> Option<&'a TileCatalogEntry> {
        self.tile(coord).and_then(|index| catalog.get(index))
    }

    /// Record the tile for a cell
    ///
    /// Returns `false` without changing anything if the cell is outside the
    /// grid or already resolved.
    pub(crate) fn assign(&mut self, coord: [usize; 2], tile: usize) -> bool {
        match self.tiles.get_mut([coord[1], coord[0]]) {
            Some(slot) if slot.is_none() => {
                *slot = Some(tile);
                true
            }
            _ => false,
        }
    }

    /// Number of resolved cells
    pub fn resolved_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    /// Whether every cell has a tile
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(Option::is_some)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| Cell {
                coord: [col, row],
                tile,
            })
    }

    /// Catalog positions indexed by `[row, col]`
    pub const fn as_array(&self) -> &Array2<Option<usize>> {
        &self.tiles
    }
}
