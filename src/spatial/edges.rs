//! Edges between adjacent lattice vertices and their shared border state
//!
//! Each edge is written once, by the first of its two cells to be resolved,
//! and read by the second. Edges on the outer map boundary only ever have one
//! cell.

use crate::algorithm::codec::PerSide;
use crate::io::error::{Result, edge_lookup_error};
use crate::spatial::vertex::VertexField;
use std::collections::HashMap;

/// Endpoints of an edge in canonical order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    low: [usize; 2],
    high: [usize; 2],
}

impl EdgeKey {
    /// Key for the edge between `a` and `b`, in either order
    pub fn new(a: [usize; 2], b: [usize; 2]) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Endpoints as `[col, row]` pairs, lower one first
    pub const fn endpoints(&self) -> ([usize; 2], [usize; 2]) {
        (self.low, self.high)
    }
}

/// Border constraint left on an edge by the first cell that resolved it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeState {
    /// 2-bit border code in the writer's orientation
    pub border_code: u8,
    /// Whether the writer waives border agreement on this edge
    pub ignore_border: bool,
}

/// Edge between two adjacent vertices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    key: EdgeKey,
    land: bool,
    state: Option<EdgeState>,
}

impl Edge {
    /// Endpoints of this edge
    pub const fn key(&self) -> EdgeKey {
        self.key
    }

    /// Land iff both endpoints are land
    pub const fn is_land(&self) -> bool {
        self.land
    }

    /// Border constraint, once an adjacent cell has been resolved
    pub const fn state(&self) -> Option<EdgeState> {
        self.state
    }

    /// Whether an adjacent cell has written its constraint
    pub const fn is_resolved(&self) -> bool {
        self.state.is_some()
    }
}

/// Every edge of the vertex lattice, indexed by endpoints
#[derive(Clone, Debug)]
pub struct EdgeGraph {
    edges: Vec<Edge>,
    index: HashMap<EdgeKey, usize>,
}

impl EdgeGraph {
    /// Number of edges in the lattice of a `width` x `height` map
    pub const fn expected_edge_count(width: usize, height: usize) -> usize {
        width * (height + 1) + height * (width + 1)
    }

    /// Derive one edge per horizontally or vertically adjacent vertex pair
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::IdentityLookup`] if a vertex is missing or an edge
    /// would be registered twice
    pub fn from_vertices(field: &VertexField) -> Result<Self> {
        let width = field.map_width();
        let height = field.map_height();
        let capacity = Self::expected_edge_count(width, height);
        let mut graph = Self {
            edges: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        };

        for row in 0..=height {
            for col in 0..=width {
                let here = [col, row];
                if col < width {
                    graph.insert(field, here, [col + 1, row])?;
                }
                if row < height {
                    graph.insert(field, here, [col, row + 1])?;
                }
            }
        }
        Ok(graph)
    }

    fn insert(&mut self, field: &VertexField, a: [usize; 2], b: [usize; 2]) -> Result<()> {
        let key = EdgeKey::new(a, b);
        let land = field.is_land(a)? && field.is_land(b)?;
        if self.index.insert(key, self.edges.len()).is_some() {
            return Err(edge_lookup_error(a, b, 2));
        }
        self.edges.push(Edge {
            key,
            land,
            state: None,
        });
        Ok(())
    }

    /// Edge between `a` and `b`, in either order
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::IdentityLookup`] if the vertices are not adjacent
    /// lattice points
    pub fn lookup(&self, a: [usize; 2], b: [usize; 2]) -> Result<&Edge> {
        self.index
            .get(&EdgeKey::new(a, b))
            .and_then(|&position| self.edges.get(position))
            .ok_or_else(|| edge_lookup_error(a, b, 0))
    }

    /// Record the first adjacent cell's constraint on an edge
    ///
    /// Returns `false` and leaves the edge untouched if it was already
    /// resolved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::IdentityLookup`] if the edge does not exist
    pub fn resolve(&mut self, a: [usize; 2], b: [usize; 2], state: EdgeState) -> Result<bool> {
        let edge = self
            .index
            .get(&EdgeKey::new(a, b))
            .and_then(|&position| self.edges.get_mut(position))
            .ok_or_else(|| edge_lookup_error(a, b, 0))?;
        if edge.state.is_some() {
            return Ok(false);
        }
        edge.state = Some(state);
        Ok(true)
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All edges in construction order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges of the cell at `[col, row]`, by side
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::IdentityLookup`] if the cell lies outside the map
    pub fn cell_edges(&self, cell: [usize; 2]) -> Result<PerSide<&Edge>> {
        let endpoints = cell_edge_endpoints(cell);
        Ok(PerSide::new(
            self.lookup(endpoints.top.0, endpoints.top.1)?,
            self.lookup(endpoints.right.0, endpoints.right.1)?,
            self.lookup(endpoints.bottom.0, endpoints.bottom.1)?,
            self.lookup(endpoints.left.0, endpoints.left.1)?,
        ))
    }
}

/// Vertex pairs bounding the cell at `[col, row]`
///
/// The cell's top-left vertex shares its coordinate.
pub const fn cell_edge_endpoints(cell: [usize; 2]) -> PerSide<([usize; 2], [usize; 2])> {
    let [col, row] = cell;
    PerSide::new(
        ([col, row], [col + 1, row]),
        ([col + 1, row], [col + 1, row + 1]),
        ([col, row + 1], [col + 1, row + 1]),
        ([col, row], [col, row + 1]),
    )
}
