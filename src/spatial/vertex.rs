//! Land/ocean vertex lattice and the strategies that fill it
//!
//! A `width` x `height` map has `(width + 1) x (height + 1)` corner vertices.
//! Both strategies force the outer ring of the lattice to ocean so the map
//! always ends in coastline.

use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{PARCEL_CENTER_JITTER_MAX, PARCEL_CENTER_JITTER_MIN};
use crate::io::error::{Result, invalid_parameter, vertex_lookup_error};
use clap::ValueEnum;
use ndarray::Array2;

/// A lattice corner with its land/ocean tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    /// Lattice coordinate `[col, row]`
    pub coord: [usize; 2],
    /// Whether the corner is land
    pub land: bool,
}

/// Land/ocean tag for every corner of the map lattice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexField {
    /// Indexed by `[row, col]`
    land: Array2<bool>,
}

impl VertexField {
    /// All-ocean lattice for a `width` x `height` map
    pub fn ocean(width: usize, height: usize) -> Self {
        Self {
            land: Array2::from_elem((height + 1, width + 1), false),
        }
    }

    /// Wrap an explicit lattice indexed by `[row, col]`
    ///
    /// # Errors
    ///
    /// Returns an error if the lattice has fewer than two rows or columns,
    /// i.e. describes a map without cells
    pub fn from_land(land: Array2<bool>) -> Result<Self> {
        let (rows, cols) = land.dim();
        if rows < 2 || cols < 2 {
            return Err(invalid_parameter(
                "vertex lattice",
                &format!("{cols}x{rows}"),
                &"a lattice needs at least 2x2 corners",
            ));
        }
        Ok(Self { land })
    }

    /// Map width in cells
    pub fn map_width(&self) -> usize {
        self.land.ncols().saturating_sub(1)
    }

    /// Map height in cells
    pub fn map_height(&self) -> usize {
        self.land.nrows().saturating_sub(1)
    }

    /// Land tag of the vertex at `[col, row]`
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::IdentityLookup`] if no vertex exists there
    pub fn is_land(&self, coord: [usize; 2]) -> Result<bool> {
        self.land
            .get([coord[1], coord[0]])
            .copied()
            .ok_or_else(|| vertex_lookup_error(coord))
    }

    /// Number of land vertices
    pub fn land_count(&self) -> usize {
        self.land.iter().filter(|&&land| land).count()
    }

    /// Every vertex in row-major order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.land.indexed_iter().map(|((row, col), &land)| Vertex {
            coord: [col, row],
            land,
        })
    }

    /// Underlying lattice indexed by `[row, col]`
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.land
    }
}

/// Strategy that assigns land/ocean tags to a fresh lattice
pub trait LandAssignment {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fill the lattice for a `width` x `height` map
    fn assign(&self, width: usize, height: usize, selector: &mut RandomSelector) -> VertexField;
}

/// Independent land draw per interior corner, ocean ring around the map
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformStrategy {
    /// Probability that an interior corner is land
    pub land_probability: f64,
}

impl LandAssignment for UniformStrategy {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn assign(&self, width: usize, height: usize, selector: &mut RandomSelector) -> VertexField {
        let mut field = VertexField::ocean(width, height);
        let (rows, cols) = field.land.dim();
        for ((row, col), land) in field.land.indexed_iter_mut() {
            let boundary = row == 0 || col == 0 || row + 1 == rows || col + 1 == cols;
            *land = !boundary && selector.chance(self.land_probability);
        }
        field
    }
}

/// Axis-aligned block of lattice corners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parcel {
    /// Leftmost column
    pub col: usize,
    /// Topmost row
    pub row: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Parcel {
    /// Whether the parcel covers no corners
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `[col, row]` lies inside the parcel
    pub const fn contains(&self, coord: [usize; 2]) -> bool {
        coord[0] >= self.col
            && coord[0] < self.col + self.width
            && coord[1] >= self.row
            && coord[1] < self.row + self.height
    }

    /// Whether `[col, row]` lies on the parcel's own outer ring
    pub const fn is_on_boundary(&self, coord: [usize; 2]) -> bool {
        self.contains(coord)
            && (coord[0] == self.col
                || coord[1] == self.row
                || coord[0] + 1 == self.col + self.width
                || coord[1] + 1 == self.row + self.height)
    }
}

/// Three independently filled parcels separated by ocean seams
///
/// A jittered center splits the lattice into a top-left block, a
/// bottom-left block and a full-height right block:
///
/// ```text
/// +-----+--------+
/// |  A  |        |
/// +-----*   C    |
/// |  B  |        |
/// +-----+--------+
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParceledStrategy {
    /// Probability that a parcel-interior corner is land
    pub land_probability: f64,
}

impl ParceledStrategy {
    /// Split a `cols` x `rows` lattice around a jittered center
    pub fn parcels(cols: usize, rows: usize, selector: &mut RandomSelector) -> [Parcel; 3] {
        let cx = jittered_center(cols, selector);
        let cy = jittered_center(rows, selector);
        [
            Parcel {
                col: 0,
                row: 0,
                width: cx,
                height: cy,
            },
            Parcel {
                col: 0,
                row: cy,
                width: cx,
                height: rows - cy,
            },
            Parcel {
                col: cx,
                row: 0,
                width: cols - cx,
                height: rows,
            },
        ]
    }
}

// Midpoint plus jitter, kept inside [0, len]
fn jittered_center(len: usize, selector: &mut RandomSelector) -> usize {
    let offset = selector.offset(PARCEL_CENTER_JITTER_MIN, PARCEL_CENTER_JITTER_MAX);
    let center = (len / 2) as i64 + i64::from(offset);
    usize::try_from(center.max(0)).unwrap_or(0).min(len)
}

impl LandAssignment for ParceledStrategy {
    fn name(&self) -> &'static str {
        "parceled"
    }

    fn assign(&self, width: usize, height: usize, selector: &mut RandomSelector) -> VertexField {
        let mut field = VertexField::ocean(width, height);
        let (rows, cols) = field.land.dim();

        for parcel in Self::parcels(cols, rows, selector) {
            if parcel.is_empty() {
                continue;
            }
            for row in parcel.row..parcel.row + parcel.height {
                for col in parcel.col..parcel.col + parcel.width {
                    let land = !parcel.is_on_boundary([col, row])
                        && selector.chance(self.land_probability);
                    if let Some(cell) = field.land.get_mut([row, col]) {
                        *cell = land;
                    }
                }
            }
        }
        field
    }
}

/// Selectable vertex generation strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// [`UniformStrategy`]
    Uniform,
    /// [`ParceledStrategy`]
    #[default]
    Parceled,
}

impl StrategyKind {
    /// Instantiate the strategy with the given land probability
    pub fn build(self, land_probability: f64) -> Box<dyn LandAssignment> {
        match self {
            Self::Uniform => Box::new(UniformStrategy { land_probability }),
            Self::Parceled => Box::new(ParceledStrategy { land_probability }),
        }
    }
}
