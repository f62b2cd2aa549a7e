//! Quarter-turn variants of catalog entries
//!
//! Rotating a tile shifts each side's attributes to the next side clockwise.
//! Border codes move as whole 2-bit groups; the order of the two corner
//! points inside a group is preserved.

use crate::catalog::entry::TileCatalogEntry;

/// Rotation applied to a tile relative to its source image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Source orientation
    #[default]
    Identity,
    /// One quarter turn clockwise
    Clockwise,
    /// Two quarter turns
    HalfTurn,
    /// One quarter turn counter-clockwise
    CounterClockwise,
}

impl Orientation {
    /// Orientations derived for every rotatable tile, in catalog order
    pub const DERIVED: [Self; 3] = [Self::Clockwise, Self::CounterClockwise, Self::HalfTurn];

    /// Number of clockwise quarter turns
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Identity => 0,
            Self::Clockwise => 1,
            Self::HalfTurn => 2,
            Self::CounterClockwise => 3,
        }
    }

    /// Orientation after `turns` clockwise quarter turns
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Identity,
            1 => Self::Clockwise,
            2 => Self::HalfTurn,
            _ => Self::CounterClockwise,
        }
    }

    /// Apply `next` after `self`
    #[must_use]
    pub const fn then(self, next: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + next.quarter_turns())
    }
}

/// Whether an entry gets rotated variants
///
/// All-ocean tiles (edge mask `0000`) stay in their source orientation.
pub fn is_rotatable(entry: &TileCatalogEntry) -> bool {
    entry.edge_mask() != 0
}

/// Originals followed by the rotated variants of each rotatable entry
pub fn derive_rotations(entries: &[TileCatalogEntry]) -> Vec<TileCatalogEntry> {
    let mut result = entries.to_vec();
    for entry in entries.iter().filter(|entry| is_rotatable(entry)) {
        result.extend(
            Orientation::DERIVED
                .iter()
                .map(|&orientation| entry.rotated(orientation)),
        );
    }
    result
}
