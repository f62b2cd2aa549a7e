//! Tile descriptors and their bit-string encoding
//!
//! Descriptors arrive as fixed-length binary strings read least-significant
//! bit first: character `i` is bit `i`, so the first character of an edge
//! mask is the top side.

use crate::algorithm::codec::{PerSide, Side};
use crate::catalog::rotation::Orientation;
use crate::io::error::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Number of binary digits in an edge or ignore mask string
pub const SIDE_MASK_DIGITS: usize = 4;
/// Number of binary digits in a border mask string
pub const BORDER_MASK_DIGITS: usize = 8;

/// Raw tile descriptor as it appears in a tile set file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// Land connectivity per side, 4 binary digits
    #[serde(rename = "edgemask")]
    pub edge_mask: String,
    /// Corner-point pattern, 2 binary digits per side
    #[serde(rename = "bordermask")]
    pub border_mask: String,
    /// Per-side "ignore border" flags, 4 binary digits
    #[serde(rename = "sflg")]
    pub ignore_mask: String,
    /// Image asset for this tile
    #[serde(rename = "file", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl TileDescriptor {
    /// Validate the bit strings and build an entry
    ///
    /// `index` is the descriptor's position in its source list and is only
    /// used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedCatalogEntry`] if a mask has the wrong
    /// length or contains characters other than `0` and `1`
    pub fn parse(&self, index: usize) -> Result<TileCatalogEntry> {
        let edge_mask = parse_bits(index, "edgemask", &self.edge_mask, SIDE_MASK_DIGITS)?;
        let border_mask = parse_bits(index, "bordermask", &self.border_mask, BORDER_MASK_DIGITS)?;
        let ignore_mask = parse_bits(index, "sflg", &self.ignore_mask, SIDE_MASK_DIGITS)?;

        let entry = TileCatalogEntry::from_masks(edge_mask, border_mask, ignore_mask);
        Ok(match &self.image {
            Some(path) => entry.with_image(path.clone()),
            None => entry,
        })
    }
}

fn parse_bits(index: usize, field: &'static str, value: &str, digits: usize) -> Result<u8> {
    let malformed = |reason: String| MapError::MalformedCatalogEntry {
        index,
        field,
        value: value.to_string(),
        reason,
    };

    let count = value.chars().count();
    if count != digits {
        return Err(malformed(format!(
            "expected {digits} binary digits, found {count}"
        )));
    }

    let mut bits = 0u8;
    for (position, digit) in value.chars().enumerate() {
        match digit {
            '0' => {}
            '1' => bits |= 1 << position,
            other => return Err(malformed(format!("invalid character '{other}'"))),
        }
    }
    Ok(bits)
}

fn format_bits(value: u8, digits: usize) -> String {
    (0..digits)
        .map(|position| if (value >> position) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Immutable descriptor of one physical tile
///
/// Matching only looks at the three per-side attributes; the image reference
/// and orientation are carried through for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCatalogEntry {
    edges: PerSide<bool>,
    borders: PerSide<u8>,
    ignore_border: PerSide<bool>,
    image_reference: Option<PathBuf>,
    orientation: Orientation,
}

impl TileCatalogEntry {
    /// Create an entry without an image from per-side values
    ///
    /// Border codes are truncated to their low two bits.
    pub fn new(edges: PerSide<bool>, borders: PerSide<u8>, ignore_border: PerSide<bool>) -> Self {
        Self {
            edges,
            borders: PerSide::from_fn(|side| borders[side] & 0b11),
            ignore_border,
            image_reference: None,
            orientation: Orientation::Identity,
        }
    }

    /// Create an entry without an image from packed masks
    pub fn from_masks(edge_mask: u8, border_mask: u8, ignore_mask: u8) -> Self {
        Self::new(
            PerSide::from_mask(edge_mask),
            PerSide::from_pair_mask(border_mask),
            PerSide::from_mask(ignore_mask),
        )
    }

    /// Attach an image reference
    #[must_use]
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_reference = Some(path.into());
        self
    }

    /// Turn the tile, moving every per-side attribute with it
    ///
    /// The resulting orientation composes with any rotation already applied,
    /// so the renderer turns the source image by the total amount.
    #[must_use]
    pub fn rotated(&self, orientation: Orientation) -> Self {
        let turns = orientation.quarter_turns();
        Self {
            edges: self.edges.rotated_clockwise(turns),
            borders: self.borders.rotated_clockwise(turns),
            ignore_border: self.ignore_border.rotated_clockwise(turns),
            image_reference: self.image_reference.clone(),
            orientation: self.orientation.then(orientation),
        }
    }

    /// 4-bit edge mask, land = 1
    pub fn edge_mask(&self) -> u8 {
        self.edges.to_mask()
    }

    /// 8-bit border mask, 2 bits per side
    pub fn border_mask(&self) -> u8 {
        self.borders.to_pair_mask()
    }

    /// 4-bit ignore mask, 1 = border may be skipped on that side
    pub fn ignore_mask(&self) -> u8 {
        self.ignore_border.to_mask()
    }

    /// Whether `side` connects to land
    pub fn edge(&self, side: Side) -> bool {
        self.edges[side]
    }

    /// 2-bit border code on `side`
    pub fn border(&self, side: Side) -> u8 {
        self.borders[side]
    }

    /// Whether this tile waives border agreement on `side`
    pub fn ignores_border(&self, side: Side) -> bool {
        self.ignore_border[side]
    }

    /// Per-side land connectivity
    pub const fn edges(&self) -> &PerSide<bool> {
        &self.edges
    }

    /// Per-side border codes
    pub const fn borders(&self) -> &PerSide<u8> {
        &self.borders
    }

    /// Per-side ignore flags
    pub const fn ignore_flags(&self) -> &PerSide<bool> {
        &self.ignore_border
    }

    /// Image asset, if any
    pub fn image_reference(&self) -> Option<&Path> {
        self.image_reference.as_deref()
    }

    /// Rotation the renderer applies to the image
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether `candidate` is compatible with this entry on the sides in `select_mask`
    pub fn is_matching(&self, candidate: &Self, select_mask: u8) -> bool {
        crate::algorithm::matching::is_matching(self, candidate, select_mask)
    }

    /// Encode back into a descriptor
    pub fn to_descriptor(&self) -> TileDescriptor {
        TileDescriptor {
            edge_mask: format_bits(self.edge_mask(), SIDE_MASK_DIGITS),
            border_mask: format_bits(self.border_mask(), BORDER_MASK_DIGITS),
            ignore_mask: format_bits(self.ignore_mask(), SIDE_MASK_DIGITS),
            image: self.image_reference.clone(),
        }
    }
}

impl fmt::Display for TileCatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptor = self.to_descriptor();
        write!(
            f,
            "edge {} border {} ignore {}",
            descriptor.edge_mask, descriptor.border_mask, descriptor.ignore_mask
        )?;
        if let Some(path) = &self.image_reference {
            write!(f, " ({})", path.display())?;
        }
        Ok(())
    }
}
