//! Tile set files: tile pixel size plus the list of tile descriptors

use crate::catalog::entry::TileDescriptor;
use crate::catalog::tiles::TileCatalog;
use crate::io::error::{MapError, Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk layout of a tile set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSetFile {
    /// Width of one rendered tile, in pixels
    pub tile_width: u32,
    /// Height of one rendered tile, in pixels
    pub tile_height: u32,
    /// Tile descriptors in catalog order
    pub tile_list: Vec<TileDescriptor>,
}

/// Validated tile set ready for generation and rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    /// Width of one rendered tile, in pixels
    pub tile_width: u32,
    /// Height of one rendered tile, in pixels
    pub tile_height: u32,
    /// Parsed catalog
    pub catalog: TileCatalog,
}

impl TileSet {
    /// Load and validate a tile set file
    ///
    /// Relative image paths are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid tile set,
    /// or contains a malformed descriptor
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MapError::FileSystem {
            path: path.to_path_buf(),
            operation: "read tile set",
            source: e,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_json(&contents, path, base_dir)
    }

    /// Parse tile set JSON
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::TileSetParse`] for invalid JSON and the errors of
    /// [`Self::from_file`] otherwise
    pub fn from_json(json: &str, origin: &Path, base_dir: &Path) -> Result<Self> {
        let file: TileSetFile =
            serde_json::from_str(json).map_err(|e| MapError::TileSetParse {
                path: origin.to_path_buf(),
                source: e,
            })?;
        Self::from_file(file, base_dir)
    }

    /// Validate a deserialized tile set
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidParameter`] for a zero tile size and
    /// [`MapError::MalformedCatalogEntry`] for the first bad descriptor
    pub fn from_file(file: TileSetFile, base_dir: &Path) -> Result<Self> {
        if file.tile_width == 0 || file.tile_height == 0 {
            return Err(invalid_parameter(
                "tile size",
                &format!("{}x{}", file.tile_width, file.tile_height),
                &"tile dimensions must be positive",
            ));
        }

        let descriptors: Vec<TileDescriptor> = file
            .tile_list
            .into_iter()
            .map(|mut descriptor| {
                descriptor.image = descriptor.image.map(|image| base_dir.join(image));
                descriptor
            })
            .collect();
        let catalog = TileCatalog::from_descriptors(&descriptors)?;

        tracing::debug!(
            target: "wangmap::tileset",
            tiles = catalog.len(),
            tile_width = file.tile_width,
            tile_height = file.tile_height,
            "tileset.loaded"
        );

        Ok(Self {
            tile_width: file.tile_width,
            tile_height: file.tile_height,
            catalog,
        })
    }

    /// Same tile set with rotated variants appended to the catalog
    #[must_use]
    pub fn with_rotations(self) -> Self {
        let catalog = self.catalog.with_rotations();
        tracing::debug!(
            target: "wangmap::tileset",
            tiles = catalog.len(),
            "tileset.rotations_derived"
        );
        Self { catalog, ..self }
    }
}
