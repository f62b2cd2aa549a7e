//! Compositing a resolved grid into a single image and PNG export

use crate::catalog::rotation::Orientation;
use crate::catalog::tiles::TileCatalog;
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::grid::MapGrid;
use image::{RgbImage, imageops};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

// Loads, turns and scales one tile image to the cell size
fn load_tile(path: &Path, orientation: Orientation, width: u32, height: u32) -> Result<RgbImage> {
    let source = image::open(path)
        .map_err(|e| MapError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgb8();

    let turned = match orientation {
        Orientation::Identity => source,
        Orientation::Clockwise => imageops::rotate90(&source),
        Orientation::HalfTurn => imageops::rotate180(&source),
        Orientation::CounterClockwise => imageops::rotate270(&source),
    };

    Ok(imageops::resize(
        &turned,
        width,
        height,
        imageops::FilterType::Nearest,
    ))
}

/// Render every resolved cell at `tile_width` x `tile_height` pixels
///
/// Each distinct image is loaded once. Unresolved cells and entries without
/// an image stay black.
///
/// # Errors
///
/// Returns an error if the canvas size overflows or a tile image cannot be
/// loaded
pub fn render_map(
    grid: &MapGrid,
    catalog: &TileCatalog,
    tile_width: u32,
    tile_height: u32,
) -> Result<RgbImage> {
    let canvas_size = |cells: usize, tile: u32, parameter: &'static str| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(tile))
            .ok_or_else(|| invalid_parameter(parameter, &cells, &"rendered image is too large"))
    };
    let mut canvas = RgbImage::new(
        canvas_size(grid.width(), tile_width, "width")?,
        canvas_size(grid.height(), tile_height, "height")?,
    );
    let mut cache: HashMap<(PathBuf, Orientation), RgbImage> = HashMap::new();

    for cell in grid.cells() {
        let Some(entry) = cell.tile.and_then(|index| catalog.get(index)) else {
            continue;
        };
        let Some(path) = entry.image_reference() else {
            continue;
        };

        let tile = match cache.entry((path.to_path_buf(), entry.orientation())) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => vacant.insert(load_tile(
                path,
                entry.orientation(),
                tile_width,
                tile_height,
            )?),
        };

        let x = i64::from(tile_width) * cell.coord[0] as i64;
        let y = i64::from(tile_height) * cell.coord[1] as i64;
        imageops::replace(&mut canvas, &*tile, x, y);
    }

    Ok(canvas)
}

/// Save a rendered map as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(map_image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    map_image.save(output_path).map_err(|e| MapError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
