//! Command-line interface for generating and rendering a map from a tile set

use crate::algorithm::executor::{GenerationConfig, MapGenerator};
use crate::io::configuration::{
    DEFAULT_LAND_PROBABILITY, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_map_as_png, render_map};
use crate::io::progress::GenerationProgress;
use crate::io::tileset::TileSet;
use crate::spatial::vertex::StrategyKind;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "wangmap")]
#[command(
    author,
    version,
    about = "Assemble a board game map from a Wang-tile catalog"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Tile set JSON file
    #[arg(value_name = "TILESET")]
    pub tileset: PathBuf,

    /// Map width, in tiles
    #[arg(value_name = "WIDTH")]
    pub width: usize,

    /// Map height, in tiles
    #[arg(value_name = "HEIGHT")]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Land/ocean vertex strategy
    #[arg(long, value_enum, default_value_t = StrategyKind::Parceled)]
    pub strategy: StrategyKind,

    /// Probability that an interior corner is land
    #[arg(short, long, default_value_t = DEFAULT_LAND_PROBABILITY)]
    pub land_probability: f64,

    /// Full generation attempts before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Add clockwise, counter-clockwise and half-turn variants of land tiles
    #[arg(short, long)]
    pub rotate: bool,

    /// Output PNG path (defaults to `<tileset>_map.png` next to the tile set)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Generation parameters from the arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            strategy: self.strategy,
            land_probability: self.land_probability,
            max_attempts: self.attempts,
            seed: self.seed,
        }
    }

    /// Where the rendered map is written
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let stem = self.tileset.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = self.tileset.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Loads a tile set, generates a map and writes the rendered image
pub struct MapProcessor {
    cli: Cli,
}

impl MapProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the whole pipeline and return the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the tile set cannot be loaded, every generation
    /// attempt fails, or the image cannot be rendered or written
    pub fn process(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let config = self.cli.generation_config();
        let mut generator = MapGenerator::new(config)?;

        let mut tileset = TileSet::load(&self.cli.tileset)?;
        if self.cli.rotate {
            tileset = tileset.with_rotations();
        }

        let progress = if self.cli.should_show_progress() {
            GenerationProgress::new(config.width * config.height)
        } else {
            GenerationProgress::hidden()
        };
        let generated =
            generator.generate_observed(&tileset.catalog, |event| progress.observe(event));
        progress.finish();
        let map = generated?;

        let image = render_map(
            &map.grid,
            &tileset.catalog,
            tileset.tile_width,
            tileset.tile_height,
        )?;
        let output_path = self.cli.output_path();
        export_map_as_png(&image, &output_path)?;

        tracing::info!(
            target: "wangmap::cli",
            output = %output_path.display(),
            tiles = tileset.catalog.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "map.written"
        );
        Ok(output_path)
    }
}
