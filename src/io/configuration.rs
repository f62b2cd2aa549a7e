//! Generation constants and runtime configuration defaults

// Vertex field generation
/// Probability that an interior lattice corner is land
pub const DEFAULT_LAND_PROBABILITY: f64 = 0.70;

/// Smallest random offset applied to the parcel center on each axis
pub const PARCEL_CENTER_JITTER_MIN: i32 = -2;
/// Largest random offset applied to the parcel center on each axis
pub const PARCEL_CENTER_JITTER_MAX: i32 = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed map dimension, in tiles
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of full generation attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

// Output settings
/// Suffix added to the tile set name for the rendered map
pub const OUTPUT_SUFFIX: &str = "_map";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
