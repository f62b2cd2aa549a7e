/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Map rendering and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Tile set file loading
pub mod tileset;
