//! CLI entry point for the Wang-tile map generator

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wangmap::io::cli::{Cli, MapProcessor};

fn main() -> wangmap::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let processor = MapProcessor::new(cli);
    processor.process().map(|_| ())
}
