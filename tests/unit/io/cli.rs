//! Tests for command-line interface parsing and end-to-end processing

#[cfg(test)]
mod tests {
    use ::image::{Rgb, RgbImage};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use wangmap::MapError;
    use wangmap::io::cli::{Cli, MapProcessor};
    use wangmap::io::configuration::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED};
    use wangmap::spatial::vertex::StrategyKind;

    // Tests CLI parsing with only required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "tiles.json", "8", "6"]);

        assert_eq!(cli.tileset, PathBuf::from("tiles.json"));
        assert_eq!(cli.width, 8);
        assert_eq!(cli.height, 6);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.strategy, StrategyKind::Parceled);
        assert!(!cli.rotate);
        assert!(!cli.quiet);
        assert!(cli.output.is_none());
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "set/tiles.json",
            "4",
            "3",
            "--seed",
            "123",
            "--strategy",
            "uniform",
            "--land-probability",
            "0.4",
            "--attempts",
            "2",
            "--rotate",
            "--output",
            "out/map.png",
            "--quiet",
        ]);

        assert_eq!(cli.seed, 123);
        assert_eq!(cli.strategy, StrategyKind::Uniform);
        assert!((cli.land_probability - 0.4).abs() < f64::EPSILON);
        assert_eq!(cli.attempts, 2);
        assert!(cli.rotate);
        assert!(cli.quiet);
        assert_eq!(cli.output_path(), PathBuf::from("out/map.png"));

        let config = cli.generation_config();
        assert_eq!((config.width, config.height), (4, 3));
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.seed, 123);
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "t.json", "2", "2", "-s", "9", "-a", "4", "-r", "-q"]);
        assert_eq!(cli.seed, 9);
        assert_eq!(cli.attempts, 4);
        assert!(cli.rotate);
        assert!(cli.quiet);
    }

    // Tests invalid arguments are rejected by the parser
    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["program", "t.json", "2"]).is_err());
        assert!(Cli::try_parse_from(["program", "t.json", "2", "x"]).is_err());
        assert!(Cli::try_parse_from(["program", "t.json", "2", "2", "--strategy", "spiral"]).is_err());
    }

    // Tests default output sits next to the tile set
    // Verified by dropping the suffix
    #[test]
    fn test_default_output_path() {
        let cli = Cli::parse_from(["program", "assets/forest.json", "2", "2"]);
        assert_eq!(cli.output_path(), PathBuf::from("assets/forest_map.png"));

        let bare = Cli::parse_from(["program", "forest.json", "2", "2"]);
        assert_eq!(bare.output_path(), PathBuf::from("forest_map.png"));
    }

    // Tests progress display and log level follow --quiet
    // Verified by inverting quiet flag logic
    #[test]
    fn test_quiet_flag() {
        let loud = Cli::parse_from(["program", "t.json", "2", "2"]);
        assert!(loud.should_show_progress());
        assert_eq!(loud.default_log_filter(), "info");

        let quiet = Cli::parse_from(["program", "t.json", "2", "2", "--quiet"]);
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.default_log_filter(), "warn");
    }

    fn write_tileset(dir: &std::path::Path) -> PathBuf {
        RgbImage::from_pixel(4, 4, Rgb([10, 20, 200]))
            .save(dir.join("ocean.png"))
            .expect("Failed to write tile image");
        let mut tiles = Vec::new();
        for edge in 0..16u8 {
            let mask: String = (0..4)
                .map(|bit| if (edge >> bit) & 1 == 1 { '1' } else { '0' })
                .collect();
            tiles.push(format!(
                r#"{{"edgemask": "{mask}", "bordermask": "00000000", "sflg": "1111", "file": "ocean.png"}}"#
            ));
        }
        let json = format!(
            r#"{{"tile_width": 4, "tile_height": 4, "tile_list": [{}]}}"#,
            tiles.join(",")
        );
        let path = dir.join("tiles.json");
        fs::write(&path, json).expect("Failed to write tile set");
        path
    }

    // Tests the full pipeline writes a map image of the right size
    #[test]
    fn test_process_writes_map() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tileset = write_tileset(temp_dir.path());
        let cli = Cli::parse_from([
            "program",
            tileset.to_str().expect("temp path is UTF-8"),
            "5",
            "3",
            "--quiet",
        ]);

        let output = MapProcessor::new(cli).process().expect("processing succeeds");
        assert_eq!(output, temp_dir.path().join("tiles_map.png"));

        let map = ::image::open(&output).expect("map is readable").to_rgb8();
        assert_eq!(map.dimensions(), (20, 12));
    }

    // Tests an invalid map size fails before anything is read
    #[test]
    fn test_process_rejects_zero_width() {
        let cli = Cli::parse_from(["program", "does-not-exist.json", "0", "3", "--quiet"]);
        let result = MapProcessor::new(cli).process();
        assert!(matches!(result, Err(MapError::InvalidParameter { .. })));
    }
}
