//! Tests for descriptor parsing and entry accessors

#[cfg(test)]
mod tests {
    use std::path::Path;
    use wangmap::MapError;
    use wangmap::algorithm::codec::Side;
    use wangmap::catalog::TileCatalogEntry;
    use wangmap::catalog::entry::TileDescriptor;
    use wangmap::catalog::rotation::Orientation;

    fn descriptor(edge: &str, border: &str, ignore: &str) -> TileDescriptor {
        TileDescriptor {
            edge_mask: edge.to_string(),
            border_mask: border.to_string(),
            ignore_mask: ignore.to_string(),
            image: None,
        }
    }

    // First character is the least significant bit
    // Verified by reading strings most significant bit first
    #[test]
    fn test_parse_reads_least_significant_bit_first() {
        let parsed = descriptor("1000", "01000000", "0001").parse(0);
        assert!(parsed.is_ok());
        let Ok(entry) = parsed else { return };

        assert_eq!(entry.edge_mask(), 0b0001);
        assert!(entry.edge(Side::Top));
        assert!(!entry.edge(Side::Left));
        assert_eq!(entry.border(Side::Top), 2);
        assert_eq!(entry.border(Side::Right), 0);
        assert!(entry.ignores_border(Side::Left));
        assert_eq!(entry.ignore_mask(), 0b1000);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let result = descriptor("101", "00000000", "0000").parse(3);
        assert!(matches!(
            result,
            Err(MapError::MalformedCatalogEntry {
                index: 3,
                field: "edgemask",
                ..
            })
        ));

        let result = descriptor("1010", "0101", "0000").parse(0);
        assert!(matches!(
            result,
            Err(MapError::MalformedCatalogEntry {
                field: "bordermask",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        let result = descriptor("1010", "00000000", "00x0").parse(7);
        let Err(error) = result else {
            panic!("'x' is not a binary digit");
        };
        assert!(matches!(
            error,
            MapError::MalformedCatalogEntry {
                index: 7,
                field: "sflg",
                ..
            }
        ));
        assert!(error.to_string().contains("00x0"));
    }

    #[test]
    fn test_descriptor_round_trip_preserves_strings() {
        let original = descriptor("1101", "10010011", "0110");
        let Ok(entry) = original.parse(0) else {
            panic!("descriptor is well formed");
        };
        assert_eq!(entry.to_descriptor(), original);
    }

    #[test]
    fn test_descriptor_deserializes_tile_set_field_names() {
        let json = r#"{"edgemask": "1100", "bordermask": "11000000", "sflg": "0000", "file": "a.png"}"#;
        let parsed: Result<TileDescriptor, _> = serde_json::from_str(json);
        assert!(parsed.is_ok());
        let Ok(parsed) = parsed else { return };
        assert_eq!(parsed.edge_mask, "1100");
        assert_eq!(parsed.image.as_deref(), Some(Path::new("a.png")));

        let Ok(entry) = parsed.parse(0) else {
            panic!("descriptor is well formed");
        };
        assert_eq!(entry.image_reference(), Some(Path::new("a.png")));
        assert_eq!(entry.border(Side::Top), 3);
    }

    #[test]
    fn test_border_codes_are_truncated_to_two_bits() {
        let entry = TileCatalogEntry::new(
            Default::default(),
            wangmap::algorithm::codec::PerSide::new(7, 4, 1, 2),
            Default::default(),
        );
        assert_eq!(entry.borders(), &wangmap::algorithm::codec::PerSide::new(3, 0, 1, 2));
    }

    // Verified by rotating counter-clockwise
    #[test]
    fn test_rotation_moves_attributes_clockwise() {
        let entry = TileCatalogEntry::from_masks(0b0001, 0b0000_0001, 0b0001).with_image("t.png");
        let turned = entry.rotated(Orientation::Clockwise);

        assert_eq!(turned.edge_mask(), 0b0010);
        assert_eq!(turned.border(Side::Right), 1);
        assert!(turned.ignores_border(Side::Right));
        assert_eq!(turned.image_reference(), Some(Path::new("t.png")));
        assert_eq!(turned.orientation(), Orientation::Clockwise);

        let twice = turned.rotated(Orientation::Clockwise);
        assert_eq!(twice.orientation(), Orientation::HalfTurn);
        assert_eq!(twice.edge_mask(), 0b0100);

        let back = turned.rotated(Orientation::CounterClockwise);
        assert_eq!(back, entry);
    }

    #[test]
    fn test_display_shows_descriptor_strings() {
        let entry = TileCatalogEntry::from_masks(0b0011, 0, 0b1111);
        assert_eq!(entry.to_string(), "edge 1100 border 00000000 ignore 1111");
        let with_image = entry.with_image("x.png");
        assert!(with_image.to_string().ends_with("(x.png)"));
    }
}
