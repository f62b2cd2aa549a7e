//! Tests for the tile compatibility predicate

#[cfg(test)]
mod tests {
    use wangmap::algorithm::codec::ALL_SIDES;
    use wangmap::algorithm::matching::{border_checked_sides, is_matching, mismatched_sides};
    use wangmap::catalog::TileCatalogEntry;

    fn sample_entries() -> Vec<TileCatalogEntry> {
        let edges = [0, 0b0101, 0b1111, 0b0010];
        let borders = [0, 0b0110_1001, 0xFF, 0b0001_0010];
        let ignores = [0, 0b1111, 0b0011, 0b1000];
        let mut entries = Vec::new();
        for &edge in &edges {
            for &border in &borders {
                for &ignore in &ignores {
                    entries.push(TileCatalogEntry::from_masks(edge, border, ignore));
                }
            }
        }
        entries
    }

    // Verified by dropping the candidate's ignore mask from border_checked_sides
    #[test]
    fn test_predicate_is_symmetric() {
        let entries = sample_entries();
        for a in &entries {
            for b in &entries {
                for select in [ALL_SIDES, 0b0101, 0b1000] {
                    assert_eq!(
                        is_matching(a, b, select),
                        is_matching(b, a, select),
                        "{a} vs {b} with select {select:04b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_entry_matches_itself() {
        for entry in sample_entries() {
            assert!(entry.is_matching(&entry, ALL_SIDES));
        }
    }

    // Edges are never exempt, even when both tiles ignore borders everywhere
    #[test]
    fn test_edge_mismatch_is_hard_constraint() {
        let land_top = TileCatalogEntry::from_masks(0b0001, 0, ALL_SIDES);
        let ocean = TileCatalogEntry::from_masks(0, 0, ALL_SIDES);

        assert!(!is_matching(&land_top, &ocean, ALL_SIDES));
        assert!(is_matching(&land_top, &ocean, 0b1110));
        assert_eq!(mismatched_sides(&land_top, &ocean), 0b0001);
    }

    // Verified by requiring both tiles to ignore a side before exempting it
    #[test]
    fn test_border_checked_only_when_neither_ignores() {
        let query = TileCatalogEntry::from_masks(0, 0b01, 0);
        let candidate = TileCatalogEntry::from_masks(0, 0b10, 0);
        assert!(!is_matching(&query, &candidate, ALL_SIDES));

        let query_ignores_top = TileCatalogEntry::from_masks(0, 0b01, 0b0001);
        assert!(is_matching(&query_ignores_top, &candidate, ALL_SIDES));

        let candidate_ignores_top = TileCatalogEntry::from_masks(0, 0b10, 0b0001);
        assert!(is_matching(&query, &candidate_ignores_top, ALL_SIDES));

        let candidate_ignores_left = TileCatalogEntry::from_masks(0, 0b10, 0b1000);
        assert!(!is_matching(&query, &candidate_ignores_left, ALL_SIDES));
    }

    #[test]
    fn test_border_checked_sides_combines_both_masks() {
        let a = TileCatalogEntry::from_masks(0, 0, 0b0011);
        let b = TileCatalogEntry::from_masks(0, 0, 0b0110);
        assert_eq!(border_checked_sides(&a, &b), 0b1000);
        assert_eq!(border_checked_sides(&a, &a), 0b1100);
    }

    #[test]
    fn test_select_mask_limits_checked_sides() {
        let a = TileCatalogEntry::from_masks(0b0001, 0b1100_0000, 0);
        let b = TileCatalogEntry::from_masks(0, 0, 0);
        assert_eq!(mismatched_sides(&a, &b), 0b1001);
        assert!(!is_matching(&a, &b, 0b0001));
        assert!(!is_matching(&a, &b, 0b1000));
        assert!(is_matching(&a, &b, 0b0110));
        assert!(is_matching(&a, &b, 0));
    }
}
