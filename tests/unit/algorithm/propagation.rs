//! Tests for neighbor candidate recomputation after commits

#[cfg(test)]
mod tests {
    use edgetile::algorithm::compatibility::{EdgeRules, compatible_tiles};
    use edgetile::algorithm::propagation::propagate_from;
    use edgetile::algorithm::scheduler::EntropyBuckets;
    use edgetile::io::configuration::default_tile_types;
    use edgetile::spatial::grid::{CellState, TileGrid};
    use edgetile::spatial::tiles::{EdgeState::Closed, EdgeState::Open, TileSet, TileType};

    // Tests open neighbors shrink and move to the matching bucket
    // Verified by skipping the bucket update
    #[test]
    fn test_neighbors_narrow_and_rebucket() {
        let tiles = TileSet::expand(&default_tile_types());
        let rules = EdgeRules::new(&tiles);
        let mut grid = TileGrid::new(3, 3, tiles.len());
        let mut buckets = EntropyBuckets::from_grid(&grid);

        let center = grid.index(1, 1).unwrap_or_default();
        buckets.remove(center);
        grid.cell_mut(center)
            .expect("cell")
            .collapse_to(tiles.index_of("corridor_0").unwrap_or_default());

        let report = propagate_from(&mut grid, center, &tiles, &rules, &mut buckets);

        assert_eq!(report.narrowed.len(), 4);
        assert!(report.blocked.is_empty());
        for neighbor in report.narrowed {
            let count = grid.cell(neighbor).map(|c| c.option_count()).unwrap_or_default();
            assert!(count < tiles.len());
            assert_eq!(buckets.options_of(neighbor), Some(count));
        }
        assert_eq!(
            buckets.options_of(grid.index(0, 0).unwrap_or_default()),
            Some(tiles.len()),
            "Diagonal cells are untouched"
        );
    }

    // Tests propagation agrees with the read-only compatibility query
    // Verified by only applying the triggering neighbor's constraint
    #[test]
    fn test_matches_compatibility_query() {
        let tiles = TileSet::expand(&default_tile_types());
        let rules = EdgeRules::new(&tiles);
        let mut grid = TileGrid::new(2, 2, tiles.len());
        let mut buckets = EntropyBuckets::from_grid(&grid);

        // Collapse (0, 0) then (1, 1); (1, 0) sees both
        for (index, id) in [(0, "corner_270"), (3, "oneWall_0")] {
            buckets.remove(index);
            grid.cell_mut(index)
                .expect("cell")
                .collapse_to(tiles.index_of(id).unwrap_or_default());
            propagate_from(&mut grid, index, &tiles, &rules, &mut buckets);
        }

        let expected = compatible_tiles(&grid, 1, &tiles, &rules);
        assert_eq!(grid.cell(1).map(|c| c.candidates.clone()), Some(expected));
    }

    // Tests a neighbor left without candidates is blocked and unscheduled
    // Verified by leaving exhausted neighbors in the open state
    #[test]
    fn test_exhausted_neighbor_is_blocked() {
        let tiles = TileSet::expand(&[TileType::new("corridor", Open, Open, Closed, Closed)]);
        let rules = EdgeRules::new(&tiles);
        let vertical = tiles.index_of("corridor_0").unwrap_or_default();
        let horizontal = tiles.index_of("corridor_90").unwrap_or_default();
        let mut grid = TileGrid::new(2, 2, tiles.len());
        let mut buckets = EntropyBuckets::from_grid(&grid);

        buckets.remove(1);
        grid.cell_mut(1).expect("cell").collapse_to(vertical);
        propagate_from(&mut grid, 1, &tiles, &rules, &mut buckets);
        assert_eq!(buckets.options_of(3), Some(1));

        buckets.remove(2);
        grid.cell_mut(2).expect("cell").collapse_to(horizontal);
        let report = propagate_from(&mut grid, 2, &tiles, &rules, &mut buckets);

        // (0, 0) can no longer sit above a horizontal corridor either
        assert_eq!(report.blocked, vec![0, 3]);
        assert_eq!(grid.cell(3).map(|c| c.state), Some(CellState::Blocked));
        assert!(!buckets.contains(3));
        assert!(buckets.is_empty());
    }

    // Tests unaffected neighbors and committed neighbors are left alone
    // Verified by recording every visited neighbor as narrowed
    #[test]
    fn test_unchanged_neighbors_not_reported() {
        let tiles = TileSet::expand(&[TileType::new("land", Open, Open, Open, Open)]);
        let rules = EdgeRules::new(&tiles);
        let mut grid = TileGrid::new(1, 3, tiles.len());
        let mut buckets = EntropyBuckets::from_grid(&grid);

        grid.cell_mut(0).expect("cell").collapse_to(0);
        buckets.remove(0);
        grid.cell_mut(1).expect("cell").collapse_to(0);
        buckets.remove(1);

        let report = propagate_from(&mut grid, 1, &tiles, &rules, &mut buckets);
        assert!(report.is_empty());
        assert_eq!(buckets.options_of(2), Some(1));
    }
}
