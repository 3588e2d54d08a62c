use crate::{
    algorithm::bitset::TileBitset,
    spatial::grid::TileGrid,
    spatial::tiles::{Direction, EdgeState, TileSet},
};

/// Precomputed edge matching masks
///
/// For every direction and connector state, holds the set of tiles whose
/// border on that side has that state. Filtering a cell against a collapsed
/// neighbor is then a single bitset intersection.
#[derive(Clone, Debug)]
pub struct EdgeRules {
    masks: [[TileBitset; 2]; 4],
    tile_count: usize,
}

impl EdgeRules {
    /// Build masks for an expanded tile set
    pub fn new(tiles: &TileSet) -> Self {
        let tile_count = tiles.len();
        let mut masks: [[TileBitset; 2]; 4] =
            std::array::from_fn(|_| std::array::from_fn(|_| TileBitset::new(tile_count)));

        for (index, tile) in tiles.tiles().iter().enumerate() {
            for direction in Direction::ALL {
                let state = tile.edges.get(direction);
                if let Some(mask) = masks
                    .get_mut(direction.index())
                    .and_then(|by_state| by_state.get_mut(state.index()))
                {
                    mask.insert(index);
                }
            }
        }

        Self { masks, tile_count }
    }

    /// Tiles whose border on `direction` has the given state
    pub fn allowed(&self, direction: Direction, state: EdgeState) -> Option<&TileBitset> {
        self.masks
            .get(direction.index())
            .and_then(|by_state| by_state.get(state.index()))
    }

    /// Number of tiles the masks range over
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }
}

/// Tiles that could legally occupy a cell given its collapsed neighbors
///
/// Pure query: starts from the full tile set and intersects with the
/// constraint of every collapsed neighbor. Open and blocked neighbors impose
/// nothing, and neither do absent neighbors at the grid border.
pub fn compatible_tiles(
    grid: &TileGrid,
    index: usize,
    tiles: &TileSet,
    rules: &EdgeRules,
) -> TileBitset {
    let mut result = TileBitset::all(rules.tile_count());

    for (direction, neighbor_index) in grid.neighbors(index) {
        let Some(neighbor_tile) = grid
            .cell(neighbor_index)
            .and_then(|cell| cell.tile())
            .and_then(|tile| tiles.get(tile))
        else {
            continue;
        };

        // The neighbor's border facing us must match our border facing it
        let facing = neighbor_tile.edges.get(direction.opposite());
        match rules.allowed(direction, facing) {
            Some(mask) => result.intersect_with(mask),
            None => result.clear(),
        }

        if result.is_empty() {
            break;
        }
    }

    result
}

/// Test whether two tiles may sit side by side, `second` lying on `direction` of `first`
pub fn tiles_match(tiles: &TileSet, first: usize, second: usize, direction: Direction) -> bool {
    match (tiles.get(first), tiles.get(second)) {
        (Some(a), Some(b)) => a.edges.get(direction) == b.edges.get(direction.opposite()),
        _ => false,
    }
}
