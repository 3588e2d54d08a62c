use crate::{
    algorithm::compatibility::{EdgeRules, compatible_tiles},
    algorithm::random::RandomSelector,
    spatial::grid::TileGrid,
    spatial::tiles::TileSet,
};

/// Result of committing a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollapseOutcome {
    /// The cell received a tile
    Collapsed {
        /// Flat index of the cell
        cell: usize,
        /// Index of the committed tile
        tile: usize,
    },
    /// No candidate survived the neighbor filter
    Blocked {
        /// Flat index of the cell
        cell: usize,
    },
}

impl CollapseOutcome {
    /// Flat index of the committed cell
    pub const fn cell(self) -> usize {
        match self {
            Self::Collapsed { cell, .. } | Self::Blocked { cell } => cell,
        }
    }

    /// Committed tile index, if any
    pub const fn tile(self) -> Option<usize> {
        match self {
            Self::Collapsed { tile, .. } => Some(tile),
            Self::Blocked { .. } => None,
        }
    }
}

/// Commit a tile to a cell, chosen uniformly among its compatible candidates
///
/// Candidates are first filtered against every collapsed neighbor. An empty
/// result blocks the cell for good; there is no retry. Returns `None` if the
/// cell does not exist or is no longer open.
pub fn collapse_cell(
    grid: &mut TileGrid,
    index: usize,
    tiles: &TileSet,
    rules: &EdgeRules,
    selector: &mut RandomSelector,
) -> Option<CollapseOutcome> {
    let compatible = compatible_tiles(grid, index, tiles, rules);
    let cell = grid.cell_mut(index).filter(|cell| cell.is_open())?;

    let viable = cell.candidates.intersection(&compatible);
    let chosen = selector
        .choose_index(viable.count())
        .and_then(|choice| viable.nth(choice));

    match chosen {
        Some(tile) => {
            cell.collapse_to(tile);
            tracing::trace!(cell = index, tile, "collapsed cell");
            Some(CollapseOutcome::Collapsed { cell: index, tile })
        }
        None => {
            cell.block();
            tracing::trace!(cell = index, "blocked cell");
            Some(CollapseOutcome::Blocked { cell: index })
        }
    }
}
