//! Flattened tile id output for downstream object placement

use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileSet;
use ndarray::Array2;

/// Generated chunk as a matrix of tile ids indexed `[y, x]`
///
/// `None` marks a blocked cell: nothing is placed there. Consumers map the
/// type prefix of each id to an object and its rotation suffix to an
/// orientation (see [`crate::spatial::tiles::parse_tile_id`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkOutput {
    ids: Array2<Option<String>>,
}

impl ChunkOutput {
    /// Read the committed tile of every cell
    pub fn from_grid(grid: &TileGrid, tiles: &TileSet) -> Self {
        let ids = Array2::from_shape_fn((grid.height(), grid.width()), |(y, x)| {
            grid.cell_at(x, y)
                .and_then(|cell| cell.tile())
                .and_then(|tile| tiles.get(tile))
                .map(|tile| tile.id.clone())
        });
        Self { ids }
    }

    /// Wrap an existing id matrix
    pub const fn from_ids(ids: Array2<Option<String>>) -> Self {
        Self { ids }
    }

    /// Id matrix indexed `[y, x]`
    pub const fn ids(&self) -> &Array2<Option<String>> {
        &self.ids
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.ids.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.ids.ncols()
    }

    /// Tile id at a coordinate, `None` if blocked or out of range
    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.ids.get([y, x]).and_then(Option::as_deref)
    }

    /// Nested rows, outer index `y`
    pub fn rows(&self) -> Vec<Vec<Option<String>>> {
        self.ids.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Count cells that received a tile
    pub fn placed_count(&self) -> usize {
        self.ids.iter().filter(|id| id.is_some()).count()
    }

    /// Render one line per row with ids separated by spaces and `-` for blocked cells
    pub fn to_id_lines(&self) -> String {
        self.ids
            .outer_iter()
            .map(|row| {
                row.iter()
                    .map(|id| id.as_deref().unwrap_or("-"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
