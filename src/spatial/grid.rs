//! Cell arena for a single chunk
//!
//! Cells live in a flat vector indexed by `y * width + x`. Neighbors are found
//! by coordinate arithmetic, so no cell stores a reference to another.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AlgorithmError, Result};
use crate::io::prefill::PrefillPlacement;
use crate::spatial::tiles::{Direction, TileSet};

/// Lifecycle state of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Still waiting for a tile
    Open,
    /// Committed to the tile at this index
    Collapsed(usize),
    /// No compatible tile remained
    Blocked,
}

/// One grid position
#[derive(Clone, Debug)]
pub struct Cell {
    /// Current lifecycle state
    pub state: CellState,
    /// Tiles still placeable here, empty once the cell leaves `Open`
    pub candidates: TileBitset,
}

impl Cell {
    /// Create an open cell allowing every tile
    pub fn open(tile_count: usize) -> Self {
        Self {
            state: CellState::Open,
            candidates: TileBitset::all(tile_count),
        }
    }

    /// The committed tile index, if collapsed
    pub const fn tile(&self) -> Option<usize> {
        match self.state {
            CellState::Collapsed(tile) => Some(tile),
            CellState::Open | CellState::Blocked => None,
        }
    }

    /// Test whether the cell still awaits a decision
    pub const fn is_open(&self) -> bool {
        matches!(self.state, CellState::Open)
    }

    /// Number of remaining candidates
    pub fn option_count(&self) -> usize {
        self.candidates.count()
    }

    /// Commit a tile and drop the remaining candidates
    pub fn collapse_to(&mut self, tile: usize) {
        self.state = CellState::Collapsed(tile);
        self.candidates.clear();
    }

    /// Finalize the cell without a tile
    pub fn block(&mut self) {
        self.state = CellState::Blocked;
        self.candidates.clear();
    }
}

/// Height by width matrix of cells
#[derive(Clone, Debug)]
pub struct TileGrid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
    tile_count: usize,
}

impl TileGrid {
    /// Allocate a grid where every cell is open with the full candidate set
    pub fn new(height: usize, width: usize, tile_count: usize) -> Self {
        Self {
            cells: vec![Cell::open(tile_count); height * width],
            height,
            width,
            tile_count,
        }
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Size of the tile set the candidate sets range over
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of a coordinate, if inside the grid
    pub const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Coordinate `(x, y)` of a flat index
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        if self.width == 0 {
            return (0, 0);
        }
        (index % self.width, index / self.width)
    }

    /// Flat index of the adjacent cell on one side, absent at grid borders
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        if index >= self.cells.len() {
            return None;
        }
        let (x, y) = self.coords(index);
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.index(nx, ny)
    }

    /// Adjacent cells with the side they lie on
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(index, direction).map(|n| (direction, n)))
    }

    /// Cell at a flat index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mutable cell at a flat index
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Cell at a coordinate
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).and_then(|index| self.cells.get(index))
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Lock cells to fixed tiles before scheduling starts
    ///
    /// Returns the flat indices of the locked cells in placement order. A later
    /// placement for the same coordinate overrides an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A placement lies outside the grid
    /// - A placement names a tile id absent from the expanded tile set
    pub fn apply_precollapsed(
        &mut self,
        placements: &[PrefillPlacement],
        tiles: &TileSet,
    ) -> Result<Vec<usize>> {
        let mut locked = Vec::with_capacity(placements.len());
        let mut seen = vec![false; self.cells.len()];

        for placement in placements {
            let index = self.index(placement.x, placement.y).ok_or(
                AlgorithmError::PrecollapsedOutOfBounds {
                    x: placement.x,
                    y: placement.y,
                    width: self.width,
                    height: self.height,
                },
            )?;
            let tile = tiles
                .index_of(&placement.tile_id)
                .ok_or_else(|| AlgorithmError::UnknownTileId {
                    id: placement.tile_id.clone(),
                })?;

            if let Some(cell) = self.cells.get_mut(index) {
                cell.collapse_to(tile);
            }
            if let Some(first_visit) = seen.get_mut(index).filter(|flag| !**flag) {
                *first_visit = true;
                locked.push(index);
            }
        }

        Ok(locked)
    }

    /// Finalize every open cell whose candidate set is already empty
    ///
    /// Returns how many cells were blocked.
    pub fn block_exhausted(&mut self) -> usize {
        let mut blocked = 0;
        for cell in &mut self.cells {
            if cell.is_open() && cell.candidates.is_empty() {
                cell.block();
                blocked += 1;
            }
        }
        blocked
    }

    /// Count cells still open
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }
}
