use crate::{
    algorithm::collapse::{CollapseOutcome, collapse_cell},
    algorithm::compatibility::EdgeRules,
    algorithm::propagation::propagate_from,
    algorithm::random::RandomSelector,
    algorithm::scheduler::EntropyBuckets,
    io::configuration::MAX_GRID_DIMENSION,
    io::error::{Result, invalid_parameter},
    io::output::ChunkOutput,
    io::prefill::PrefillPlacement,
    spatial::grid::{CellState, TileGrid},
    spatial::tiles::{TileSet, TileType},
};

/// Parameters identifying one chunk of a seeded world
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// World seed, numeric or free text
    pub seed: String,
    /// Chunk column in world space
    pub chunk_x: i32,
    /// Chunk row in world space
    pub chunk_y: i32,
    /// Rows of cells in the chunk
    pub height: usize,
    /// Columns of cells in the chunk
    pub width: usize,
}

impl GenerationConfig {
    /// Configuration for the chunk at `(chunk_x, chunk_y)`
    pub fn new(
        seed: impl Into<String>,
        chunk_x: i32,
        chunk_y: i32,
        height: usize,
        width: usize,
    ) -> Self {
        Self {
            seed: seed.into(),
            chunk_x,
            chunk_y,
            height,
            width,
        }
    }

    /// Check grid dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("height", self.height), ("width", self.width)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Minimum-remaining-values collapse loop over one chunk
///
/// Owns the grid, the entropy buckets and the seeded random stream of a
/// single generation run. Each iteration pops a most constrained cell,
/// commits it and propagates to its neighbors; the run ends once no open cell
/// with candidates remains.
pub struct ChunkGenerator {
    /// Expanded tile variants
    pub tiles: TileSet,
    /// Precomputed edge matching masks
    pub rules: EdgeRules,
    /// Cell arena
    pub grid: TileGrid,
    /// Open cells by remaining option count
    pub buckets: EntropyBuckets,
    /// Random stream for tie-breaks and tile choice
    pub random_selector: RandomSelector,
    /// Completed iterations
    pub iteration: usize,
    config: GenerationConfig,
}

impl ChunkGenerator {
    /// Create a generator from authored tile archetypes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured dimensions are invalid
    /// - A pre-collapsed placement is out of bounds or names an unknown tile
    pub fn new(
        config: &GenerationConfig,
        tile_types: &[TileType],
        precollapsed: &[PrefillPlacement],
    ) -> Result<Self> {
        Self::from_tile_set(config, TileSet::expand(tile_types), precollapsed)
    }

    /// Create a generator from an already expanded tile set
    ///
    /// Pre-collapsed cells are locked first and their constraints propagated
    /// before the schedule is built, so the first pick already sees them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured dimensions are invalid
    /// - A pre-collapsed placement is out of bounds or names an unknown tile
    pub fn from_tile_set(
        config: &GenerationConfig,
        tiles: TileSet,
        precollapsed: &[PrefillPlacement],
    ) -> Result<Self> {
        config.validate()?;

        let rules = EdgeRules::new(&tiles);
        let mut grid = TileGrid::new(config.height, config.width, tiles.len());
        let locked = grid.apply_precollapsed(precollapsed, &tiles)?;
        grid.block_exhausted();

        let mut buckets = EntropyBuckets::from_grid(&grid);
        for &cell in &locked {
            propagate_from(&mut grid, cell, &tiles, &rules, &mut buckets);
        }

        tracing::debug!(
            chunk_x = config.chunk_x,
            chunk_y = config.chunk_y,
            height = config.height,
            width = config.width,
            tiles = tiles.len(),
            precollapsed = locked.len(),
            "starting chunk generation"
        );

        Ok(Self {
            random_selector: RandomSelector::for_chunk(
                &config.seed,
                config.chunk_x,
                config.chunk_y,
            ),
            tiles,
            rules,
            grid,
            buckets,
            iteration: 0,
            config: config.clone(),
        })
    }

    /// Configuration this generator was created with
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Execute a single collapse-and-propagate step
    ///
    /// Returns the committed cell, or `None` once generation is complete.
    /// A scheduled cell that is no longer open is dropped and the next one
    /// popped, so a stale entry never ends the run early.
    pub fn step(&mut self) -> Option<CollapseOutcome> {
        while let Some(cell) = self.buckets.pop_min(&mut self.random_selector) {
            let Some(outcome) = collapse_cell(
                &mut self.grid,
                cell,
                &self.tiles,
                &self.rules,
                &mut self.random_selector,
            ) else {
                tracing::warn!(cell, "skipping scheduled cell that is no longer open");
                continue;
            };
            propagate_from(
                &mut self.grid,
                cell,
                &self.tiles,
                &self.rules,
                &mut self.buckets,
            );
            self.iteration += 1;
            return Some(outcome);
        }
        None
    }

    /// Execute a single iteration of the algorithm
    ///
    /// Returns whether more work remains.
    pub fn execute_iteration(&mut self) -> bool {
        self.step().is_some() && !self.is_complete()
    }

    /// Check if generation is complete
    pub const fn is_complete(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Run the collapse loop until every cell is collapsed or blocked
    ///
    /// Returns the number of iterations executed by this call.
    pub fn run_to_completion(&mut self) -> usize {
        let start = self.iteration;
        while self.step().is_some() {}

        let (collapsed, blocked) = self.grid.cells().fold((0, 0), |(c, b), cell| match cell.state {
            CellState::Collapsed(_) => (c + 1, b),
            CellState::Blocked => (c, b + 1),
            CellState::Open => (c, b),
        });
        tracing::debug!(
            chunk_x = self.config.chunk_x,
            chunk_y = self.config.chunk_y,
            iterations = self.iteration,
            collapsed,
            blocked,
            draws = self.random_selector.draws(),
            "chunk generation finished"
        );

        self.iteration - start
    }

    /// Snapshot the grid as tile ids
    pub fn output(&self) -> ChunkOutput {
        ChunkOutput::from_grid(&self.grid, &self.tiles)
    }
}

/// Generate one chunk and return its tile ids
///
/// Identical configuration, archetypes and pre-collapsed cells always
/// produce identical output.
///
/// # Errors
///
/// Returns an error if:
/// - The configured dimensions are invalid
/// - A pre-collapsed placement is out of bounds or names an unknown tile
pub fn generate_chunk(
    config: &GenerationConfig,
    tile_types: &[TileType],
    precollapsed: &[PrefillPlacement],
) -> Result<ChunkOutput> {
    let mut generator = ChunkGenerator::new(config, tile_types, precollapsed)?;
    generator.run_to_completion();
    Ok(generator.output())
}
