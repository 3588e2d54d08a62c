//! Command-line interface for generating and inspecting chunks

use crate::algorithm::executor::{ChunkGenerator, GenerationConfig};
use crate::io::analysis::ChunkStatistics;
use crate::io::configuration::{
    DEFAULT_CHUNK_COUNT, DEFAULT_CHUNK_SIZE, DEFAULT_SEED, default_tile_types, load_tile_types,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_chunk_as_png;
use crate::io::prefill::PrefillPlacement;
use crate::io::progress::ProgressManager;
use crate::io::visualization::GlyphTable;
use crate::spatial::tiles::{TileSet, TileType};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

/// How generated chunks are written to standard output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One box-drawing glyph per cell
    #[default]
    Glyphs,
    /// Tile ids separated by spaces
    Ids,
    /// Write nothing
    None,
}

#[derive(Parser, Debug)]
#[command(name = "edgetile")]
#[command(
    author,
    version,
    about = "Generate edge-constrained tile chunks from a seed"
)]
/// Command-line arguments for the chunk generator
pub struct Cli {
    /// World seed (any text)
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Chunk width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub width: usize,

    /// Chunk height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub height: usize,

    /// Column of the first chunk
    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    pub chunk_x: i32,

    /// Row of the chunks
    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    pub chunk_y: i32,

    /// Number of chunks to generate, advancing along x
    #[arg(short = 'n', long, default_value_t = DEFAULT_CHUNK_COUNT)]
    pub count: usize,

    /// TOML file of tile archetypes (defaults to the built-in terrain set)
    #[arg(short, long, value_name = "FILE")]
    pub tiles: Option<PathBuf>,

    /// Lock a cell before generation, as x,y,tile_id (repeatable)
    #[arg(short, long = "prefill", value_name = "X,Y,ID")]
    pub prefill: Vec<PrefillPlacement>,

    /// Output format for standard output
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Directory to write one PNG per chunk into
    #[arg(long, value_name = "DIR")]
    pub png: Option<PathBuf>,

    /// Only log warnings and hide progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum log level implied by the verbosity flags
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::WARN
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

/// Orchestrates generation of a row of chunks with progress tracking
pub struct ChunkProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ChunkProcessor {
    /// Create a new chunk processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Archetypes from the configured file, or the built-in set
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn tile_types(&self) -> Result<Vec<TileType>> {
        self.cli
            .tiles
            .as_deref()
            .map_or_else(|| Ok(default_tile_types()), load_tile_types)
    }

    /// World coordinates of every chunk to generate, in order
    ///
    /// # Errors
    ///
    /// Returns an error if the chunk range overflows the coordinate space
    pub fn chunk_coordinates(&self) -> Result<Vec<(i32, i32)>> {
        (0..self.cli.count)
            .map(|offset| {
                i32::try_from(offset)
                    .ok()
                    .and_then(|offset| self.cli.chunk_x.checked_add(offset))
                    .map(|x| (x, self.cli.chunk_y))
                    .ok_or_else(|| {
                        invalid_parameter("count", &self.cli.count, &"chunk range overflows i32")
                    })
            })
            .collect()
    }

    /// Generate every requested chunk and write it to `out`
    ///
    /// Returns per-chunk statistics in generation order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile configuration cannot be loaded
    /// - Chunk dimensions or pre-collapsed cells are invalid
    /// - Writing to `out` or exporting a PNG fails
    pub fn process(&mut self, out: &mut impl Write) -> Result<Vec<ChunkStatistics>> {
        let tiles = TileSet::expand(&self.tile_types()?);
        let glyphs = GlyphTable::from_tile_set(&tiles);
        let coordinates = self.chunk_coordinates()?;
        let mut statistics = Vec::with_capacity(coordinates.len());

        for (chunk_x, chunk_y) in coordinates {
            if let Some(ref pm) = self.progress_manager {
                pm.start_chunk(chunk_x, chunk_y);
            }

            let config = GenerationConfig::new(
                self.cli.seed.clone(),
                chunk_x,
                chunk_y,
                self.cli.height,
                self.cli.width,
            );
            let mut generator =
                ChunkGenerator::from_tile_set(&config, tiles.clone(), &self.cli.prefill)?;
            generator.run_to_completion();
            let output = generator.output();

            let stats = ChunkStatistics::from_output(&output);
            tracing::info!(
                chunk_x,
                chunk_y,
                placed = stats.placed,
                blocked = stats.blocked,
                "generated chunk"
            );

            if self.cli.count > 1 && self.cli.format != OutputFormat::None {
                writeln!(out, "# chunk ({chunk_x}, {chunk_y})")?;
            }
            match self.cli.format {
                OutputFormat::Glyphs => writeln!(out, "{}", glyphs.render(output.ids()))?,
                OutputFormat::Ids => writeln!(out, "{}", output.to_id_lines())?,
                OutputFormat::None => {}
            }

            if let Some(ref dir) = self.cli.png {
                export_chunk_as_png(&output, &tiles, &Self::png_path(dir, chunk_x, chunk_y))?;
            }

            statistics.push(stats);
            if let Some(ref pm) = self.progress_manager {
                pm.complete_chunk();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(statistics)
    }

    /// File path for a chunk's PNG inside the output directory
    pub fn png_path(dir: &Path, chunk_x: i32, chunk_y: i32) -> PathBuf {
        dir.join(format!("chunk_{chunk_x}_{chunk_y}.png"))
    }
}
