//! Runtime defaults and tile archetype configuration files

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::tiles::{EdgeState, TileType};
use serde::Deserialize;
use std::path::Path;

/// Seed used when none is given
pub const DEFAULT_SEED: &str = "42";

/// Default chunk edge length in cells
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Default number of chunks generated by one CLI run
pub const DEFAULT_CHUNK_COUNT: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Glyph for blocked cells and ids without a known glyph
pub const PLACEHOLDER_GLYPH: char = '?';

/// Pixel size of one cell in exported PNG images (must be odd)
pub const PNG_CELL_SCALE: u32 = 5;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tile configuration file layout
///
/// ```toml
/// [[tile]]
/// type = "corridor"
/// n = "open"
/// s = "open"
/// e = "closed"
/// w = "closed"
/// ```
#[derive(Debug, Deserialize)]
pub struct TileConfig {
    /// Archetypes in expansion order
    #[serde(rename = "tile", default)]
    pub tiles: Vec<TileType>,
}

/// Parse tile archetypes from TOML text
///
/// # Errors
///
/// Returns an error if the text is not a valid tile configuration
pub fn parse_tile_types(text: &str, path: &Path) -> Result<Vec<TileType>> {
    toml::from_str::<TileConfig>(text)
        .map(|config| config.tiles)
        .map_err(|source| AlgorithmError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load tile archetypes from a TOML file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a valid tile configuration
pub fn load_tile_types(path: &Path) -> Result<Vec<TileType>> {
    let text = std::fs::read_to_string(path).map_err(|source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tile configuration",
        source,
    })?;
    parse_tile_types(&text, path)
}

/// The canonical terrain archetypes: open land, straight corridor, single wall and corner
pub fn default_tile_types() -> Vec<TileType> {
    use EdgeState::{Closed, Open};
    vec![
        TileType::new("land", Open, Open, Open, Open),
        TileType::new("corridor", Open, Open, Closed, Closed),
        TileType::new("oneWall", Closed, Open, Open, Open),
        TileType::new("corner", Closed, Open, Closed, Open),
    ]
}
