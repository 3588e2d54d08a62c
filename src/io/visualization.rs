//! Text glyph rendering of generated chunks for terminal inspection

use crate::io::configuration::PLACEHOLDER_GLYPH;
use crate::spatial::tiles::{
    Direction, EdgeState, Edges, Rotation, TileSet, parse_tile_id, tile_id,
};
use ndarray::Array2;
use std::collections::HashMap;

/// Box-drawing glyph showing which sides of a tile are open
pub const fn glyph_for_edges(edges: Edges) -> char {
    match (
        matches!(edges.get(Direction::North), EdgeState::Open),
        matches!(edges.get(Direction::South), EdgeState::Open),
        matches!(edges.get(Direction::East), EdgeState::Open),
        matches!(edges.get(Direction::West), EdgeState::Open),
    ) {
        (true, true, true, true) => '┼',
        (true, true, false, false) => '│',
        (false, false, true, true) => '─',
        (false, true, true, true) => '┬',
        (true, false, true, true) => '┴',
        (true, true, false, true) => '┤',
        (true, true, true, false) => '├',
        (false, true, false, true) => '┐',
        (true, false, false, true) => '┘',
        (true, false, true, false) => '└',
        (false, true, true, false) => '┌',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╷',
        (false, false, true, false) => '╶',
        (false, false, false, true) => '╴',
        (false, false, false, false) => '■',
    }
}

/// Fixed mapping from tile ids to display glyphs
///
/// Purely presentational; unknown ids and blocked cells render as the
/// placeholder glyph. Ids missing from the table fall back by type and
/// rotation: a half turn shares the glyph of the unrotated or quarter-turned
/// variant, and fully symmetric types share their `_0` glyph.
#[derive(Clone, Debug)]
pub struct GlyphTable {
    glyphs: HashMap<String, char>,
    placeholder: char,
}

impl Default for GlyphTable {
    /// Glyphs for the canonical land, corridor, single wall and corner archetypes
    fn default() -> Self {
        let glyphs = [
            ("land_0", '┼'),
            ("corridor_0", '│'),
            ("corridor_90", '─'),
            ("oneWall_0", '┬'),
            ("oneWall_90", '┤'),
            ("oneWall_180", '┴'),
            ("oneWall_270", '├'),
            ("corner_0", '┐'),
            ("corner_90", '┘'),
            ("corner_180", '└'),
            ("corner_270", '┌'),
        ]
        .into_iter()
        .map(|(id, glyph)| (id.to_string(), glyph))
        .collect();

        Self {
            glyphs,
            placeholder: PLACEHOLDER_GLYPH,
        }
    }
}

impl GlyphTable {
    /// Derive a glyph for every variant of a tile set from its open edges
    pub fn from_tile_set(tiles: &TileSet) -> Self {
        let glyphs = tiles
            .tiles()
            .iter()
            .map(|tile| (tile.id.clone(), glyph_for_edges(tile.edges)))
            .collect();

        Self {
            glyphs,
            placeholder: PLACEHOLDER_GLYPH,
        }
    }

    /// Replace the placeholder glyph
    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Glyph for a cell's tile id
    pub fn glyph(&self, id: Option<&str>) -> char {
        id.and_then(|id| self.glyphs.get(id).copied().or_else(|| self.symmetric_glyph(id)))
            .unwrap_or(self.placeholder)
    }

    /// Glyph of the variant an unlisted rotation coincides with on a symmetric type
    fn symmetric_glyph(&self, id: &str) -> Option<char> {
        let (type_name, rotation) = parse_tile_id(id)?;
        let half_turn = Rotation::from_degrees(rotation.degrees() % 180)?;
        [half_turn, Rotation::R0]
            .into_iter()
            .find_map(|candidate| self.glyphs.get(&tile_id(type_name, candidate)).copied())
    }

    /// Render an id matrix as newline-separated rows of glyphs
    pub fn render(&self, ids: &Array2<Option<String>>) -> String {
        ids.outer_iter()
            .map(|row| {
                row.iter()
                    .map(|id| self.glyph(id.as_deref()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
