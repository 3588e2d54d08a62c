//! Pre-collapsed cell assignments applied before generation

use crate::io::error::{AlgorithmError, invalid_placement};
use std::str::FromStr;

/// Single tile placement instruction
///
/// Parses from `x,y,tile_id` text, e.g. `3,0,corridor_90`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillPlacement {
    /// Column inside the chunk
    pub x: usize,
    /// Row inside the chunk
    pub y: usize,
    /// Expanded tile id to lock the cell to
    pub tile_id: String,
}

impl PrefillPlacement {
    /// Create a placement
    pub fn new(x: usize, y: usize, tile_id: impl Into<String>) -> Self {
        Self {
            x,
            y,
            tile_id: tile_id.into(),
        }
    }
}

impl FromStr for PrefillPlacement {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',').map(str::trim);
        let (Some(x), Some(y), Some(tile_id)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid_placement(s, &"expected x,y,tile_id"));
        };

        let x = x
            .parse()
            .map_err(|e| invalid_placement(s, &format!("bad x coordinate: {e}")))?;
        let y = y
            .parse()
            .map_err(|e| invalid_placement(s, &format!("bad y coordinate: {e}")))?;
        if tile_id.is_empty() {
            return Err(invalid_placement(s, &"empty tile id"));
        }

        Ok(Self::new(x, y, tile_id))
    }
}
