//! Summary statistics of a generated chunk

use crate::io::output::ChunkOutput;
use crate::spatial::tiles::parse_tile_id;
use std::collections::BTreeMap;

/// Placement counts for one chunk
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkStatistics {
    /// Cells that received a tile
    pub placed: usize,
    /// Cells left without a tile
    pub blocked: usize,
    /// Placed cells per archetype name
    pub per_type: BTreeMap<String, usize>,
}

impl ChunkStatistics {
    /// Tally a chunk's output
    pub fn from_output(output: &ChunkOutput) -> Self {
        let mut stats = Self::default();
        for id in output.ids() {
            match id {
                Some(id) => {
                    stats.placed += 1;
                    let type_name = parse_tile_id(id).map_or(id.as_str(), |(name, _)| name);
                    *stats.per_type.entry(type_name.to_string()).or_default() += 1;
                }
                None => stats.blocked += 1,
            }
        }
        stats
    }

    /// Total number of cells
    pub const fn total(&self) -> usize {
        self.placed + self.blocked
    }

    /// Fraction of cells left blocked, zero for an empty chunk
    pub fn blocked_fraction(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.blocked as f64 / self.total() as f64
        }
    }
}
