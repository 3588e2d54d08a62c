use crate::{
    algorithm::compatibility::{EdgeRules, compatible_tiles},
    algorithm::scheduler::EntropyBuckets,
    spatial::grid::TileGrid,
    spatial::tiles::TileSet,
};

/// Changes made to the neighborhood of a committed cell
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Neighbors whose candidate sets shrank but stay open
    pub narrowed: Vec<usize>,
    /// Neighbors left with no candidate and finalized as blocked
    pub blocked: Vec<usize>,
}

impl PropagationReport {
    /// Test whether no neighbor changed
    pub fn is_empty(&self) -> bool {
        self.narrowed.is_empty() && self.blocked.is_empty()
    }
}

/// Recompute the candidate sets of a committed cell's open neighbors
///
/// Each neighbor is recomputed against all of its own collapsed neighbors,
/// not just the cell that changed, so the outcome does not depend on the
/// order commits happened in. Neighbors whose count changed are re-filed in
/// the buckets. A neighbor left with nothing is blocked immediately and never
/// scheduled again.
pub fn propagate_from(
    grid: &mut TileGrid,
    index: usize,
    tiles: &TileSet,
    rules: &EdgeRules,
    buckets: &mut EntropyBuckets,
) -> PropagationReport {
    let mut report = PropagationReport::default();
    let neighbors: Vec<usize> = grid.neighbors(index).map(|(_, n)| n).collect();

    for neighbor in neighbors {
        let compatible = compatible_tiles(grid, neighbor, tiles, rules);
        let Some(cell) = grid.cell_mut(neighbor).filter(|cell| cell.is_open()) else {
            continue;
        };

        let before = cell.option_count();
        cell.candidates.intersect_with(&compatible);
        let after = cell.option_count();
        if after == before {
            continue;
        }

        if after == 0 {
            cell.block();
            buckets.remove(neighbor);
            report.blocked.push(neighbor);
        } else {
            buckets.update(neighbor, after);
            report.narrowed.push(neighbor);
        }
    }

    report
}
