use bitvec::prelude::*;
use std::fmt;

/// Candidate set over positions in an expanded tile set
///
/// Capacity is fixed at construction; the bit at position `i` is set while
/// tile `i` remains a candidate. Intersection works a machine word at a time,
/// which keeps propagation cheap for tile sets of any realistic size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Empty set with room for `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Set holding every one of `tile_count` tiles
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Add a tile; positions past the capacity are ignored
    pub fn insert(&mut self, tile: usize) {
        if let Some(mut bit) = self.bits.get_mut(tile) {
            *bit = true;
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).is_some_and(|bit| *bit)
    }

    /// Drop every tile
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Keep only tiles also present in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Tiles present in both sets
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of tiles present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of tiles the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Tile at rank `n` among present tiles, ascending
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Present tiles in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Present tiles collected in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, tile) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tile}")?;
        }
        write!(f, "}}/{}", self.capacity())
    }
}
