use crate::{algorithm::random::RandomSelector, spatial::grid::TileGrid};

/// Position of a scheduled cell inside its bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    bucket: usize,
    position: usize,
}

/// Open cells grouped by remaining option count
///
/// Bucket `k` holds every open cell with exactly `k` candidates (`k >= 1`).
/// Members are stored densely and each cell remembers its slot, so inserting,
/// removing and moving a cell between buckets are all O(1) via swap-remove.
///
/// The `min_options` cursor never sits above a non-empty bucket. When the
/// bucket under it drains, the cursor only scans upward, so finding the next
/// most constrained cell never rescans the grid.
#[derive(Clone, Debug)]
pub struct EntropyBuckets {
    buckets: Vec<Vec<usize>>,
    slots: Vec<Option<Slot>>,
    min_options: Option<usize>,
    len: usize,
}

impl EntropyBuckets {
    /// Create empty buckets for `cell_count` cells and up to `max_options` candidates
    pub fn new(cell_count: usize, max_options: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); max_options + 1],
            slots: vec![None; cell_count],
            min_options: None,
            len: 0,
        }
    }

    /// Bucket every open cell of the grid that still has candidates
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut buckets = Self::new(grid.len(), grid.tile_count());
        for (index, cell) in grid.cells().enumerate() {
            if cell.is_open() {
                buckets.insert(index, cell.option_count());
            }
        }
        buckets
    }

    /// File a cell under its option count
    ///
    /// Cells with zero options are never scheduled. A cell already present is
    /// moved instead of duplicated.
    pub fn insert(&mut self, cell: usize, options: usize) {
        self.remove(cell);
        if options == 0 || cell >= self.slots.len() {
            return;
        }
        if options >= self.buckets.len() {
            self.buckets.resize_with(options + 1, Vec::new);
        }

        let Some(bucket) = self.buckets.get_mut(options) else {
            return;
        };
        let position = bucket.len();
        bucket.push(cell);
        if let Some(slot) = self.slots.get_mut(cell) {
            *slot = Some(Slot {
                bucket: options,
                position,
            });
        }
        self.len += 1;

        if self.min_options.is_none_or(|min| options < min) {
            self.min_options = Some(options);
        }
    }

    /// Take a cell out of the schedule
    ///
    /// Returns the option count it was filed under, if it was scheduled.
    pub fn remove(&mut self, cell: usize) -> Option<usize> {
        let slot = self.slots.get_mut(cell)?.take()?;
        let bucket = self.buckets.get_mut(slot.bucket)?;

        bucket.swap_remove(slot.position);
        // The former last member now fills the vacated position
        if let Some(Some(moved_slot)) = bucket
            .get(slot.position)
            .copied()
            .and_then(|moved| self.slots.get_mut(moved))
        {
            moved_slot.position = slot.position;
        }
        self.len -= 1;

        Some(slot.bucket)
    }

    /// Re-file a cell after its option count changed
    pub fn update(&mut self, cell: usize, options: usize) {
        if self.options_of(cell) != Some(options) {
            self.insert(cell, options);
        }
    }

    /// Option count a cell is filed under
    pub fn options_of(&self, cell: usize) -> Option<usize> {
        self.slots
            .get(cell)
            .copied()
            .flatten()
            .map(|slot| slot.bucket)
    }

    /// Test whether a cell is scheduled
    pub fn contains(&self, cell: usize) -> bool {
        self.options_of(cell).is_some()
    }

    /// Number of scheduled cells
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Test whether no cell is scheduled
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members of the bucket for an option count
    pub fn bucket(&self, options: usize) -> &[usize] {
        self.buckets.get(options).map_or(&[], Vec::as_slice)
    }

    /// Smallest non-empty option count
    ///
    /// Advances the cursor upward past drained buckets and resets it to `None`
    /// once nothing is scheduled.
    pub fn min_options(&mut self) -> Option<usize> {
        let start = self.min_options?;
        let found = (start..self.buckets.len())
            .find(|&options| self.buckets.get(options).is_some_and(|b| !b.is_empty()));
        self.min_options = found;
        found
    }

    /// Remove and return a most constrained cell
    ///
    /// Ties within the minimum bucket are broken uniformly at random.
    pub fn pop_min(&mut self, selector: &mut RandomSelector) -> Option<usize> {
        let options = self.min_options()?;
        let members = self.buckets.get(options)?;
        let choice = selector.choose_index(members.len())?;
        let cell = members.get(choice).copied()?;
        self.remove(cell);
        Some(cell)
    }
}
