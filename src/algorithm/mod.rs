/// Fixed-size bitsets over tile indices for candidate tracking
pub mod bitset;
/// Single-cell collapse with seeded tile choice
pub mod collapse;
/// Edge matching masks and the compatibility query
pub mod compatibility;
/// Main collapse loop orchestration
pub mod executor;
/// Neighbor candidate recomputation after each commit
pub mod propagation;
/// Seeded random stream and per-chunk seed derivation
pub mod random;
/// Entropy buckets for minimum-remaining-values scheduling
pub mod scheduler;
