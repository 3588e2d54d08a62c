//! Deterministic generation of edge-constrained tile grids for terrain chunks
//!
//! Authored tile archetypes are expanded into rotated variants, then a
//! minimum-remaining-values collapse loop assigns one variant per cell so that
//! adjacent tiles agree on their shared border. Randomness comes only from a
//! stream seeded by the world seed and chunk coordinates, so the same inputs
//! always produce the same chunk.
//!
//! ```
//! use edgetile::algorithm::executor::{GenerationConfig, generate_chunk};
//! use edgetile::io::configuration::default_tile_types;
//!
//! let config = GenerationConfig::new("123", 0, 0, 4, 4);
//! let output = generate_chunk(&config, &default_tile_types(), &[])?;
//! assert_eq!(output.height(), 4);
//! # Ok::<(), edgetile::AlgorithmError>(())
//! ```

#![forbid(unsafe_code)]

/// Collapse algorithm: candidate sets, scheduling, collapse and propagation
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile model and cell grid
pub mod spatial;

pub use algorithm::executor::{ChunkGenerator, GenerationConfig, generate_chunk};
pub use io::error::{AlgorithmError, Result};
