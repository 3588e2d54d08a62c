//! Input/output operations and error handling
//!
//! Everything outside the collapse algorithm itself: configuration, error
//! types, output serialization, debug rendering and the command line.

/// Chunk summary statistics
pub mod analysis;
/// Command-line interface
pub mod cli;
/// Runtime defaults and tile configuration files
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Tile id output matrix
pub mod output;
/// Pre-collapsed cell assignments
pub mod prefill;
/// Progress display
pub mod progress;
/// Glyph rendering
pub mod visualization;
