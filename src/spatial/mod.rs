//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Tile archetypes, rotations and expansion
//! - The cell arena and neighbor lookup

/// Cell arena and pre-collapsed cell application
pub mod grid;
/// Tile archetypes, rotation and expansion
pub mod tiles;

pub use grid::TileGrid;
pub use tiles::{TileSet, TileType};
