//! Tile archetypes, rotation expansion and edge matching primitives
//!
//! Authored [`TileType`]s describe an unrotated pattern by its four border
//! connectors. Expansion produces one placeable [`Tile`] per distinct rotation,
//! so symmetric archetypes contribute fewer variants than asymmetric ones.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Connector state on one side of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    /// The border connects to the neighbor
    Open,
    /// The border is sealed
    Closed,
}

impl EdgeState {
    /// Position of this state in per-state lookup tables
    pub const fn index(self) -> usize {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }
}

/// Compass direction of a cell border
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing `y`
    North,
    /// Towards increasing `y`
    South,
    /// Towards increasing `x`
    East,
    /// Towards decreasing `x`
    West,
}

impl Direction {
    /// All directions in fixed iteration order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction facing back across the same border
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Coordinate step `(dx, dy)` towards the neighbor on this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Position of this direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

/// Quarter-turn rotation applied to a tile archetype
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// Unrotated
    R0,
    /// One clockwise quarter turn
    R90,
    /// Half turn
    R180,
    /// Three clockwise quarter turns
    R270,
}

impl Rotation {
    /// All rotations in expansion order
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Parse a rotation from its angle in degrees
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    const fn quarter_turns(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }
}

/// Connector states on all four sides of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Edges {
    /// North border
    #[serde(rename = "n", alias = "N")]
    pub north: EdgeState,
    /// South border
    #[serde(rename = "s", alias = "S")]
    pub south: EdgeState,
    /// East border
    #[serde(rename = "e", alias = "E")]
    pub east: EdgeState,
    /// West border
    #[serde(rename = "w", alias = "W")]
    pub west: EdgeState,
}

impl Edges {
    /// Build edges in N, S, E, W order
    pub const fn new(north: EdgeState, south: EdgeState, east: EdgeState, west: EdgeState) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Connector on the given side
    pub const fn get(self, direction: Direction) -> EdgeState {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Rotate a quarter turn clockwise (N takes W, E takes N, S takes E, W takes S)
    #[must_use]
    pub const fn rotated_90(self) -> Self {
        Self {
            north: self.west,
            east: self.north,
            south: self.east,
            west: self.south,
        }
    }

    /// Rotate by any multiple of a quarter turn
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let mut edges = self;
        let mut turns = rotation.quarter_turns();
        while turns > 0 {
            edges = edges.rotated_90();
            turns -= 1;
        }
        edges
    }
}

/// Unrotated tile archetype as authored in configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TileType {
    /// Type label shared by every rotation of this archetype
    #[serde(rename = "type")]
    pub name: String,
    /// Border connectors before rotation
    #[serde(flatten)]
    pub edges: Edges,
}

impl TileType {
    /// Create an archetype from its name and N, S, E, W connectors
    pub fn new(
        name: impl Into<String>,
        north: EdgeState,
        south: EdgeState,
        east: EdgeState,
        west: EdgeState,
    ) -> Self {
        Self {
            name: name.into(),
            edges: Edges::new(north, south, east, west),
        }
    }
}

/// A placeable tile variant: one archetype at one rotation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Unique identifier of the form `{type}_{degrees}`
    pub id: String,
    /// Archetype name
    pub type_name: String,
    /// Rotation applied to the archetype
    pub rotation: Rotation,
    /// Border connectors after rotation
    pub edges: Edges,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Build the identifier for an archetype at a rotation
pub fn tile_id(type_name: &str, rotation: Rotation) -> String {
    format!("{type_name}_{}", rotation.degrees())
}

/// Split a tile identifier into its type name and rotation
///
/// Type names may themselves contain underscores; only the final segment is
/// read as the rotation.
pub fn parse_tile_id(id: &str) -> Option<(&str, Rotation)> {
    let (type_name, degrees) = id.rsplit_once('_')?;
    let rotation = Rotation::from_degrees(degrees.parse().ok()?)?;
    Some((type_name, rotation))
}

/// Every placeable tile variant with lookup by identifier
///
/// Tile indices are stable positions in expansion order and are what the
/// rest of the system stores in candidate sets and collapsed cells.
#[derive(Clone, Debug, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
    index_by_id: HashMap<String, usize>,
}

impl TileSet {
    /// Expand archetypes into all rotations with distinct edge signatures
    ///
    /// Rotations reproducing an already-seen `(type, N, S, E, W)` tuple are
    /// skipped, so a fully symmetric archetype yields a single variant.
    pub fn expand(tile_types: &[TileType]) -> Self {
        let mut tiles = Vec::with_capacity(tile_types.len() * Rotation::ALL.len());
        let mut index_by_id = HashMap::new();
        let mut seen: HashSet<(&str, Edges)> = HashSet::new();

        for tile_type in tile_types {
            for rotation in Rotation::ALL {
                let edges = tile_type.edges.rotated(rotation);
                if !seen.insert((tile_type.name.as_str(), edges)) {
                    continue;
                }

                let id = tile_id(&tile_type.name, rotation);
                if index_by_id.contains_key(&id) {
                    tracing::warn!(%id, "skipping tile variant with duplicate id");
                    continue;
                }

                index_by_id.insert(id.clone(), tiles.len());
                tiles.push(Tile {
                    id,
                    type_name: tile_type.name.clone(),
                    rotation,
                    edges,
                });
            }
        }

        Self { tiles, index_by_id }
    }

    /// All variants in expansion order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of variants
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test whether no variants exist
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Variant at a tile index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile index for an identifier
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Variant for an identifier
    pub fn by_id(&self, id: &str) -> Option<&Tile> {
        self.index_of(id).and_then(|index| self.tiles.get(index))
    }
}
