//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Active camera rotation, one of four quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rotation(u8);

impl Rotation {
    /// Wraps any value into the 0..4 range
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns & 3)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Rotation added to a direction, wrapped to a direction index
    pub const fn apply(self, direction: u8) -> u8 {
        (direction + self.0) & 3
    }
}

/// Cardinal tile direction in map space.
///
/// Index order matches the edge bits of a path element: bit 0 is `West`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    West,
    North,
    East,
    South,
}

impl Direction {
    pub const fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Direction::West,
            1 => Direction::North,
            2 => Direction::East,
            _ => Direction::South,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Tile position in map tile units (32 world units per tile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
