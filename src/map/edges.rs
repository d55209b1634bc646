//! Edge and corner connectivity of a path tile

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Rotation};

/// Rotate a 4-bit mask left by `steps`, wrapping within the nibble
const fn rol4(mask: u8, steps: u8) -> u8 {
    let mask = mask & 0x0F;
    let steps = steps & 3;
    ((mask << steps) | (mask >> ((4 - steps) & 3))) & 0x0F
}

/// Path connectivity: low nibble holds the four edges, high nibble the four corners.
///
/// A set edge bit means the path continues onto the neighbouring tile in that
/// direction. A set corner bit means the diagonal between two connected edges
/// is filled as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EdgeMask(u8);

impl EdgeMask {
    pub const NONE: EdgeMask = EdgeMask(0);
    pub const ALL: EdgeMask = EdgeMask(0xFF);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn from_parts(edges: u8, corners: u8) -> Self {
        Self((edges & 0x0F) | ((corners & 0x0F) << 4))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The four edge bits
    pub const fn edges(self) -> u8 {
        self.0 & 0x0F
    }

    /// The four corner bits
    pub const fn corners(self) -> u8 {
        self.0 >> 4
    }

    pub const fn is_open(self, direction: Direction) -> bool {
        self.0 & (1 << direction as u8) != 0
    }

    /// Edges and corners as seen through the camera; both nibbles rotate independently
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let steps = rotation.get();
        Self::from_parts(rol4(self.edges(), steps), rol4(self.corners(), steps))
    }

    /// Index into 256-entry sprite pattern tables
    pub const fn pattern(self) -> usize {
        self.0 as usize
    }
}
