//! Footpath tile elements

use serde::{Deserialize, Serialize};

use super::edges::EdgeMask;
use crate::core::types::Direction;

/// Size of a serialized tile element in bytes
pub const TILE_ELEMENT_SIZE: usize = 8;

/// Element type value for footpaths (bits 2..6 of the type byte)
pub const TILE_ELEMENT_TYPE_PATH: u8 = 1 << 2;
const TILE_ELEMENT_TYPE_MASK: u8 = 0x3C;

const FLAG_GHOST: u8 = 1 << 4;
const FLAG_BROKEN: u8 = 1 << 5;

const PATH_TYPE_FLAG_QUEUE: u8 = 1 << 0;
const PATH_PROP_SLOPE_DIRECTION_MASK: u8 = 0x03;
const PATH_PROP_SLOPED: u8 = 1 << 2;
const PATH_PROP_QUEUE_BANNER: u8 = 1 << 3;
const PATH_ADDITION_MASK: u8 = 0x0F;
const PATH_ADDITION_GHOST: u8 = 1 << 7;

/// Ride index meaning "no ride"
pub const RIDE_INDEX_NONE: u8 = 255;

/// A bench, bin, lamp or fountain placed on a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathAddition {
    /// Path-addition object slot
    pub slot: u8,
    /// Placed as a construction preview
    pub ghost: bool,
}

/// State of one footpath element on a map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathElement {
    /// Height in 8-unit steps
    pub base_height: u8,
    /// Footpath object slot
    pub entry_index: u8,
    /// Uphill direction of a sloped path
    pub slope: Option<Direction>,
    pub queue: bool,
    /// Facing of the ride-entrance banner on a queue tile
    pub queue_banner: Option<Direction>,
    pub edges: EdgeMask,
    pub addition: Option<PathAddition>,
    /// Per-edge bin fill bits, two per edge
    pub addition_status: u8,
    /// Ride a queue leads to
    pub ride_index: Option<u8>,
    pub broken: bool,
    pub ghost: bool,
}

impl PathElement {
    /// A flat, connected-nowhere path of the given surface
    pub fn new(base_height: u8, entry_index: u8) -> Self {
        Self {
            base_height,
            entry_index,
            slope: None,
            queue: false,
            queue_banner: None,
            edges: EdgeMask::NONE,
            addition: None,
            addition_status: 0,
            ride_index: None,
            broken: false,
            ghost: false,
        }
    }

    pub fn with_edges(mut self, edges: EdgeMask) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_slope(mut self, direction: Direction) -> Self {
        self.slope = Some(direction);
        self
    }

    pub fn with_addition(mut self, slot: u8) -> Self {
        self.addition = Some(PathAddition { slot, ghost: false });
        self
    }

    /// Turn the path into a queue leading to `ride_index`
    pub fn as_queue(mut self, ride_index: Option<u8>) -> Self {
        self.queue = true;
        self.ride_index = ride_index;
        self
    }

    pub fn is_sloped(&self) -> bool {
        self.slope.is_some()
    }

    /// Slope direction index, 0 for flat paths
    pub fn slope_direction(&self) -> u8 {
        self.slope.map_or(0, Direction::index)
    }

    /// Decode an 8-byte tile element; `None` if it is not a footpath
    pub fn from_bytes(bytes: &[u8; TILE_ELEMENT_SIZE]) -> Option<Self> {
        let [kind, flags, base_height, _clearance, path_type, additions, edges, extra] =
            *bytes;
        if kind & TILE_ELEMENT_TYPE_MASK != TILE_ELEMENT_TYPE_PATH {
            return None;
        }

        let queue = kind & PATH_TYPE_FLAG_QUEUE != 0;
        let slope = (path_type & PATH_PROP_SLOPED != 0)
            .then(|| Direction::from_index(path_type & PATH_PROP_SLOPE_DIRECTION_MASK));
        let queue_banner = (path_type & PATH_PROP_QUEUE_BANNER != 0)
            .then(|| Direction::from_index(kind >> 6));
        let addition = match additions & PATH_ADDITION_MASK {
            0 => None,
            n => Some(PathAddition {
                slot: n - 1,
                ghost: additions & PATH_ADDITION_GHOST != 0,
            }),
        };
        // The last byte is the ride index on queues and the bin status elsewhere
        let ride_index = (queue && extra != RIDE_INDEX_NONE).then_some(extra);

        Some(Self {
            base_height,
            entry_index: path_type >> 4,
            slope,
            queue,
            queue_banner,
            edges: EdgeMask::from_bits(edges),
            addition,
            addition_status: extra,
            ride_index,
            broken: flags & FLAG_BROKEN != 0,
            ghost: flags & FLAG_GHOST != 0,
        })
    }
}
