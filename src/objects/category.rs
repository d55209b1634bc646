//! Object categories and their fixed slot capacities

use serde::{Deserialize, Serialize};

/// Storage encoding of a category's object chunk in save files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkEncoding {
    Rle,
    Rotate,
}

/// One of the eleven kinds of loadable object.
///
/// Declaration order is the global index order used by save and scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Ride,
    SmallScenery,
    LargeScenery,
    Wall,
    Banner,
    Footpath,
    PathAddition,
    SceneryGroup,
    ParkEntrance,
    Water,
    ScenarioText,
}

pub const MAX_RIDE_OBJECTS: usize = 128;
pub const MAX_SMALL_SCENERY_OBJECTS: usize = 252;
pub const MAX_LARGE_SCENERY_OBJECTS: usize = 128;
pub const MAX_WALL_SCENERY_OBJECTS: usize = 128;
pub const MAX_BANNER_OBJECTS: usize = 32;
pub const MAX_PATH_OBJECTS: usize = 16;
pub const MAX_PATH_ADDITION_OBJECTS: usize = 15;
pub const MAX_SCENERY_GROUP_OBJECTS: usize = 19;
pub const MAX_PARK_ENTRANCE_OBJECTS: usize = 1;
pub const MAX_WATER_OBJECTS: usize = 1;
pub const MAX_SCENARIO_TEXT_OBJECTS: usize = 1;

/// Slot capacities in declaration order
const CAPACITIES: [usize; ObjectCategory::COUNT] = [
    MAX_RIDE_OBJECTS,
    MAX_SMALL_SCENERY_OBJECTS,
    MAX_LARGE_SCENERY_OBJECTS,
    MAX_WALL_SCENERY_OBJECTS,
    MAX_BANNER_OBJECTS,
    MAX_PATH_OBJECTS,
    MAX_PATH_ADDITION_OBJECTS,
    MAX_SCENERY_GROUP_OBJECTS,
    MAX_PARK_ENTRANCE_OBJECTS,
    MAX_WATER_OBJECTS,
    MAX_SCENARIO_TEXT_OBJECTS,
];

/// Number of slots across every category
pub const TOTAL_OBJECT_CAPACITY: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < CAPACITIES.len() {
        total += CAPACITIES[i];
        i += 1;
    }
    total
};

const _: () = assert!(TOTAL_OBJECT_CAPACITY == 721);

impl ObjectCategory {
    pub const COUNT: usize = 11;

    pub const ALL: [ObjectCategory; ObjectCategory::COUNT] = [
        ObjectCategory::Ride,
        ObjectCategory::SmallScenery,
        ObjectCategory::LargeScenery,
        ObjectCategory::Wall,
        ObjectCategory::Banner,
        ObjectCategory::Footpath,
        ObjectCategory::PathAddition,
        ObjectCategory::SceneryGroup,
        ObjectCategory::ParkEntrance,
        ObjectCategory::Water,
        ObjectCategory::ScenarioText,
    ];

    /// Category for a descriptor's low flag nibble, if it names one
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Maximum number of simultaneously loaded objects of this kind
    pub const fn capacity(self) -> usize {
        CAPACITIES[self as usize]
    }

    pub const fn encoding(self) -> ChunkEncoding {
        match self {
            ObjectCategory::ScenarioText => ChunkEncoding::Rotate,
            _ => ChunkEncoding::Rle,
        }
    }

    /// Global index of this category's first slot
    pub const fn first_global_index(self) -> usize {
        let mut start = 0;
        let mut i = 0;
        while i < self as usize {
            start += CAPACITIES[i];
            i += 1;
        }
        start
    }

    /// Footpaths and path additions hold decoded data; other categories hold opaque chunks
    pub const fn has_typed_payload(self) -> bool {
        matches!(self, ObjectCategory::Footpath | ObjectCategory::PathAddition)
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectCategory::Ride => "ride",
            ObjectCategory::SmallScenery => "small scenery",
            ObjectCategory::LargeScenery => "large scenery",
            ObjectCategory::Wall => "wall",
            ObjectCategory::Banner => "banner",
            ObjectCategory::Footpath => "footpath",
            ObjectCategory::PathAddition => "path addition",
            ObjectCategory::SceneryGroup => "scenery group",
            ObjectCategory::ParkEntrance => "park entrance",
            ObjectCategory::Water => "water",
            ObjectCategory::ScenarioText => "scenario text",
        }
    }
}
