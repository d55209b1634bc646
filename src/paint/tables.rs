//! Lookup tables for footpath sprites and geometry
//!
//! Tables keyed by edges are wrapped in [`EdgeTable`] and tables keyed by
//! the full edge/corner byte in [`PatternTable`], so every lookup is in
//! range by construction.

use glam::IVec2;

use crate::map::EdgeMask;

/// Table with one entry per combination of the four edge bits
#[derive(Debug, Clone, Copy)]
pub struct EdgeTable<T: 'static>([T; 16]);

impl<T: 'static> EdgeTable<T> {
    pub const fn new(entries: [T; 16]) -> Self {
        Self(entries)
    }

    /// Entry for the edge nibble of `mask`; corners are ignored
    pub fn get(&self, mask: EdgeMask) -> &T {
        &self.0[usize::from(mask.edges())]
    }
}

/// Table with one entry per edge/corner byte
#[derive(Debug, Clone, Copy)]
pub struct PatternTable([u8; 256]);

impl PatternTable {
    pub const fn new(entries: [u8; 256]) -> Self {
        Self(entries)
    }

    pub fn get(&self, mask: EdgeMask) -> u8 {
        self.0[mask.pattern()]
    }
}

/// Footpath sprite image offsets relative to the path object's base image
pub mod sprite {
    /// First of the four sloped path sprites
    pub const SLOPED: u32 = 16;
    /// Added to every surface sprite of a queue
    pub const QUEUE: u32 = 51;
    /// First of the two banner sprites per direction
    pub const QUEUE_BANNER: u32 = 101;

    /// Bridge sprites relative to the path object's bridge image
    pub const BRIDGE_BOX_FLAT: u32 = 49;
    pub const BRIDGE_BOX_SLOPED: u32 = 51;
    pub const BRIDGE_POLE_SLOPED: u32 = 16;

    pub const PATROL_FLAT: u32 = 2618;
    pub const PATROL_SLOPED: u32 = 2619;
}

/// Surface slope code a sloped path needs underneath, by slope direction
pub const SLOPE_SURFACE_CODES: [u8; 4] = [12, 9, 3, 6];

/// Flat path sprite by edge/corner pattern
pub static PATH_SPRITES: PatternTable = PatternTable::new([
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    0, 1, 2, 20, 4, 5, 6, 22, 8, 9, 10, 26, 12, 13, 14, 36,
    0, 1, 2, 3, 4, 5, 21, 23, 8, 9, 10, 11, 12, 13, 33, 37,
    0, 1, 2, 3, 4, 5, 6, 24, 8, 9, 10, 11, 12, 13, 14, 38,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 29, 30, 34, 39,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 40,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 35, 41,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 42,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 25, 10, 27, 12, 31, 14, 43,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 28, 12, 13, 14, 44,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 45,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 46,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 32, 14, 47,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 48,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 49,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 50,
]);

/// Horizontal bounding box of the path surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceBox {
    pub offset: IVec2,
    pub size: IVec2,
}

const fn surface_box(x: i32, y: i32, width: i32, depth: i32) -> SurfaceBox {
    SurfaceBox {
        offset: IVec2::new(x, y),
        size: IVec2::new(width, depth),
    }
}

/// Bounding box used before the surface has been painted
pub const INSET_SURFACE_BOX: SurfaceBox = surface_box(3, 3, 26, 26);

/// Open edges extend the box to the tile border
pub static SURFACE_BOXES: EdgeTable<SurfaceBox> = EdgeTable::new([
    surface_box(3, 3, 26, 26),
    surface_box(0, 3, 29, 26),
    surface_box(3, 3, 26, 29),
    surface_box(0, 3, 29, 29),
    surface_box(3, 3, 29, 26),
    surface_box(0, 3, 32, 26),
    surface_box(3, 3, 29, 29),
    surface_box(0, 3, 32, 29),
    surface_box(3, 0, 26, 29),
    surface_box(0, 0, 29, 29),
    surface_box(3, 0, 26, 32),
    surface_box(0, 0, 29, 32),
    surface_box(3, 0, 29, 29),
    surface_box(0, 0, 32, 29),
    surface_box(3, 0, 29, 32),
    surface_box(0, 0, 32, 32),
]);

/// Box support shape: 1 for straight runs, 0 elsewhere
pub static BOX_SUPPORT_KIND: EdgeTable<u8> =
    EdgeTable::new([0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0]);

/// Pole support segment under each closed edge
pub const POLE_SUPPORT_SEGMENTS: [u8; 4] = [6, 8, 7, 5];

/// Horizontal bounding box offsets of the two banner sprites, by rotated direction
pub const BANNER_BOXES: [[IVec2; 2]; 4] = [
    [IVec2::new(1, 2), IVec2::new(1, 29)],
    [IVec2::new(2, 32), IVec2::new(29, 32)],
    [IVec2::new(32, 2), IVec2::new(32, 29)],
    [IVec2::new(2, 1), IVec2::new(29, 1)],
];

/// One railing or corner post sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailSprite {
    /// Offset from the path object's base image
    pub image: u32,
    pub offset: IVec2,
    pub length: IVec2,
    pub bound_offset: IVec2,
    /// Corner bit that suppresses this sprite when set
    pub hidden_by_corner: u8,
}

const fn rail(
    image: u32,
    offset: (i32, i32),
    length: (i32, i32),
    bound: (i32, i32),
) -> RailSprite {
    RailSprite {
        image,
        offset: IVec2::new(offset.0, offset.1),
        length: IVec2::new(length.0, length.1),
        bound_offset: IVec2::new(bound.0, bound.1),
        hidden_by_corner: 0,
    }
}

const fn post(image: u32, bound: (i32, i32), corner: u8) -> RailSprite {
    RailSprite {
        image,
        offset: IVec2::ZERO,
        length: IVec2::new(4, 4),
        bound_offset: IVec2::new(bound.0, bound.1),
        hidden_by_corner: corner,
    }
}

/// Both rails run parallel to the x axis on the near and far side
const fn rails_x(image: u32, length: i32) -> [RailSprite; 2] {
    [
        rail(image, (0, 4), (length, 1), (0, 4)),
        rail(image, (0, 28), (length, 1), (0, 28)),
    ]
}

const fn rails_y(image: u32, length: i32) -> [RailSprite; 2] {
    [
        rail(image, (4, 0), (1, length), (4, 0)),
        rail(image, (28, 0), (1, length), (28, 0)),
    ]
}

/// Railings on a sloped path, by rotated slope direction
pub fn sloped_rails(image: u32, direction: u8) -> [RailSprite; 2] {
    if direction & 1 == 0 {
        rails_x(image, 32)
    } else {
        rails_y(image, 32)
    }
}

pub const QUEUE_SLOPED_RAILS: [u32; 4] = [95, 94, 96, 93];
pub const PATH_SLOPED_RAILS: [u32; 4] = [81, 80, 82, 79];

/// Flat railing height
pub const RAIL_HEIGHT_FLAT: i32 = 7;
/// Sloped railing height
pub const RAIL_HEIGHT_SLOPED: i32 = 23;

const QUEUE_1: [RailSprite; 2] = rails_x(90, 28);
const QUEUE_2: [RailSprite; 2] = rails_y(91, 28);
const QUEUE_3: [RailSprite; 3] = [
    rail(90, (0, 4), (28, 1), (0, 4)),
    rail(91, (28, 0), (1, 28), (28, 4)),
    rail(98, (0, 0), (4, 4), (0, 28)),
];
const QUEUE_4: [RailSprite; 2] = rails_x(92, 28);
const QUEUE_5: [RailSprite; 2] = rails_x(88, 32);
const QUEUE_6: [RailSprite; 3] = [
    rail(91, (4, 0), (1, 28), (4, 0)),
    rail(92, (0, 4), (28, 1), (0, 4)),
    rail(99, (0, 0), (4, 4), (28, 28)),
];
const QUEUE_8: [RailSprite; 2] = rails_y(89, 28);
const QUEUE_9: [RailSprite; 3] = [
    rail(89, (28, 0), (1, 28), (28, 0)),
    rail(90, (0, 28), (28, 1), (0, 28)),
    rail(97, (0, 0), (4, 4), (0, 0)),
];
const QUEUE_10: [RailSprite; 2] = rails_y(87, 32);
const QUEUE_12: [RailSprite; 3] = [
    rail(89, (4, 0), (1, 28), (4, 0)),
    rail(92, (0, 28), (28, 1), (4, 28)),
    rail(100, (0, 0), (4, 4), (28, 0)),
];

/// Flat queue railings by rotated edges. Queues only ever join two edges.
pub static QUEUE_RAILS: EdgeTable<&[RailSprite]> = EdgeTable::<&[RailSprite]>::new([
    &[],
    &QUEUE_1,
    &QUEUE_2,
    &QUEUE_3,
    &QUEUE_4,
    &QUEUE_5,
    &QUEUE_6,
    &[],
    &QUEUE_8,
    &QUEUE_9,
    &QUEUE_10,
    &[],
    &QUEUE_12,
    &[],
    &[],
    &[],
]);

const POST_SOUTH: RailSprite = post(84, (0, 28), 0x10);
const POST_EAST: RailSprite = post(85, (28, 28), 0x20);
const POST_NORTH: RailSprite = post(86, (28, 0), 0x40);
const POST_WEST: RailSprite = post(83, (0, 0), 0x80);

const PATH_1: [RailSprite; 2] = rails_x(76, 28);
const PATH_2: [RailSprite; 2] = rails_y(77, 28);
const PATH_3: [RailSprite; 3] = [
    rail(76, (0, 4), (28, 1), (0, 4)),
    rail(77, (28, 0), (1, 28), (28, 4)),
    POST_SOUTH,
];
const PATH_4: [RailSprite; 2] = rails_x(78, 28);
const PATH_5: [RailSprite; 2] = rails_x(74, 32);
const PATH_6: [RailSprite; 3] = [
    rail(77, (4, 0), (1, 28), (4, 0)),
    rail(78, (0, 4), (28, 1), (0, 4)),
    POST_EAST,
];
const PATH_7: [RailSprite; 3] = [rail(74, (0, 4), (32, 1), (0, 4)), POST_SOUTH, POST_EAST];
const PATH_8: [RailSprite; 2] = rails_y(75, 28);
const PATH_9: [RailSprite; 3] = [
    rail(75, (28, 0), (1, 28), (28, 0)),
    rail(76, (0, 28), (28, 1), (0, 28)),
    POST_WEST,
];
const PATH_10: [RailSprite; 2] = rails_y(73, 32);
const PATH_11: [RailSprite; 3] = [rail(73, (28, 0), (1, 32), (28, 0)), POST_SOUTH, POST_WEST];
const PATH_12: [RailSprite; 3] = [
    rail(75, (4, 0), (1, 28), (4, 0)),
    rail(78, (0, 28), (28, 1), (4, 28)),
    POST_NORTH,
];
const PATH_13: [RailSprite; 3] = [rail(74, (0, 28), (32, 1), (0, 28)), POST_NORTH, POST_WEST];
const PATH_14: [RailSprite; 3] = [rail(73, (4, 0), (1, 32), (4, 0)), POST_EAST, POST_NORTH];
const PATH_15: [RailSprite; 4] = [POST_SOUTH, POST_EAST, POST_NORTH, POST_WEST];

/// Flat footpath railings and corner posts by rotated edges
pub static PATH_RAILS: EdgeTable<&[RailSprite]> = EdgeTable::<&[RailSprite]>::new([
    &[],
    &PATH_1,
    &PATH_2,
    &PATH_3,
    &PATH_4,
    &PATH_5,
    &PATH_6,
    &PATH_7,
    &PATH_8,
    &PATH_9,
    &PATH_10,
    &PATH_11,
    &PATH_12,
    &PATH_13,
    &PATH_14,
    &PATH_15,
]);
