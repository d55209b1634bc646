//! Path additions: lamps, bins, benches and jumping fountains
//!
//! Lamps, bins and benches stand on each closed edge of the path. Fountains
//! occupy the four corners and are only visible fully zoomed in.

use glam::{IVec2, IVec3};

use crate::core::Direction;
use crate::map::EdgeMask;
use crate::objects::{AdditionDrawType, PathAdditionEntry};
use crate::paint::footpath::TilePaint;
use crate::paint::session::PaintSession;

/// Broken additions use the sprite strip after the intact one
const BROKEN_SPRITE_OFFSET: u32 = 4;

/// Bin fill state masks, one pair of status bits per edge
const BIN_STATUS_MASKS: [u8; 4] = [0x03, 0x0C, 0x30, 0xC0];

/// Placement of an addition sprite against one edge
#[derive(Debug, Clone, Copy)]
struct EdgePlacement {
    offset: IVec2,
    length: IVec3,
    bound_offset: IVec2,
}

const fn placement(
    offset: (i32, i32),
    length: (i32, i32, i32),
    bound: (i32, i32),
) -> EdgePlacement {
    EdgePlacement {
        offset: IVec2::new(offset.0, offset.1),
        length: IVec3::new(length.0, length.1, length.2),
        bound_offset: IVec2::new(bound.0, bound.1),
    }
}

const LAMP_PLACEMENTS: [EdgePlacement; 4] = [
    placement((2, 16), (1, 1, 23), (3, 16)),
    placement((16, 30), (1, 0, 23), (16, 29)),
    placement((30, 16), (0, 1, 23), (29, 16)),
    placement((16, 2), (1, 1, 23), (16, 3)),
];

const BIN_PLACEMENTS: [EdgePlacement; 4] = [
    placement((7, 16), (1, 1, 7), (7, 16)),
    placement((16, 25), (1, 1, 7), (16, 25)),
    placement((25, 16), (1, 1, 7), (25, 16)),
    placement((16, 7), (1, 1, 7), (16, 7)),
];

const BENCH_PLACEMENTS: [EdgePlacement; 4] = [
    placement((7, 16), (0, 16, 7), (6, 8)),
    placement((16, 25), (16, 0, 7), (8, 23)),
    placement((25, 16), (0, 16, 7), (23, 8)),
    placement((16, 7), (16, 0, 7), (8, 6)),
];

const FOUNTAIN_CORNERS: [IVec2; 4] = [
    IVec2::new(3, 3),
    IVec2::new(3, 29),
    IVec2::new(29, 29),
    IVec2::new(29, 3),
];

/// Dispatch on the addition's draw type. `pattern` holds the rotated edges.
pub(crate) fn paint_addition(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    entry: &PathAdditionEntry,
    pattern: EdgeMask,
) {
    match entry.draw_type {
        AdditionDrawType::Lights => paint_lamps(session, paint, entry, pattern),
        AdditionDrawType::Bins => paint_bins(session, paint, entry, pattern),
        AdditionDrawType::Benches => paint_benches(session, paint, entry, pattern),
        AdditionDrawType::JumpingFountains => paint_fountains(session, paint, entry),
    }
}

fn closed_edges(pattern: EdgeMask) -> impl Iterator<Item = usize> {
    (0..4).filter(move |&edge| !pattern.is_open(Direction::from_index(edge as u8)))
}

fn emit(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    image: u32,
    place: &EdgePlacement,
    height: i32,
) {
    paint.parent(
        session,
        image | paint.scenery_flags,
        place.offset.extend(height),
        place.length,
        place.bound_offset.extend(height + 2),
    );
}

fn paint_lamps(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    entry: &PathAdditionEntry,
    pattern: EdgeMask,
) {
    let height = paint.height + if paint.element.is_sloped() { 8 } else { 0 };
    for edge in closed_edges(pattern) {
        let mut sprite = 1 + edge as u32;
        if paint.element.broken {
            sprite += BROKEN_SPRITE_OFFSET;
        }
        emit(session, paint, entry.image.wrapping_add(sprite), &LAMP_PLACEMENTS[edge], height);
    }
}

fn paint_bins(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    entry: &PathAdditionEntry,
    pattern: EdgeMask,
) {
    let height = paint.height + if paint.element.is_sloped() { 8 } else { 0 };
    let turns = u32::from(paint.rotation.get()) * 2;
    for edge in closed_edges(pattern) {
        let mut sprite = 5 + edge as u32;
        if !paint.element.broken {
            sprite -= BROKEN_SPRITE_OFFSET;
            // Status bits are stored unrotated
            let status_mask = BIN_STATUS_MASKS[edge].rotate_right(turns);
            if paint.element.addition_status & status_mask == 0 {
                sprite += 8;
            }
        }
        emit(session, paint, entry.image.wrapping_add(sprite), &BIN_PLACEMENTS[edge], height);
    }
}

fn paint_benches(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    entry: &PathAdditionEntry,
    pattern: EdgeMask,
) {
    for edge in closed_edges(pattern) {
        let mut sprite = 1 + edge as u32;
        if paint.element.broken {
            sprite += BROKEN_SPRITE_OFFSET;
        }
        let image = entry.image.wrapping_add(sprite);
        emit(session, paint, image, &BENCH_PLACEMENTS[edge], paint.height);
    }
}

fn paint_fountains(session: &mut PaintSession, paint: &TilePaint<'_>, entry: &PathAdditionEntry) {
    if session.frame.zoom_level != 0 {
        return;
    }
    let height = paint.height;
    for (corner, bound) in FOUNTAIN_CORNERS.iter().enumerate() {
        paint.parent(
            session,
            entry.image.wrapping_add(1 + corner as u32) | paint.scenery_flags,
            IVec3::new(0, 0, height),
            IVec3::new(1, 1, 2),
            bound.extend(height + 2),
        );
    }
}
