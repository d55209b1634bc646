//! Path surface, bridge sprites and support requests
//!
//! Box-supported and pole-supported paths share the surface layout and the
//! support height bookkeeping; they differ in the bridge sprite and in how
//! supports are requested.

use glam::IVec3;

use crate::map::{EdgeMask, PathElement};
use crate::paint::context::PaintEnv;
use crate::paint::footpath::TilePaint;
use crate::paint::railings;
use crate::paint::session::{PaintSession, SegmentMask, SupportCall};
use crate::paint::tables::{
    sprite, SurfaceBox, BOX_SUPPORT_KIND, INSET_SURFACE_BOX, PATH_SPRITES, POLE_SUPPORT_SEGMENTS,
    SURFACE_BOXES,
};

/// Segment height that blocks any further supports
pub const SUPPORT_HEIGHT_BLOCKED: i32 = 0xFFFF;

/// Slope marker stored with the general support height above a path
const PATH_SUPPORT_SLOPE: u8 = 0x20;

/// Pole supports under a sloped path use this special shape
const POLE_SLOPED_SPECIAL: u8 = 8;

/// Where and what the path surface sprite is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SurfaceLayout {
    /// Edges and corners rotated into view
    pattern: EdgeMask,
    image: u32,
    bounds: SurfaceBox,
    z_offset: i32,
}

fn surface_layout(session: &PaintSession, paint: &TilePaint<'_>) -> SurfaceLayout {
    let pattern = paint.element.edges.rotated(paint.rotation);

    let mut offset = if paint.element.is_sloped() {
        u32::from(paint.view_slope()) + sprite::SLOPED
    } else {
        u32::from(PATH_SPRITES.get(pattern))
    };
    if paint.element.queue {
        offset += sprite::QUEUE;
    }
    let image = paint.entry.image.wrapping_add(offset);

    let bounds = if session.did_pass_surface {
        *SURFACE_BOXES.get(pattern)
    } else {
        INSET_SURFACE_BOX
    };

    // Clip above the gravel of flat track sharing the tile
    let z_offset = if session.flat_track_on_same_height { 2 } else { 1 };

    SurfaceLayout {
        pattern,
        image,
        bounds,
        z_offset,
    }
}

/// Paint the surface, or the bridge sprite plus the surface on top when
/// the path is elevated. `bridge` is the bridge sprite offset for this style.
fn paint_surface(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    layout: &SurfaceLayout,
    bridge: u32,
) {
    let height = paint.height;
    let offset = IVec3::new(0, 0, height);
    let length = layout.bounds.size.extend(0);
    let bound_offset = layout.bounds.offset.extend(height + layout.z_offset);

    if !paint.has_fences || !session.did_pass_surface {
        paint.parent(session, layout.image | paint.image_flags, offset, length, bound_offset);
        return;
    }

    let bridge_image = paint.entry.bridge_image.wrapping_add(bridge) | paint.image_flags;
    paint.parent(session, bridge_image, offset, length, bound_offset);

    if paint.element.queue || paint.entry.has_base_sprite {
        paint.child(session, layout.image | paint.image_flags, offset, length, bound_offset);
    }
}

/// Footpath on wooden box supports
pub(crate) fn paint_box_supported(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    paint: &mut TilePaint<'_>,
) {
    let layout = surface_layout(session, paint);
    let kind = *BOX_SUPPORT_KIND.get(layout.pattern);

    let bridge = if paint.element.is_sloped() {
        u32::from(paint.view_slope()) + sprite::BRIDGE_BOX_SLOPED
    } else {
        u32::from(kind) + sprite::BRIDGE_BOX_FLAT
    };
    paint_surface(session, paint, &layout, bridge);

    railings::paint_path_details(session, env, paint, layout.pattern);

    let special = if paint.element.is_sloped() {
        paint.view_slope() + 1
    } else {
        0
    };
    session.add_support(SupportCall::Box {
        kind,
        special,
        height: paint.height,
        image_flags: paint.image_flags,
        bridge_image: paint.entry.bridge_image,
    });

    publish_support_heights(session, paint, layout.pattern);
}

/// Footpath on metal pole supports, one pole under each closed edge
pub(crate) fn paint_pole_supported(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    paint: &mut TilePaint<'_>,
) {
    let layout = surface_layout(session, paint);

    let bridge = if paint.element.is_sloped() {
        u32::from(paint.view_slope()) + sprite::BRIDGE_POLE_SLOPED
    } else {
        u32::from(layout.pattern.edges())
    };
    paint_surface(session, paint, &layout, bridge);

    railings::paint_path_details(session, env, paint, layout.pattern);

    let special = if paint.element.is_sloped() {
        POLE_SLOPED_SPECIAL
    } else {
        0
    };
    for edge in (0..4).rev() {
        if layout.pattern.edges() & (1 << edge) != 0 {
            continue;
        }
        session.add_support(SupportCall::Pole {
            segment: POLE_SUPPORT_SEGMENTS[edge],
            special,
            height: paint.height,
            image_flags: paint.image_flags,
            bridge_image: paint.entry.bridge_image,
        });
    }

    publish_support_heights(session, paint, layout.pattern);
}

/// Record the height above the path and which segments it blocks
fn publish_support_heights(session: &mut PaintSession, paint: &TilePaint<'_>, pattern: EdgeMask) {
    let element: &PathElement = paint.element;

    let mut height = paint.height + 32;
    if element.is_sloped() {
        height += 16;
    }
    session.set_general_support_height(height, PATH_SUPPORT_SLOPE);

    if element.queue || (element.edges != EdgeMask::ALL && paint.has_fences) {
        session.set_segment_support_height(SegmentMask::ALL, SUPPORT_HEIGHT_BLOCKED, 0);
        return;
    }

    if element.edges == EdgeMask::ALL {
        let sides = SegmentMask::SIDE_TOP_LEFT
            | SegmentMask::SIDE_TOP_RIGHT
            | SegmentMask::SIDE_BOTTOM_LEFT
            | SegmentMask::SIDE_BOTTOM_RIGHT;
        session.set_segment_support_height(sides, SUPPORT_HEIGHT_BLOCKED, 0);
        return;
    }

    let mut blocked = SegmentMask::CENTRE;
    let edges = pattern.edges();
    if edges & 1 != 0 {
        blocked = blocked | SegmentMask::SIDE_TOP_RIGHT;
    }
    if edges & 2 != 0 {
        blocked = blocked | SegmentMask::SIDE_BOTTOM_RIGHT;
    }
    if edges & 4 != 0 {
        blocked = blocked | SegmentMask::SIDE_BOTTOM_LEFT;
    }
    if edges & 8 != 0 {
        blocked = blocked | SegmentMask::SIDE_TOP_LEFT;
    }
    session.set_segment_support_height(blocked, SUPPORT_HEIGHT_BLOCKED, 0);
}
