//! Path details: additions, railings, queue banners and tunnel entries

use glam::IVec3;

use crate::map::EdgeMask;
use crate::paint::additions;
use crate::paint::context::{EntranceCaption, PaintEnv};
use crate::paint::footpath::TilePaint;
use crate::paint::session::{InteractionItem, PaintSession, TunnelKind};
use crate::paint::tables::{
    sloped_rails, sprite, RailSprite, BANNER_BOXES, PATH_RAILS, PATH_SLOPED_RAILS, QUEUE_RAILS,
    QUEUE_SLOPED_RAILS, RAIL_HEIGHT_FLAT, RAIL_HEIGHT_SLOPED,
};

/// Zoom levels past this skip additions and railings
const MAX_DETAIL_ZOOM: u8 = 1;

/// Banner sprite height
const BANNER_HEIGHT: i32 = 21;

/// Paint everything that sits on top of the path surface, then register
/// tunnel openings. `pattern` holds the rotated edges and corners.
pub(crate) fn paint_path_details(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    paint: &mut TilePaint<'_>,
    pattern: EdgeMask,
) {
    if session.frame.zoom_level <= MAX_DETAIL_ZOOM {
        if session.frame.design_preview.is_none() {
            if let Some(addition) = paint.element.addition {
                let ghost = paint.scenery_flags != 0;
                match env.assets.path_addition_entry(addition.slot) {
                    Some(entry) => {
                        paint.interaction = if ghost {
                            InteractionItem::None
                        } else {
                            InteractionItem::FootpathItem
                        };
                        additions::paint_addition(session, paint, entry, pattern);
                    }
                    None => {
                        tracing::trace!("No path addition object in slot {}", addition.slot);
                    }
                }
                paint.interaction = if ghost {
                    InteractionItem::None
                } else {
                    InteractionItem::Footpath
                };
            }
        }

        paint_railings(session, env, paint, pattern);
    }

    push_tunnels(session, paint, pattern);
}

fn paint_rails(
    session: &mut PaintSession,
    paint: &TilePaint<'_>,
    rails: &[RailSprite],
    rail_height: i32,
    hidden_corners: u8,
) {
    let height = paint.height;
    for rail in rails {
        if rail.hidden_by_corner & hidden_corners != 0 {
            continue;
        }
        let image = paint.entry.image.wrapping_add(rail.image) | paint.image_flags;
        paint.parent(
            session,
            image,
            rail.offset.extend(height),
            rail.length.extend(rail_height),
            rail.bound_offset.extend(height + 2),
        );
    }
}

fn paint_railings(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    paint: &mut TilePaint<'_>,
    pattern: EdgeMask,
) {
    let element = paint.element;

    if element.queue {
        if element.is_sloped() {
            let direction = paint.view_slope();
            let image = QUEUE_SLOPED_RAILS[usize::from(direction)];
            paint_rails(session, paint, &sloped_rails(image, direction), RAIL_HEIGHT_SLOPED, 0);
        } else {
            paint_rails(session, paint, QUEUE_RAILS.get(pattern), RAIL_HEIGHT_FLAT, 0);
        }
        paint_queue_banner(session, env, paint);
        return;
    }

    if element.is_sloped() {
        let direction = paint.view_slope();
        let image = PATH_SLOPED_RAILS[usize::from(direction)];
        paint_rails(session, paint, &sloped_rails(image, direction), RAIL_HEIGHT_SLOPED, 0);
        return;
    }

    if !paint.has_fences {
        return;
    }

    // Filled corners hide their post, unless the object has no base sprite
    let corners = if paint.entry.has_base_sprite {
        pattern.bits()
    } else {
        pattern.edges()
    };
    paint_rails(session, paint, PATH_RAILS.get(pattern), RAIL_HEIGHT_FLAT, corners);
}

/// Ride entrance banner over a queue, with a scrolling caption on the two
/// directions that face the camera
fn paint_queue_banner(session: &mut PaintSession, env: &PaintEnv<'_>, paint: &mut TilePaint<'_>) {
    let element = paint.element;
    let Some(banner) = element.queue_banner else {
        return;
    };

    paint.interaction = InteractionItem::Ride;

    let mut height = paint.height;
    if element.slope == Some(banner) {
        height += 16;
    }

    let direction = paint.rotation.apply(banner.index());
    let boxes = BANNER_BOXES[usize::from(direction)];
    let offset = IVec3::new(0, 0, height);
    let length = IVec3::new(1, 1, BANNER_HEIGHT);

    let banner_sprite = sprite::QUEUE_BANNER + u32::from(direction) * 2;
    let image = paint.entry.image.wrapping_add(banner_sprite) | paint.image_flags;
    paint.parent(session, image, offset, length, boxes[0].extend(height + 2));
    paint.parent(session, image.wrapping_add(1), offset, length, boxes[1].extend(height + 2));

    let caption_direction = direction.wrapping_sub(1);
    if caption_direction < 2 && paint.image_flags == 0 {
        if let Some(ride_index) = element.ride_index {
            paint_banner_caption(
                session,
                env,
                paint,
                ride_index,
                caption_direction,
                height,
                boxes[1].extend(height + 2),
            );
        }
    }

    paint.interaction = if paint.image_flags != 0 {
        InteractionItem::None
    } else {
        InteractionItem::Footpath
    };
}

fn paint_banner_caption(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    paint: &TilePaint<'_>,
    ride_index: u8,
    caption_direction: u8,
    height: i32,
    bound_offset: IVec3,
) {
    let Some(ride) = env.world.ride_at(ride_index) else {
        tracing::trace!("Queue banner points at missing ride {}", ride_index);
        return;
    };

    let caption = if ride.open && !ride.broken_down {
        EntranceCaption::Open {
            ride_name: &ride.name,
        }
    } else {
        EntranceCaption::Closed
    };
    let mut text = env.text.format_entrance_caption(caption);
    if env.config.upper_case_banners {
        text = text.to_uppercase();
    }

    let width = env.text.string_width(&text);
    let scroll = if width == 0 {
        0
    } else {
        ((session.frame.ticks / 2) % u32::from(width)) as u16
    };
    let mode = paint.entry.scrolling_mode.wrapping_add(u16::from(caption_direction));
    let image = env.text.scrolling_text_image(&text, scroll, mode);

    paint.child(
        session,
        image,
        IVec3::new(0, 0, height + 7),
        IVec3::new(1, 1, BANNER_HEIGHT),
        bound_offset,
    );
}

/// Tunnel openings on the two camera-facing sides
fn push_tunnels(session: &mut PaintSession, paint: &TilePaint<'_>, pattern: EdgeMask) {
    let height = paint.height;
    let edges = pattern.edges();
    let slope = paint.view_slope() | if paint.element.is_sloped() { 4 } else { 0 };

    if edges & 2 != 0 {
        if slope == 5 {
            session.push_right_tunnel(height + 16, TunnelKind::Path);
        } else if edges & 1 != 0 {
            session.push_right_tunnel(height, TunnelKind::PathJunction);
        } else {
            session.push_right_tunnel(height, TunnelKind::Path);
        }
    }

    if edges & 4 == 0 {
        return;
    }

    if slope == 6 {
        session.push_left_tunnel(height + 16, TunnelKind::Path);
    } else if edges & 8 != 0 {
        session.push_left_tunnel(height, TunnelKind::PathJunction);
    } else {
        session.push_left_tunnel(height, TunnelKind::Path);
    }
}
