//! Light sources for lamp additions

use glam::IVec3;

use crate::core::Direction;
use crate::map::PathElement;
use crate::paint::context::PaintEnv;
use crate::paint::session::{LightKind, PaintSession};

/// Lamp head height above the path
const LAMP_HEIGHT: i32 = 23;

/// Light offset from the tile centre for each unrotated edge
const LAMP_OFFSETS: [(i32, i32); 4] = [(-16, 0), (0, 16), (16, 0), (0, -16)];

/// Register a lantern on every closed edge of a path carrying an intact lamp
pub fn add_lamp_lights(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    height: i32,
    element: &PathElement,
) {
    if !env.config.lighting || element.broken {
        return;
    }
    let Some(addition) = element.addition else {
        return;
    };
    let Some(entry) = env.assets.path_addition_entry(addition.slot) else {
        return;
    };
    if !entry.lamp {
        return;
    }

    for (edge, (x, y)) in LAMP_OFFSETS.into_iter().enumerate() {
        if element.edges.is_open(Direction::from_index(edge as u8)) {
            continue;
        }
        session.add_light(IVec3::new(x, y, height + LAMP_HEIGHT), LightKind::Lantern);
    }
}
