//! Footpath tile painter
//!
//! Entry point for one path element: decides the tint and interaction,
//! paints the staff patrol and height-marker overlays, hands the surface
//! to the support routine of the path object and registers lamp lights.

use glam::IVec3;

use crate::core::{Rotation, TileCoord};
use crate::map::{PathElement, SurfaceElement};
use crate::objects::{FootpathEntry, SupportType};
use crate::paint::context::PaintEnv;
use crate::paint::image::{
    primary_remap, COLOUR_GREY, COLOUR_LIGHT_BLUE, CONSTRUCTION_MARKER, DESIGN_PREVIEW_TINT,
};
use crate::paint::lighting;
use crate::paint::session::{InteractionItem, PaintSession, PatrolOverlay};
use crate::paint::supports;
use crate::paint::tables::{sprite, SLOPE_SURFACE_CODES};

/// Patrol area ids above this belong to a whole staff type
pub const STAFF_TYPE_PATROL_BASE: u16 = 200;

/// Per-element state threaded through the footpath routines
#[derive(Debug)]
pub(crate) struct TilePaint<'a> {
    pub element: &'a PathElement,
    pub entry: &'a FootpathEntry,
    pub rotation: Rotation,
    pub height: i32,
    /// The path floats above (or below) its surface and needs bridge sprites and railings
    pub has_fences: bool,
    pub image_flags: u32,
    pub scenery_flags: u32,
    pub interaction: InteractionItem,
}

impl TilePaint<'_> {
    /// Slope direction as seen through the camera
    pub fn view_slope(&self) -> u8 {
        self.rotation.apply(self.element.slope_direction())
    }

    pub fn parent(
        &self,
        session: &mut PaintSession,
        image: u32,
        offset: IVec3,
        length: IVec3,
        bound_offset: IVec3,
    ) {
        session.add_parent(image, offset, length, bound_offset, self.rotation, self.interaction);
    }

    pub fn child(
        &self,
        session: &mut PaintSession,
        image: u32,
        offset: IVec3,
        length: IVec3,
        bound_offset: IVec3,
    ) {
        session.add_child(image, offset, length, bound_offset, self.rotation, self.interaction);
    }
}

/// Paint one footpath element at `height` (world units) on the session's current tile
pub fn paint_footpath(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    rotation: Rotation,
    height: u16,
    element: &PathElement,
) {
    let tile = session.map_position;
    let mut interaction = InteractionItem::Footpath;
    let mut image_flags = 0;
    let mut scenery_flags = 0;

    if let Some(preview) = session.frame.design_preview {
        if element.queue && element.ride_index != Some(preview.ride_index) {
            return;
        }
        if !env.world.design_contains(tile, element) {
            image_flags = DESIGN_PREVIEW_TINT;
        }
    }

    if element.addition.is_some_and(|addition| addition.ghost) {
        scenery_flags = CONSTRUCTION_MARKER;
    }

    if element.ghost {
        interaction = InteractionItem::None;
        image_flags = CONSTRUCTION_MARKER;
    }

    let height = i32::from(height);
    let has_fences = needs_elevated_edges(env.world.surface_at(tile), height, element);

    paint_patrol_overlay(session, env, rotation, element, interaction);
    paint_height_marker(session, env, rotation, element, interaction);

    match env.assets.footpath_entry(element.entry_index) {
        Some(entry) => {
            let mut paint = TilePaint {
                element,
                entry,
                rotation,
                height,
                has_fences,
                image_flags,
                scenery_flags,
                interaction,
            };
            match entry.support_type {
                SupportType::Pole => supports::paint_pole_supported(session, env, &mut paint),
                SupportType::Box => supports::paint_box_supported(session, env, &mut paint),
            }
        }
        None => {
            tracing::trace!(
                "No footpath object in slot {} for tile ({}, {})",
                element.entry_index,
                tile.x,
                tile.y
            );
        }
    }

    lighting::add_lamp_lights(session, env, height, element);
}

/// Whether the path is detached from the terrain below it.
///
/// True when there is no surface, the surface sits at a different height,
/// or its slope does not match the path's.
pub fn needs_elevated_edges(
    surface: Option<SurfaceElement>,
    height: i32,
    element: &PathElement,
) -> bool {
    let Some(surface) = surface else {
        return true;
    };
    if i32::from(surface.base_height) != height / 8 {
        return true;
    }
    match element.slope {
        Some(direction) => {
            surface.slope_shape() != SLOPE_SURFACE_CODES[usize::from(direction.index())]
        }
        None => !surface.is_flat(),
    }
}

fn paint_patrol_overlay(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    rotation: Rotation,
    element: &PathElement,
    interaction: InteractionItem,
) {
    let Some(overlay) = session.frame.patrol_overlay else {
        return;
    };
    let tile: TileCoord = session.map_position;

    let (staff_type, colour) = match overlay {
        PatrolOverlay::Staff { staff_id, staff_type } => {
            let colour = if env.world.is_patrol_area_set(staff_id, tile) {
                COLOUR_LIGHT_BLUE
            } else {
                COLOUR_GREY
            };
            (staff_type, colour)
        }
        PatrolOverlay::StaffType(staff_type) => (staff_type, COLOUR_LIGHT_BLUE),
    };

    if !env
        .world
        .is_patrol_area_set(STAFF_TYPE_PATROL_BASE + u16::from(staff_type), tile)
    {
        return;
    }

    let mut image = sprite::PATROL_FLAT;
    let mut height = i32::from(element.base_height) * 8;
    if element.is_sloped() {
        image = sprite::PATROL_SLOPED + u32::from(rotation.apply(element.slope_direction()));
        height += 16;
    }

    let offset = IVec3::new(16, 16, height + 2);
    session.add_parent(
        image | primary_remap(colour),
        offset,
        IVec3::new(1, 1, 0),
        offset,
        rotation,
        interaction,
    );
}

fn paint_height_marker(
    session: &mut PaintSession,
    env: &PaintEnv<'_>,
    rotation: Rotation,
    element: &PathElement,
    interaction: InteractionItem,
) {
    if !session.frame.show_path_heights {
        return;
    }

    let mut height = 3 + i32::from(element.base_height) * 8;
    if element.is_sloped() {
        height += 8;
    }

    let config = env.config;
    let marker = config.height_marker_base.wrapping_add((height / 16) as u32);
    let image = (marker | primary_remap(COLOUR_GREY))
        .wrapping_add(config.height_marker_offset)
        .wrapping_sub(config.map_base_z);

    let offset = IVec3::new(16, 16, height);
    session.add_parent(image, offset, IVec3::new(1, 1, 0), offset, rotation, interaction);
}
