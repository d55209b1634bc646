//! Collaborators the footpath painter reads from
//!
//! The painter never reaches into global state. Object data, map queries
//! and text layout arrive through these traits, bundled in [`PaintEnv`].

use crate::core::{PaintConfig, TileCoord};
use crate::map::{PathElement, SurfaceElement};
use crate::objects::{FootpathEntry, ObjectRegistry, PathAdditionEntry};
use crate::paint::image::ImageId;

/// Loaded footpath and path-addition object data
pub trait FootpathAssets {
    fn footpath_entry(&self, index: u8) -> Option<&FootpathEntry>;
    fn path_addition_entry(&self, index: u8) -> Option<&PathAdditionEntry>;
}

impl FootpathAssets for ObjectRegistry {
    fn footpath_entry(&self, index: u8) -> Option<&FootpathEntry> {
        ObjectRegistry::footpath_entry(self, usize::from(index))
    }

    fn path_addition_entry(&self, index: u8) -> Option<&PathAdditionEntry> {
        ObjectRegistry::path_addition_entry(self, usize::from(index))
    }
}

/// State of a ride as far as its entrance banner cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideSummary {
    pub name: String,
    pub open: bool,
    pub broken_down: bool,
}

/// Map and park queries
pub trait PaintWorld {
    fn surface_at(&self, tile: TileCoord) -> Option<SurfaceElement>;

    fn ride_at(&self, index: u8) -> Option<RideSummary>;

    fn is_patrol_area_set(&self, _patrol_id: u16, _tile: TileCoord) -> bool {
        false
    }

    /// Whether the element belongs to the design currently being saved
    fn design_contains(&self, _tile: TileCoord, _element: &PathElement) -> bool {
        true
    }
}

/// Caption shown on a queue banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceCaption<'a> {
    Open { ride_name: &'a str },
    Closed,
}

/// Text formatting and scrolling-text sprite generation
pub trait TextRenderer {
    fn format_entrance_caption(&self, caption: EntranceCaption<'_>) -> String;

    /// Width in pixels using the tiny banner font
    fn string_width(&self, text: &str) -> u16;

    fn scrolling_text_image(&self, text: &str, scroll: u16, mode: u16) -> ImageId;
}

/// Everything a tile painter reads besides the session it writes to
#[derive(Clone, Copy)]
pub struct PaintEnv<'a> {
    pub assets: &'a dyn FootpathAssets,
    pub world: &'a dyn PaintWorld,
    pub text: &'a dyn TextRenderer,
    pub config: &'a PaintConfig,
}

impl<'a> PaintEnv<'a> {
    pub fn new(
        assets: &'a dyn FootpathAssets,
        world: &'a dyn PaintWorld,
        text: &'a dyn TextRenderer,
        config: &'a PaintConfig,
    ) -> Self {
        Self {
            assets,
            world,
            text,
            config,
        }
    }
}

/// Plain caption text with a fixed-width font; enough for headless rendering
#[derive(Debug, Clone, Copy)]
pub struct PlainText {
    pub glyph_width: u16,
}

impl Default for PlainText {
    fn default() -> Self {
        Self { glyph_width: 4 }
    }
}

impl TextRenderer for PlainText {
    fn format_entrance_caption(&self, caption: EntranceCaption<'_>) -> String {
        match caption {
            EntranceCaption::Open { ride_name } => ride_name.to_string(),
            EntranceCaption::Closed => "Closed".to_string(),
        }
    }

    fn string_width(&self, text: &str) -> u16 {
        let glyphs = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        glyphs.saturating_mul(self.glyph_width)
    }

    fn scrolling_text_image(&self, _text: &str, scroll: u16, mode: u16) -> ImageId {
        (u32::from(mode) << 16) | u32::from(scroll)
    }
}
