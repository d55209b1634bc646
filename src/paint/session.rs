//! Per-frame paint session
//!
//! The session collects everything a tile painter produces: sprite
//! commands, support requests, tunnel entries, light sources and the
//! support heights later painters test against. It replaces the mutable
//! global paint state of a classic isometric renderer with an explicit
//! value handed to every painter.

use glam::IVec3;
use serde::Serialize;

use crate::core::{Rotation, TileCoord};
use crate::paint::image::ImageId;

/// What a click on the emitted sprite resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionItem {
    None,
    Footpath,
    FootpathItem,
    Ride,
}

/// Whether a command starts a new sort entry or rides on the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attachment {
    Parent,
    Child,
}

/// One sprite draw request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaintCommand {
    pub image: ImageId,
    pub offset: IVec3,
    pub bound_box_length: IVec3,
    pub bound_box_offset: IVec3,
    pub rotation: Rotation,
    pub attachment: Attachment,
    pub interaction: InteractionItem,
}

/// Request to the support painter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum SupportCall {
    /// Wooden box supports under the whole tile
    Box {
        kind: u8,
        special: u8,
        height: i32,
        image_flags: u32,
        bridge_image: ImageId,
    },
    /// Metal pole support under one segment
    Pole {
        segment: u8,
        special: u8,
        height: i32,
        image_flags: u32,
        bridge_image: ImageId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelKind {
    Path = 10,
    PathJunction = 11,
}

/// Tunnel opening on a tile side, `height` in 16-unit steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tunnel {
    pub height: u8,
    pub kind: TunnelKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Lantern,
}

/// Light source placed relative to the world position of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightSource {
    pub tile: TileCoord,
    pub offset: IVec3,
    pub kind: LightKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SupportHeight {
    pub height: i32,
    pub slope: u8,
}

/// Bit set over the nine support segments of a tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SegmentMask(u16);

impl SegmentMask {
    pub const CORNER_TOP: Self = Self(1 << 0);
    pub const SIDE_TOP_RIGHT: Self = Self(1 << 1);
    pub const CORNER_RIGHT: Self = Self(1 << 2);
    pub const SIDE_BOTTOM_RIGHT: Self = Self(1 << 3);
    pub const CORNER_BOTTOM: Self = Self(1 << 4);
    pub const SIDE_BOTTOM_LEFT: Self = Self(1 << 5);
    pub const CORNER_LEFT: Self = Self(1 << 6);
    pub const SIDE_TOP_LEFT: Self = Self(1 << 7);
    pub const CENTRE: Self = Self(1 << 8);
    pub const ALL: Self = Self(0x1FF);

    pub const SEGMENT_COUNT: usize = 9;

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn segments(self) -> impl Iterator<Item = usize> {
        (0..Self::SEGMENT_COUNT).filter(move |i| self.0 & (1 << i) != 0)
    }
}

impl std::ops::BitOr for SegmentMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignPreview {
    /// Ride whose design is being saved
    pub ride_index: u8,
}

/// Staff patrol area highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolOverlay {
    /// One staff member, resolved to their patrol id and staff type
    Staff { staff_id: u16, staff_type: u8 },
    /// Every staff member of a type
    StaffType(u8),
}

/// Read-only state of the frame being painted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContext {
    /// 0 is fully zoomed in
    pub zoom_level: u8,
    pub ticks: u32,
    pub show_path_heights: bool,
    pub design_preview: Option<DesignPreview>,
    pub patrol_overlay: Option<PatrolOverlay>,
}

impl FrameContext {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct PaintSession {
    pub frame: FrameContext,
    pub map_position: TileCoord,
    /// The surface of the current tile has already been painted
    pub did_pass_surface: bool,
    /// A flat track piece sits at the same height on this tile
    pub flat_track_on_same_height: bool,
    commands: Vec<PaintCommand>,
    supports: Vec<SupportCall>,
    left_tunnels: Vec<Tunnel>,
    right_tunnels: Vec<Tunnel>,
    lights: Vec<LightSource>,
    general_support: SupportHeight,
    segment_supports: [SupportHeight; SegmentMask::SEGMENT_COUNT],
}

impl PaintSession {
    pub fn new(frame: FrameContext) -> Self {
        Self {
            frame,
            map_position: TileCoord::default(),
            did_pass_surface: false,
            flat_track_on_same_height: false,
            commands: Vec::new(),
            supports: Vec::new(),
            left_tunnels: Vec::new(),
            right_tunnels: Vec::new(),
            lights: Vec::new(),
            general_support: SupportHeight::default(),
            segment_supports: [SupportHeight::default(); SegmentMask::SEGMENT_COUNT],
        }
    }

    /// Move to a new tile. Per-tile state is reset; emitted commands,
    /// support calls and lights accumulate for the whole frame.
    pub fn begin_tile(&mut self, position: TileCoord) {
        self.map_position = position;
        self.did_pass_surface = false;
        self.flat_track_on_same_height = false;
        self.left_tunnels.clear();
        self.right_tunnels.clear();
        self.general_support = SupportHeight::default();
        self.segment_supports = [SupportHeight::default(); SegmentMask::SEGMENT_COUNT];
    }

    pub fn add_parent(
        &mut self,
        image: ImageId,
        offset: IVec3,
        length: IVec3,
        bound_offset: IVec3,
        rotation: Rotation,
        interaction: InteractionItem,
    ) {
        self.push(image, offset, length, bound_offset, rotation, Attachment::Parent, interaction);
    }

    pub fn add_child(
        &mut self,
        image: ImageId,
        offset: IVec3,
        length: IVec3,
        bound_offset: IVec3,
        rotation: Rotation,
        interaction: InteractionItem,
    ) {
        self.push(image, offset, length, bound_offset, rotation, Attachment::Child, interaction);
    }

    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        image: ImageId,
        offset: IVec3,
        bound_box_length: IVec3,
        bound_box_offset: IVec3,
        rotation: Rotation,
        attachment: Attachment,
        interaction: InteractionItem,
    ) {
        self.commands.push(PaintCommand {
            image,
            offset,
            bound_box_length,
            bound_box_offset,
            rotation,
            attachment,
            interaction,
        });
    }

    pub fn add_support(&mut self, call: SupportCall) {
        self.supports.push(call);
    }

    pub fn push_left_tunnel(&mut self, height: i32, kind: TunnelKind) {
        self.left_tunnels.push(tunnel_at(height, kind));
    }

    pub fn push_right_tunnel(&mut self, height: i32, kind: TunnelKind) {
        self.right_tunnels.push(tunnel_at(height, kind));
    }

    pub fn add_light(&mut self, offset: IVec3, kind: LightKind) {
        self.lights.push(LightSource {
            tile: self.map_position,
            offset,
            kind,
        });
    }

    /// Raise the general support height; never lowers it
    pub fn set_general_support_height(&mut self, height: i32, slope: u8) {
        if self.general_support.height >= height {
            return;
        }
        self.general_support = SupportHeight { height, slope };
    }

    pub fn set_segment_support_height(&mut self, mask: SegmentMask, height: i32, slope: u8) {
        for segment in mask.segments() {
            self.segment_supports[segment] = SupportHeight { height, slope };
        }
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn support_calls(&self) -> &[SupportCall] {
        &self.supports
    }

    pub fn left_tunnels(&self) -> &[Tunnel] {
        &self.left_tunnels
    }

    pub fn right_tunnels(&self) -> &[Tunnel] {
        &self.right_tunnels
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn general_support(&self) -> SupportHeight {
        self.general_support
    }

    pub fn segment_support(&self, segment: usize) -> Option<SupportHeight> {
        self.segment_supports.get(segment).copied()
    }
}

fn tunnel_at(height: i32, kind: TunnelKind) -> Tunnel {
    Tunnel {
        height: (height / 16).clamp(0, i32::from(u8::MAX)) as u8,
        kind,
    }
}
