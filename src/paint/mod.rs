//! Footpath tile painting
//!
//! Turns one footpath element into sprite commands, support requests,
//! tunnel entries and light sources recorded on a [`PaintSession`].

pub mod additions;
pub mod context;
pub mod footpath;
pub mod image;
pub mod lighting;
pub mod railings;
pub mod session;
pub mod supports;
pub mod tables;

pub use context::{
    EntranceCaption, FootpathAssets, PaintEnv, PaintWorld, PlainText, RideSummary, TextRenderer,
};
pub use footpath::{needs_elevated_edges, paint_footpath};
pub use image::{ImageId, CONSTRUCTION_MARKER, DESIGN_PREVIEW_TINT, IMAGE_TYPE_REMAP};
pub use session::{
    Attachment, DesignPreview, FrameContext, InteractionItem, LightKind, LightSource,
    PaintCommand, PaintSession, PatrolOverlay, SegmentMask, SupportCall, SupportHeight, Tunnel,
    TunnelKind,
};
pub use supports::SUPPORT_HEIGHT_BLOCKED;
