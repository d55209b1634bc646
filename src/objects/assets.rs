//! Decoded object data held by registry slots

use serde::{Deserialize, Serialize};

use super::category::ObjectCategory;

/// Structure drawn under elevated footpaths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    #[default]
    Box,
    Pole,
}

/// Visual description of one footpath surface type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootpathEntry {
    /// First sprite of the surface strip (flat patterns, slopes, queue variants, railings)
    pub image: u32,
    /// First sprite of the bridge / fence strip drawn under elevated tiles
    pub bridge_image: u32,
    #[serde(default)]
    pub support_type: SupportType,
    /// The surface must be redrawn above the bridge sprite
    #[serde(default)]
    pub has_base_sprite: bool,
    /// Scrolling-text mode used by queue entrance banners
    #[serde(default)]
    pub scrolling_mode: u16,
}

/// Geometry routine used to draw a path addition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionDrawType {
    Lights,
    Bins,
    Benches,
    JumpingFountains,
}

/// Bench, bin, lamp or fountain placed on a footpath
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAdditionEntry {
    pub image: u32,
    pub draw_type: AdditionDrawType,
    /// Emits light sources when not broken
    #[serde(default)]
    pub lamp: bool,
}

/// Object data owned by a registry slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedObject {
    Footpath(FootpathEntry),
    PathAddition(PathAdditionEntry),
    /// Decoded chunk of a kind this crate does not interpret
    Opaque {
        category: ObjectCategory,
        data: Vec<u8>,
    },
}

impl LoadedObject {
    /// The only category this object may be stored in
    pub fn category(&self) -> ObjectCategory {
        match self {
            LoadedObject::Footpath(_) => ObjectCategory::Footpath,
            LoadedObject::PathAddition(_) => ObjectCategory::PathAddition,
            LoadedObject::Opaque { category, .. } => *category,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoadedObject::Footpath(_) => "footpath",
            LoadedObject::PathAddition(_) => "path addition",
            LoadedObject::Opaque { .. } => "opaque chunk",
        }
    }

    pub fn as_footpath(&self) -> Option<&FootpathEntry> {
        match self {
            LoadedObject::Footpath(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_path_addition(&self) -> Option<&PathAdditionEntry> {
        match self {
            LoadedObject::PathAddition(entry) => Some(entry),
            _ => None,
        }
    }
}
