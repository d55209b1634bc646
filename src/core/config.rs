//! Painter configuration with documented constants
//!
//! Values that used to be read from global game settings are collected here
//! and threaded explicitly into the painter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ParkError, Result};

/// Configuration for the footpath painter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Render ride-entrance captions in upper case
    pub upper_case_banners: bool,

    /// Register point lights for lamp additions
    ///
    /// Lights are a side channel for the lighting pass; disabling them
    /// leaves the sprite output unchanged.
    pub lighting: bool,

    /// First sprite of the path-height marker strip
    pub height_marker_base: u32,

    /// Offset added to height-marker sprites for the active height units
    pub height_marker_offset: u32,

    /// Base map height subtracted from the height-marker sprite index
    pub map_base_z: u32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            upper_case_banners: false,
            lighting: true,
            height_marker_base: 5769,
            height_marker_offset: 0,
            map_base_z: 7,
        }
    }
}

impl PaintConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling unspecified keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PaintConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded paint config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // Height markers subtract the base height from the strip start
        if self.height_marker_base < self.map_base_z {
            return Err(ParkError::InvalidConfig(format!(
                "height_marker_base ({}) must not be below map_base_z ({})",
                self.height_marker_base, self.map_base_z
            )));
        }

        Ok(())
    }
}
