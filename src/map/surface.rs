//! Ground surface elements

use serde::{Deserialize, Serialize};

/// Bits of the surface slope byte that describe the corner heights
pub const SURFACE_SLOPE_MASK: u8 = 0x1F;

/// Ground surface under a tile, as far as the path painter needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SurfaceElement {
    /// Height in 8-unit steps
    pub base_height: u8,
    /// Raised-corner bits plus the steep-slope flag
    pub slope: u8,
}

impl SurfaceElement {
    pub const fn new(base_height: u8, slope: u8) -> Self {
        Self { base_height, slope }
    }

    pub const fn slope_shape(self) -> u8 {
        self.slope & SURFACE_SLOPE_MASK
    }

    pub const fn is_flat(self) -> bool {
        self.slope_shape() == 0
    }
}
