//! Sprite image ids and the flag bits packed above the sprite index

/// Sprite index in the low 19 bits, remap colours and image type above
pub type ImageId = u32;

pub const IMAGE_TYPE_REMAP: u32 = 1 << 29;

pub const COLOUR_GREY: u8 = 1;
pub const COLOUR_LIGHT_BLUE: u8 = 7;
pub const COLOUR_DARK_GREEN: u8 = 12;

/// Flags tinting a sprite with a primary remap colour
pub const fn primary_remap(colour: u8) -> u32 {
    ((colour as u32) << 19) | IMAGE_TYPE_REMAP
}

/// Tint applied to construction previews (ghosts)
pub const CONSTRUCTION_MARKER: u32 =
    ((COLOUR_DARK_GREEN as u32) << 19) | ((COLOUR_GREY as u32) << 24) | IMAGE_TYPE_REMAP;

/// Tint applied to tiles outside the design being saved
pub const DESIGN_PREVIEW_TINT: u32 = 0x2170_0000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert_eq!(primary_remap(COLOUR_GREY), 0x2008_0000);
        assert_eq!(CONSTRUCTION_MARKER, 0x2160_0000);
        // Sprite indices stay clear of every flag
        assert_eq!(CONSTRUCTION_MARKER & 0x7FFFF, 0);
        assert_eq!(DESIGN_PREVIEW_TINT & 0x7FFFF, 0);
    }
}
