//! 16-byte object entry descriptors
//!
//! The layout is shared with save and scenario files: an 8-byte name,
//! a little-endian flags word and a little-endian checksum.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::category::ObjectCategory;

/// Size of a serialized descriptor in bytes
pub const OBJECT_ENTRY_SIZE: usize = 16;

/// Source-game tag stored in the high nibble of the flags byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceGame(pub u8);

impl SourceGame {
    pub const CUSTOM: SourceGame = SourceGame(0);
    pub const RCT2: SourceGame = SourceGame(8);

    /// Custom objects are compared including their checksum
    pub fn is_custom(self) -> bool {
        self.0 == 0
    }
}

/// Serialized identifier of a loadable object
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct ObjectEntry {
    pub name: [u8; 8],
    pub flags: u32,
    pub checksum: u32,
}

const _: () = assert!(std::mem::size_of::<ObjectEntry>() == OBJECT_ENTRY_SIZE);

impl ObjectEntry {
    /// An unused slot descriptor (all zero bytes)
    pub const EMPTY: ObjectEntry = ObjectEntry {
        name: [0; 8],
        flags: 0,
        checksum: 0,
    };

    pub fn new(name: [u8; 8], flags: u32, checksum: u32) -> Self {
        Self {
            name,
            flags,
            checksum,
        }
    }

    /// Build a descriptor from a name (space padded to 8 bytes) and its category
    pub fn named(name: &str, category: ObjectCategory, source: SourceGame, checksum: u32) -> Self {
        let mut fixed = [b' '; 8];
        for (dst, src) in fixed.iter_mut().zip(name.bytes()) {
            *dst = src;
        }
        let flags = u32::from(category.index()) | (u32::from(source.0 & 0xF) << 4);
        Self::new(fixed, flags, checksum)
    }

    pub fn from_bytes(bytes: &[u8; OBJECT_ENTRY_SIZE]) -> Self {
        let mut name = [0u8; 8];
        name.copy_from_slice(&bytes[0..8]);
        let flags = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let checksum = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        Self::new(name, flags, checksum)
    }

    pub fn to_bytes(&self) -> [u8; OBJECT_ENTRY_SIZE] {
        let mut bytes = [0u8; OBJECT_ENTRY_SIZE];
        bytes[0..8].copy_from_slice(&self.name);
        bytes[8..12].copy_from_slice(&self.flags.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.checksum.to_le_bytes());
        bytes
    }

    /// True when every byte is 0x00 or every byte is 0xFF
    pub fn is_empty(&self) -> bool {
        let bytes = bytemuck::bytes_of(self);
        bytes.iter().all(|&b| b == 0x00) || bytes.iter().all(|&b| b == 0xFF)
    }

    /// Raw category nibble (may name no category)
    pub fn category_index(&self) -> u8 {
        (self.flags & 0x0F) as u8
    }

    pub fn category(&self) -> Option<ObjectCategory> {
        ObjectCategory::from_index(self.category_index())
    }

    pub fn source_game(&self) -> SourceGame {
        SourceGame(((self.flags & 0xF0) >> 4) as u8)
    }

    /// Equality used for lookups.
    ///
    /// Objects shipped with a game are identified by category and name alone;
    /// custom objects must also match flags and checksum.
    pub fn matches(&self, other: &ObjectEntry) -> bool {
        if !self.source_game().is_custom() || !other.source_game().is_custom() {
            self.category_index() == other.category_index() && self.name == other.name
        } else {
            self.flags == other.flags && self.name == other.name && self.checksum == other.checksum
        }
    }

    /// Copy the name into `buffer` as a NUL-terminated string of at most 8 bytes.
    ///
    /// The usable length is `min(buffer.len(), 9)`; an empty buffer is left untouched.
    pub fn extract_fixed_name(&self, buffer: &mut [u8]) {
        let size = buffer.len().min(9);
        if size == 0 {
            return;
        }
        buffer[..size - 1].copy_from_slice(&self.name[..size - 1]);
        buffer[size - 1] = 0;
    }

    /// Name as text, stopping at the first NUL
    pub fn fixed_name(&self) -> String {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(8);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }

    /// `NAME    /FLAGCHKS` style identifier used in logs and error reports
    pub fn identifier_name(&self) -> String {
        format!("{}/{:>4X}{:>4X}", self.fixed_name(), self.flags, self.checksum)
    }
}

impl Default for ObjectEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for ObjectEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectEntry({})", self.identifier_name())
    }
}
