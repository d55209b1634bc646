use thiserror::Error;

use crate::objects::ObjectCategory;

#[derive(Error, Debug)]
pub enum ParkError {
    #[error("Unknown object category index: {0}")]
    UnknownCategory(u8),

    #[error("Global object index {index} exceeds total capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("Slot {slot} is outside the {category:?} category")]
    SlotOutOfRange { category: ObjectCategory, slot: usize },

    #[error("Cannot load an empty object entry")]
    EmptyDescriptor,

    #[error("Object of kind {object} cannot be stored in the {category:?} category")]
    CategoryMismatch {
        category: ObjectCategory,
        object: &'static str,
    },

    #[error("Slot {slot} of the {category:?} category is already occupied")]
    SlotOccupied { category: ObjectCategory, slot: usize },

    #[error("No free slot left in the {0:?} category")]
    CategoryFull(ObjectCategory),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParkError>;
