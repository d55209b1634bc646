//! Object entry registry
//!
//! Maps serialized 16-byte object descriptors to loaded object data across
//! the eleven object categories, and resolves flat global object indices.

pub mod assets;
pub mod category;
pub mod entry;
pub mod manifest;
pub mod registry;

pub use assets::{AdditionDrawType, FootpathEntry, LoadedObject, PathAdditionEntry, SupportType};
pub use category::{ChunkEncoding, ObjectCategory, TOTAL_OBJECT_CAPACITY};
pub use entry::{ObjectEntry, SourceGame, OBJECT_ENTRY_SIZE};
pub use manifest::{load_manifest, ObjectManifest};
pub use registry::{global_index, resolve_global_index, ObjectRegistry};
