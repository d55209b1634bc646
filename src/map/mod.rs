//! Map tile state read by the painter

pub mod edges;
pub mod path;
pub mod surface;

pub use edges::EdgeMask;
pub use path::{PathAddition, PathElement, RIDE_INDEX_NONE, TILE_ELEMENT_SIZE};
pub use surface::SurfaceElement;
