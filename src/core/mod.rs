pub mod config;
pub mod error;
pub mod types;

pub use config::PaintConfig;
pub use error::{ParkError, Result};
pub use types::{Direction, Rotation, TileCoord};
