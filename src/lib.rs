//! Parkway - object entry registry and footpath tile painter
//!
//! Loads park objects into fixed-capacity category slots and paints
//! footpath tile elements into sprite, support, tunnel and light records.

pub mod core;
pub mod map;
pub mod objects;
pub mod paint;
