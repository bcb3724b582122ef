//! World module
//!
//! Levels, doors, and the map that strings them together.

pub mod level;
pub mod map;

pub use level::{Door, Level};
pub use map::{Map, MapError};
