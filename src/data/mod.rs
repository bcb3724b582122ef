//! Data loading and external game content
//!
//! This module handles loading the map and game configuration from
//! external RON files, allowing the levels to be edited without a rebuild.

pub mod loader;
pub mod map_data;
pub mod config;

pub use loader::{DataManager, DataError, DEFAULT_DATA_DIR, export_default_data};
pub use map_data::{MapData, LevelData, DoorData, default_map_data};
pub use config::{GameConfig, MenuActions};
