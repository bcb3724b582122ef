//! Save/load system
//!
//! Snapshot format, the storage port, and its backends.

pub mod save_game;
pub mod storage;

pub use save_game::{
    SaveSnapshot, PlayerSnapshot, SaveError, GameStorage, SAVE_VERSION,
};

pub use storage::{FileStorage, MemoryStorage, default_save_path};
