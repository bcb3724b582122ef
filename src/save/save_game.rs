//! Game save/load system
//!
//! A save is the player's variant and vitals plus the level they were on.
//! How it is stored is up to the `GameStorage` implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Vital;
use crate::world::Map;

/// Save file version for compatibility checking
pub const SAVE_VERSION: u32 = 1;

/// Complete save data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub version: u32,
    pub player: PlayerSnapshot,
    /// 0-based level index
    pub level: usize,
}

/// Player-specific save data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Survivor variant identifier
    pub variant: String,
    pub experience: u32,
    pub health: i32,
}

impl SaveSnapshot {
    /// Capture the current session
    pub fn capture(player: &dyn Vital, map: &Map) -> Self {
        Self {
            version: SAVE_VERSION,
            player: player.snapshot(),
            level: map.current_level(),
        }
    }

    /// Parse a snapshot from JSON, checking the version
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let snapshot: SaveSnapshot =
            serde_json::from_str(json).map_err(|e| SaveError::Parse(e.to_string()))?;

        if snapshot.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        serde_json::to_string_pretty(self).map_err(|e| SaveError::Parse(e.to_string()))
    }
}

/// Save error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Corrupt save: {0}")]
    Corrupt(String),

    #[error("No saved game found")]
    NotFound,
}

/// Where snapshots live between sessions
pub trait GameStorage {
    /// Whether a snapshot is waiting to be restored
    fn has_saved_game(&self) -> bool;

    /// Read the stored snapshot
    fn saved_game(&self) -> Result<SaveSnapshot, SaveError>;

    /// Persist the current player and level, replacing any previous save
    fn save_game(&mut self, player: &dyn Vital, map: &Map) -> Result<(), SaveError>;

    /// Delete the stored snapshot. Does nothing if there is none.
    fn remove_saved_game(&mut self) -> Result<(), SaveError>;
}
