//! Storage backends for saved games

use std::fs;
use std::path::{Path, PathBuf};

use super::save_game::{GameStorage, SaveError, SaveSnapshot};
use crate::entities::Vital;
use crate::world::Map;

/// Get the default save file path
pub fn default_save_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "walkers", "Walkers") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path.push("walkers.json");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves/walkers.json")
    }
}

/// Stores the snapshot as a JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SaveError::Io(e.to_string()))?;
        }

        // Write then rename so a crash never leaves half a save behind
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, snapshot.to_json()?).map_err(|e| SaveError::Io(e.to_string()))?;
        fs::rename(&temp_path, &self.path).map_err(|e| SaveError::Io(e.to_string()))?;
        Ok(())
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(default_save_path())
    }
}

impl GameStorage for FileStorage {
    fn has_saved_game(&self) -> bool {
        self.path.exists()
    }

    fn saved_game(&self) -> Result<SaveSnapshot, SaveError> {
        if !self.path.exists() {
            return Err(SaveError::NotFound);
        }
        let data = fs::read_to_string(&self.path).map_err(|e| SaveError::Io(e.to_string()))?;
        let snapshot = SaveSnapshot::from_json(&data)?;

        log::info!("Game loaded from {}", self.path.display());
        Ok(snapshot)
    }

    fn save_game(&mut self, player: &dyn Vital, map: &Map) -> Result<(), SaveError> {
        self.write(&SaveSnapshot::capture(player, map))?;
        log::info!("Game saved to {}", self.path.display());
        Ok(())
    }

    fn remove_saved_game(&mut self) -> Result<(), SaveError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| SaveError::Io(e.to_string()))?;
            log::info!("Deleted saved game {}", self.path.display());
        }
        Ok(())
    }
}

/// Keeps the snapshot in memory, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    snapshot: Option<SaveSnapshot>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a snapshot already saved
    pub fn with_snapshot(snapshot: SaveSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn snapshot(&self) -> Option<&SaveSnapshot> {
        self.snapshot.as_ref()
    }
}

impl GameStorage for MemoryStorage {
    fn has_saved_game(&self) -> bool {
        self.snapshot.is_some()
    }

    fn saved_game(&self) -> Result<SaveSnapshot, SaveError> {
        self.snapshot.clone().ok_or(SaveError::NotFound)
    }

    fn save_game(&mut self, player: &dyn Vital, map: &Map) -> Result<(), SaveError> {
        self.snapshot = Some(SaveSnapshot::capture(player, map));
        Ok(())
    }

    fn remove_saved_game(&mut self) -> Result<(), SaveError> {
        self.snapshot = None;
        Ok(())
    }
}
