//! RON data loader
//!
//! Loads game content from RON files, with fallback to hardcoded defaults
//! for any file that is missing. A file that exists but is broken is an
//! error: silently playing a different map than the one configured would
//! be worse than refusing to start.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::config::GameConfig;
use super::map_data::{default_map_data, MapData};
use crate::world::{Map, MapError};

/// Default location of content files, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";

const MAP_FILE: &str = "map.ron";
const CONFIG_FILE: &str = "config.ron";

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error in '{path}': {details}")]
    Parse { path: PathBuf, details: String },

    #[error("failed to serialize {what}: {details}")]
    Serialize { what: &'static str, details: String },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("door '{door}' on level {level} has the same name as a menu action")]
    MenuCollision { door: String, level: usize },

    #[error("invalid menu labels: {0}")]
    MenuLabels(String),
}

/// All external game data
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    pub map: MapData,
    pub config: GameConfig,
}

impl DataManager {
    /// Load content from `dir`, using defaults for missing files
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let map = load_or_default(&dir.join(MAP_FILE), default_map_data)?;
        let config = load_or_default(&dir.join(CONFIG_FILE), GameConfig::default)?;

        let manager = Self { map, config };
        manager.validate()?;
        Ok(manager)
    }

    /// Check the content builds a playable map for this configuration
    pub fn validate(&self) -> Result<(), DataError> {
        Map::from_data(&self.map)?;

        let menu = &self.config.menu;
        if menu.labels().iter().any(|label| label.trim().is_empty()) {
            return Err(DataError::MenuLabels("labels must not be empty".to_string()));
        }
        if menu.save_and_exit == menu.exit {
            return Err(DataError::MenuLabels(format!(
                "both actions are labelled '{}'",
                menu.exit
            )));
        }

        for (level, data) in self.map.levels.iter().enumerate() {
            if let Some(door) = data.doors.iter().find(|d| self.config.menu.contains(&d.name)) {
                return Err(DataError::MenuCollision {
                    door: door.name.clone(),
                    level,
                });
            }
        }
        Ok(())
    }

    /// Build a fresh map from the loaded content
    pub fn build_map(&self) -> Result<Map, MapError> {
        Map::from_data(&self.map)
    }
}

fn load_or_default<T, F>(path: &Path, default: F) -> Result<T, DataError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    if !path.exists() {
        log::info!("{} not found, using built-in defaults", path.display());
        return Ok(default());
    }

    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = ron::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    log::info!("Loaded {}", path.display());
    Ok(value)
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(dir: impl AsRef<Path>) -> Result<(), DataError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| DataError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    write_ron(&dir.join(MAP_FILE), &default_map_data(), "map")?;
    write_ron(&dir.join(CONFIG_FILE), &GameConfig::default(), "config")?;
    Ok(())
}

fn write_ron<T: Serialize>(path: &Path, value: &T, what: &'static str) -> Result<(), DataError> {
    let content = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|e| DataError::Serialize {
            what,
            details: e.to_string(),
        })?;
    fs::write(path, content).map_err(|source| DataError::Write {
        path: path.to_path_buf(),
        source,
    })
}
