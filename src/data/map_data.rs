//! Map content definitions
//!
//! The serializable shape of `map.ron`: who can be played, which walkers
//! exist, and which doors they hide behind on every level.

use serde::{Deserialize, Serialize};

use crate::entities::{default_walkers, SurvivorKind, Walker};

/// Complete map content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    /// Survivors offered when starting a fresh game
    pub roster: Vec<SurvivorKind>,
    /// Walkers doors may refer to by id
    pub walkers: Vec<Walker>,
    /// Levels in play order
    pub levels: Vec<LevelData>,
}

impl Default for MapData {
    fn default() -> Self {
        default_map_data()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    /// Experience for finding the safe door
    pub experience: u32,
    pub doors: Vec<DoorData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorData {
    pub name: String,
    /// Walker id, `None` for a safe door
    #[serde(default)]
    pub walker: Option<String>,
}

impl DoorData {
    fn safe(name: &str) -> Self {
        Self {
            name: name.to_string(),
            walker: None,
        }
    }

    fn guarded(name: &str, walker: &str) -> Self {
        Self {
            name: name.to_string(),
            walker: Some(walker.to_string()),
        }
    }
}

/// Built-in map (hardcoded fallback)
pub fn default_map_data() -> MapData {
    MapData {
        roster: SurvivorKind::ALL.to_vec(),
        walkers: default_walkers(),
        levels: vec![
            // The prison yard
            LevelData {
                experience: 10,
                doors: vec![
                    DoorData::guarded("Guard Tower", "roamer"),
                    DoorData::safe("Cell Block C"),
                    DoorData::guarded("Boiler Room", "lurker"),
                ],
            },
            // Woodbury streets
            LevelData {
                experience: 20,
                doors: vec![
                    DoorData::guarded("Pharmacy", "crawler"),
                    DoorData::guarded("Town Hall", "roamer"),
                    DoorData::safe("Feed Store"),
                    DoorData::guarded("Arena Gate", "lurker"),
                ],
            },
            // Atlanta outskirts
            LevelData {
                experience: 30,
                doors: vec![
                    DoorData::guarded("Gas Station", "bloater"),
                    DoorData::safe("Church"),
                    DoorData::guarded("Motel Office", "crawler"),
                    DoorData::guarded("Quarry Road", "roamer"),
                ],
            },
            // Terminus
            LevelData {
                experience: 40,
                doors: vec![
                    DoorData::guarded("Train Car A", "herd"),
                    DoorData::guarded("Loading Dock", "bloater"),
                    DoorData::safe("Sanctuary Sign"),
                    DoorData::guarded("Slaughter Shed", "lurker"),
                    DoorData::guarded("Container Yard", "crawler"),
                ],
            },
            // Alexandria walls
            LevelData {
                experience: 50,
                doors: vec![
                    DoorData::guarded("Quarry Gate", "herd"),
                    DoorData::guarded("Watchtower", "bloater"),
                    DoorData::safe("Main Gate"),
                    DoorData::guarded("Armory", "lurker"),
                    DoorData::guarded("Infirmary", "roamer"),
                ],
            },
        ],
    }
}
