//! Map data structure
//!
//! The ordered sequence of levels and the cursor over them. The map only
//! knows levels and doors; what happens behind a door is up to the game.

use std::collections::HashMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use super::level::{Door, Level};
use crate::data::MapData;
use crate::entities::{Hostile, Roster};

/// Errors raised by the map
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("level {index} does not exist (map has {levels} levels)")]
    InvalidLevel { index: usize, levels: usize },

    #[error("invalid map configuration: {0}")]
    Config(String),
}

/// The level sequence the player walks through
#[derive(Debug)]
pub struct Map {
    levels: Vec<Level>,
    /// 0-based index of the current level
    current: usize,
    /// Doors of the current level, reloaded on every level change
    doors: Vec<Door>,
    roster: Roster,
    rng: StdRng,
}

impl Map {
    /// Create a map positioned at the first level
    pub fn new(levels: Vec<Level>, roster: Roster) -> Result<Self, MapError> {
        if levels.is_empty() {
            return Err(MapError::Config("map needs at least one level".to_string()));
        }
        if roster.is_empty() {
            return Err(MapError::Config("player roster is empty".to_string()));
        }

        for (index, level) in levels.iter().enumerate() {
            if level.doors.is_empty() {
                return Err(MapError::Config(format!("level {} has no doors", index)));
            }
            for (i, door) in level.doors.iter().enumerate() {
                if level.doors[i + 1..].iter().any(|other| other.name == door.name) {
                    return Err(MapError::Config(format!(
                        "level {} has duplicate door '{}'",
                        index, door.name
                    )));
                }
            }
        }

        let doors = levels[0].doors.clone();
        Ok(Self {
            levels,
            current: 0,
            doors,
            roster,
            rng: StdRng::from_entropy(),
        })
    }

    /// Build a map from content data, resolving walker references
    pub fn from_data(data: &MapData) -> Result<Self, MapError> {
        let mut walkers: HashMap<&str, Rc<dyn Hostile>> = HashMap::new();
        for walker in &data.walkers {
            if walker.bite <= 0 {
                return Err(MapError::Config(format!(
                    "walker '{}' must bite for a positive amount",
                    walker.id
                )));
            }
            if walkers.insert(walker.id.as_str(), Rc::new(walker.clone())).is_some() {
                return Err(MapError::Config(format!("duplicate walker '{}'", walker.id)));
            }
        }

        let mut levels = Vec::with_capacity(data.levels.len());
        for (index, level) in data.levels.iter().enumerate() {
            let mut doors = Vec::with_capacity(level.doors.len());
            for door in &level.doors {
                let door = match &door.walker {
                    None => Door::safe(door.name.clone()),
                    Some(id) => {
                        let walker = walkers.get(id.as_str()).ok_or_else(|| {
                            MapError::Config(format!(
                                "door '{}' on level {} refers to unknown walker '{}'",
                                door.name, index, id
                            ))
                        })?;
                        Door::guarded(door.name.clone(), Rc::clone(walker))
                    }
                };
                doors.push(door);
            }
            levels.push(Level::new(doors, level.experience));
        }

        Self::new(levels, Roster::from_kinds(&data.roster))
    }

    /// Replace the shuffling RNG (for reproducible door order)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Jump to a level by index
    pub fn load_level(&mut self, index: usize) -> Result<(), MapError> {
        let level = self.levels.get(index).ok_or(MapError::InvalidLevel {
            index,
            levels: self.levels.len(),
        })?;

        self.doors = level.doors.clone();
        self.current = index;
        log::info!("Loaded level {}", index + 1);
        Ok(())
    }

    /// 0-based index of the current level
    pub fn current_level(&self) -> usize {
        self.current
    }

    /// Experience granted for clearing the current level
    pub fn current_level_experience(&self) -> u32 {
        self.levels[self.current].experience
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Doors of the current level, optionally in random order.
    /// Shuffling only affects presentation, never which walker sits where.
    pub fn doors(&mut self, shuffle: bool) -> Vec<Door> {
        let mut doors = self.doors.clone();
        if shuffle {
            doors.shuffle(&mut self.rng);
        }
        doors
    }

    /// Whether a level exists after the current one
    pub fn can_advance(&self) -> bool {
        self.current + 1 < self.levels.len()
    }

    /// Move to the next level
    pub fn advance(&mut self) -> Result<(), MapError> {
        if !self.can_advance() {
            return Err(MapError::InvalidLevel {
                index: self.current + 1,
                levels: self.levels.len(),
            });
        }
        self.load_level(self.current + 1)
    }

    /// Survivors available for a fresh game
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_map_data, DoorData, LevelData};
    use crate::entities::Walker;

    fn two_level_map() -> Map {
        let biter: Rc<dyn Hostile> = Rc::new(Walker::new("biter", "Biter", 100));
        let levels = vec![
            Level::new(vec![Door::guarded("A", Rc::clone(&biter)), Door::safe("B")], 10),
            Level::new(vec![Door::safe("B"), Door::guarded("C", biter)], 20),
        ];
        Map::new(levels, Roster::default()).unwrap()
    }

    #[test]
    fn test_starts_at_first_level() {
        let map = two_level_map();
        assert_eq!(map.current_level(), 0);
        assert_eq!(map.current_level_experience(), 10);
        assert!(map.can_advance());
    }

    #[test]
    fn test_advance_until_final_level() {
        let mut map = two_level_map();
        map.advance().unwrap();
        assert_eq!(map.current_level(), 1);
        assert_eq!(map.current_level_experience(), 20);

        assert!(!map.can_advance());
        assert_eq!(
            map.advance(),
            Err(MapError::InvalidLevel { index: 2, levels: 2 })
        );
        assert_eq!(map.current_level(), 1);
    }

    #[test]
    fn test_load_level_out_of_range() {
        let mut map = two_level_map();
        assert!(matches!(map.load_level(2), Err(MapError::InvalidLevel { .. })));
        assert_eq!(map.current_level(), 0);

        map.load_level(1).unwrap();
        assert_eq!(map.current_level(), 1);
        map.load_level(0).unwrap();
        assert_eq!(map.current_level(), 0);
    }

    #[test]
    fn test_doors_follow_loaded_level() {
        let mut map = two_level_map();
        let names: Vec<_> = map.doors(false).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["A", "B"]);

        map.advance().unwrap();
        let names: Vec<_> = map.doors(false).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_shuffle_keeps_bindings() {
        let mut map = two_level_map().with_rng(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            let doors = map.doors(true);
            assert_eq!(doors.len(), 2);
            for door in doors {
                match door.name.as_str() {
                    "A" => assert_eq!(door.hostile().map(|w| w.name()), Some("Biter")),
                    "B" => assert!(door.is_safe()),
                    other => panic!("unexpected door {}", other),
                }
            }
        }
    }

    #[test]
    fn test_rejects_empty_map() {
        assert!(matches!(
            Map::new(Vec::new(), Roster::default()),
            Err(MapError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_empty_roster() {
        let levels = vec![Level::new(vec![Door::safe("A")], 5)];
        let err = Map::new(levels, Roster::from_kinds(&[])).unwrap_err();
        assert_eq!(err, MapError::Config("player roster is empty".to_string()));

        let mut data = default_map_data();
        data.roster.clear();
        assert!(matches!(Map::from_data(&data), Err(MapError::Config(_))));
    }

    #[test]
    fn test_rejects_duplicate_doors() {
        let levels = vec![Level::new(vec![Door::safe("A"), Door::safe("A")], 5)];
        assert!(matches!(Map::new(levels, Roster::default()), Err(MapError::Config(_))));
    }

    #[test]
    fn test_from_data_resolves_walkers() {
        let map = Map::from_data(&default_map_data()).unwrap();
        assert!(map.level_count() > 1);
        assert!(!map.roster().is_empty());
    }

    #[test]
    fn test_from_data_rejects_unknown_walker() {
        let mut data = default_map_data();
        data.levels = vec![LevelData {
            experience: 5,
            doors: vec![DoorData {
                name: "Cellar".to_string(),
                walker: Some("governor".to_string()),
            }],
        }];
        let err = Map::from_data(&data).unwrap_err();
        assert!(err.to_string().contains("governor"));
    }
}
