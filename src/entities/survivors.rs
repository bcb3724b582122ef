//! Survivor variants
//!
//! The playable characters. Each variant differs in name and starting
//! health; restoring a saved game goes through `SurvivorKind::from_id`
//! so only known variants can ever be built.

use serde::{Deserialize, Serialize};

use crate::save::{PlayerSnapshot, SaveError};
use super::vital::Vital;

/// Builds a fresh survivor
pub type SurvivorFactory = fn() -> Box<dyn Vital>;

/// Registry of playable variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurvivorKind {
    GunnerRick,
    KidCarl,
    NinjaMichonne,
    OldHershel,
    RunnerGlenn,
}

impl SurvivorKind {
    pub const ALL: [SurvivorKind; 5] = [
        SurvivorKind::GunnerRick,
        SurvivorKind::KidCarl,
        SurvivorKind::NinjaMichonne,
        SurvivorKind::OldHershel,
        SurvivorKind::RunnerGlenn,
    ];

    /// Stable identifier stored in save files
    pub fn id(self) -> &'static str {
        match self {
            SurvivorKind::GunnerRick => "gunner_rick",
            SurvivorKind::KidCarl => "kid_carl",
            SurvivorKind::NinjaMichonne => "ninja_michonne",
            SurvivorKind::OldHershel => "old_hershel",
            SurvivorKind::RunnerGlenn => "runner_glenn",
        }
    }

    /// Look up a variant by its stored identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SurvivorKind::GunnerRick => "Gunner Rick",
            SurvivorKind::KidCarl => "Kid Carl",
            SurvivorKind::NinjaMichonne => "Ninja Michonne",
            SurvivorKind::OldHershel => "Old Hershel",
            SurvivorKind::RunnerGlenn => "Runner Glenn",
        }
    }

    pub fn starting_health(self) -> i32 {
        match self {
            SurvivorKind::GunnerRick => 100,
            SurvivorKind::KidCarl => 70,
            SurvivorKind::NinjaMichonne => 110,
            SurvivorKind::OldHershel => 60,
            SurvivorKind::RunnerGlenn => 90,
        }
    }

    /// Constructor for this variant
    pub fn factory(self) -> SurvivorFactory {
        match self {
            SurvivorKind::GunnerRick => spawn_gunner_rick,
            SurvivorKind::KidCarl => spawn_kid_carl,
            SurvivorKind::NinjaMichonne => spawn_ninja_michonne,
            SurvivorKind::OldHershel => spawn_old_hershel,
            SurvivorKind::RunnerGlenn => spawn_runner_glenn,
        }
    }
}

fn spawn_gunner_rick() -> Box<dyn Vital> {
    Box::new(Survivor::new(SurvivorKind::GunnerRick))
}

fn spawn_kid_carl() -> Box<dyn Vital> {
    Box::new(Survivor::new(SurvivorKind::KidCarl))
}

fn spawn_ninja_michonne() -> Box<dyn Vital> {
    Box::new(Survivor::new(SurvivorKind::NinjaMichonne))
}

fn spawn_old_hershel() -> Box<dyn Vital> {
    Box::new(Survivor::new(SurvivorKind::OldHershel))
}

fn spawn_runner_glenn() -> Box<dyn Vital> {
    Box::new(Survivor::new(SurvivorKind::RunnerGlenn))
}

/// A playable character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survivor {
    kind: SurvivorKind,
    name: String,
    health: i32,
    experience: u32,
}

impl Survivor {
    /// Create a survivor with the variant's starting stats
    pub fn new(kind: SurvivorKind) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            health: kind.starting_health(),
            experience: 0,
        }
    }

    /// Rebuild a survivor from a saved snapshot
    pub fn from_snapshot(snapshot: &PlayerSnapshot) -> Result<Self, SaveError> {
        let kind = SurvivorKind::from_id(&snapshot.variant).ok_or_else(|| {
            SaveError::Corrupt(format!("unknown player variant '{}'", snapshot.variant))
        })?;

        // A dead player can't be saved mid-game, so this is a tampered file
        if snapshot.health <= 0 {
            return Err(SaveError::Corrupt(format!(
                "player health must be positive, found {}",
                snapshot.health
            )));
        }

        let mut survivor = Self::new(kind);
        survivor.set_experience(snapshot.experience);
        survivor.set_health(snapshot.health);
        Ok(survivor)
    }
}

impl Vital for Survivor {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    fn experience(&self) -> u32 {
        self.experience
    }

    fn add_experience(&mut self, delta: u32) {
        self.experience = self.experience.saturating_add(delta);
    }

    fn set_experience(&mut self, experience: u32) {
        self.experience = experience;
    }

    fn variant(&self) -> SurvivorKind {
        self.kind
    }
}

/// Ordered display name -> factory mapping offered at a fresh start
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<(String, SurvivorFactory)>,
}

impl Roster {
    /// Roster offering the given variants, in order
    pub fn from_kinds(kinds: &[SurvivorKind]) -> Self {
        Self {
            entries: kinds
                .iter()
                .map(|kind| (kind.display_name().to_string(), kind.factory()))
                .collect(),
        }
    }

    /// Display names in presentation order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Instantiate the survivor listed under `name`
    pub fn spawn(&self, name: &str) -> Option<Box<dyn Vital>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, factory)| factory())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::from_kinds(&SurvivorKind::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_alive_and_tracks_health() {
        for kind in SurvivorKind::ALL {
            let mut survivor = Survivor::new(kind);
            assert!(survivor.is_alive(), "{:?} should start alive", kind);

            survivor.set_health(23);
            assert_eq!(survivor.health(), 23);
            assert!(survivor.is_alive());
        }
    }

    #[test]
    fn test_alive_boundary() {
        let mut survivor = Survivor::new(SurvivorKind::KidCarl);
        survivor.set_health(1);
        assert!(survivor.is_alive());
        survivor.set_health(0);
        assert!(!survivor.is_alive());
        survivor.set_health(-15);
        assert!(!survivor.is_alive());
    }

    #[test]
    fn test_experience_is_additive() {
        for kind in SurvivorKind::ALL {
            let mut survivor = Survivor::new(kind);
            survivor.add_experience(10);
            assert_eq!(survivor.experience(), 10);
            survivor.add_experience(13);
            assert_eq!(survivor.experience(), 23);
            survivor.add_experience(0);
            assert_eq!(survivor.experience(), 23);
        }
    }

    #[test]
    fn test_experience_saturates() {
        let mut survivor = Survivor::new(SurvivorKind::GunnerRick);
        survivor.set_experience(u32::MAX - 1);
        survivor.add_experience(5);
        assert_eq!(survivor.experience(), u32::MAX);
    }

    #[test]
    fn test_set_name() {
        let mut survivor = Survivor::new(SurvivorKind::RunnerGlenn);
        survivor.set_name("Glenn Rhee".to_string());
        assert_eq!(survivor.name(), "Glenn Rhee");
    }

    #[test]
    fn test_snapshot_rebuilds_same_survivor() {
        for kind in SurvivorKind::ALL {
            let mut original = Survivor::new(kind);
            original.add_experience(42);
            original.set_health(17);

            let snapshot = original.snapshot();
            assert_eq!(snapshot.variant, kind.id());
            assert_eq!(snapshot.experience, 42);
            assert_eq!(snapshot.health, 17);

            let restored = Survivor::from_snapshot(&snapshot).unwrap();
            assert_eq!(restored.name(), original.name());
            assert_eq!(restored.health(), original.health());
            assert_eq!(restored.experience(), original.experience());
            assert_eq!(restored.variant(), kind);
        }
    }

    #[test]
    fn test_unknown_variant_is_corrupt() {
        let snapshot = PlayerSnapshot {
            variant: "negan".to_string(),
            experience: 0,
            health: 50,
        };
        assert!(matches!(Survivor::from_snapshot(&snapshot), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn test_dead_snapshot_is_corrupt() {
        let snapshot = PlayerSnapshot {
            variant: "kid_carl".to_string(),
            experience: 5,
            health: 0,
        };
        assert!(matches!(Survivor::from_snapshot(&snapshot), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn test_roster_spawns_by_display_name() {
        let roster = Roster::default();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.names()[0], "Gunner Rick");

        let hershel = roster.spawn("Old Hershel").unwrap();
        assert_eq!(hershel.variant(), SurvivorKind::OldHershel);
        assert_eq!(hershel.health(), 60);
        assert!(roster.spawn("Daryl").is_none());
    }
}
