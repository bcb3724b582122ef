//! Walkers
//!
//! The dead hiding behind doors. A walker has no state of its own beyond
//! its identity, so a single instance can lurk behind many doors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vital::Vital;

/// Capability set of anything that can attack the player
pub trait Hostile: fmt::Debug {
    fn name(&self) -> &str;

    /// Damage `target` and return the amount applied.
    /// Health is not clamped; callers check `is_alive()`.
    fn attack(&self, target: &mut dyn Vital) -> i32;
}

/// A walker definition as it appears in content files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walker {
    /// Unique identifier doors refer to
    pub id: String,
    /// Display name
    pub name: String,
    /// Health taken per bite
    pub bite: i32,
}

impl Walker {
    pub fn new(id: impl Into<String>, name: impl Into<String>, bite: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bite,
        }
    }
}

impl Hostile for Walker {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self, target: &mut dyn Vital) -> i32 {
        target.set_health(target.health() - self.bite);
        log::debug!("{} bit {} for {}", self.name, target.name(), self.bite);
        self.bite
    }
}

/// Built-in walkers used when no content file overrides them
pub fn default_walkers() -> Vec<Walker> {
    vec![
        Walker::new("roamer", "Roamer", 10),
        Walker::new("lurker", "Lurker", 20),
        Walker::new("crawler", "Crawler", 15),
        Walker::new("bloater", "Bloater", 30),
        Walker::new("herd", "Walker Herd", 45),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Survivor, SurvivorKind};

    #[test]
    fn test_attack_reduces_health_by_bite() {
        let walker = Walker::new("lurker", "Lurker", 20);
        let mut rick = Survivor::new(SurvivorKind::GunnerRick);

        let damage = walker.attack(&mut rick);
        assert_eq!(damage, 20);
        assert_eq!(rick.health(), 80);
    }

    #[test]
    fn test_attack_can_go_below_zero() {
        let walker = Walker::new("herd", "Walker Herd", 45);
        let mut hershel = Survivor::new(SurvivorKind::OldHershel);

        walker.attack(&mut hershel);
        assert_eq!(hershel.health(), 15);
        assert!(hershel.is_alive());

        walker.attack(&mut hershel);
        assert_eq!(hershel.health(), -30);
        assert!(!hershel.is_alive());
    }

    #[test]
    fn test_default_walkers_have_unique_ids() {
        let walkers = default_walkers();
        for (i, walker) in walkers.iter().enumerate() {
            assert!(walker.bite > 0);
            assert!(walkers[i + 1..].iter().all(|other| other.id != walker.id));
        }
    }
}
