//! Vital entity contract
//!
//! The capability set shared by everything that has health and experience.
//! The game loop only ever talks to the player through this trait.

use std::fmt;

use crate::save::PlayerSnapshot;
use super::survivors::SurvivorKind;

/// Something with a name, health and experience
pub trait Vital: fmt::Debug {
    /// Display name
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// Current health, may be zero or negative after a bite
    fn health(&self) -> i32;

    /// Overwrite health (damage resolution and restore)
    fn set_health(&mut self, health: i32);

    /// Accumulated experience
    fn experience(&self) -> u32;

    /// Add experience. Saturates at `u32::MAX`.
    fn add_experience(&mut self, delta: u32);

    /// Overwrite experience, only used when restoring a saved game
    fn set_experience(&mut self, experience: u32);

    /// Registry identifier of this variant
    fn variant(&self) -> SurvivorKind;

    /// Alive iff health is strictly positive
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Capture the state needed to rebuild this entity later
    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            variant: self.variant().id().to_string(),
            experience: self.experience(),
            health: self.health(),
        }
    }
}
