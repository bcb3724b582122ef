//! Players and walkers

pub mod vital;
pub mod survivors;
pub mod walkers;

pub use vital::Vital;
pub use survivors::{Survivor, SurvivorKind, SurvivorFactory, Roster};
pub use walkers::{Hostile, Walker, default_walkers};
