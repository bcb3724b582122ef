//! Walkers - A terminal survival game
//!
//! Pick doors level by level, pray there is no walker behind them,
//! and make it alive to the sanctuary.

pub mod game;
pub mod world;
pub mod entities;
pub mod ui;
pub mod save;
pub mod data;

// Re-export commonly used types
pub use game::{Game, GameError, GameOutcome, GameState};
pub use entities::{Hostile, Vital};
pub use world::Map;
