//! Game module - Core game logic and state management

mod state;
mod turn;

pub use state::{Game, GameError, GameState};
pub use turn::{build_choices, classify, menu_action, Choice, GameOutcome, MenuAction, TurnOutcome};
