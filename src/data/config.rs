//! Game configuration
//!
//! Texts and menu labels the controller uses. Loaded from `config.ron`
//! so the game can be reworded without touching code.

use serde::{Deserialize, Serialize};

/// Menu actions offered alongside the doors every turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuActions {
    pub save_and_exit: String,
    pub exit: String,
}

impl MenuActions {
    /// Labels in the order they are appended after the doors
    pub fn labels(&self) -> [&str; 2] {
        [&self.save_and_exit, &self.exit]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().contains(&label)
    }
}

impl Default for MenuActions {
    fn default() -> Self {
        Self {
            save_and_exit: "Save and Exit".to_string(),
            exit: "Exit".to_string(),
        }
    }
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub welcome: String,
    /// Printed once the player is ready to play
    pub instructions: Vec<String>,
    pub menu: MenuActions,
    /// Randomize door order every turn
    pub shuffle_doors: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "The Walking Dead".to_string(),
            welcome: "Welcome to the world of the dead, see if you can ditch your way \
                      through the walkers towards the sanctuary."
                .to_string(),
            instructions: vec![
                "You will be shown some doors!".to_string(),
                "Carefully choose a door while praying that you do not come across a walker!"
                    .to_string(),
            ],
            menu: MenuActions::default(),
            shuffle_doors: true,
        }
    }
}
