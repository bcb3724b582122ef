//! Game state machine
//!
//! The controller: initializes a session (restore or fresh start), runs
//! the turn loop and reports the ending. Exits come back as outcome values
//! instead of terminating the process, the binary decides what to do next.

use thiserror::Error;

use super::turn::{build_choices, classify, Choice, GameOutcome, MenuAction, TurnOutcome};
use crate::data::GameConfig;
use crate::entities::{Survivor, Vital};
use crate::save::{GameStorage, SaveError};
use crate::ui::{Console, ConsoleError};
use crate::world::{Map, MapError};

const RESTORE_YES: &str = "Yes";
const RESTORE_NO: &str = "No";

/// Errors that abort a session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("saving failed: {0}")]
    Save(#[from] SaveError),

    #[error("map error: {0}")]
    Map(#[from] MapError),

    #[error("no player has been chosen yet")]
    NoPlayer,

    #[error("'{0}' is not one of the offered choices")]
    InvalidChoice(String),
}

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Uninitialized,
    /// Deciding between a saved game and a fresh start
    ChoosingRestoreOrFresh,
    Playing,
    Ended(GameOutcome),
}

/// The main game struct, owning the player and map for one session
pub struct Game<C, S> {
    console: C,
    storage: S,
    map: Map,
    config: GameConfig,
    player: Option<Box<dyn Vital>>,
    state: GameState,
}

impl<C: Console, S: GameStorage> Game<C, S> {
    pub fn new(console: C, storage: S, map: Map, config: GameConfig) -> Self {
        Self {
            console,
            storage,
            map,
            config,
            player: None,
            state: GameState::Uninitialized,
        }
    }

    /// Run a whole session: initialize, loop, report the ending
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.initialize()?;
        let outcome = self.run_loop()?;

        if matches!(outcome, GameOutcome::Victory | GameOutcome::Death) {
            self.end_game()?;
        }

        self.state = GameState::Ended(outcome);
        log::info!("Session ended: {:?}", outcome);
        Ok(outcome)
    }

    /// Restore the saved game or start fresh, then discard the save
    pub fn initialize(&mut self) -> Result<(), GameError> {
        self.state = GameState::ChoosingRestoreOrFresh;
        self.show_welcome()?;

        let restored = if self.storage.has_saved_game() && self.should_restore()? {
            match self.restore_saved_game() {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Restore failed: {}", e);
                    self.console.print_danger(&format!(
                        "Could not restore the saved game ({}). Starting a new game instead.",
                        e
                    ))?;
                    false
                }
            }
        } else {
            false
        };

        if !restored {
            self.map.load_level(0)?;
            self.choose_player()?;
        }

        // The player is playing now, so a save must not be resumed twice
        self.storage.remove_saved_game()?;

        for line in &self.config.instructions {
            self.console.print_text(line)?;
        }
        self.console.break_line()?;

        self.state = GameState::Playing;
        Ok(())
    }

    fn show_welcome(&mut self) -> Result<(), GameError> {
        self.console.print_title(&self.config.title)?;
        self.console.print_text(&self.config.welcome)?;
        Ok(())
    }

    fn should_restore(&mut self) -> Result<bool, GameError> {
        let options = [RESTORE_YES.to_string(), RESTORE_NO.to_string()];
        let answer = self
            .console
            .ask_choice("Saved game found. Would you like to restore it?", &options)?;
        Ok(answer == RESTORE_YES)
    }

    /// Rebuild the player and level from storage. Nothing is applied
    /// unless the whole snapshot is valid.
    fn restore_saved_game(&mut self) -> Result<(), SaveError> {
        let snapshot = self.storage.saved_game()?;
        let survivor = Survivor::from_snapshot(&snapshot.player)?;
        self.map
            .load_level(snapshot.level)
            .map_err(|e| SaveError::Corrupt(e.to_string()))?;

        log::info!(
            "Restored {} on level {}",
            survivor.name(),
            snapshot.level + 1
        );
        self.player = Some(Box::new(survivor));
        Ok(())
    }

    fn choose_player(&mut self) -> Result<(), GameError> {
        let names = self.map.roster().names();
        let choice = self.console.ask_choice("Choose your player?", &names)?;
        let player = self
            .map
            .roster()
            .spawn(&choice)
            .ok_or(GameError::InvalidChoice(choice))?;

        log::info!("New game as {}", player.name());
        self.console.print_title(&format!("Godspeed {}!", player.name()))?;
        self.player = Some(player);
        Ok(())
    }

    /// Play turns until the player dies, wins or leaves
    fn run_loop(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            let outcome = match self.play_turn()? {
                TurnOutcome::Continue if self.player()?.is_alive() => continue,
                TurnOutcome::Continue | TurnOutcome::Death => GameOutcome::Death,
                TurnOutcome::Victory => GameOutcome::Victory,
                TurnOutcome::SaveAndExit => GameOutcome::SavedAndExited,
                TurnOutcome::Exit => GameOutcome::Exited,
            };
            return Ok(outcome);
        }
    }

    /// Show the level, ask for a door and resolve it
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.player.is_none() {
            return Err(GameError::NoPlayer);
        }

        let level = self.map.current_level();
        self.console.print_title(&format!("Level {}", level + 1))?;
        self.show_progress()?;

        let doors = self.map.doors(self.config.shuffle_doors);
        let choices = build_choices(&doors, &self.config.menu);
        let choice = self
            .console
            .ask_choice("Carefully choose the door to enter!", &choices)?;
        if !choices.contains(&choice) {
            return Err(GameError::InvalidChoice(choice));
        }

        let player = self.player.as_deref_mut().ok_or(GameError::NoPlayer)?;
        match classify(&choice, &doors, &self.config.menu) {
            Choice::Menu(MenuAction::SaveAndExit) => {
                self.storage.save_game(player, &self.map)?;
                self.console.print_success(&format!(
                    "Bye bye {}! Walkers will be waiting for you",
                    player.name()
                ))?;
                Ok(TurnOutcome::SaveAndExit)
            }
            Choice::Menu(MenuAction::Exit) => {
                self.console.print_success(&format!(
                    "Bye {}! We wish you had not lost hope",
                    player.name()
                ))?;
                Ok(TurnOutcome::Exit)
            }
            Choice::Walker(walker) => {
                let damage = walker.attack(player);
                log::debug!("Door '{}' on level {}: {} for {}", choice, level + 1, walker.name(), damage);
                self.console.print_danger(&format!(
                    "Bitten by {}! Lost {} health. Health decreased to {}",
                    walker.name(),
                    damage,
                    player.health()
                ))?;

                if player.is_alive() {
                    Ok(TurnOutcome::Continue)
                } else {
                    Ok(TurnOutcome::Death)
                }
            }
            Choice::Safe => {
                self.console.print_info("Phew! Nothing in that door!")?;
                player.add_experience(self.map.current_level_experience());

                if !self.map.can_advance() {
                    return Ok(TurnOutcome::Victory);
                }
                self.map.advance()?;
                Ok(TurnOutcome::Continue)
            }
        }
    }

    fn show_progress(&mut self) -> Result<(), GameError> {
        let player = self.player.as_deref().ok_or(GameError::NoPlayer)?;
        let row = vec![
            (self.map.current_level() + 1).to_string(),
            player.experience().to_string(),
            player.health().to_string(),
        ];
        self.console
            .print_table(&["Level", "Experience", "Health"], &[row])?;
        Ok(())
    }

    fn end_game(&mut self) -> Result<(), GameError> {
        let player = self.player.as_deref().ok_or(GameError::NoPlayer)?;
        if player.is_alive() {
            self.console.print_success(&format!(
                "Good work {}! You have made it alive to the Sanctuary",
                player.name()
            ))?;
        } else {
            self.console.print_danger(&format!(
                "*Rest in peace {}! You will be remembered*",
                player.name()
            ))?;
        }
        self.show_progress()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The current player, once initialized
    pub fn player(&self) -> Result<&dyn Vital, GameError> {
        self.player.as_deref().ok_or(GameError::NoPlayer)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
