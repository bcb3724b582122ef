//! Test doubles shared by the end-to-end game tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::rc::Rc;

use walkers::data::GameConfig;
use walkers::entities::{Hostile, Roster, Vital, Walker};
use walkers::save::{GameStorage, MemoryStorage, SaveError, SaveSnapshot};
use walkers::ui::{Console, ConsoleError};
use walkers::world::{Door, Level, Map};

/// Console that answers prompts from a script and records everything
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    /// Every printed line, prefixed with its kind
    pub transcript: Vec<String>,
    /// Every prompt with the options it offered
    pub prompts: Vec<(String, Vec<String>)>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Index of the first transcript line containing `needle`
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.transcript.iter().position(|line| line.contains(needle))
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.position(needle).is_some()
    }

    fn record(&mut self, kind: &str, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push(format!("{}: {}", kind, text));
        Ok(())
    }
}

impl Console for ScriptedConsole {
    fn print_title(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.record("title", text)
    }

    fn print_text(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.record("text", text)
    }

    fn print_info(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.record("info", text)
    }

    fn print_success(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.record("success", text)
    }

    fn print_danger(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.record("danger", text)
    }

    fn print_table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), ConsoleError> {
        let rows: Vec<String> = rows.iter().map(|row| row.join(",")).collect();
        let line = format!("{} / {}", headers.join(","), rows.join(";"));
        self.record("table", &line)
    }

    fn break_line(&mut self) -> Result<(), ConsoleError> {
        Ok(())
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<String, ConsoleError> {
        self.prompts.push((prompt.to_string(), options.to_vec()));
        let answer = self.answers.pop_front().ok_or(ConsoleError::InputClosed)?;
        assert!(
            options.contains(&answer),
            "scripted answer '{}' not offered in {:?}",
            answer,
            options
        );
        self.transcript.push(format!("chose: {}", answer));
        Ok(answer)
    }
}

/// Storage that counts every call on top of an in-memory snapshot
#[derive(Debug, Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    pub saves: Vec<SaveSnapshot>,
    pub removals: usize,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: SaveSnapshot) -> Self {
        Self {
            inner: MemoryStorage::with_snapshot(snapshot),
            ..Self::default()
        }
    }
}

impl GameStorage for RecordingStorage {
    fn has_saved_game(&self) -> bool {
        self.inner.has_saved_game()
    }

    fn saved_game(&self) -> Result<SaveSnapshot, SaveError> {
        self.inner.saved_game()
    }

    fn save_game(&mut self, player: &dyn Vital, map: &Map) -> Result<(), SaveError> {
        self.inner.save_game(player, map)?;
        self.saves.push(SaveSnapshot::capture(player, map));
        Ok(())
    }

    fn remove_saved_game(&mut self) -> Result<(), SaveError> {
        self.removals += 1;
        self.inner.remove_saved_game()
    }
}

/// Two levels: level 1 has "A" (walker biting for 100) and safe "B",
/// level 2 only has a safe "B".
pub fn two_level_map() -> Map {
    let biter: Rc<dyn Hostile> = Rc::new(Walker::new("biter", "Biter", 100));
    let levels = vec![
        Level::new(vec![Door::guarded("A", biter), Door::safe("B")], 10),
        Level::new(vec![Door::safe("B")], 20),
    ];
    Map::new(levels, Roster::default()).expect("valid test map")
}

/// Default config with doors in configured order
pub fn config() -> GameConfig {
    GameConfig {
        shuffle_doors: false,
        ..GameConfig::default()
    }
}
