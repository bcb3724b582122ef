//! Walkers - Entry Point
//!
//! Sets up logging, loads the content files and runs one game session
//! on the terminal.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};

use walkers::data::{export_default_data, DataManager, DEFAULT_DATA_DIR};
use walkers::save::{default_save_path, FileStorage};
use walkers::ui::TerminalConsole;
use walkers::{Game, GameOutcome};

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Walkers v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = env::var_os("WALKERS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    if env::args().nth(1).as_deref() == Some("--export-data") {
        export_default_data(&data_dir)
            .with_context(|| format!("exporting default data to {}", data_dir.display()))?;
        println!("Default data written to {}", data_dir.display());
        return Ok(());
    }

    let data = DataManager::load_from_dir(&data_dir)
        .with_context(|| format!("loading game data from {}", data_dir.display()))?;
    let map = data.build_map()?;

    let save_path = env::var_os("WALKERS_SAVE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(default_save_path);
    let storage = FileStorage::new(save_path);
    log::info!("Saved games live at {}", storage.path().display());

    let mut game = Game::new(TerminalConsole::stdio(), storage, map, data.config);
    let result = game.play();

    match &result {
        Ok(GameOutcome::SavedAndExited) => log::info!("Progress saved, see you soon"),
        Ok(outcome) => log::info!("Game over: {:?}", outcome),
        Err(e) => log::error!("Game exited with error: {}", e),
    }

    log::info!("Walkers shut down cleanly");
    result.map(|_| ()).context("game session failed")
}

/// Log to a file so log lines never mix with the game text
fn init_logging() {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    );

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("walkers.log")
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // No writable working directory, keep quiet rather than clutter stderr
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}
