//! Console port
//!
//! Everything the game shows or asks goes through this trait, so the
//! controller never touches stdin/stdout directly.

use thiserror::Error;

/// Errors raised by a console
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a choice was made")]
    InputClosed,

    #[error("asked to choose from an empty list: {0}")]
    NoOptions(String),
}

/// Text output and choice prompts
pub trait Console {
    fn print_title(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn print_text(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn print_info(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn print_success(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn print_danger(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn print_table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), ConsoleError>;

    fn break_line(&mut self) -> Result<(), ConsoleError>;

    /// Ask the user to pick one of `options`.
    /// The returned label is always one of `options`.
    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<String, ConsoleError>;
}
