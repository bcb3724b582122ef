//! User interface
//!
//! The console port and its terminal implementation.

pub mod console;
pub mod terminal;

pub use console::{Console, ConsoleError};
pub use terminal::TerminalConsole;
