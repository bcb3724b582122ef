//! Line-based terminal console
//!
//! Colours output with crossterm and reads answers one line at a time.
//! Generic over the reader/writer so prompts can be driven from tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::style::Stylize;

use super::console::{Console, ConsoleError};

pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Match an answer against the options: 1-based number or label
    fn resolve(answer: &str, options: &[String]) -> Option<String> {
        if let Ok(number) = answer.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| options.get(index))
                .cloned();
        }
        options
            .iter()
            .find(|option| option.eq_ignore_ascii_case(answer))
            .cloned()
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn print_title(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", text.bold().yellow())?;
        writeln!(self.output, "{}", "=".repeat(text.chars().count()).yellow())?;
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn print_info(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text.cyan())?;
        Ok(())
    }

    fn print_success(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text.green())?;
        Ok(())
    }

    fn print_danger(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text.red().bold())?;
        Ok(())
    }

    fn print_table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), ConsoleError> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let border: String = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{}+", border);

        writeln!(self.output, "{}", border)?;
        let header_cells: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!(" {:<w$} ", h, w = *w))
            .collect();
        writeln!(self.output, "|{}|", header_cells.join("|").bold())?;
        writeln!(self.output, "{}", border)?;
        for row in rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| format!(" {:<w$} ", row.get(i).map_or("", |c| c.as_str()), w = *w))
                .collect();
            writeln!(self.output, "|{}|", cells.join("|"))?;
        }
        writeln!(self.output, "{}", border)?;
        Ok(())
    }

    fn break_line(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<String, ConsoleError> {
        if options.is_empty() {
            return Err(ConsoleError::NoOptions(prompt.to_string()));
        }

        loop {
            writeln!(self.output, "{}", prompt.bold())?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "  [{}] {}", i + 1, option)?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            let answer = line.trim();
            if let Some(choice) = Self::resolve(answer, options) {
                return Ok(choice);
            }
            log::debug!("Rejected answer '{}'", answer);
            writeln!(self.output, "{}", format!("'{}' is not a valid choice", answer).red())?;
        }
    }
}
