//! Line-based menu session
//!
//! Reads one choice per line, dispatches it fully (both notifications
//! included) and only then reads the next line.

use crate::dispatch::{dispatch, Flow};
use crate::models::{DeskConfig, Intent, MenuError};
use crate::state::CallCenter;
use crate::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Behaviour switches for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub show_menu: bool,
    /// Non-numeric input ends the session with an error instead of re-prompting
    pub strict_input: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_menu: true,
            strict_input: false,
        }
    }
}

impl From<&DeskConfig> for SessionOptions {
    fn from(config: &DeskConfig) -> Self {
        Self {
            show_menu: config.show_menu,
            strict_input: config.strict_input,
        }
    }
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

pub struct Session<R, W> {
    input: R,
    out: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, options: SessionOptions) -> Self {
        Self {
            input,
            out,
            options,
        }
    }

    /// Run until Quit or end of input
    pub fn run(&mut self, center: &mut CallCenter) -> Result<SessionEnd> {
        let mut prompt = true;
        let mut raw = Vec::new();

        loop {
            if prompt && self.options.show_menu {
                self.print_menu()?;
            }

            raw.clear();
            let read = self
                .input
                .read_until(b'\n', &mut raw)
                .context("Failed to read menu choice")?;
            if read == 0 {
                tracing::debug!("input closed");
                return Ok(SessionEnd::EndOfInput);
            }
            // Undecodable bytes become malformed input rather than a read error
            let line = String::from_utf8_lossy(&raw);

            // Blank lines are skipped without showing the menu again
            if line.trim().is_empty() {
                prompt = false;
                continue;
            }
            prompt = true;

            match Intent::parse(&line) {
                Ok(intent) => {
                    if dispatch(center, intent)? == Flow::Quit {
                        writeln!(self.out, "{}", "Goodbye!".green())?;
                        self.out.flush()?;
                        return Ok(SessionEnd::Quit);
                    }
                }
                Err(MenuError::InvalidChoice(choice)) => {
                    tracing::debug!(%choice, "invalid menu choice");
                    writeln!(self.out, "{}", "Invalid choice.".yellow())?;
                }
                Err(err @ MenuError::MalformedInput(_)) => {
                    tracing::debug!(error = %err, "malformed menu input");
                    if self.options.strict_input {
                        return Err(err).context("Session aborted on malformed input");
                    }
                    writeln!(self.out, "{}", format!("{}.", err).yellow())?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Choose an option:".cyan().bold())?;
        for intent in Intent::ALL {
            writeln!(self.out, "{}. {}", intent.choice(), intent.label())?;
        }
        self.out.flush()?;
        Ok(())
    }
}
