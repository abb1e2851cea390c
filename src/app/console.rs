use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};
use console::Term;

/// Line-oriented user interaction used by the menu loop.
///
/// Prompts return `Ok(None)` once input is exhausted (EOF).
pub trait Console {
    /// Print one line.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be read or written.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Like [`Console::prompt`] but without echoing what the user types.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be read or written.
    fn prompt_hidden(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Console backed by the process' stdin/stdout.
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn read_stdin_line() -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        self.term
            .write_line(line)
            .context("failed to write to stdout")
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.term
            .write_str(prompt)
            .context("failed to write to stdout")?;
        self.term.flush().context("failed to flush stdout")?;
        Self::read_stdin_line()
    }

    fn prompt_hidden(&mut self, prompt: &str) -> Result<Option<String>> {
        self.term
            .write_str(prompt)
            .context("failed to write to stdout")?;
        self.term.flush().context("failed to flush stdout")?;

        // Piped input has nothing to hide and no terminal to switch echo on.
        if self.term.is_term() && io::stdin().is_terminal() {
            let secret = self
                .term
                .read_secure_line()
                .context("failed to read hidden input")?;
            Ok(Some(secret))
        } else {
            Self::read_stdin_line()
        }
    }
}
