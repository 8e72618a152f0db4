//! Terminal backend for the process console
//!
//! Lines come from locked stdin so end of input is noticed. Raw keypresses and
//! screen clearing go through the `console` crate; when stdout is not a
//! terminal (piped runs, CI) a keypress is taken from the next input line.

use super::interface::Terminal;
use crate::error::{Error, Result};
use console::{Key, Term};
use std::io::BufRead;
use std::time::Duration;

pub struct StdTerminal {
    term: Term,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(strip_line_ending(&line).to_string())
    }

    fn read_key(&self) -> Result<Option<char>> {
        if !self.term.is_term() {
            return Ok(first_key(&self.read_line()?));
        }

        match self.term.read_key()? {
            Key::Char(c) => Ok(Some(c)),
            other => {
                log::trace!("Ignoring non-character key {other:?}");
                Ok(None)
            }
        }
    }

    fn write_line(&self, line: &str) -> Result<()> {
        Ok(self.term.write_line(line)?)
    }

    fn clear(&self) -> Result<()> {
        Ok(self.term.clear_screen()?)
    }

    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line)
}

/// Key read from a whole line when raw keypresses are unavailable.
///
/// A blank line stands for a key without a character.
fn first_key(line: &str) -> Option<char> {
    line.trim().chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unix_and_windows_line_endings() {
        assert_eq!(strip_line_ending("hola\n"), "hola");
        assert_eq!(strip_line_ending("hola\r\n"), "hola");
        assert_eq!(strip_line_ending("hola"), "hola");
    }

    #[test]
    fn first_key_takes_first_visible_character() {
        assert_eq!(first_key("s\n"), Some('s'));
        assert_eq!(first_key("  n  "), Some('n'));
        assert_eq!(first_key("si"), Some('s'));
    }

    #[test]
    fn first_key_of_blank_line_is_silent() {
        assert_eq!(first_key(""), None);
        assert_eq!(first_key("   \r\n"), None);
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(strip_line_ending("  a b \n"), "  a b ");
        assert_eq!(strip_line_ending("\n"), "");
    }
}
