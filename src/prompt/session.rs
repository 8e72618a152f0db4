//! Validated prompts
//!
//! Every prompt shares one loop: show the message, read a raw answer, validate
//! it, and on rejection show a warning and ask again. The loop has no retry
//! limit; it ends on a valid answer or when the terminal reports closed input.

use super::interface::Terminal;
use crate::{
    config::{keys_match, ConsoleConfig},
    constants::messages,
    constraint::Constraint,
    error::{Error, Result},
    validation::{parse_choice, parse_decimal, parse_int, parse_text, Rejection},
};
use std::fmt::Display;

/// A console session: a terminal backend plus the configuration driving it.
///
/// Prompt methods live here; banner and alert methods are in
/// [`crate::display`].
pub struct Session<T: Terminal> {
    terminal: T,
    config: ConsoleConfig,
}

impl<T: Terminal> Session<T> {
    /// Creates a session after validating `config`.
    pub fn new(terminal: T, config: ConsoleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { terminal, config })
    }

    pub fn with_default_config(terminal: T) -> Self {
        Self { terminal, config: ConsoleConfig::default() }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Asks until a line with some non-whitespace content is entered.
    pub fn read_string(&self, message: &str) -> Result<String> {
        self.ask(message, parse_text)
    }

    /// Asks until a whole `i32` satisfying `constraint` (if any) is entered.
    pub fn read_int(&self, message: &str, constraint: Option<Constraint>) -> Result<i32> {
        self.ask(message, |raw| parse_int(raw, constraint))
    }

    /// Asks until a finite `f64` satisfying `constraint` (if any) is entered.
    pub fn read_decimal(
        &self,
        message: &str,
        constraint: Option<Constraint>,
    ) -> Result<f64> {
        self.ask(message, |raw| parse_decimal(raw, constraint))
    }

    /// Shows a numbered menu of `options` and asks until a listed number is
    /// entered. Returns a copy of the chosen option.
    pub fn read_option<O>(&self, message: &str, options: &[O]) -> Result<O>
    where
        O: Display + Clone,
    {
        if options.is_empty() {
            return Err(Error::NoOptions);
        }

        let menu = option_menu(message, options);
        let index = self.ask(&menu, |raw| parse_choice(raw, options.len()))?;
        Ok(options[index].clone())
    }

    /// Asks a yes/no question answered with a single keypress.
    ///
    /// Only the configured confirm and reject keys end the prompt, in either
    /// case. Returns `true` for the confirm key.
    pub fn confirm(&self, message: &str) -> Result<bool> {
        let prompt = format!("{message} {}", self.config.key_hint());

        loop {
            self.print(&prompt)?;
            match self.terminal.read_key()? {
                Some(key) if keys_match(key, self.config.confirm_key) => return Ok(true),
                Some(key) if keys_match(key, self.config.reject_key) => return Ok(false),
                key => {
                    log::debug!("Rejected key {key:?} for confirmation {message:?}");
                    self.warning(messages::INVALID_OPTION)?;
                }
            }
        }
    }

    fn ask<V, F>(&self, message: &str, parse: F) -> Result<V>
    where
        F: Fn(&str) -> std::result::Result<V, Rejection>,
    {
        loop {
            self.terminal.write_line(&format!("{message}:"))?;
            let raw = self.terminal.read_line()?;
            self.terminal.write_line("")?;
            log::trace!("Read {raw:?}");

            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    log::debug!("Rejected {raw:?}: {rejection:?}");
                    self.warning(&rejection.to_string())?;
                }
            }
        }
    }
}

/// Message, one `N.- option` line per option, a blank line and the selection hint.
fn option_menu<O: Display>(message: &str, options: &[O]) -> String {
    let mut menu = format!("{message}\n");
    for (i, option) in options.iter().enumerate() {
        menu.push_str(&format!("{}.- {}\n", i + 1, option));
    }
    menu.push('\n');
    menu.push_str(messages::SELECT_OPTION);
    menu
}
