//! Scripted terminal backend
//!
//! Answers prompts from predefined lines and keys and records everything the
//! session writes. Useful for tests, demos and unattended runs. When a script
//! runs out the terminal reports [`Error::InputClosed`], so a prompt that never
//! receives a valid answer ends instead of looping forever.

use super::interface::Terminal;
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    lines: RefCell<VecDeque<String>>,
    keys: RefCell<VecDeque<Option<char>>>,
    output: RefCell<Vec<String>>,
    pauses: RefCell<Vec<Duration>>,
    clears: Cell<usize>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Default::default()
    }

    /// Queue input lines, answered in order by [`Terminal::read_line`].
    pub fn with_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.borrow_mut().extend(lines.into_iter().map(Into::into));
        self
    }

    /// Queue character keypresses, answered in order by [`Terminal::read_key`].
    pub fn with_keys<I>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.keys.borrow_mut().extend(keys.into_iter().map(Some));
        self
    }

    /// Queue a keypress that produces no character.
    pub fn with_silent_key(self) -> Self {
        self.keys.borrow_mut().push_back(None);
        self
    }

    /// Every line written so far. Multi-line writes are split.
    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    /// Everything written so far, one line per entry, joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.borrow().join("\n")
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.borrow().len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&self) -> Result<String> {
        self.lines.borrow_mut().pop_front().ok_or(Error::InputClosed)
    }

    fn read_key(&self) -> Result<Option<char>> {
        self.keys.borrow_mut().pop_front().ok_or(Error::InputClosed)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut output = self.output.borrow_mut();
        if line.is_empty() {
            output.push(String::new());
        } else {
            output.extend(line.lines().map(str::to_string));
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}
