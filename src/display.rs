//! Banners, alerts and padded lines.

use crate::{
    constants::{messages, SEPARATOR_CHAR},
    error::Result,
    prompt::{Session, Terminal},
};

/// Centers ` message ` in `width` characters using `fill`.
///
/// The framing spaces count towards the padding, so any message shorter than
/// `width` comes back exactly `width` characters long. When the padding cannot
/// be split evenly the extra character goes on the right. A message at least
/// `width` characters long is returned with its spaces and no fill.
pub fn pad(message: &str, width: usize, fill: char) -> String {
    let len = message.chars().count();
    if len >= width {
        return format!(" {message} ");
    }

    let total = width - len;
    let left = total / 2;
    let right = total - left;

    let mut line = String::with_capacity(message.len() + total * fill.len_utf8());
    line.extend(std::iter::repeat_n(fill, left.saturating_sub(1)));
    if left > 0 {
        line.push(' ');
    }
    line.push_str(message);
    line.push(' ');
    line.extend(std::iter::repeat_n(fill, right - 1));
    line
}

/// A full-width banner separator.
pub fn separator(width: usize) -> String {
    std::iter::repeat_n(SEPARATOR_CHAR, width).collect()
}

/// Text of a warning before padding.
pub fn warning_text(message: &str) -> String {
    format!("[!] {message} [!]")
}

impl<T: Terminal> Session<T> {
    /// Shows the title banner and summary, then waits for any key.
    pub fn greeting(&self, title: &str, summary: &str) -> Result<()> {
        let config = self.config();
        let bar = separator(config.width);
        let title = pad(title, config.width, config.fill);
        let banner: [&str; 8] =
            [&bar, &title, &bar, "", summary, "", messages::PRESS_ANY_KEY, ""];

        self.clear_if_default()?;
        for line in banner {
            self.terminal().write_line(line)?;
        }

        let key = self.terminal().read_key()?;
        log::trace!("Greeting dismissed with {key:?}");
        self.clear_if_default()
    }

    /// Shows a padded closing message and pauses. Exiting is up to the caller.
    pub fn farewell(&self, message: &str) -> Result<()> {
        self.clear_if_default()?;
        self.terminal()
            .write_line(&pad(message, self.config().width, self.config().fill))?;
        self.pause();
        Ok(())
    }

    /// Writes `message` followed by a blank line.
    pub fn print(&self, message: &str) -> Result<()> {
        self.terminal().write_line(message)?;
        self.terminal().write_line("")
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.info_with(message, self.config().default_clear)
    }

    pub fn info_with(&self, message: &str, clear_after: bool) -> Result<()> {
        self.alert_with(&pad(message, self.config().width, self.config().fill), clear_after)
    }

    pub fn warning(&self, message: &str) -> Result<()> {
        self.warning_with(message, self.config().default_clear)
    }

    pub fn warning_with(&self, message: &str, clear_after: bool) -> Result<()> {
        let line = pad(&warning_text(message), self.config().width, self.config().fill);
        self.alert_with(&line, clear_after)
    }

    /// Prints `message` as-is, then pauses.
    pub fn alert(&self, message: &str) -> Result<()> {
        self.alert_with(message, self.config().default_clear)
    }

    pub fn alert_with(&self, message: &str, clear_after: bool) -> Result<()> {
        self.print(message)?;
        self.pause();
        if clear_after {
            self.terminal().clear()?;
        }
        Ok(())
    }

    /// Clears the screen only when the configuration asks for it by default.
    pub fn clear_if_default(&self) -> Result<()> {
        if self.config().default_clear {
            self.terminal().clear()?;
        }
        Ok(())
    }

    fn pause(&self) {
        log::trace!("Pausing for {:?}", self.config().delay);
        self.terminal().pause(self.config().delay);
    }
}
