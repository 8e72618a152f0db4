//! Pure interface for console I/O
//!
//! Prompts and banners only talk to the console through [`Terminal`], so the
//! same session logic runs against a real terminal or a scripted one.

use crate::error::Result;
use std::time::Duration;

/// Blocking console backend.
pub trait Terminal {
    /// Reads one line of input without its line terminator.
    ///
    /// Returns [`Error::InputClosed`](crate::error::Error::InputClosed) once the
    /// input has no more lines to give.
    fn read_line(&self) -> Result<String>;

    /// Reads a single keypress without echoing it.
    ///
    /// `None` stands for a key that produces no character (arrows, Enter, ...).
    fn read_key(&self) -> Result<Option<char>>;

    fn write_line(&self, line: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;

    /// Blocks for `duration`.
    fn pause(&self, duration: Duration);
}
