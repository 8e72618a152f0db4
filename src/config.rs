//! Console configuration
//!
//! Holds the values that shape every prompt and banner: line width, the pause
//! after alerts, whether the screen is cleared by default, and the two keys that
//! answer a confirmation. [`ConsoleConfig::default`] carries the values the demo
//! program ships with; the `with_*` builders override them, which is mostly
//! useful for tests that want zero delays or narrow banners.

use crate::{
    constants::{
        DEFAULT_CLEAR, DEFAULT_CONFIRM_KEY, DEFAULT_DELAY_MS, DEFAULT_FILL,
        DEFAULT_REJECT_KEY, DEFAULT_WIDTH,
    },
    error::{Error, Result},
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Total width of separators and padded lines, in characters.
    pub width: usize,
    /// Pause after alerts and the farewell.
    pub delay: Duration,
    /// Clear the screen around banners and after alerts unless told otherwise.
    pub default_clear: bool,
    pub confirm_key: char,
    pub reject_key: char,
    /// Character used to fill padded lines.
    pub fill: char,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            default_clear: DEFAULT_CLEAR,
            confirm_key: DEFAULT_CONFIRM_KEY,
            reject_key: DEFAULT_REJECT_KEY,
            fill: DEFAULT_FILL,
        }
    }
}

impl ConsoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_default_clear(mut self, default_clear: bool) -> Self {
        self.default_clear = default_clear;
        self
    }

    /// Set the confirm and reject keys of confirmation prompts.
    pub fn with_keys(mut self, confirm_key: char, reject_key: char) -> Self {
        self.confirm_key = confirm_key;
        self.reject_key = reject_key;
        self
    }

    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Checks that the configuration can drive a session.
    ///
    /// Keys are compared ignoring case, the same way a keypress is matched.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidConfig(
                "width must be greater than zero".to_string(),
            ));
        }

        for key in [self.confirm_key, self.reject_key] {
            if !key.is_alphanumeric() {
                return Err(Error::InvalidConfig(format!(
                    "key '{key}' is not a letter or digit"
                )));
            }
        }

        if keys_match(self.confirm_key, self.reject_key) {
            return Err(Error::InvalidConfig(format!(
                "confirm and reject keys are both '{}'",
                self.confirm_key
            )));
        }

        Ok(())
    }

    /// Label shown after a confirmation message, e.g. `[S/N]`.
    pub fn key_hint(&self) -> String {
        format!(
            "[{}/{}]",
            self.confirm_key.to_uppercase(),
            self.reject_key.to_uppercase()
        )
    }
}

/// Case-insensitive key comparison.
pub(crate) fn keys_match(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_shipped_constants() {
        let config = ConsoleConfig::default();
        assert_eq!(config.width, 119);
        assert_eq!(config.delay, Duration::from_millis(1500));
        assert!(!config.default_clear);
        assert_eq!(config.confirm_key, 'S');
        assert_eq!(config.reject_key, 'N');
        assert_eq!(config.fill, '-');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let config = ConsoleConfig::new()
            .with_width(20)
            .with_delay(Duration::ZERO)
            .with_default_clear(true)
            .with_keys('y', 'n')
            .with_fill('*');

        assert_eq!(config.width, 20);
        assert_eq!(config.delay, Duration::ZERO);
        assert!(config.default_clear);
        assert_eq!((config.confirm_key, config.reject_key), ('y', 'n'));
        assert_eq!(config.fill, '*');
    }

    #[test]
    fn rejects_zero_width() {
        let result = ConsoleConfig::new().with_width(0).validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_keys_that_differ_only_in_case() {
        let result = ConsoleConfig::new().with_keys('s', 'S').validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_alphanumeric_keys() {
        let result = ConsoleConfig::new().with_keys(' ', 'N').validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn key_hint_is_upper_cased() {
        let config = ConsoleConfig::new().with_keys('y', 'n');
        assert_eq!(config.key_hint(), "[Y/N]");
        assert_eq!(ConsoleConfig::default().key_hint(), "[S/N]");
    }

    #[test]
    fn keys_match_ignores_case() {
        assert!(keys_match('s', 'S'));
        assert!(keys_match('N', 'N'));
        assert!(!keys_match('S', 'N'));
    }
}
