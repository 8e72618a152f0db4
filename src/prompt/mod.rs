//! Interactive prompts with validation
//!
//! The module is structured in layers:
//! - `interface`: the [`Terminal`] trait, independent of any console library
//! - `term`: the real console backend built on the `console` crate
//! - `scripted`: a backend answering from predefined input, for tests
//! - `session`: [`Session`], which runs the validated prompt loops

pub mod interface;
pub mod scripted;
pub mod session;
pub mod term;

pub use interface::Terminal;
pub use scripted::ScriptedTerminal;
pub use session::Session;
pub use term::StdTerminal;

/// Convenience function to create a session on the process console with the
/// default configuration.
pub fn stdio_session() -> Session<StdTerminal> {
    Session::with_default_config(StdTerminal::new())
}
