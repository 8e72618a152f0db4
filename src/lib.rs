//! Validated console prompts, banners and alerts.
//!
//! ```rust,no_run
//! use consola::{prompt::stdio_session, Constraint};
//!
//! let session = stdio_session();
//! let age = session.read_int("Edad", Some(Constraint::PositiveOrZero))?;
//! session.info(&format!("Edad: {age}"))?;
//! # Ok::<(), consola::error::Error>(())
//! ```

/// Handles argument parsing for the demo binary.
pub mod cli;

/// Console configuration.
pub mod config;

/// Constants and user-facing messages.
pub mod constants;

/// Sign constraints for numeric prompts.
pub mod constraint;

/// The demo walk-through.
pub mod demo;

/// Banners, alerts and padding.
pub mod display;

/// Defines custom error types.
pub mod error;

/// User input and interaction handling.
pub mod prompt;

/// Answer validators
pub mod validation;

pub use config::ConsoleConfig;
pub use constraint::Constraint;
pub use prompt::{ScriptedTerminal, Session, StdTerminal, Terminal};
