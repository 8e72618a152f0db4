//! Answer validators
//!
//! Each function decides a single attempt: it takes one raw line and either
//! produces the typed value or a [`Rejection`] whose `Display` is the warning
//! shown before asking again.

use crate::{constants::messages, constraint::Constraint};
use std::fmt::Display;

/// Reason a raw answer was not accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    EmptyText,
    NotInteger,
    NotDecimal,
    InvalidOption,
    Violates(Constraint),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::EmptyText => messages::EMPTY_INPUT,
            Self::NotInteger => messages::INVALID_INT,
            Self::NotDecimal => messages::INVALID_DECIMAL,
            Self::InvalidOption => messages::INVALID_OPTION,
            Self::Violates(constraint) => constraint.message(),
        };
        write!(f, "{message}")
    }
}

/// Accepts any line with at least one non-whitespace character, unchanged.
pub fn parse_text(raw: &str) -> Result<String, Rejection> {
    if raw.trim().is_empty() {
        return Err(Rejection::EmptyText);
    }
    Ok(raw.to_string())
}

/// Parses a whole line as an `i32`, ignoring surrounding whitespace.
pub fn parse_int(raw: &str, constraint: Option<Constraint>) -> Result<i32, Rejection> {
    let value = raw.trim().parse::<i32>().map_err(|_| Rejection::NotInteger)?;
    check_constraint(value, constraint)
}

/// Parses a whole line as a finite `f64`, ignoring surrounding whitespace.
pub fn parse_decimal(
    raw: &str,
    constraint: Option<Constraint>,
) -> Result<f64, Rejection> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(Rejection::NotDecimal)?;
    check_constraint(value, constraint)
}

/// Maps a 1-based menu entry to a 0-based index into a list of `len` options.
pub fn parse_choice(raw: &str, len: usize) -> Result<usize, Rejection> {
    match raw.trim().parse::<usize>() {
        Ok(choice) if (1..=len).contains(&choice) => Ok(choice - 1),
        _ => Err(Rejection::InvalidOption),
    }
}

fn check_constraint<N: PartialOrd + Default + Copy>(
    value: N,
    constraint: Option<Constraint>,
) -> Result<N, Rejection> {
    match constraint {
        Some(constraint) if !constraint.check(value) => {
            Err(Rejection::Violates(constraint))
        }
        _ => Ok(value),
    }
}
