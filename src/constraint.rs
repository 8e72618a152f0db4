use crate::constants::messages;
use std::fmt::Display;

/// Sign restriction applied to a parsed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    PositiveOrZero,
    /// Strictly less than zero.
    Negative,
    /// Zero or less.
    NegativeOrZero,
}

impl Constraint {
    /// Whether `value` satisfies the constraint.
    ///
    /// Zero is taken from `N::default()`, which holds for every primitive
    /// number. Values that do not compare with zero (`NaN`) satisfy nothing.
    pub fn check<N: PartialOrd + Default>(&self, value: N) -> bool {
        let zero = N::default();
        match self {
            Self::Positive => value > zero,
            Self::PositiveOrZero => value >= zero,
            Self::Negative => value < zero,
            Self::NegativeOrZero => value <= zero,
        }
    }

    /// Warning shown when a value violates the constraint.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Positive => messages::MUST_BE_POSITIVE,
            Self::PositiveOrZero => messages::MUST_BE_POSITIVE_OR_ZERO,
            Self::Negative => messages::MUST_BE_NEGATIVE,
            Self::NegativeOrZero => messages::MUST_BE_NEGATIVE_OR_ZERO,
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::PositiveOrZero => "positive or zero",
            Self::Negative => "negative",
            Self::NegativeOrZero => "negative or zero",
        };
        write!(f, "{s}")
    }
}
