//! Input rejection errors.
//!
//! Every error here is recoverable: the game loop reports it and asks
//! again. Nothing in this module ever ends a session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a rejected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The input could not be parsed into the expected shape.
    InvalidFormat,
    /// A number parsed fine but lies outside the accepted domain.
    OutOfRange,
    /// The value was already used earlier in this session.
    Duplicate,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidFormat => "invalid format",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::Duplicate => "duplicate",
        };
        f.write_str(name)
    }
}

/// A rejected line of player input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected {expected}, got {input:?}")]
    InvalidFormat {
        input: String,
        expected: &'static str,
    },
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{what} of {input} is too large, at most {max} is allowed")]
    TooLarge {
        what: &'static str,
        input: String,
        max: i64,
    },
    #[error("{0} is already guessed")]
    Duplicate(String),
}

impl InputError {
    /// Shorthand for an `InvalidFormat` error.
    pub fn invalid(input: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            expected,
        }
    }

    /// Shorthand for an `OutOfRange` error.
    pub fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }

    /// A number too large to accept, reported as the player typed it.
    pub fn too_large(what: &'static str, input: impl Into<String>, max: i64) -> Self {
        Self::TooLarge {
            what,
            input: input.into(),
            max,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            InputError::OutOfRange { .. } | InputError::TooLarge { .. } => ErrorKind::OutOfRange,
            InputError::Duplicate(_) => ErrorKind::Duplicate,
        }
    }
}
