//! Error types for parsing, lookup, and typed access.

use std::fmt;

use thiserror::Error;

use crate::value::Kind;

/// Errors that can occur while parsing JSON text or reading a value tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The input text was not valid JSON.
    /// `position` is the 0-based character offset where the violation was detected.
    #[error("malformed JSON at position {position}: {reason}")]
    MalformedJson { position: usize, reason: SyntaxError },

    /// A key or index lookup found nothing.
    #[error("not found: {0}")]
    NotFound(Locator),

    /// A typed accessor found a value of a different variant. Never coerced.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: Kind, actual: Kind },

    /// An integer was read through a narrower accessor than it fits in.
    #[error("integer {value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },
}

impl JsonError {
    pub(crate) fn mismatch(expected: Kind, actual: Kind) -> Self {
        JsonError::TypeMismatch { expected, actual }
    }

    /// The character offset of a parse failure, if this is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            JsonError::MalformedJson { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Why the parser rejected its input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("invalid escape sequence \\{0}")]
    InvalidEscape(char),
    #[error("invalid \\u escape sequence")]
    InvalidUnicodeEscape,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid literal")]
    InvalidLiteral,
    #[error("invalid number")]
    InvalidNumber,
    #[error("integer does not fit in 64 bits")]
    IntegerOverflow,
    #[error("number is out of range")]
    NumberOutOfRange,
    #[error("trailing characters after value")]
    TrailingCharacters,
    #[error("expected a JSON object")]
    ExpectedObject,
    #[error("expected a JSON array")]
    ExpectedArray,
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// The key or index that a failed lookup asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Key(String),
    Index(usize),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Key(key) => write!(f, "key {key:?}"),
            Locator::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Convenience alias used throughout jsondom-core.
pub type Result<T> = std::result::Result<T, JsonError>;
