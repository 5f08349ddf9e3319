//! Error types for identifier parsing and incrementing.

use thiserror::Error;

/// Errors that can occur when parsing, decoding or incrementing identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexIdError {
    /// The identifier string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The identifier contains a character other than an ASCII digit.
    #[error("invalid character {found:?} at position {position}: identifiers contain only digits 0-9")]
    InvalidDigit { position: usize, found: char },

    /// The identifier has more digits than the scheme supports.
    #[error("identifier has {len} digits, at most {max} are supported")]
    TooLong { len: usize, max: usize },

    /// The identifier has no successor.
    #[error("max lexical version reached: {id}")]
    Overflow { id: String },
}

impl LexIdError {
    /// Returns true if the identifier had no successor.
    pub fn is_overflow(&self) -> bool {
        matches!(self, LexIdError::Overflow { .. })
    }

    /// Returns true if the input was not a well-formed identifier.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            LexIdError::Empty | LexIdError::InvalidDigit { .. } | LexIdError::TooLong { .. }
        )
    }
}
