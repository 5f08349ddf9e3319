//! # lexid
//!
//! Variable-width build numbers whose string order matches their numeric
//! order.
//!
//! ## Format
//!
//! An identifier is a non-empty run of ASCII digits. A single digit stands
//! for itself. With two or more digits the first one is a marker and the
//! rest is the payload that carries the value:
//!
//! ```text
//! lexical      numerical
//! 1001                 1
//! 1002                 2
//! ...
//! 1999               999
//! 21000             1000
//! 21001             1001
//! ```
//!
//! When the payload runs out of digits it grows by one and the marker goes
//! up by one, so the wider identifier still sorts after the narrower ones.
//! An identifier made only of nines has no successor.
//!
//! ## Usage
//!
//! ```
//! assert_eq!(lexid::next_id("09").unwrap(), "110");
//! assert_eq!(lexid::ord_val("110").unwrap(), 10);
//! assert!(lexid::next_id("9999").unwrap_err().is_overflow());
//! ```

mod error;
mod id;

pub use error::LexIdError;
pub use id::{LexId, LexIdSeq, MAX_WIDTH};

/// Returns the identifier that follows `prev_id`.
///
/// Fails with [`LexIdError::Overflow`] when `prev_id` is all nines, and with
/// a format error when it is not a valid identifier.
pub fn next_id(prev_id: &str) -> Result<String, LexIdError> {
    LexId::parse(prev_id)?.next().map(String::from)
}

/// Returns the ordinal value of `lex_id`.
pub fn ord_val(lex_id: &str) -> Result<u128, LexIdError> {
    Ok(LexId::parse(lex_id)?.ordinal())
}
