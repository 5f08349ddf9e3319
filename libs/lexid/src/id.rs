//! The validated identifier type and its increment rule.
//!
//! A single-digit identifier is a plain digit. Longer identifiers are a
//! marker digit followed by a payload. Incrementing bumps the payload while it
//! fits its width; when the payload rolls over it grows by one digit and the
//! marker goes up by one, so the longer identifier still sorts after every
//! shorter one that preceded it.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::LexIdError;

/// Maximum number of digits in an identifier.
///
/// A payload of `MAX_WIDTH - 1` digits always fits in a `u128` ordinal.
pub const MAX_WIDTH: usize = 39;

/// A build identifier made only of ASCII digits.
///
/// Ordering is plain string ordering, which along any increment chain agrees
/// with the ordering of [`LexId::ordinal`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LexId(String);

impl LexId {
    /// Seed used when no starting identifier is given.
    pub const DEFAULT_START: &'static str = "1001";

    /// Parses an identifier from a string.
    ///
    /// The string must be 1 to [`MAX_WIDTH`] ASCII digits.
    pub fn parse(s: &str) -> Result<Self, LexIdError> {
        if s.is_empty() {
            return Err(LexIdError::Empty);
        }

        if let Some((position, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(LexIdError::InvalidDigit { position, found });
        }

        if s.len() > MAX_WIDTH {
            return Err(LexIdError::TooLong {
                len: s.len(),
                max: MAX_WIDTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The leading marker digit, or `None` for single-digit identifiers.
    #[must_use]
    pub fn marker(&self) -> Option<u8> {
        if self.width() < 2 {
            return None;
        }
        Some(self.0.as_bytes()[0] - b'0')
    }

    /// The digits that carry the ordinal value.
    #[must_use]
    pub fn payload(&self) -> &str {
        if self.width() < 2 {
            &self.0
        } else {
            &self.0[1..]
        }
    }

    /// The numeric value of the identifier, with the marker stripped.
    ///
    /// `"1001"` is 1, `"09"` is 9 and `"110"` is 10.
    #[must_use]
    pub fn ordinal(&self) -> u128 {
        self.payload()
            .bytes()
            .fold(0u128, |acc, b| acc * 10 + u128::from(b - b'0'))
    }

    /// Returns true if every digit is a nine, in which case [`LexId::next`]
    /// fails with [`LexIdError::Overflow`].
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.0.bytes().all(|b| b == b'9')
    }

    /// Returns the identifier that directly follows this one.
    pub fn next(&self) -> Result<Self, LexIdError> {
        if self.is_exhausted() {
            return Err(self.overflow());
        }

        let next_ordinal = self.ordinal() + 1;

        let Some(marker) = self.marker() else {
            return Ok(Self(next_ordinal.to_string()));
        };

        let width = self.payload().len();
        let payload = format!("{next_ordinal:0width$}");
        if payload.len() == width {
            return Ok(Self(format!("{marker}{payload}")));
        }

        // Payload rolled over. Marker is below 9 here, otherwise every digit
        // would have been a nine.
        let promoted = format!("{}{payload}", marker + 1);
        if promoted.len() > MAX_WIDTH {
            return Err(self.overflow());
        }

        tracing::trace!(from = %self, to = %promoted, "identifier width promoted");
        Ok(Self(promoted))
    }

    /// Returns the identifier with the same marker and width as this one but
    /// a different ordinal, or `None` if `ordinal` needs more payload digits.
    #[must_use]
    pub fn with_ordinal(&self, ordinal: u128) -> Option<Self> {
        let width = self.payload().len();
        let payload = format!("{ordinal:0width$}");
        if payload.len() != width {
            return None;
        }
        let id = match self.marker() {
            Some(marker) => format!("{marker}{payload}"),
            None => payload,
        };
        Some(Self(id))
    }

    /// Iterates over the identifiers following this one.
    pub fn successors(&self) -> LexIdSeq {
        LexIdSeq::after(self.clone())
    }

    fn overflow(&self) -> LexIdError {
        LexIdError::Overflow {
            id: self.0.clone(),
        }
    }
}

impl Default for LexId {
    fn default() -> Self {
        Self(Self::DEFAULT_START.to_owned())
    }
}

impl fmt::Display for LexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for LexId {
    type Err = LexIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LexId {
    type Error = LexIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LexId> for String {
    fn from(id: LexId) -> Self {
        id.0
    }
}

impl AsRef<str> for LexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for LexId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for LexId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Iterator over successive identifiers.
///
/// Yields `Ok` for every successor, then the overflow error once, then ends.
#[derive(Debug, Clone)]
pub struct LexIdSeq {
    current: Option<LexId>,
}

impl LexIdSeq {
    /// Creates an iterator starting with the identifier after `seed`.
    #[must_use]
    pub fn after(seed: LexId) -> Self {
        Self {
            current: Some(seed),
        }
    }
}

impl Iterator for LexIdSeq {
    type Item = Result<LexId, LexIdError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        match current.next() {
            Ok(next) => {
                self.current = Some(next.clone());
                Some(Ok(next))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl FusedIterator for LexIdSeq {}
