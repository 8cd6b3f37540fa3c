//! The text form of a [`Colour`]: exactly eight hex digits of its packed ARGB
//! value, e.g. `ff00ff80`. The encoding is used for persisted settings, so it
//! must stay stable.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::color::Colour;

/// Number of characters in an encoded colour.
const ENCODED_LEN: usize = 8;

/// Errors returned when text is not a validly encoded colour.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not have exactly eight characters.
    #[error("expected 8 hex digits, found {length} characters")]
    InvalidLength {
        /// The number of characters found.
        length: usize,
    },
    /// A character is not a hex digit.
    #[error("invalid hex digit {digit:?} at position {index}")]
    InvalidDigit {
        /// Position of the character, counted in characters.
        index: usize,
        /// The offending character.
        digit: char,
    },
}

impl Colour {
    /// Read a colour from text created by its [`Display`](fmt::Display)
    /// implementation. Hex digits may be upper or lower case; nothing else is
    /// accepted, not even surrounding whitespace.
    pub fn from_string(text: &str) -> Result<Colour, ParseError> {
        text.parse()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.argb())
    }
}

impl FromStr for Colour {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != ENCODED_LEN {
            debug!(length, "rejected colour text with the wrong length");
            return Err(ParseError::InvalidLength { length });
        }

        let mut argb = 0u32;
        for (index, digit) in s.chars().enumerate() {
            let Some(nybble) = digit.to_digit(16) else {
                debug!(index, ?digit, "rejected colour text with a non hex digit");
                return Err(ParseError::InvalidDigit { index, digit });
            };
            argb = argb << 4 | nybble;
        }

        Ok(Colour::from_argb(argb))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Colour {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Colour {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
