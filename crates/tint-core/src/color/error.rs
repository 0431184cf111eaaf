//! Error type for color parsing
//!
//! Color math itself never fails; only turning text into a [`Color`](super::Color)
//! can.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(
                    f,
                    "invalid hex color length (expected 3, 6 or 8 characters)"
                )
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3, 6 or 8 characters)"
        );

        let err: ParseColorError = u8::from_str_radix("zz", 16).unwrap_err().into();
        assert!(err.to_string().starts_with("invalid hex character:"));
    }

    #[test]
    fn test_source_only_for_hex_errors() {
        assert!(ParseColorError::InvalidLength.source().is_none());

        let err: ParseColorError = u8::from_str_radix("g", 16).unwrap_err().into();
        assert!(err.source().is_some());
    }
}
