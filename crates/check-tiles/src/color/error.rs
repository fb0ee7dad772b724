//! Error type for hex color parsing.

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
///
/// Colors are accepted as exactly six hexadecimal digits with an optional
/// leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits after stripping `#`.
    #[error("invalid hex color length {len} (expected 6 hex digits)")]
    InvalidLength { len: usize },

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex color {value:?}")]
    InvalidHex { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseColorError::InvalidLength { len: 4 };
        assert_eq!(
            err.to_string(),
            "invalid hex color length 4 (expected 6 hex digits)"
        );

        let err = ParseColorError::InvalidHex {
            value: "zz0000".to_string(),
        };
        assert_eq!(err.to_string(), "invalid hex color \"zz0000\"");
    }
}
