//! Error types for palette operations
//!
//! This module provides error types for color parsing and hue palette
//! validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
    /// Input contains non-ASCII characters
    NotAscii,
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
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::NotAscii => write!(f, "hex color must be ASCII"),
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

/// Error type for hue palette validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No hues provided
    EmptyPalette,
    /// Hue at `index` is not greater than its predecessor
    NotAscending {
        /// Index of the offending entry
        index: usize,
    },
    /// Hue at `index` is not a finite angle in `[0, 360)` degrees
    OutOfRange {
        /// Index of the offending entry
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "hue palette cannot be empty")
            }
            PaletteError::NotAscending { index } => {
                write!(f, "hue at index {} is not in ascending order", index)
            }
            PaletteError::OutOfRange { index } => {
                write!(f, "hue at index {} is outside [0, 360) degrees", index)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
