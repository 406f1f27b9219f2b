//! Errors returned by the text parsers.
//!
//! Conversions never fail. Out of range numbers are clamped instead.

use thiserror::Error;

/// Why a hex color string was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// The number of hex digits, after an optional leading `#`, was not 6
    /// (RGB) or 8 (RGBA).
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character that is not a hex digit was found.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// A color blindness mode name that is not known.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown color blindness mode {0:?}")]
pub struct ParseModeError(pub String);
